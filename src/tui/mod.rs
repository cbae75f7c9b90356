//! # TUI Adapter
//!
//! The terminal-specific layer. Reads keys, draws frames, and hosts a core
//! `PromptSession` through the `PromptHost` interface.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The prompt is drawn in an inline viewport below the cursor, sized to the
//! first frame plus one line for notices. Nothing animates, so the loop blocks
//! on the next terminal event and only redraws when the session has emitted a
//! new frame or the terminal was resized.
//!
//! Keyboard enhancement (`DISAMBIGUATE_ESCAPE_CODES`) is pushed so terminals
//! that support it report Shift+Arrow unambiguously; others ignore it.

pub mod ansi;
mod component;
mod components;
pub mod event;
pub mod palette;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use ratatui::{DefaultTerminal, TerminalOptions, Viewport};

use crate::core::choices::Answer;
use crate::core::question::DefaultValue;
use crate::core::render::GridFrame;
use crate::core::session::{PromptHost, PromptSession};
use crate::tui::event::{TuiEvent, read_event};
use crate::tui::palette::Palette;

/// How an interactive prompt ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Answered(Vec<Answer>),
    /// Esc or Ctrl+C before Enter.
    Aborted,
}

/// Host for a prompt running in the terminal. Holds the latest frame until
/// the event loop draws it.
#[derive(Debug, Default)]
pub struct TerminalHost {
    default: Option<DefaultValue>,
    frame: GridFrame,
    dirty: bool,
    answers: Option<Vec<Answer>>,
}

impl TerminalHost {
    pub fn new(default: Option<DefaultValue>) -> Self {
        Self {
            default,
            ..Default::default()
        }
    }

    pub fn frame(&self) -> &GridFrame {
        &self.frame
    }
}

impl PromptHost for TerminalHost {
    fn default_value(&self) -> Option<DefaultValue> {
        self.default.clone()
    }

    fn on_frame(&mut self, frame: &GridFrame) {
        self.frame = frame.clone();
        self.dirty = true;
    }

    fn on_complete(&mut self, answers: Vec<Answer>) {
        self.answers = Some(answers);
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            Hide,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
        info!("Terminal modes enabled (hidden cursor, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), PopKeyboardEnhancementFlags, Show);
    }
}

/// Run `session` interactively until it is answered or aborted.
pub fn run(
    mut session: PromptSession<TerminalHost>,
    palette: &Palette,
) -> std::io::Result<Outcome> {
    session.start();

    // Room for the grid plus a notice line
    let height = session.host().frame.height() as u16 + 1;
    let mut terminal = ratatui::init_with_options(TerminalOptions {
        viewport: Viewport::Inline(height),
    });
    let guard = TerminalModeGuard::new();
    if let Err(e) = &guard {
        warn!("Failed to enable terminal modes: {}", e);
    }

    let outcome = event_loop(&mut terminal, &mut session, palette);

    drop(guard);
    ratatui::restore();
    // Leave the final frame on screen and move below it
    println!();

    if let Ok(outcome) = &outcome {
        info!("Prompt finished: {:?}", outcome);
    }
    outcome
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    session: &mut PromptSession<TerminalHost>,
    palette: &Palette,
) -> std::io::Result<Outcome> {
    loop {
        if session.host().dirty {
            let frame = &session.host().frame;
            terminal.draw(|f| ui::draw_ui(f, frame, palette))?;
            session.host_mut().dirty = false;
        }

        if let Some(answers) = session.host_mut().answers.take() {
            return Ok(Outcome::Answered(answers));
        }

        match read_event()? {
            Some(TuiEvent::Key(action)) => {
                debug!("Dispatching {:?}", action);
                session.dispatch(action);
            }
            Some(TuiEvent::Quit) => return Ok(Outcome::Aborted),
            // draw() picks up the new size itself
            Some(TuiEvent::Resize) => session.host_mut().dirty = true,
            None => {}
        }
    }
}
