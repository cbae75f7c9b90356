//! # Prompt Session
//!
//! Wires the engine and renderer to whatever is hosting the prompt (a
//! terminal, a key script, a test). The host only sees three things:
//!
//! ```text
//!            default_value()            on_frame(&GridFrame)
//!   host ───────────────────▶ session ─────────────────────▶ host
//!                                │      on_complete(answers)
//!                                └─────────────────────────▶ host (once)
//! ```
//!
//! Every dispatched action is fully applied and rendered before the next one
//! is accepted.

use log::debug;

use crate::core::action::{Action, Effect};
use crate::core::choices::Answer;
use crate::core::error::GridError;
use crate::core::navigation::NavigationEngine;
use crate::core::question::{DefaultValue, Question};
use crate::core::render::{GridFrame, GridRenderer};

/// The environment a prompt runs in.
pub trait PromptHost {
    /// Overrides the question's own default selection when `Some`.
    fn default_value(&self) -> Option<DefaultValue> {
        None
    }

    /// Receives every rendered frame.
    fn on_frame(&mut self, frame: &GridFrame);

    /// Receives the answer. Called exactly once per session.
    fn on_complete(&mut self, answers: Vec<Answer>);
}

pub struct PromptSession<H: PromptHost> {
    message: String,
    engine: NavigationEngine,
    renderer: GridRenderer,
    host: H,
    completed: bool,
}

impl<H: PromptHost> PromptSession<H> {
    pub fn new(question: &Question, renderer: GridRenderer, host: H) -> Result<Self, GridError> {
        let default = host.default_value();
        let engine = NavigationEngine::from_question(question, default.as_ref())?;
        Ok(Self {
            message: question.message.clone(),
            engine,
            renderer,
            host,
            completed: false,
        })
    }

    /// Render the initial frame.
    pub fn start(&mut self) {
        self.emit_frame();
    }

    pub fn dispatch(&mut self, action: Action) {
        match self.engine.update(action) {
            Effect::None => {}
            Effect::Redraw => self.emit_frame(),
            Effect::Complete(answers) => {
                // Final frame first, so the answered state is what stays on screen
                self.emit_frame();
                if !self.completed {
                    self.completed = true;
                    debug!("Session complete, handing {} answers to host", answers.len());
                    self.host.on_complete(answers);
                }
            }
        }
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    pub fn engine(&self) -> &NavigationEngine {
        &self.engine
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    fn emit_frame(&mut self) {
        let frame = self.renderer.render_prompt(&self.message, &self.engine);
        self.host.on_frame(&frame);
    }
}

/// A host that keeps the latest frame and the answer; used by the headless
/// key-script mode and by tests.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub default: Option<DefaultValue>,
    pub frames: Vec<GridFrame>,
    pub answers: Option<Vec<Answer>>,
    pub completions: usize,
}

impl RecordingHost {
    pub fn with_default(default: Option<DefaultValue>) -> Self {
        Self {
            default,
            ..Default::default()
        }
    }

    pub fn last_frame(&self) -> Option<&GridFrame> {
        self.frames.last()
    }
}

impl PromptHost for RecordingHost {
    fn default_value(&self) -> Option<DefaultValue> {
        self.default.clone()
    }

    fn on_frame(&mut self, frame: &GridFrame) {
        self.frames.push(frame.clone());
    }

    fn on_complete(&mut self, answers: Vec<Answer>) {
        self.completions += 1;
        self.answers = Some(answers);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::Direction;
    use crate::test_support::letters_question;
    use serde_json::Value;

    fn session(n: usize, cols: usize) -> PromptSession<RecordingHost> {
        PromptSession::new(
            &letters_question(n, cols),
            GridRenderer::default(),
            RecordingHost::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_start_emits_initial_frame() {
        let mut s = session(4, 2);
        s.start();
        assert_eq!(s.host().frames.len(), 1);
        assert!(s.host().answers.is_none());
    }

    #[test]
    fn test_ignored_action_emits_no_frame() {
        let mut s = session(4, 2);
        s.start();
        s.dispatch(Action::Submit);
        let frames = s.host().frames.len();
        s.dispatch(Action::Jump(1));
        assert_eq!(s.host().frames.len(), frames);
    }

    #[test]
    fn test_complete_called_once() {
        let mut s = session(6, 3);
        s.start();
        s.dispatch(Action::Move {
            direction: Direction::Right,
            shift: true,
        });
        s.dispatch(Action::Submit);
        s.dispatch(Action::Submit);

        assert!(s.is_complete());
        let host = s.into_host();
        assert_eq!(host.completions, 1);
        let values: Vec<Value> = host.answers.unwrap().iter().map(|a| a.to_json()).collect();
        assert_eq!(values, ["B", "A", "C", "D", "E", "F"].map(Value::from));
    }

    #[test]
    fn test_host_default_overrides_question() {
        let question = letters_question(6, 3).with_default(DefaultValue::Index(1));
        let host = RecordingHost::with_default(Some(DefaultValue::Value("E".to_string())));
        let s = PromptSession::new(&question, GridRenderer::default(), host).unwrap();
        assert_eq!(s.engine().selected_index(), 4);

        let s = PromptSession::new(&question, GridRenderer::default(), RecordingHost::default())
            .unwrap();
        assert_eq!(s.engine().selected_index(), 1);
    }

    #[test]
    fn test_missing_choices_fails_fast() {
        let question = Question::new("empty", Vec::new());
        let err = PromptSession::new(&question, GridRenderer::default(), RecordingHost::default())
            .err();
        assert_eq!(err, Some(GridError::MissingChoices));
    }
}
