//! # Actions
//!
//! Every key press the prompt cares about becomes an `Action`.
//! Arrow key? That's `Action::Move { direction, shift: false }`.
//! Shift+Arrow? Same, with `shift: true`, and the selected cell travels along.
//!
//! `NavigationEngine::update()` takes an action and returns an `Effect` telling
//! the session what to do next. No I/O happens there.
//!
//! ```text
//! State + Action  →  update()  →  Effect (None | Redraw | Complete)
//! ```

use crate::core::choices::Answer;
use crate::core::geometry::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Arrow key. With `shift`, the selected cell is swapped along.
    Move { direction: Direction, shift: bool },
    /// Number key `1`..`9` jumping to that (1-based) cell.
    Jump(usize),
    /// Enter.
    Submit,
}

impl Action {
    /// True for shift-modified arrow keys.
    pub fn is_shift_move(&self) -> bool {
        matches!(self, Action::Move { shift: true, .. })
    }
}

/// What the session should do after an action is applied.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Nothing changed (ignored key, or the prompt is already answered).
    None,
    /// State changed; render a new frame.
    Redraw,
    /// The prompt was answered with this sequence.
    Complete(Vec<Answer>),
}
