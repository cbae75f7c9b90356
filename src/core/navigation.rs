//! # Navigation Engine
//!
//! The prompt's state machine. It owns everything that changes during a
//! session, so state only moves through `update(action)`:
//!
//! ```text
//! NavigationEngine
//! ├── sequence: ChoiceSequence     // cells, in current order
//! ├── geometry: GridGeometry       // rows / cols / len, fixed
//! ├── selection: SelectionState    // selected index + last action
//! ├── status: PromptStatus         // Pending → Answered (once)
//! └── notice: Option<String>       // one-frame message for refused moves
//! ```
//!
//! Plain arrows move the selection, shift+arrows swap the selected cell with
//! its neighbour and follow it. Separators can be selected, but a shift-move
//! never picks one up or drops a cell onto one.

use log::{debug, info, warn};

use crate::core::action::{Action, Effect};
use crate::core::choices::{Answer, ChoiceSequence};
use crate::core::error::GridError;
use crate::core::geometry::{Direction, GridGeometry};
use crate::core::question::{DefaultValue, Question};

pub const SEPARATOR_MOVE_NOTICE: &str = "Separators cannot be moved.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptStatus {
    Pending,
    Answered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionState {
    pub selected_index: usize,
    /// The last action applied; drives the "moving" decoration.
    pub last_action: Option<Action>,
}

pub struct NavigationEngine {
    sequence: ChoiceSequence,
    geometry: GridGeometry,
    selection: SelectionState,
    status: PromptStatus,
    notice: Option<String>,
}

impl NavigationEngine {
    pub fn new(
        sequence: ChoiceSequence,
        cols: Option<usize>,
        default: Option<&DefaultValue>,
    ) -> Self {
        let geometry = GridGeometry::new(sequence.len(), cols);
        let selected_index = resolve_default(&sequence, default);
        debug!(
            "Grid {}x{} for {} cells, initial selection {}",
            geometry.rows, geometry.cols, geometry.len, selected_index
        );
        Self {
            sequence,
            geometry,
            selection: SelectionState {
                selected_index,
                last_action: None,
            },
            status: PromptStatus::Pending,
            notice: None,
        }
    }

    /// Build an engine from a question. `default` overrides the question's own.
    pub fn from_question(
        question: &Question,
        default: Option<&DefaultValue>,
    ) -> Result<Self, GridError> {
        let sequence = ChoiceSequence::new(question.choices.clone())?;
        let default = default.or(question.default.as_ref());
        Ok(Self::new(sequence, question.options.cols, default))
    }

    pub fn sequence(&self) -> &ChoiceSequence {
        &self.sequence
    }

    pub fn geometry(&self) -> GridGeometry {
        self.geometry
    }

    pub fn selection(&self) -> SelectionState {
        self.selection
    }

    pub fn selected_index(&self) -> usize {
        self.selection.selected_index
    }

    pub fn status(&self) -> PromptStatus {
        self.status
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// True when the frame being shown is the result of a shift-move that
    /// went through. A refused move leaves a notice instead.
    pub fn is_moving(&self) -> bool {
        self.notice.is_none()
            && self
                .selection
                .last_action
                .is_some_and(|action| action.is_shift_move())
    }

    pub fn answers(&self) -> Vec<Answer> {
        self.sequence.as_answers()
    }

    pub fn update(&mut self, action: Action) -> Effect {
        if self.status == PromptStatus::Answered {
            debug!("Ignoring {:?}: prompt already answered", action);
            return Effect::None;
        }

        self.notice = None;
        self.selection.last_action = Some(action);

        match action {
            Action::Move { direction, shift } => {
                if shift {
                    self.move_selected(direction)
                } else {
                    self.selection.selected_index =
                        self.geometry.step(self.selection.selected_index, direction);
                }
                Effect::Redraw
            }
            Action::Jump(n) => {
                if (1..=self.sequence.len()).contains(&n) {
                    self.selection.selected_index = n - 1;
                } else {
                    debug!("Ignoring jump to {} of {} cells", n, self.sequence.len());
                }
                Effect::Redraw
            }
            Action::Submit => {
                self.status = PromptStatus::Answered;
                let answers = self.answers();
                info!("Prompt answered with {} cells", answers.len());
                Effect::Complete(answers)
            }
        }
    }

    /// Swap the selected cell one step in `direction` and keep it selected.
    fn move_selected(&mut self, direction: Direction) {
        let from = self.selection.selected_index;
        let to = self.geometry.step(from, direction);

        let touches_separator = [from, to].iter().any(|&i| {
            self.sequence
                .get(i)
                .is_some_and(|cell| cell.choice.is_separator())
        });
        if touches_separator {
            debug!("Refusing move {} -> {}: separator involved", from, to);
            self.notice = Some(SEPARATOR_MOVE_NOTICE.to_string());
            return;
        }

        match self.sequence.swap(from, to) {
            Ok(()) => {
                debug!("Moved cell {} -> {}", from, to);
                self.selection.selected_index = to;
            }
            Err(e) => warn!("Move {:?} from {} failed: {}", direction, from, e),
        }
    }
}

/// Resolve the initially selected index from a question default.
fn resolve_default(sequence: &ChoiceSequence, default: Option<&DefaultValue>) -> usize {
    match default {
        Some(DefaultValue::Index(i)) if *i < sequence.len() => *i,
        Some(DefaultValue::Value(value)) => sequence.position_of_value(value).unwrap_or_else(|| {
            warn!("Default value '{}' matches no choice, selecting first cell", value);
            0
        }),
        Some(DefaultValue::Index(i)) => {
            warn!("Default index {} out of range, selecting first cell", i);
            0
        }
        None => 0,
    }
}
