//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::choices::{Choice, ChoiceSequence};
use crate::core::question::Question;

/// Single-letter choices `A`, `B`, ... for `n` cells.
pub fn letter_choices(n: usize) -> Vec<Choice> {
    (0..n)
        .map(|i| Choice::from(((b'A' + i as u8) as char).to_string()))
        .collect()
}

pub fn letters(n: usize) -> ChoiceSequence {
    ChoiceSequence::new(letter_choices(n)).unwrap()
}

/// Current labels of a sequence, in order.
pub fn labels(seq: &ChoiceSequence) -> Vec<&str> {
    seq.iter().map(|c| c.choice.label()).collect()
}

/// A question over `n` letters laid out in `cols` columns.
pub fn letters_question(n: usize, cols: usize) -> Question {
    Question::new("Rearrange the letters", letter_choices(n)).with_cols(cols)
}
