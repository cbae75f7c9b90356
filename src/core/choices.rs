//! # Choices
//!
//! The ordered cells of a grid prompt. Each cell remembers the slot it was
//! constructed in (its [`CellKey`]), so after any number of swaps we can tell
//! which slots now hold a different cell.
//!
//! ```text
//! origin_keys:  [0, 1, 2]
//! after swap:   [1, 0, 2]   → slots 0 and 1 are "changed"
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::error::GridError;

/// Identity of a cell: the index it occupied at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellKey(pub usize);

/// A selectable entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceItem {
    /// Label drawn inside the grid cell.
    pub name: String,
    /// Value returned in the answer.
    pub value: Value,
    /// Label used by the minimal answered summary.
    pub short: String,
}

impl ChoiceItem {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            value: Value::String(name.clone()),
            short: name.clone(),
            name,
        }
    }
}

/// A grid entry: an item, or a separator that occupies a slot but carries no value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawChoice")]
pub enum Choice {
    Item(ChoiceItem),
    Separator,
}

impl Choice {
    pub fn is_separator(&self) -> bool {
        matches!(self, Choice::Separator)
    }

    /// The label drawn in the grid. Separators draw as an empty cell.
    pub fn label(&self) -> &str {
        match self {
            Choice::Item(item) => &item.name,
            Choice::Separator => "",
        }
    }
}

impl From<&str> for Choice {
    fn from(name: &str) -> Self {
        Choice::Item(ChoiceItem::new(name))
    }
}

impl From<String> for Choice {
    fn from(name: String) -> Self {
        Choice::Item(ChoiceItem::new(name))
    }
}

/// The three shapes a choice may take in a question file:
/// a bare string, `{ type = "separator" }`, or `{ name, value?, short? }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawChoice {
    Name(String),
    Separator {
        #[serde(rename = "type")]
        #[allow(dead_code)] // Only used to discriminate the variant
        kind: SeparatorTag,
    },
    Item {
        name: String,
        value: Option<Value>,
        short: Option<String>,
    },
}

#[derive(Deserialize)]
#[serde(rename_all = "lowercase")]
enum SeparatorTag {
    Separator,
}

impl From<RawChoice> for Choice {
    fn from(raw: RawChoice) -> Self {
        match raw {
            RawChoice::Name(name) => Choice::Item(ChoiceItem::new(name)),
            RawChoice::Separator { .. } => Choice::Separator,
            RawChoice::Item { name, value, short } => Choice::Item(ChoiceItem {
                value: value.unwrap_or_else(|| Value::String(name.clone())),
                short: short.unwrap_or_else(|| name.clone()),
                name,
            }),
        }
    }
}

/// One grid slot's content.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub key: CellKey,
    pub choice: Choice,
}

/// One entry of the final answer.
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    Value(Value),
    Separator,
}

impl Answer {
    pub fn to_json(&self) -> Value {
        match self {
            Answer::Value(v) => v.clone(),
            Answer::Separator => serde_json::json!({ "type": "separator" }),
        }
    }
}

impl Serialize for Answer {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

/// Ordered cells plus the construction-time key order.
#[derive(Debug, Clone)]
pub struct ChoiceSequence {
    cells: Vec<Cell>,
    origin: Vec<CellKey>,
}

impl ChoiceSequence {
    pub fn new(choices: Vec<Choice>) -> Result<Self, GridError> {
        if choices.is_empty() {
            return Err(GridError::MissingChoices);
        }
        let cells: Vec<Cell> = choices
            .into_iter()
            .enumerate()
            .map(|(i, choice)| Cell {
                key: CellKey(i),
                choice,
            })
            .collect();
        let origin = cells.iter().map(|c| c.key).collect();
        Ok(Self { cells, origin })
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Exchange the cells at `a` and `b`. Fails without touching any cell if
    /// either index is out of range.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<(), GridError> {
        let len = self.cells.len();
        for index in [a, b] {
            if index >= len {
                return Err(GridError::InvalidIndex { index, len });
            }
        }
        self.cells.swap(a, b);
        Ok(())
    }

    pub fn origin_keys(&self) -> &[CellKey] {
        &self.origin
    }

    /// True if the cell now at `index` is not the one constructed there.
    pub fn is_changed(&self, index: usize) -> bool {
        match (self.cells.get(index), self.origin.get(index)) {
            (Some(cell), Some(key)) => cell.key != *key,
            _ => false,
        }
    }

    /// Index of the first item whose value is the string `value`.
    pub fn position_of_value(&self, value: &str) -> Option<usize> {
        self.cells.iter().position(|cell| match &cell.choice {
            Choice::Item(item) => item.value.as_str() == Some(value),
            Choice::Separator => false,
        })
    }

    pub fn as_answers(&self) -> Vec<Answer> {
        self.cells
            .iter()
            .map(|cell| match &cell.choice {
                Choice::Item(item) => Answer::Value(item.value.clone()),
                Choice::Separator => Answer::Separator,
            })
            .collect()
    }
}
