//! # Question
//!
//! The construction input of a grid prompt: what to ask, which cells to lay
//! out, and which cell starts selected. Built from CLI arguments or loaded
//! from a TOML file:
//!
//! ```toml
//! name = "table"
//! message = "Layout your grid."
//! default = "cell 2-2"
//! choices = ["cell 1-1", "cell 1-2", { type = "separator" }, "cell 2-2"]
//!
//! [options]
//! cols = 2
//! ```

use log::{info, warn};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::fs;
use std::path::Path;

use crate::core::choices::Choice;

pub const DEFAULT_NAME: &str = "grid";
pub const DEFAULT_MESSAGE: &str = "Rearrange cells";

/// Initial selection: a cell index, or the value of a choice.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum DefaultValue {
    Index(usize),
    Value(String),
}

impl DefaultValue {
    /// Interpret a CLI argument: digits are an index, anything else a value.
    pub fn parse(s: &str) -> Self {
        s.parse::<usize>()
            .map(DefaultValue::Index)
            .unwrap_or_else(|_| DefaultValue::Value(s.to_string()))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GridOptions {
    pub cols: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Question {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_message")]
    pub message: String,
    #[serde(default)]
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub options: GridOptions,
    #[serde(default, deserialize_with = "lenient_default")]
    pub default: Option<DefaultValue>,
}

/// Accepts any TOML value for `default`. Shapes that can't name a cell (a
/// negative number, a bool, a table) are dropped, which selects the first cell.
fn lenient_default<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<DefaultValue>, D::Error> {
    let value = toml::Value::deserialize(deserializer)?;
    Ok(match value {
        toml::Value::Integer(i) if i >= 0 => Some(DefaultValue::Index(i as usize)),
        toml::Value::String(s) => Some(DefaultValue::Value(s)),
        other => {
            warn!("Ignoring unusable default {}, selecting first cell", other);
            None
        }
    })
}

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

fn default_message() -> String {
    DEFAULT_MESSAGE.to_string()
}

impl Question {
    pub fn new(message: impl Into<String>, choices: Vec<Choice>) -> Self {
        Self {
            name: default_name(),
            message: message.into(),
            choices,
            options: GridOptions::default(),
            default: None,
        }
    }

    pub fn with_cols(mut self, cols: usize) -> Self {
        self.options.cols = Some(cols);
        self
    }

    pub fn with_default(mut self, default: DefaultValue) -> Self {
        self.default = Some(default);
        self
    }

    /// Load a question from a TOML file.
    pub fn load(path: &Path) -> Result<Self, QuestionError> {
        let contents = fs::read_to_string(path).map_err(QuestionError::Io)?;
        let question: Question = toml::from_str(&contents).map_err(QuestionError::Parse)?;
        info!(
            "Loaded question '{}' with {} choices from {}",
            question.name,
            question.choices.len(),
            path.display()
        );
        Ok(question)
    }
}

#[derive(Debug)]
pub enum QuestionError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for QuestionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionError::Io(e) => write!(f, "question I/O error: {e}"),
            QuestionError::Parse(e) => write!(f, "question parse error: {e}"),
        }
    }
}

impl std::error::Error for QuestionError {}
