use std::fmt;

/// Errors raised by the grid core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A prompt was constructed without any choices. Fatal.
    MissingChoices,
    /// A swap or lookup named a slot outside `[0, len)`. Only reachable through
    /// direct API misuse; navigation clamps every index it produces.
    InvalidIndex { index: usize, len: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::MissingChoices => write!(f, "you must provide a `choices` parameter"),
            GridError::InvalidIndex { index, len } => {
                write!(f, "index {index} is out of range for {len} cells")
            }
        }
    }
}

impl std::error::Error for GridError {}
