//! Textual key sequences, e.g. `"shift+right down 5 enter"`.
//!
//! Tokens are separated by whitespace or commas:
//!
//! | Token                         | Action                          |
//! |-------------------------------|---------------------------------|
//! | `up` `down` `left` `right`    | `Move { shift: false }`         |
//! | `shift+<dir>` / `s-<dir>`     | `Move { shift: true }`          |
//! | `1` .. `9`                    | `Jump(n)`                       |
//! | `enter` / `submit`            | `Submit`                        |

use std::fmt;

use crate::core::action::Action;
use crate::core::geometry::Direction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyScriptError {
    pub token: String,
}

impl fmt::Display for KeyScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown key '{}' in key script", self.token)
    }
}

impl std::error::Error for KeyScriptError {}

pub fn parse_key_script(script: &str) -> Result<Vec<Action>, KeyScriptError> {
    script
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(parse_token)
        .collect()
}

fn parse_token(token: &str) -> Result<Action, KeyScriptError> {
    let lower = token.to_ascii_lowercase();
    let (shift, key) = match lower
        .strip_prefix("shift+")
        .or_else(|| lower.strip_prefix("s-"))
    {
        Some(rest) => (true, rest),
        None => (false, lower.as_str()),
    };

    let direction = match key {
        "up" => Some(Direction::Up),
        "down" => Some(Direction::Down),
        "left" => Some(Direction::Left),
        "right" => Some(Direction::Right),
        _ => None,
    };
    if let Some(direction) = direction {
        return Ok(Action::Move { direction, shift });
    }

    match key {
        "enter" | "submit" if !shift => Ok(Action::Submit),
        digit if !shift && digit.len() == 1 => match digit.parse::<usize>() {
            Ok(n) if n >= 1 => Ok(Action::Jump(n)),
            _ => Err(KeyScriptError {
                token: token.to_string(),
            }),
        },
        _ => Err(KeyScriptError {
            token: token.to_string(),
        }),
    }
}
