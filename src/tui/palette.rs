//! Maps render tones to terminal styles.

use std::str::FromStr;

use log::warn;
use ratatui::style::{Color, Modifier, Style};

use crate::core::config::{
    Colors, DEFAULT_CHANGED_COLOR, DEFAULT_MOVING_COLOR, DEFAULT_SELECTED_COLOR,
};
use crate::core::render::Tone;

#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub selected: Color,
    pub moving: Color,
    pub changed: Color,
    /// When false every tone renders unstyled.
    pub enabled: bool,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            selected: Color::Cyan,
            moving: Color::Yellow,
            changed: Color::Green,
            enabled: true,
        }
    }
}

impl Palette {
    pub fn from_config(colors: &Colors, enabled: bool) -> Self {
        Self {
            selected: parse_color(&colors.selected, DEFAULT_SELECTED_COLOR),
            moving: parse_color(&colors.moving, DEFAULT_MOVING_COLOR),
            changed: parse_color(&colors.changed, DEFAULT_CHANGED_COLOR),
            enabled,
        }
    }

    pub fn style(&self, tone: Tone) -> Style {
        if !self.enabled {
            return Style::default();
        }
        match tone {
            Tone::Plain => Style::default(),
            Tone::Question => Style::default().add_modifier(Modifier::BOLD),
            Tone::Hint => Style::default().add_modifier(Modifier::DIM),
            Tone::Selected => Style::default().fg(self.selected),
            Tone::Moving => Style::default().fg(self.moving),
            Tone::Changed => Style::default().fg(self.changed),
            Tone::Answer => Style::default().fg(self.selected),
            Tone::Notice => Style::default().fg(Color::Red),
        }
    }
}

fn parse_color(name: &str, fallback: &str) -> Color {
    Color::from_str(name).unwrap_or_else(|_| {
        warn!("Unknown colour {:?}, using {}", name, fallback);
        Color::from_str(fallback).unwrap_or(Color::Reset)
    })
}
