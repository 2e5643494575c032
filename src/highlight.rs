/// Terminal highlighting for matched text
///
/// Colors are a fixed set mirroring the common ANSI palette. Rendering goes
/// through the `colored` crate, so emphasis degrades to plain text when stdout
/// is not a tty or `NO_COLOR` is set; the contract is "visually distinguished",
/// not a specific escape format.
use std::str::FromStr;

use colored::{Color, Colorize};
use thiserror::Error;

/// Display color for highlighted matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorName {
    #[default]
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Grey,
}

impl ColorName {
    /// The palette `ColorCycle` rotates through.
    pub const CYCLE: [ColorName; 6] = [
        ColorName::Red,
        ColorName::Green,
        ColorName::Yellow,
        ColorName::Blue,
        ColorName::Magenta,
        ColorName::Cyan,
    ];

    fn to_ansi(self) -> Color {
        match self {
            ColorName::Red => Color::Red,
            ColorName::Green => Color::Green,
            ColorName::Yellow => Color::Yellow,
            ColorName::Blue => Color::Blue,
            ColorName::Magenta => Color::Magenta,
            ColorName::Cyan => Color::Cyan,
            ColorName::White => Color::White,
            ColorName::Grey => Color::BrightBlack,
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown color name: {0}")]
pub struct UnknownColor(pub String);

impl FromStr for ColorName {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "red" => Ok(ColorName::Red),
            "green" => Ok(ColorName::Green),
            "yellow" => Ok(ColorName::Yellow),
            "blue" => Ok(ColorName::Blue),
            "magenta" => Ok(ColorName::Magenta),
            "cyan" => Ok(ColorName::Cyan),
            "white" => Ok(ColorName::White),
            "grey" | "gray" => Ok(ColorName::Grey),
            other => Err(UnknownColor(other.to_string())),
        }
    }
}

/// Formatting strategy for matched spans: color plus bold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HighlightStyle {
    color: ColorName,
}

impl HighlightStyle {
    pub fn new(color: ColorName) -> Self {
        Self { color }
    }

    pub fn color(&self) -> ColorName {
        self.color
    }

    /// Wrap `text` in emphasis markers, leaving its content unchanged.
    pub fn paint(&self, text: &str) -> String {
        text.color(self.color.to_ansi()).bold().to_string()
    }
}

/// Infinite iterator over the display palette.
///
/// Replaces a hidden per-call color counter: callers own the cycle and thread
/// it through explicitly, so repeated runs start from the same color.
#[derive(Debug, Clone, Default)]
pub struct ColorCycle {
    next: usize,
}

impl ColorCycle {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Iterator for ColorCycle {
    type Item = ColorName;

    fn next(&mut self) -> Option<ColorName> {
        let color = ColorName::CYCLE[self.next % ColorName::CYCLE.len()];
        self.next += 1;
        Some(color)
    }
}
