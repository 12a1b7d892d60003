//! Verse text colours.
//!
//! The palette mirrors a seven-slice colour wheel: six solid colours plus a
//! seventh "mixed" slice that gives every verse line a random solid colour.

use std::fmt;
use std::str::FromStr;

use crossterm::style::Color;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::Error;

/// A palette colour for verse text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextColor {
    /// Black (rendered as the terminal's default foreground).
    #[default]
    Black,
    /// Red.
    Red,
    /// Orange.
    Orange,
    /// Green.
    Green,
    /// Blue.
    Blue,
    /// Purple.
    Purple,
}

impl TextColor {
    /// Every solid colour, in wheel order. Mixed mode draws from the same set.
    pub const fn all() -> &'static [Self] {
        &[
            Self::Black,
            Self::Red,
            Self::Orange,
            Self::Green,
            Self::Blue,
            Self::Purple,
        ]
    }

    /// Lowercase name, as accepted on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Purple => "purple",
        }
    }

    /// Terminal colour used to render this palette entry.
    pub const fn terminal_color(self) -> Color {
        match self {
            Self::Black => Color::Reset,
            Self::Red => Color::Red,
            Self::Orange => Color::Rgb { r: 255, g: 149, b: 0 },
            Self::Green => Color::Green,
            Self::Blue => Color::Blue,
            Self::Purple => Color::Magenta,
        }
    }

    /// Look up a colour by name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_lowercase();
        Self::all().iter().copied().find(|c| c.name() == lower)
    }
}

impl fmt::Display for TextColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How verse lines are coloured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// Every line in one colour.
    Fixed(TextColor),
    /// Each line gets a random colour from [`TextColor::all`].
    Mixed,
}

impl Default for ColorMode {
    fn default() -> Self {
        Self::Fixed(TextColor::default())
    }
}

impl ColorMode {
    /// Pick the colour for the next verse line.
    pub fn color_for_line<R: Rng + ?Sized>(self, rng: &mut R) -> TextColor {
        match self {
            Self::Fixed(color) => color,
            Self::Mixed => TextColor::all()
                .choose(rng)
                .copied()
                .unwrap_or_default(),
        }
    }
}

impl FromStr for ColorMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("mixed") {
            return Ok(Self::Mixed);
        }
        TextColor::from_name(s).map(Self::Fixed).ok_or_else(|| {
            Error::config(
                format!("Unknown color '{s}'"),
                "Use one of: black, red, orange, green, blue, purple, mixed",
            )
        })
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(color) => write!(f, "{color}"),
            Self::Mixed => f.write_str("mixed"),
        }
    }
}
