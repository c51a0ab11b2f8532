use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::*;

/// Solution color of a painted tile, alpha normalized to `[0, 1]`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_pixel([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r, g, b, f32::from(a) / 255.)
    }

    /// CSS `rgba(...)` notation, handy for hosts that render through the DOM.
    pub fn to_css(self) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

/// One slot of a [`ColorMatch`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ChannelMatch {
    Any,
    Exact(u8),
}

impl ChannelMatch {
    pub const fn matches(self, value: u8) -> bool {
        match self {
            Self::Any => true,
            Self::Exact(expected) => expected == value,
        }
    }
}

/// Decides which source pixels become blank tiles. A pixel is blank when every
/// channel matches; alpha is compared as the raw byte.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ColorMatch(pub [ChannelMatch; 4]);

impl ColorMatch {
    /// Matches fully transparent pixels regardless of their color.
    pub const TRANSPARENT: Self = Self([
        ChannelMatch::Any,
        ChannelMatch::Any,
        ChannelMatch::Any,
        ChannelMatch::Exact(0),
    ]);

    pub fn is_blank(&self, pixel: [u8; 4]) -> bool {
        self.0
            .iter()
            .zip(pixel)
            .all(|(channel, value)| channel.matches(value))
    }
}

impl Default for ColorMatch {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

impl fmt::Display for ColorMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, channel) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            match channel {
                ChannelMatch::Any => f.write_str("*")?,
                ChannelMatch::Exact(value) => write!(f, "{}", value)?,
            }
        }
        Ok(())
    }
}

impl FromStr for ColorMatch {
    type Err = PuzzleError;

    /// Parses the compact `r,g,b,a` form where each slot is `*` or a byte.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || PuzzleError::InvalidColorMatch(s.to_string());

        let mut channels = [ChannelMatch::Any; 4];
        let mut parts = s.split(',');
        for channel in channels.iter_mut() {
            let part = parts.next().ok_or_else(invalid)?.trim();
            *channel = match part {
                "*" => ChannelMatch::Any,
                value => ChannelMatch::Exact(value.parse().map_err(|_| invalid())?),
            };
        }
        if parts.next().is_some() {
            return Err(invalid());
        }

        Ok(Self(channels))
    }
}

impl TryFrom<String> for ColorMatch {
    type Error = PuzzleError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<ColorMatch> for String {
    fn from(value: ColorMatch) -> Self {
        value.to_string()
    }
}
