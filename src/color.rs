use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorError;

/// An opaque RGB color as chosen by the user. Serialized as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for Rgba {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ColorError::Invalid(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16);
        match hex.len() {
            6 => Ok(Rgba::rgb(
                channel(0..2).map_err(|_| invalid())?,
                channel(2..4).map_err(|_| invalid())?,
                channel(4..6).map_err(|_| invalid())?,
            )),
            // #rgb shorthand: each digit is doubled
            3 => {
                let short = |i: usize| channel(i..i + 1).map(|v| v * 17).map_err(|_| invalid());
                Ok(Rgba::rgb(short(0)?, short(1)?, short(2)?))
            }
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Rgba {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgba> for String {
    fn from(color: Rgba) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Paint state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Fill {
    #[default]
    Transparent,
    Painted(Rgba),
}

impl Fill {
    pub fn is_painted(&self) -> bool {
        matches!(self, Fill::Painted(_))
    }

    pub fn color(&self) -> Option<Rgba> {
        match self {
            Fill::Painted(color) => Some(*color),
            Fill::Transparent => None,
        }
    }
}

impl fmt::Display for Fill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fill::Painted(color) => write!(f, "{}", color),
            Fill::Transparent => write!(f, "transparent"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_hex() {
        assert_eq!("#ff0000".parse::<Rgba>().unwrap(), Rgba::rgb(255, 0, 0));
        assert_eq!("#0A0b0C".parse::<Rgba>().unwrap(), Rgba::rgb(10, 11, 12));
        assert_eq!("#f80".parse::<Rgba>().unwrap(), Rgba::rgb(255, 136, 0));
    }

    #[test]
    fn rejects_malformed_colors() {
        for input in ["ff0000", "#ff00", "#gg0000", "", "#", "#ff00000"] {
            assert_eq!(
                input.parse::<Rgba>(),
                Err(ColorError::Invalid(input.to_string())),
                "{input}"
            );
        }
    }

    #[test]
    fn displays_as_lowercase_hex() {
        assert_eq!(Rgba::rgb(255, 0, 16).to_string(), "#ff0010");
        assert_eq!(Fill::Transparent.to_string(), "transparent");
        assert_eq!(Fill::Painted(Rgba::rgb(1, 2, 3)).to_string(), "#010203");
    }

    #[test]
    fn serde_uses_hex_strings() {
        let color: Rgba = serde_json::from_str("\"#00ff00\"").unwrap();
        assert_eq!(color, Rgba::rgb(0, 255, 0));
        assert_eq!(serde_json::to_string(&color).unwrap(), "\"#00ff00\"");
        assert!(serde_json::from_str::<Rgba>("\"green\"").is_err());
    }
}
