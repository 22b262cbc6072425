//! Seat color value object

use crate::core::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// RGB color of a party's seats (Value Object)
///
/// Written as `#RRGGBB` (or the `#RGB` shorthand) in config files and the
/// editor. Always formats back as uppercase `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeatColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl SeatColor {
    pub const WHITE: SeatColor = SeatColor::rgb(0xFF, 0xFF, 0xFF);
    pub const RED: SeatColor = SeatColor::rgb(0xFF, 0x00, 0x00);
    pub const BLUE: SeatColor = SeatColor::rgb(0x00, 0x00, 0xFF);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Hex notation, e.g. `#FF0000`
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Default for SeatColor {
    fn default() -> Self {
        Self::WHITE
    }
}

impl std::fmt::Display for SeatColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl std::str::FromStr for SeatColor {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidColor(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| invalid());
        match hex.len() {
            6 => Ok(Self::rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            // #RGB expands each digit: #F0A -> #FF00AA
            3 => {
                let short = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 0x11);
                Ok(Self::rgb(short(0)?, short(1)?, short(2)?))
            }
            _ => Err(invalid()),
        }
    }
}

impl Serialize for SeatColor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for SeatColor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_form() {
        let color: SeatColor = "#FF0000".parse().unwrap();
        assert_eq!(color, SeatColor::RED);
        let color: SeatColor = "#0000ff".parse().unwrap();
        assert_eq!(color, SeatColor::BLUE);
    }

    #[test]
    fn test_parse_short_form() {
        let color: SeatColor = "#fff".parse().unwrap();
        assert_eq!(color, SeatColor::WHITE);
        let color: SeatColor = "#F0A".parse().unwrap();
        assert_eq!(color, SeatColor::rgb(0xFF, 0x00, 0xAA));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for input in ["", "#", "FF0000", "#FF00", "#GG0000", "red", "#FF00001", "#+F0000"] {
            assert!(
                matches!(input.parse::<SeatColor>(), Err(DomainError::InvalidColor(_))),
                "accepted {input:?}"
            );
        }
    }

    #[test]
    fn test_display_is_uppercase_hex() {
        assert_eq!(SeatColor::rgb(0xab, 0x01, 0xff).to_string(), "#AB01FF");
    }

    #[test]
    fn test_default_is_white() {
        assert_eq!(SeatColor::default(), SeatColor::WHITE);
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&SeatColor::RED).unwrap();
        assert_eq!(json, "\"#FF0000\"");
        let parsed: SeatColor = serde_json::from_str("\"#00f\"").unwrap();
        assert_eq!(parsed, SeatColor::BLUE);
        assert!(serde_json::from_str::<SeatColor>("\"blue\"").is_err());
    }
}
