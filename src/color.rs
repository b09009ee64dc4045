//! RGBA colors and the linear blend used for the tip rating label.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::types::TipError;

/// An 8-bit-per-channel color.
///
/// Serialized as a hex string: `#RRGGBB` or `#AARRGGBB` (alpha first, the
/// way Android color resources are written).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const RED: Rgba = Rgba::rgb(0xFF, 0x00, 0x00);
    pub const GREEN: Rgba = Rgba::rgb(0x00, 0xFF, 0x00);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Hex representation; the alpha channel is only written when not opaque.
    pub fn to_hex(&self) -> String {
        if self.a == 0xFF {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.a, self.r, self.g, self.b)
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgba {
    type Err = TipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        let invalid = || TipError::configuration(format!("Invalid color {:?}, expected #RRGGBB or #AARRGGBB", s));

        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());

        match hex.len() {
            6 => Ok(Rgba::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Rgba::rgba(byte(2)?, byte(4)?, byte(6)?, byte(0)?)),
            _ => Err(invalid()),
        }
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Blends `low` towards `high` channel by channel.
///
/// `fraction` is clamped to `[0, 1]`; each channel is rounded to the nearest byte.
pub fn interpolate_color(fraction: f64, low: Rgba, high: Rgba) -> Rgba {
    let t = if fraction.is_nan() { 0.0 } else { fraction.clamp(0.0, 1.0) };
    let channel = |from: u8, to: u8| -> u8 {
        let (from, to) = (f64::from(from), f64::from(to));
        (from + t * (to - from)).round().clamp(0.0, 255.0) as u8
    };

    Rgba {
        r: channel(low.r, high.r),
        g: channel(low.g, high.g),
        b: channel(low.b, high.b),
        a: channel(low.a, high.a),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpolation_endpoints() {
        let low = Rgba::rgb(0xE5, 0x39, 0x35);
        let high = Rgba::rgb(0x43, 0xA0, 0x47);
        assert_eq!(interpolate_color(0.0, low, high), low);
        assert_eq!(interpolate_color(1.0, low, high), high);
    }

    #[test]
    fn test_interpolation_midpoint_rounds() {
        let mid = interpolate_color(0.5, Rgba::RED, Rgba::GREEN);
        // 255 * 0.5 = 127.5 rounds away from zero
        assert_eq!(mid, Rgba::rgb(128, 128, 0));
    }

    #[test]
    fn test_interpolation_is_monotonic_per_channel() {
        let low = Rgba::rgba(250, 10, 128, 0);
        let high = Rgba::rgba(5, 240, 128, 255);
        let mut prev = low;
        for step in 0..=100 {
            let c = interpolate_color(step as f64 / 100.0, low, high);
            assert!(c.r <= prev.r);
            assert!(c.g >= prev.g);
            assert_eq!(c.b, 128);
            assert!(c.a >= prev.a);
            prev = c;
        }
    }

    #[test]
    fn test_interpolation_clamps_fraction() {
        assert_eq!(interpolate_color(-1.0, Rgba::RED, Rgba::GREEN), Rgba::RED);
        assert_eq!(interpolate_color(7.5, Rgba::RED, Rgba::GREEN), Rgba::GREEN);
        assert_eq!(interpolate_color(f64::NAN, Rgba::RED, Rgba::GREEN), Rgba::RED);
    }

    #[test]
    fn test_hex_parsing() {
        assert_eq!("#FF0000".parse::<Rgba>().unwrap(), Rgba::RED);
        assert_eq!("00ff00".parse::<Rgba>().unwrap(), Rgba::GREEN);
        assert_eq!("#80FF0000".parse::<Rgba>().unwrap(), Rgba::rgba(0xFF, 0, 0, 0x80));
        assert!("#FF00".parse::<Rgba>().is_err());
        assert!("#GG0000".parse::<Rgba>().is_err());
        assert!("#ÿÿÿ".parse::<Rgba>().is_err());
    }

    #[test]
    fn test_serde_uses_hex() {
        let json = serde_json::to_string(&Rgba::rgb(0x43, 0xA0, 0x47)).unwrap();
        assert_eq!(json, "\"#43A047\"");
        let back: Rgba = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Rgba::rgb(0x43, 0xA0, 0x47));
    }
}
