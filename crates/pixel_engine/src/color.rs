use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::EngineError;

/// An RGBA pixel value
///
/// Equality is exact component equality. "No color" is expressed as
/// `Option<Color>::None` by the grid, never by a special color value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{Color: r={:02X}, g={:02X}, b={:02X}, a={:02X}}}", self.r, self.g, self.b, self.a)
    }
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const RED: Color = Color::rgb(0xFF, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 0xFF, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 0xFF);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }

    /// Opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 0xFF }
    }

    pub fn get_rgba(&self) -> (u8, u8, u8, u8) {
        (self.r, self.g, self.b, self.a)
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 0xFF
    }

    /// Linear interpolation from `from` towards `to`, component-wise
    ///
    /// `t` is clamped to [0, 1]; 0 yields `from`, 1 yields `to`.
    pub fn lerp(from: Color, to: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| -> u8 { (a as f32 + (b as f32 - a as f32) * t).round().clamp(0.0, 255.0) as u8 };
        Color {
            r: mix(from.r, to.r),
            g: mix(from.g, to.g),
            b: mix(from.b, to.b),
            a: mix(from.a, to.a),
        }
    }

    /// Alpha-composite this color over an opaque backdrop
    pub fn over(&self, backdrop: Color) -> Color {
        let alpha = self.a as f32 / 255.0;
        let mut result = Color::lerp(backdrop, *self, alpha);
        result.a = 0xFF;
        result
    }

    /// Hex representation, `#rrggbb` for opaque colors and `#rrggbbaa` otherwise
    pub fn to_hex(&self) -> String {
        if self.is_opaque() {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    /// Parse `#rrggbb` or `#rrggbbaa` (the leading `#` is optional)
    pub fn from_hex(hex: &str) -> crate::Result<Self> {
        let invalid = || EngineError::InvalidColor { value: hex.to_string() };
        let digits = hex.trim().trim_start_matches('#');
        if !digits.is_ascii() || (digits.len() != 6 && digits.len() != 8) {
            return Err(invalid());
        }
        let component = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
        let a = if digits.len() == 8 { component(6)? } else { 0xFF };
        Ok(Color::new(component(0)?, component(2)?, component(4)?, a))
    }
}

impl FromStr for Color {
    type Err = EngineError;

    fn from_str(s: &str) -> crate::Result<Self> {
        Color::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = EngineError;

    fn try_from(value: String) -> crate::Result<Self> {
        Color::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}
