//! Property value types for style setters.
//!
//! Setters carry one [`StyleValue`] each. The variants cover the value shapes
//! the widget layer consumes: colors, lengths (device-independent pixels),
//! bare numbers, text, and flags.
//!
//! # Example
//!
//! ```
//! use trellis_style::value::{Color, StyleValue};
//!
//! let accent = Color::from_hex("#007AFF").unwrap();
//! let value = StyleValue::Color(accent);
//!
//! assert_eq!(value.as_color(), Some(&accent));
//! assert_eq!(value.as_length(), None);
//! ```

use crate::{Error, Result};

/// An RGBA color with components in the `0.0..=1.0` range.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    /// Red component.
    pub r: f32,
    /// Green component.
    pub g: f32,
    /// Blue component.
    pub b: f32,
    /// Alpha component (1.0 = opaque).
    pub a: f32,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    /// Opaque white.
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    /// Opaque red.
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    /// Opaque green.
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    /// Opaque blue.
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    /// Fully transparent black.
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    /// Create an opaque color from RGB components.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from RGBA components.
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a color from hex notation.
    ///
    /// Accepts `#RGB`, `#RRGGBB`, and `#RRGGBBAA`, with or without the
    /// leading `#`.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.is_ascii() {
            return Err(Error::invalid_value(
                "color",
                format!("Invalid hex color '{hex}'"),
            ));
        }

        let parse_pair = |s: &str| -> Result<f32> {
            u8::from_str_radix(s, 16)
                .map(|v| v as f32 / 255.0)
                .map_err(|_| Error::invalid_value("color", format!("Invalid hex color '{hex}'")))
        };

        match digits.len() {
            3 => {
                let expand = |s: &str| -> String {
                    let mut doubled = String::with_capacity(2);
                    doubled.push_str(s);
                    doubled.push_str(s);
                    doubled
                };
                Ok(Self::rgb(
                    parse_pair(&expand(&digits[0..1]))?,
                    parse_pair(&expand(&digits[1..2]))?,
                    parse_pair(&expand(&digits[2..3]))?,
                ))
            }
            6 => Ok(Self::rgb(
                parse_pair(&digits[0..2])?,
                parse_pair(&digits[2..4])?,
                parse_pair(&digits[4..6])?,
            )),
            8 => Ok(Self::rgba(
                parse_pair(&digits[0..2])?,
                parse_pair(&digits[2..4])?,
                parse_pair(&digits[4..6])?,
                parse_pair(&digits[6..8])?,
            )),
            _ => Err(Error::invalid_value(
                "color",
                format!("Invalid hex color '{hex}'"),
            )),
        }
    }

    /// Format as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    pub fn to_hex(&self) -> String {
        let r = (self.r * 255.0) as u8;
        let g = (self.g * 255.0) as u8;
        let b = (self.b * 255.0) as u8;
        let a = (self.a * 255.0) as u8;

        if a == 255 {
            format!("#{:02X}{:02X}{:02X}", r, g, b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
        }
    }
}

/// A single style property value.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    /// A color value.
    Color(Color),
    /// A length in device-independent pixels.
    Length(f32),
    /// A unitless number (opacity, line height, font weight).
    Number(f64),
    /// A text value (font family, cursor name).
    Text(String),
    /// A boolean flag.
    Flag(bool),
}

impl StyleValue {
    /// Get the color value, if this is a color.
    pub fn as_color(&self) -> Option<&Color> {
        match self {
            StyleValue::Color(c) => Some(c),
            _ => None,
        }
    }

    /// Get the length value, if this is a length.
    pub fn as_length(&self) -> Option<f32> {
        match self {
            StyleValue::Length(l) => Some(*l),
            _ => None,
        }
    }

    /// Get the numeric value, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            StyleValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the text value, if this is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            StyleValue::Text(t) => Some(t.as_str()),
            _ => None,
        }
    }

    /// Get the flag value, if this is a flag.
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            StyleValue::Flag(f) => Some(*f),
            _ => None,
        }
    }
}

impl From<Color> for StyleValue {
    fn from(value: Color) -> Self {
        StyleValue::Color(value)
    }
}

impl From<f32> for StyleValue {
    fn from(value: f32) -> Self {
        StyleValue::Length(value)
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        StyleValue::Number(value)
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Text(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::Text(value)
    }
}

impl From<bool> for StyleValue {
    fn from(value: bool) -> Self {
        StyleValue::Flag(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_from_hex_rgb() {
        let color = Color::from_hex("#FF0000").unwrap();
        assert_eq!(color, Color::RED);
    }

    #[test]
    fn color_from_hex_short() {
        let color = Color::from_hex("#F00").unwrap();
        assert_eq!(color, Color::RED);
    }

    #[test]
    fn color_from_hex_with_alpha() {
        let color = Color::from_hex("#00000000").unwrap();
        assert_eq!(color, Color::TRANSPARENT);
    }

    #[test]
    fn color_from_hex_without_prefix() {
        let color = Color::from_hex("0000FF").unwrap();
        assert_eq!(color, Color::BLUE);
    }

    #[test]
    fn color_from_hex_rejects_garbage() {
        assert!(Color::from_hex("#GGHHII").is_err());
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("").is_err());
        assert!(Color::from_hex("#ééé").is_err());
    }

    #[test]
    fn color_hex_round_trip() {
        let color = Color::from_hex("#007AFF").unwrap();
        assert_eq!(color.to_hex(), "#007AFF");
    }

    #[test]
    fn value_accessors() {
        let value = StyleValue::from(Color::BLUE);
        assert_eq!(value.as_color(), Some(&Color::BLUE));
        assert_eq!(value.as_text(), None);

        let value = StyleValue::from("sans-serif");
        assert_eq!(value.as_text(), Some("sans-serif"));
        assert_eq!(value.as_flag(), None);
    }
}
