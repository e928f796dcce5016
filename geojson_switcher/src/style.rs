//! Stroke styles applied to features depending on their selection flag.

use std::fmt;

use serde::{Deserialize, Serialize};

/// RGB color, written as a CSS hex string (`#rgb` or `#rrggbb`) in options files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(pub [u8; 3]);

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Parses `#rgb` or `#rrggbb`. The leading `#` is optional.
    pub fn from_hex(text: &str) -> Option<Self> {
        let digits = text.trim().trim_start_matches('#');
        if !digits.is_ascii() {
            return None;
        }
        match digits.len() {
            3 => {
                let mut rgb = [0u8; 3];
                for (i, c) in digits.chars().enumerate() {
                    let v = c.to_digit(16)? as u8;
                    rgb[i] = v * 16 + v;
                }
                Some(Self(rgb))
            }
            6 => {
                let mut rgb = [0u8; 3];
                for (i, channel) in rgb.iter_mut().enumerate() {
                    *channel = u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16).ok()?;
                }
                Some(Self(rgb))
            }
            _ => None,
        }
    }

    /// Returns the color as `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0[0], self.0[1], self.0[2])
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value).ok_or_else(|| format!("invalid hex color '{}'", value))
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// Distance along a line, either absolute or relative to the line length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Spacing {
    Pixels(f64),
    Percent(f64),
}

/// Symbol repeated along a decorated line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PatternSymbol {
    /// Directional arrow head.
    ArrowHead {
        pixel_size: f64,
        #[serde(default)]
        color: Option<Color>,
    },
    /// Short dash drawn across the line.
    Dash { pixel_size: f64 },
}

/// One decorative pattern attached to a line, e.g. arrows every 100 px.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternSpec {
    pub offset: Spacing,
    pub repeat: Spacing,
    pub symbol: PatternSymbol,
}

/// Stroke properties shared by the selected and unselected styles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrokeShape {
    pub opacity: f32,
    pub weight: f32,
    /// Dash/gap lengths in pixels; empty means a solid line.
    pub dash_array: Vec<f64>,
}

impl Default for StrokeShape {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            weight: 5.0,
            dash_array: vec![10.0, 30.0],
        }
    }
}

/// The part of a style that differs between selected and unselected features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleVariant {
    pub color: Color,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patterns: Option<Vec<PatternSpec>>,
}

impl StyleVariant {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            patterns: None,
        }
    }

    pub fn with_patterns(mut self, patterns: Vec<PatternSpec>) -> Self {
        self.patterns = Some(patterns);
        self
    }
}

/// Fully resolved style handed to the render sink.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleDescriptor {
    pub color: Color,
    pub opacity: f32,
    pub weight: f32,
    pub dash_array: Vec<f64>,
    pub patterns: Option<Vec<PatternSpec>>,
}

impl StyleDescriptor {
    pub fn new(shape: &StrokeShape, variant: &StyleVariant) -> Self {
        Self {
            color: variant.color,
            opacity: shape.opacity,
            weight: shape.weight,
            dash_array: shape.dash_array.clone(),
            patterns: variant.patterns.clone(),
        }
    }

    /// Patterns to decorate the shape with, if any.
    pub fn decoration(&self) -> Option<&[PatternSpec]> {
        match &self.patterns {
            Some(p) if !p.is_empty() => Some(p),
            _ => None,
        }
    }
}

/// Maps a selection flag to one of two precomputed styles.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleResolver {
    unselected: StyleDescriptor,
    selected: StyleDescriptor,
}

impl StyleResolver {
    pub fn new(shape: &StrokeShape, unselected: &StyleVariant, selected: &StyleVariant) -> Self {
        Self {
            unselected: StyleDescriptor::new(shape, unselected),
            selected: StyleDescriptor::new(shape, selected),
        }
    }

    pub fn style_for(&self, selected: bool) -> &StyleDescriptor {
        if selected {
            &self.selected
        } else {
            &self.unselected
        }
    }
}
