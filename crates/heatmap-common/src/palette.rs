//! Colour palette for the heat map cells and legend.
//!
//! A palette is an ordered list of discrete colours, cold to hot. The colour
//! scale picks one entry per bucket, and the legend draws one swatch per entry
//! in the same order.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Diverging cold-to-hot ramp used by the chart (11 stops).
pub const HEAT_COLORS: [&str; 11] = [
    "#313695", "#4575b4", "#74add1", "#abd9e9", "#e0f3f8", "#ffffbf", "#fee090", "#fdae61",
    "#f46d43", "#d73027", "#a50026",
];

/// An RGBA colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse "#RRGGBB" or "#RRGGBBAA" (the leading '#' is optional).
    pub fn from_hex(s: &str) -> Option<Self> {
        let s = s.trim_start_matches('#');
        let channel = |i: usize| u8::from_str_radix(s.get(i..i + 2)?, 16).ok();

        match s.len() {
            6 => Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Some(Self {
                r: channel(0)?,
                g: channel(2)?,
                b: channel(4)?,
                a: channel(6)?,
            }),
            _ => None,
        }
    }

    /// Lowercase "#rrggbb", or "#rrggbbaa" when not fully opaque.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid hex colour: {}", s)))
    }
}

/// Ordered discrete colours, cold to hot.
///
/// Serialised as a plain list of hex colours. An empty list is rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<Color>", try_from = "Vec<Color>")]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Build a palette; at least one colour is required.
    pub fn new(colors: Vec<Color>) -> Option<Self> {
        if colors.is_empty() {
            return None;
        }
        Some(Self { colors })
    }

    /// Parse a palette from hex strings.
    pub fn from_hex<S: AsRef<str>>(stops: &[S]) -> Option<Self> {
        let colors = stops
            .iter()
            .map(|s| Color::from_hex(s.as_ref()))
            .collect::<Option<Vec<_>>>()?;
        Self::new(colors)
    }

    /// The 11-stop heat ramp.
    pub fn heat() -> Self {
        Self {
            colors: HEAT_COLORS
                .iter()
                .filter_map(|hex| Color::from_hex(hex))
                .collect(),
        }
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl TryFrom<Vec<Color>> for Palette {
    type Error = &'static str;

    fn try_from(colors: Vec<Color>) -> Result<Self, Self::Error> {
        Self::new(colors).ok_or("palette needs at least one colour")
    }
}

impl From<Palette> for Vec<Color> {
    fn from(palette: Palette) -> Self {
        palette.colors
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::heat()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip() {
        assert_eq!(Color::from_hex("#FF0000"), Some(Color::rgb(255, 0, 0)));
        assert_eq!(Color::from_hex("00ff00"), Some(Color::rgb(0, 255, 0)));
        assert_eq!(Color::from_hex("#313695").unwrap().to_hex(), "#313695");
        assert_eq!(Color::from_hex("#GGGGGG"), None);
        assert_eq!(Color::from_hex("#fff"), None);
    }

    #[test]
    fn test_alpha_hex() {
        let c = Color::from_hex("#00000080").unwrap();
        assert_eq!(c.a, 128);
        assert_eq!(c.to_hex(), "#00000080");
    }

    #[test]
    fn test_heat_palette_order() {
        let palette = Palette::heat();
        assert_eq!(palette.len(), 11);
        assert_eq!(palette.colors()[0].to_hex(), "#313695");
        assert_eq!(palette.colors()[10].to_hex(), "#a50026");
    }

    #[test]
    fn test_palette_deserialize() {
        let palette: Palette = serde_json::from_str(r##"["#000000", "#ffffff"]"##).unwrap();
        assert_eq!(palette.len(), 2);
        assert!(serde_json::from_str::<Palette>(r##"["nope"]"##).is_err());
        assert!(Palette::new(vec![]).is_none());
    }

    #[test]
    fn test_palette_deserialize_rejects_empty() {
        let err = serde_json::from_str::<Palette>("[]").unwrap_err();
        assert!(err.to_string().contains("at least one colour"), "{}", err);
    }

    #[test]
    fn test_palette_serializes_as_hex_list() {
        let palette = Palette::from_hex(&["#0000ff", "#ff0000"]).unwrap();
        let json = serde_json::to_string(&palette).unwrap();
        assert_eq!(json, r##"["#0000ff","#ff0000"]"##);
        assert_eq!(serde_json::from_str::<Palette>(&json).unwrap(), palette);
    }
}
