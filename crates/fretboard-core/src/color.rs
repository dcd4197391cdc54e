//! CSS colors.
//!
//! Every color in a fretboard style (strings, frets, markers, labels) is a
//! [`Color`] parsed from a CSS color string: a keyword such as
//! `darkslategray`, a hex value such as `#ff8000`, or a functional form such
//! as `rgba(0, 0, 0, 0.5)`. Colors print back in CSS syntax, so they can be
//! written into SVG attributes unchanged.

use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::DynamicColor;
use serde::{Deserialize, Deserializer, de};

/// A parsed CSS color.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    inner: DynamicColor,
}

impl Color {
    /// Parses a CSS color string.
    ///
    /// ```
    /// use fretboard_core::color::Color;
    ///
    /// let marker = Color::new("cornflowerblue").unwrap();
    /// let root = Color::new("#fa8072").unwrap();
    /// assert_ne!(marker, root);
    /// assert!(Color::new("not a color").is_err());
    /// ```
    pub fn new(css: &str) -> Result<Self, String> {
        DynamicColor::from_str(css)
            .map(|inner| Self { inner })
            .map_err(|err| format!("invalid color `{css}`: {err}"))
    }

    /// Opacity between 0.0 (transparent) and 1.0 (opaque).
    pub fn alpha(&self) -> f32 {
        self.inner.components[3]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("`black` is a CSS color keyword")
    }
}

// `DynamicColor` holds floats; two colors are equal when they print the same.
impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        color.to_string().into()
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let css = String::deserialize(deserializer)?;
        Self::new(&css).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_default_is_black() {
        assert_eq!(Color::default().to_string(), "black");
        assert_eq!(Color::default().alpha(), 1.0);
    }

    #[test]
    fn test_style_palette_parses() {
        for name in [
            "dimgray",
            "darkslategray",
            "darkgray",
            "silver",
            "white",
            "salmon",
            "cornflowerblue",
        ] {
            assert!(Color::new(name).is_ok(), "{name} should parse");
        }
    }

    #[test]
    fn test_invalid_color_names_input() {
        let err = Color::new("ocean-ish").unwrap_err();
        assert!(err.contains("ocean-ish"));
        assert!("".parse::<Color>().is_err());
    }

    #[test]
    fn test_translucent_alpha() {
        let shadow = Color::new("rgba(0, 0, 0, 0.25)").unwrap();
        assert!((shadow.alpha() - 0.25).abs() < 0.001);
    }

    #[test]
    fn test_equal_colors_hash_together() {
        let strings: HashSet<Color> = ["red", "gold", "red"]
            .into_iter()
            .map(|name| name.parse().unwrap())
            .collect();

        assert_eq!(strings.len(), 2);
        assert!(strings.contains(&Color::new("gold").unwrap()));
    }

    #[test]
    fn test_deserialize_from_string() {
        #[derive(Deserialize)]
        struct Section {
            color: Color,
        }

        let deserializer = de::value::MapDeserializer::<_, de::value::Error>::new(
            [("color", "deepskyblue")].into_iter(),
        );
        let section = Section::deserialize(deserializer).unwrap();
        assert_eq!(section.color, Color::new("deepskyblue").unwrap());
    }
}
