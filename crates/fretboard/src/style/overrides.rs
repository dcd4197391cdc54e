//! Partial style trees.
//!
//! Each override section mirrors one section of [`Style`] with every leaf
//! optional. Colors stay as strings until the override is merged, so that a
//! bad color is reported as [`FretboardError::InvalidStyleOverride`] along
//! with the key it was found under.

use serde::Deserialize;

use fretboard_core::{color::Color, draw::FontStyle};

use super::{
    DrawingStyle, FretLabelStyle, FretStyle, InlayStyle, MarkerStyle, NutStyle, Orientation,
    StringStyle, Style, TitleStyle,
};
use crate::error::FretboardError;

/// A partial [`Style`]; only the leaves that are set replace the base style.
///
/// Unknown sections and keys are rejected during deserialization.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleOverride {
    pub drawing: DrawingOverride,
    pub nut: NutOverride,
    pub fret: FretOverride,
    pub fret_label: FretLabelOverride,
    pub inlays: InlayOverride,
    pub string: StringOverride,
    pub marker: MarkerOverride,
    pub title: TitleOverride,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DrawingOverride {
    pub orientation: Option<Orientation>,
    pub background_color: Option<String>,
    pub font_color: Option<String>,
    pub font_family: Option<String>,
    pub font_size: Option<f32>,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub spacing: Option<f32>,
    pub label_all_frets: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NutOverride {
    pub color: Option<String>,
    pub size: Option<f32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FretOverride {
    pub color: Option<String>,
    pub size: Option<f32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FretLabelOverride {
    pub font_family: Option<String>,
    pub font_scale: Option<f32>,
    pub font_style: Option<FontStyle>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InlayOverride {
    pub color: Option<String>,
    pub radius: Option<f32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StringOverride {
    pub color: Option<String>,
    pub size: Option<f32>,
    pub muted_font_color: Option<String>,
    pub open_font_color: Option<String>,
    pub label_font_family: Option<String>,
    pub label_font_size: Option<f32>,
    pub equal_weight: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarkerOverride {
    pub border_color: Option<String>,
    pub color: Option<String>,
    pub font_color: Option<String>,
    pub stroke_width: Option<f32>,
    pub radius: Option<f32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TitleOverride {
    pub font_color: Option<String>,
    pub font_family: Option<String>,
    pub font_size: Option<f32>,
}

impl StyleOverride {
    /// Whether no leaf of this override is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub(super) fn apply_to(&self, style: &mut Style) -> Result<(), FretboardError> {
        self.drawing.apply_to(&mut style.drawing)?;
        self.nut.apply_to(&mut style.nut)?;
        self.fret.apply_to(&mut style.fret)?;
        self.fret_label.apply_to(&mut style.fret_label);
        self.inlays.apply_to(&mut style.inlays)?;
        self.string.apply_to(&mut style.string)?;
        self.marker.apply_to(&mut style.marker)?;
        self.title.apply_to(&mut style.title)?;
        Ok(())
    }
}

fn set<T: Clone>(target: &mut T, value: &Option<T>) {
    if let Some(value) = value {
        *target = value.clone();
    }
}

fn parse_color(key: &str, value: &Option<String>) -> Result<Option<Color>, FretboardError> {
    value
        .as_deref()
        .map(Color::new)
        .transpose()
        .map_err(|err| FretboardError::InvalidStyleOverride(format!("`{key}`: {err}")))
}

fn set_color(key: &str, target: &mut Color, value: &Option<String>) -> Result<(), FretboardError> {
    if let Some(color) = parse_color(key, value)? {
        *target = color;
    }
    Ok(())
}

fn set_optional_color(
    key: &str,
    target: &mut Option<Color>,
    value: &Option<String>,
) -> Result<(), FretboardError> {
    if let Some(color) = parse_color(key, value)? {
        *target = Some(color);
    }
    Ok(())
}

impl DrawingOverride {
    fn apply_to(&self, drawing: &mut DrawingStyle) -> Result<(), FretboardError> {
        set(&mut drawing.orientation, &self.orientation);
        set_optional_color(
            "drawing.background_color",
            &mut drawing.background_color,
            &self.background_color,
        )?;
        set_color("drawing.font_color", &mut drawing.font_color, &self.font_color)?;
        set(&mut drawing.font_family, &self.font_family);
        set(&mut drawing.font_size, &self.font_size);
        set(&mut drawing.width, &self.width);
        set(&mut drawing.height, &self.height);
        set(&mut drawing.spacing, &self.spacing);
        set(&mut drawing.label_all_frets, &self.label_all_frets);
        Ok(())
    }
}

impl NutOverride {
    fn apply_to(&self, nut: &mut NutStyle) -> Result<(), FretboardError> {
        set_color("nut.color", &mut nut.color, &self.color)?;
        set(&mut nut.size, &self.size);
        Ok(())
    }
}

impl FretOverride {
    fn apply_to(&self, fret: &mut FretStyle) -> Result<(), FretboardError> {
        set_color("fret.color", &mut fret.color, &self.color)?;
        set(&mut fret.size, &self.size);
        Ok(())
    }
}

impl FretLabelOverride {
    fn apply_to(&self, fret_label: &mut FretLabelStyle) {
        if self.font_family.is_some() {
            fret_label.font_family = self.font_family.clone();
        }
        set(&mut fret_label.font_scale, &self.font_scale);
        set(&mut fret_label.font_style, &self.font_style);
    }
}

impl InlayOverride {
    fn apply_to(&self, inlays: &mut InlayStyle) -> Result<(), FretboardError> {
        set_color("inlays.color", &mut inlays.color, &self.color)?;
        set(&mut inlays.radius, &self.radius);
        Ok(())
    }
}

impl StringOverride {
    fn apply_to(&self, string: &mut StringStyle) -> Result<(), FretboardError> {
        set_color("string.color", &mut string.color, &self.color)?;
        set(&mut string.size, &self.size);
        set_optional_color(
            "string.muted_font_color",
            &mut string.muted_font_color,
            &self.muted_font_color,
        )?;
        set_optional_color(
            "string.open_font_color",
            &mut string.open_font_color,
            &self.open_font_color,
        )?;
        set(&mut string.label_font_family, &self.label_font_family);
        set(&mut string.label_font_size, &self.label_font_size);
        set(&mut string.equal_weight, &self.equal_weight);
        Ok(())
    }
}

impl MarkerOverride {
    fn apply_to(&self, marker: &mut MarkerStyle) -> Result<(), FretboardError> {
        set_color("marker.border_color", &mut marker.border_color, &self.border_color)?;
        set_color("marker.color", &mut marker.color, &self.color)?;
        set_color("marker.font_color", &mut marker.font_color, &self.font_color)?;
        set(&mut marker.stroke_width, &self.stroke_width);
        if self.radius.is_some() {
            marker.radius = self.radius;
        }
        Ok(())
    }
}

impl TitleOverride {
    fn apply_to(&self, title: &mut TitleStyle) -> Result<(), FretboardError> {
        set_color("title.font_color", &mut title.font_color, &self.font_color)?;
        set(&mut title.font_family, &self.font_family);
        set(&mut title.font_size, &self.font_size);
        Ok(())
    }
}
