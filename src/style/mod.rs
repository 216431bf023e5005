//! Style primitives shared by every style-tree node.
//!
//! Each primitive reads one palette entry of a [`Layer`], picked by a
//! [`Selection`] (style set plus interaction state, `base`/`default` when
//! omitted), and shapes it into a fragment the renderer understands.

use serde::Serialize;

use crate::error::StyleError;
use crate::theme::{Color, Layer, Style, StyleSetName, StyleState};
use crate::tokens::{FontFamily, FontSize, FontWeight};

macro_rules! impl_option_property_methods {
    ($type:ty { $($field:ident : $value:ty),* $(,)? }) => {
        impl $type {
            $(
                pub fn $field(mut self, value: $value) -> Self {
                    self.$field = Some(value);
                    self
                }
            )*
        }
    };
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Selection {
    pub set: StyleSetName,
    pub state: StyleState,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, value: StyleSetName) -> Self {
        self.set = value;
        self
    }

    pub fn state(mut self, value: StyleState) -> Self {
        self.state = value;
        self
    }

    /// Selection from the string names used by theme authors, e.g.
    /// `("on", "active")`.
    pub fn named(set: &str, state: &str) -> Result<Self, StyleError> {
        Ok(Self {
            set: set.parse()?,
            state: state.parse()?,
        })
    }

    pub fn resolve(self, layer: &Layer) -> &Style {
        layer.style(self.set, self.state)
    }
}

impl From<StyleSetName> for Selection {
    fn from(set: StyleSetName) -> Self {
        Self::new().set(set)
    }
}

impl From<StyleState> for Selection {
    fn from(state: StyleState) -> Self {
        Self::new().state(state)
    }
}

impl From<(StyleSetName, StyleState)> for Selection {
    fn from((set, state): (StyleSetName, StyleState)) -> Self {
        Self { set, state }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TextStyle {
    pub family: String,
    pub color: Color,
    pub size: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underline: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextProperties {
    pub size: Option<FontSize>,
    pub weight: Option<FontWeight>,
    pub underline: Option<bool>,
    pub color: Option<Color>,
}

impl_option_property_methods!(TextProperties {
    size: FontSize,
    weight: FontWeight,
    underline: bool,
    color: Color,
});

impl TextProperties {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BorderStyle {
    pub color: Color,
    pub width: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlay: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BorderProperties {
    pub width: Option<f32>,
    pub overlay: Option<bool>,
    pub top: Option<bool>,
    pub bottom: Option<bool>,
    pub left: Option<bool>,
    pub right: Option<bool>,
}

impl_option_property_methods!(BorderProperties {
    width: f32,
    overlay: bool,
    top: bool,
    bottom: bool,
    left: bool,
    right: bool,
});

impl BorderProperties {
    pub fn new() -> Self {
        Self::default()
    }
}

pub const DEFAULT_BORDER_WIDTH: f32 = 1.;

/// Box-model offsets; unset sides are left out of the serialized form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Spacing {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<f32>,
}

impl_option_property_methods!(Spacing {
    top: f32,
    bottom: f32,
    left: f32,
    right: f32,
});

impl Spacing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self::new()
            .top(vertical)
            .bottom(vertical)
            .left(horizontal)
            .right(horizontal)
    }
}

pub fn background(layer: &Layer, selection: impl Into<Selection>) -> Color {
    selection.into().resolve(layer).background.clone()
}

pub fn foreground(layer: &Layer, selection: impl Into<Selection>) -> Color {
    selection.into().resolve(layer).foreground.clone()
}

pub fn border_color(layer: &Layer, selection: impl Into<Selection>) -> Color {
    selection.into().resolve(layer).border.clone()
}

/// Text in `family`, colored by the selected foreground unless
/// `properties.color` overrides it. Size defaults to [`FontSize::Sm`].
pub fn text(
    layer: &Layer,
    family: FontFamily,
    selection: impl Into<Selection>,
    properties: TextProperties,
) -> TextStyle {
    let color = properties
        .color
        .unwrap_or_else(|| foreground(layer, selection));
    TextStyle {
        family: family.family_name().to_string(),
        color,
        size: properties.size.unwrap_or_default().px(),
        weight: properties.weight,
        underline: properties.underline,
    }
}

pub fn border(
    layer: &Layer,
    selection: impl Into<Selection>,
    properties: BorderProperties,
) -> BorderStyle {
    BorderStyle {
        color: border_color(layer, selection),
        width: properties.width.unwrap_or(DEFAULT_BORDER_WIDTH),
        overlay: properties.overlay,
        top: properties.top,
        bottom: properties.bottom,
        left: properties.left,
        right: properties.right,
    }
}
