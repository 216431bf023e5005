//! Resolved color scheme model.
//!
//! A [`ColorScheme`] is three elevation tiers, each tier three layers, each
//! layer seven style sets, each set six interaction states. Every level is a
//! mandatory field, so a node that reads `scheme.highest.bottom` can never
//! observe a missing tier.

mod patch;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::StyleError;

pub use patch::{SchemePatch, StylePatch, StyleTarget};

#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    /// Accepts `#RGB`, `#RRGGBB` and `#RRGGBBAA`.
    pub fn parse(value: &str) -> Result<Self, StyleError> {
        let digits = value
            .strip_prefix('#')
            .ok_or_else(|| StyleError::InvalidColor(value.to_string()))?;
        let valid_len = matches!(digits.len(), 3 | 6 | 8);
        if !valid_len || !digits.chars().all(|ch| ch.is_ascii_hexdigit()) {
            return Err(StyleError::InvalidColor(value.to_string()));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Color {
    type Err = StyleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl TryFrom<&str> for Color {
    type Error = StyleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

macro_rules! impl_with_methods {
    ($type:ty { $($method:ident => $field:ident : $value:ty),* $(,)? }) => {
        impl $type {
            $(
                pub fn $method(mut self, value: $value) -> Self {
                    self.$field = value;
                    self
                }
            )*
        }
    };
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Style {
    pub background: Color,
    pub border: Color,
    pub foreground: Color,
}

impl Style {
    pub fn new(background: Color, border: Color, foreground: Color) -> Self {
        Self {
            background,
            border,
            foreground,
        }
    }
}

impl_with_methods!(Style {
    with_background => background: Color,
    with_border => border: Color,
    with_foreground => foreground: Color,
});

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum StyleState {
    #[default]
    Default,
    Active,
    Disabled,
    Hovered,
    Pressed,
    Inverted,
}

impl StyleState {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Active => "active",
            Self::Disabled => "disabled",
            Self::Hovered => "hovered",
            Self::Pressed => "pressed",
            Self::Inverted => "inverted",
        }
    }
}

pub const STYLE_STATES: [StyleState; 6] = [
    StyleState::Default,
    StyleState::Active,
    StyleState::Disabled,
    StyleState::Hovered,
    StyleState::Pressed,
    StyleState::Inverted,
];

impl FromStr for StyleState {
    type Err = StyleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        STYLE_STATES
            .into_iter()
            .find(|state| state.as_str() == value)
            .ok_or_else(|| StyleError::UnknownStyleState(value.to_string()))
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct StyleSet {
    pub default: Style,
    pub active: Style,
    pub disabled: Style,
    pub hovered: Style,
    pub pressed: Style,
    pub inverted: Style,
}

impl StyleSet {
    pub fn uniform(style: Style) -> Self {
        Self {
            default: style.clone(),
            active: style.clone(),
            disabled: style.clone(),
            hovered: style.clone(),
            pressed: style.clone(),
            inverted: style,
        }
    }

    pub fn state(&self, state: StyleState) -> &Style {
        match state {
            StyleState::Default => &self.default,
            StyleState::Active => &self.active,
            StyleState::Disabled => &self.disabled,
            StyleState::Hovered => &self.hovered,
            StyleState::Pressed => &self.pressed,
            StyleState::Inverted => &self.inverted,
        }
    }

    pub fn state_mut(&mut self, state: StyleState) -> &mut Style {
        match state {
            StyleState::Default => &mut self.default,
            StyleState::Active => &mut self.active,
            StyleState::Disabled => &mut self.disabled,
            StyleState::Hovered => &mut self.hovered,
            StyleState::Pressed => &mut self.pressed,
            StyleState::Inverted => &mut self.inverted,
        }
    }
}

impl_with_methods!(StyleSet {
    with_default => default: Style,
    with_active => active: Style,
    with_disabled => disabled: Style,
    with_hovered => hovered: Style,
    with_pressed => pressed: Style,
    with_inverted => inverted: Style,
});

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum StyleSetName {
    #[default]
    Base,
    Variant,
    On,
    Info,
    Positive,
    Warning,
    Negative,
}

impl StyleSetName {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Variant => "variant",
            Self::On => "on",
            Self::Info => "info",
            Self::Positive => "positive",
            Self::Warning => "warning",
            Self::Negative => "negative",
        }
    }
}

pub const STYLE_SET_NAMES: [StyleSetName; 7] = [
    StyleSetName::Base,
    StyleSetName::Variant,
    StyleSetName::On,
    StyleSetName::Info,
    StyleSetName::Positive,
    StyleSetName::Warning,
    StyleSetName::Negative,
];

impl FromStr for StyleSetName {
    type Err = StyleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        STYLE_SET_NAMES
            .into_iter()
            .find(|name| name.as_str() == value)
            .ok_or_else(|| StyleError::UnknownStyleSet(value.to_string()))
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Layer {
    pub base: StyleSet,
    pub variant: StyleSet,
    pub on: StyleSet,
    pub info: StyleSet,
    pub positive: StyleSet,
    pub warning: StyleSet,
    pub negative: StyleSet,
}

impl Layer {
    pub fn uniform(set: StyleSet) -> Self {
        Self {
            base: set.clone(),
            variant: set.clone(),
            on: set.clone(),
            info: set.clone(),
            positive: set.clone(),
            warning: set.clone(),
            negative: set,
        }
    }

    pub fn style_set(&self, name: StyleSetName) -> &StyleSet {
        match name {
            StyleSetName::Base => &self.base,
            StyleSetName::Variant => &self.variant,
            StyleSetName::On => &self.on,
            StyleSetName::Info => &self.info,
            StyleSetName::Positive => &self.positive,
            StyleSetName::Warning => &self.warning,
            StyleSetName::Negative => &self.negative,
        }
    }

    pub fn style_set_mut(&mut self, name: StyleSetName) -> &mut StyleSet {
        match name {
            StyleSetName::Base => &mut self.base,
            StyleSetName::Variant => &mut self.variant,
            StyleSetName::On => &mut self.on,
            StyleSetName::Info => &mut self.info,
            StyleSetName::Positive => &mut self.positive,
            StyleSetName::Warning => &mut self.warning,
            StyleSetName::Negative => &mut self.negative,
        }
    }

    pub fn style(&self, name: StyleSetName, state: StyleState) -> &Style {
        self.style_set(name).state(state)
    }
}

impl_with_methods!(Layer {
    with_base => base: StyleSet,
    with_variant => variant: StyleSet,
    with_on => on: StyleSet,
    with_info => info: StyleSet,
    with_positive => positive: StyleSet,
    with_warning => warning: StyleSet,
    with_negative => negative: StyleSet,
});

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum LayerLevel {
    Bottom,
    Middle,
    Top,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Elevation {
    pub bottom: Layer,
    pub middle: Layer,
    pub top: Layer,
}

impl Elevation {
    pub fn uniform(layer: Layer) -> Self {
        Self {
            bottom: layer.clone(),
            middle: layer.clone(),
            top: layer,
        }
    }

    pub fn layer(&self, level: LayerLevel) -> &Layer {
        match level {
            LayerLevel::Bottom => &self.bottom,
            LayerLevel::Middle => &self.middle,
            LayerLevel::Top => &self.top,
        }
    }

    pub fn layer_mut(&mut self, level: LayerLevel) -> &mut Layer {
        match level {
            LayerLevel::Bottom => &mut self.bottom,
            LayerLevel::Middle => &mut self.middle,
            LayerLevel::Top => &mut self.top,
        }
    }
}

impl_with_methods!(Elevation {
    with_bottom => bottom: Layer,
    with_middle => middle: Layer,
    with_top => top: Layer,
});

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Tier {
    Lowest,
    Middle,
    Highest,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ColorScheme {
    pub name: String,
    pub is_light: bool,
    pub lowest: Elevation,
    pub middle: Elevation,
    pub highest: Elevation,
}

impl ColorScheme {
    pub fn new(
        name: impl Into<String>,
        is_light: bool,
        lowest: Elevation,
        middle: Elevation,
        highest: Elevation,
    ) -> Self {
        Self {
            name: name.into(),
            is_light,
            lowest,
            middle,
            highest,
        }
    }

    /// Every tier, layer, set and state carries `style`.
    pub fn uniform(name: impl Into<String>, is_light: bool, style: Style) -> Self {
        let elevation = Elevation::uniform(Layer::uniform(StyleSet::uniform(style)));
        Self::new(
            name,
            is_light,
            elevation.clone(),
            elevation.clone(),
            elevation,
        )
    }

    pub fn tier(&self, tier: Tier) -> &Elevation {
        match tier {
            Tier::Lowest => &self.lowest,
            Tier::Middle => &self.middle,
            Tier::Highest => &self.highest,
        }
    }

    pub fn tier_mut(&mut self, tier: Tier) -> &mut Elevation {
        match tier {
            Tier::Lowest => &mut self.lowest,
            Tier::Middle => &mut self.middle,
            Tier::Highest => &mut self.highest,
        }
    }
}

impl_with_methods!(ColorScheme {
    with_lowest => lowest: Elevation,
    with_middle => middle: Elevation,
    with_highest => highest: Elevation,
});


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn color_accepts_short_long_and_alpha_forms() {
        for literal in ["#fff", "#AAAAAA", "#00000073"] {
            assert_eq!(Color::parse(literal).unwrap().as_str(), literal);
        }
    }

    #[test]
    fn color_rejects_malformed_literals() {
        for literal in ["fff", "#ff", "#GGGGGG", "#12345", ""] {
            assert!(
                matches!(Color::parse(literal), Err(StyleError::InvalidColor(_))),
                "{literal} should be rejected"
            );
        }
    }

    #[test]
    fn color_serializes_as_plain_string() {
        let json = serde_json::to_string(&color("#FFFFFF")).unwrap();
        assert_eq!(json, "\"#FFFFFF\"");
    }

    #[test]
    fn style_set_and_state_names_parse() {
        assert_eq!("on".parse::<StyleSetName>().unwrap(), StyleSetName::On);
        assert_eq!("active".parse::<StyleState>().unwrap(), StyleState::Active);
        assert!(matches!(
            "upside_down".parse::<StyleSetName>(),
            Err(StyleError::UnknownStyleSet(_))
        ));
        assert!(matches!(
            "wobbly".parse::<StyleState>(),
            Err(StyleError::UnknownStyleState(_))
        ));
    }

    #[test]
    fn lookups_follow_the_named_path() {
        let marked = plain_style().with_foreground(color("#FFFFFF"));
        let layer = Layer::uniform(StyleSet::uniform(plain_style()))
            .with_on(StyleSet::uniform(plain_style()).with_active(marked.clone()));
        let highest =
            Elevation::uniform(Layer::uniform(StyleSet::uniform(plain_style()))).with_bottom(layer);
        let scheme = plain_scheme().with_highest(highest);

        let style = scheme
            .tier(Tier::Highest)
            .layer(LayerLevel::Bottom)
            .style(StyleSetName::On, StyleState::Active);
        assert_eq!(style, &marked);
        assert_eq!(
            scheme
                .tier(Tier::Highest)
                .layer(LayerLevel::Top)
                .style(StyleSetName::On, StyleState::Active),
            &plain_style()
        );
    }

    #[test]
    fn uniform_scheme_repeats_the_style_everywhere() {
        let scheme = plain_scheme();
        for name in STYLE_SET_NAMES {
            for state in STYLE_STATES {
                assert_eq!(scheme.lowest.top.style(name, state), &plain_style());
            }
        }
    }
}
