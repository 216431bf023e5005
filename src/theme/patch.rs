use std::collections::BTreeMap;

use super::{Color, ColorScheme, LayerLevel, Style, StyleSetName, StyleState, Tier};

macro_rules! impl_option_patch_methods {
    ($type:ty { $($field:ident : $value:ty),* $(,)? }) => {
        impl $type {
            $(
                pub fn $field(mut self, value: impl Into<$value>) -> Self {
                    self.$field = Some(value.into());
                    self
                }
            )*
        }
    };
}

/// One palette entry inside a scheme.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct StyleTarget {
    pub tier: Tier,
    pub level: LayerLevel,
    pub set: StyleSetName,
    pub state: StyleState,
}

impl StyleTarget {
    pub const fn new(tier: Tier, level: LayerLevel, set: StyleSetName, state: StyleState) -> Self {
        Self {
            tier,
            level,
            set,
            state,
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct StylePatch {
    pub background: Option<Color>,
    pub border: Option<Color>,
    pub foreground: Option<Color>,
}

impl_option_patch_methods!(StylePatch {
    background: Color,
    border: Color,
    foreground: Color,
});

impl StylePatch {
    fn apply(&self, current: &mut Style) {
        if let Some(value) = &self.background {
            current.background = value.clone();
        }
        if let Some(value) = &self.border {
            current.border = value.clone();
        }
        if let Some(value) = &self.foreground {
            current.foreground = value.clone();
        }
    }

    fn is_empty(&self) -> bool {
        self.background.is_none() && self.border.is_none() && self.foreground.is_none()
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SchemePatch {
    pub name: Option<String>,
    pub is_light: Option<bool>,
    pub styles: BTreeMap<StyleTarget, StylePatch>,
}

impl SchemePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }

    pub fn is_light(mut self, value: bool) -> Self {
        self.is_light = Some(value);
        self
    }

    /// Later patches to the same target replace earlier ones.
    pub fn style(mut self, target: StyleTarget, patch: StylePatch) -> Self {
        self.styles.insert(target, patch);
        self
    }
}

impl ColorScheme {
    pub fn merged(&self, patch: &SchemePatch) -> Self {
        let mut next = self.clone();
        if let Some(name) = &patch.name {
            next.name = name.clone();
        }
        if let Some(is_light) = patch.is_light {
            next.is_light = is_light;
        }
        for (target, style_patch) in &patch.styles {
            if style_patch.is_empty() {
                continue;
            }
            let style = next
                .tier_mut(target.tier)
                .layer_mut(target.level)
                .style_set_mut(target.set)
                .state_mut(target.state);
            style_patch.apply(style);
        }
        tracing::debug!(
            scheme = %next.name,
            overrides = patch.styles.len(),
            "merged color scheme patch"
        );
        next
    }
}
