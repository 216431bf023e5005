use serde::Serialize;

use crate::style::{
    BorderProperties, BorderStyle, Selection, Spacing, TextProperties, TextStyle, background,
    border, text,
};
use crate::theme::{Color, ColorScheme, StyleSetName, StyleState};
use crate::tokens::{FontFamily, FontSize};

pub const KEYSTROKE_SPACING: f32 = 8.;
pub const KEY_CORNER_RADIUS: f32 = 4.;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandPaletteStyle {
    pub keystroke_spacing: f32,
    pub key: KeystrokeStyle,
}

/// One rendered keystroke glyph in a palette row.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeystrokeStyle {
    pub text: TextStyle,
    pub corner_radius: f32,
    pub background: Color,
    pub border: BorderStyle,
    pub padding: Spacing,
    pub margin: Spacing,
    pub active: KeystrokeActiveStyle,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct KeystrokeActiveStyle {
    pub text: TextStyle,
}

pub fn command_palette(scheme: &ColorScheme) -> CommandPaletteStyle {
    let layer = &scheme.highest.bottom;
    let key_text = TextProperties::new().size(FontSize::Xs);

    CommandPaletteStyle {
        keystroke_spacing: KEYSTROKE_SPACING,
        key: KeystrokeStyle {
            text: text(layer, FontFamily::Mono, Selection::new(), key_text.clone()),
            corner_radius: KEY_CORNER_RADIUS,
            background: background(layer, StyleSetName::On),
            border: border(layer, Selection::new(), BorderProperties::new()),
            padding: Spacing::new().top(2.).bottom(2.).left(8.).right(8.),
            margin: Spacing::new().left(2.),
            active: KeystrokeActiveStyle {
                text: text(
                    layer,
                    FontFamily::Mono,
                    (StyleSetName::On, StyleState::Active),
                    key_text,
                ),
            },
        },
    }
}
