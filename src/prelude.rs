pub use crate::StyleTree;
pub use crate::error::StyleError;
pub use crate::style::{
    BorderProperties, BorderStyle, Selection, Spacing, TextProperties, TextStyle, background,
    border, border_color, foreground, text,
};
pub use crate::theme::{
    Color, ColorScheme, Elevation, Layer, LayerLevel, SchemePatch, Style, StylePatch, StyleSet,
    StyleSetName, StyleState, StyleTarget, Tier,
};
pub use crate::tokens::{FontFamily, FontSize, FontWeight};
