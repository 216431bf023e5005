use std::str::FromStr;

use serde::Serialize;

use crate::error::StyleError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum FontFamily {
    Sans,
    Mono,
}

impl FontFamily {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sans => "sans",
            Self::Mono => "mono",
        }
    }

    /// Concrete family name handed to the text system.
    pub const fn family_name(self) -> &'static str {
        match self {
            Self::Sans => "Zed Sans",
            Self::Mono => "Zed Mono",
        }
    }
}

impl FromStr for FontFamily {
    type Err = StyleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        FONT_FAMILIES
            .into_iter()
            .find(|family| family.as_str() == value)
            .ok_or_else(|| StyleError::UnknownFontFamily(value.to_string()))
    }
}

pub const FONT_FAMILIES: [FontFamily; 2] = [FontFamily::Sans, FontFamily::Mono];

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum FontSize {
    ThreeXs,
    TwoXs,
    Xs,
    #[default]
    Sm,
    Md,
    Lg,
    Xl,
}

impl FontSize {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ThreeXs => "3xs",
            Self::TwoXs => "2xs",
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }

    pub const fn px(self) -> f32 {
        match self {
            Self::ThreeXs => 8.,
            Self::TwoXs => 10.,
            Self::Xs => 12.,
            Self::Sm => 14.,
            Self::Md => 16.,
            Self::Lg => 18.,
            Self::Xl => 20.,
        }
    }
}

impl FromStr for FontSize {
    type Err = StyleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        FONT_SIZES
            .into_iter()
            .find(|size| size.as_str() == value)
            .ok_or_else(|| StyleError::UnknownFontSize(value.to_string()))
    }
}

pub const FONT_SIZES: [FontSize; 7] = [
    FontSize::ThreeXs,
    FontSize::TwoXs,
    FontSize::Xs,
    FontSize::Sm,
    FontSize::Md,
    FontSize::Lg,
    FontSize::Xl,
];

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    Thin,
    ExtraLight,
    Light,
    Normal,
    Medium,
    Semibold,
    Bold,
    ExtraBold,
    Black,
}

impl FontWeight {
    pub const fn numeric(self) -> u16 {
        match self {
            Self::Thin => 100,
            Self::ExtraLight => 200,
            Self::Light => 300,
            Self::Normal => 400,
            Self::Medium => 500,
            Self::Semibold => 600,
            Self::Bold => 700,
            Self::ExtraBold => 800,
            Self::Black => 900,
        }
    }
}
