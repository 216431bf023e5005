use proptest::prelude::*;
use serde_json::Value;

use super::command_palette::command_palette;
use crate::theme::{Color, ColorScheme, Elevation, Layer, Style, StyleSet};

fn any_color() -> impl Strategy<Value = Color> {
    "#[0-9A-F]{6}".prop_map(|hex| Color::parse(&hex).expect("generated hex"))
}

fn any_style() -> impl Strategy<Value = Style> {
    (any_color(), any_color(), any_color())
        .prop_map(|(background, border, foreground)| Style::new(background, border, foreground))
}

#[derive(Debug)]
struct Palette {
    base: Style,
    on_default: Style,
    on_active: Style,
    elsewhere: Style,
}

fn any_palette() -> impl Strategy<Value = Palette> {
    (any_style(), any_style(), any_style(), any_style()).prop_map(
        |(base, on_default, on_active, elsewhere)| Palette {
            base,
            on_default,
            on_active,
            elsewhere,
        },
    )
}

fn scheme_for(palette: &Palette) -> ColorScheme {
    let bottom = Layer::uniform(StyleSet::uniform(palette.base.clone())).with_on(
        StyleSet::uniform(palette.on_default.clone()).with_active(palette.on_active.clone()),
    );
    let elsewhere = StyleSet::uniform(palette.elsewhere.clone());
    let elsewhere = Elevation::uniform(Layer::uniform(elsewhere));
    ColorScheme::uniform("generated", true, palette.elsewhere.clone())
        .with_highest(elsewhere.with_bottom(bottom))
}

fn keys(value: &Value) -> Vec<&str> {
    let mut keys = value
        .as_object()
        .map(|object| object.keys().map(String::as_str).collect::<Vec<_>>())
        .unwrap_or_default();
    keys.sort_unstable();
    keys
}

proptest! {
    #[test]
    fn output_is_deterministic(palette in any_palette()) {
        let scheme = scheme_for(&palette);
        let first = command_palette(&scheme);
        let second = command_palette(&scheme.clone());
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(
            serde_json::to_value(&first).unwrap(),
            serde_json::to_value(&second).unwrap()
        );
    }

    #[test]
    fn shape_is_fixed(palette in any_palette()) {
        let value = serde_json::to_value(command_palette(&scheme_for(&palette))).unwrap();
        prop_assert_eq!(keys(&value), vec!["key", "keystrokeSpacing"]);
        prop_assert_eq!(
            keys(&value["key"]),
            vec!["active", "background", "border", "cornerRadius", "margin", "padding", "text"]
        );
        prop_assert_eq!(keys(&value["key"]["active"]), vec!["text"]);
        prop_assert_eq!(keys(&value["key"]["margin"]), vec!["left"]);
        prop_assert_eq!(&value["keystrokeSpacing"], &Value::from(8.0));
        prop_assert_eq!(&value["key"]["cornerRadius"], &Value::from(4.0));
    }

    #[test]
    fn only_highest_bottom_feeds_the_node(palette in any_palette(), noise in any_style()) {
        let scheme = scheme_for(&palette);
        let style = command_palette(&scheme);
        prop_assert_eq!(&style.key.text.color, &palette.base.foreground);
        prop_assert_eq!(&style.key.background, &palette.on_default.background);
        prop_assert_eq!(&style.key.border.color, &palette.base.border);

        let noisy_elevation = Elevation::uniform(Layer::uniform(StyleSet::uniform(noise)));
        let noisy = scheme
            .clone()
            .with_lowest(noisy_elevation.clone())
            .with_middle(noisy_elevation.clone())
            .with_highest(
                scheme
                    .highest
                    .clone()
                    .with_middle(noisy_elevation.middle.clone())
                    .with_top(noisy_elevation.top),
            );
        prop_assert_eq!(command_palette(&noisy), style);
    }

    #[test]
    fn active_text_differs_only_in_color(palette in any_palette()) {
        let style = command_palette(&scheme_for(&palette));
        let idle = style.key.text;
        let active = style.key.active.text;
        prop_assert_eq!(&active.color, &palette.on_active.foreground);
        prop_assert_eq!(&active.family, &idle.family);
        prop_assert_eq!(active.size, idle.size);
        prop_assert_eq!(active.weight, idle.weight);
        prop_assert_eq!(active.underline, idle.underline);
    }
}
