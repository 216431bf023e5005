use serde::Serialize;
use styletree::prelude::*;

#[derive(Serialize)]
struct StatusBarStyle {
    text: TextStyle,
    background: Color,
}

fn status_bar(scheme: &ColorScheme) -> StatusBarStyle {
    let layer = &scheme.lowest.bottom;
    StatusBarStyle {
        text: text(layer, FontFamily::Sans, Selection::new(), TextProperties::new()),
        background: background(layer, StyleSetName::Variant),
    }
}

styletree::style_nodes! {
    static NODES = {
        "commandPalette" => styletree::command_palette,
        "statusBar" => status_bar,
    };
}

fn main() {
    let style = Style::new(
        Color::parse("#111111").unwrap(),
        Color::parse("#222222").unwrap(),
        Color::parse("#333333").unwrap(),
    );
    let tree = StyleTree::new(ColorScheme::uniform("demo", false, style)).with_nodes(NODES);
    let built = tree.build().unwrap();
    assert_eq!(built["statusBar"]["background"], "#111111");
    assert_eq!(built["commandPalette"]["keystrokeSpacing"], 8.0);
}
