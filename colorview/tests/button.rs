use colorview::button::{APPEARANCE, BORDER_RADIUS_PX};
use colorview::{Button, ButtonProps};
use styledom::{Color, DefaultTheme, Dimension, Display, Edges, Rgb, Size, StyleProps};

#[test]
fn test_default_props() {
    let props = ButtonProps::default();

    assert_eq!(props.font_size, Dimension::Scale(1));
    assert_eq!(props.font_weight, 600);
    assert_eq!(props.color, Color::token("white"));
    assert_eq!(props.bg, Color::token("blue"));
    assert_eq!(props.space.py, Some(Dimension::Scale(3)));
    assert_eq!(props.space.px, Some(Dimension::Scale(4)));
    assert_eq!(props.width, None);
}

#[test]
fn test_overriding_one_prop_keeps_the_rest() {
    let button = Button::new().font_weight(400);
    let props = button.props();

    assert_eq!(props.font_weight, 400);
    assert_eq!(props.font_size, Dimension::Scale(1));
    assert_eq!(props.color, Color::token("white"));
    assert_eq!(props.bg, Color::token("blue"));
    assert_eq!(props.space.py, Some(Dimension::Scale(3)));
    assert_eq!(props.space.px, Some(Dimension::Scale(4)));
}

#[test]
fn test_override_bg_only() {
    let button = Button::new().bg(Color::token("red"));
    assert_eq!(
        button.props(),
        &ButtonProps {
            bg: Color::token("red"),
            ..ButtonProps::default()
        }
    );
}

#[test]
fn test_base_appearance() {
    let elem = Button::new().build();

    assert_eq!(elem.appearance, APPEARANCE);
    assert_eq!(elem.appearance.display, Display::InlineBlock);
    assert!(elem.appearance.inherit_font);
    assert_eq!(elem.appearance.border_width, 0);
    assert_eq!(elem.appearance.border_radius, BORDER_RADIUS_PX);
    assert!(!elem.appearance.native);
}

#[test]
fn test_resolve_defaults_against_theme() {
    let theme = DefaultTheme::dark();
    let resolved = ButtonProps::default().resolve(&theme, 0);

    // py 3 -> 16px, px 4 -> 32px, font size 1 -> 14px
    assert_eq!(resolved.padding, Edges::symmetric(16, 32));
    assert_eq!(resolved.margin, Edges::default());
    assert_eq!(resolved.font_size, Some(14));
    assert_eq!(resolved.font_weight, Some(600));
    assert!(resolved.bold());
    assert_eq!(resolved.color, Some(Rgb::new(255, 255, 255)));
    assert_eq!(resolved.bg, Color::rgb(0, 103, 238).to_rgb());
    assert_eq!(resolved.width, Size::Auto);
}

#[test]
fn test_padding_overrides_resolve() {
    let theme = DefaultTheme::dark();
    let resolved = Button::new().px(2).props().resolve(&theme, 0);

    assert_eq!(resolved.padding, Edges::symmetric(16, 8));
}

#[test]
fn test_content_and_attributes_pass_through() {
    let elem = Button::new()
        .id("export")
        .label("Export")
        .attr("type", "submit")
        .build();

    assert_eq!(elem.id.as_deref(), Some("export"));
    assert_eq!(elem.get_attr("type"), Some("submit"));
    assert_eq!(elem.child_elements().len(), 1);
    assert_eq!(elem.child_elements()[0].text_content(), Some("Export"));
}

#[test]
fn test_build_carries_style_props() {
    let elem = Button::new().font_size(3).build();

    assert_eq!(elem.style.font_size, Some(Dimension::Scale(3)));
    assert_eq!(elem.style.font_weight, Some(600));
    assert_eq!(elem.style.bg, Some(Color::token("blue")));
}

#[test]
fn test_style_overrides_layer_on_defaults() {
    let button = Button::new().style(StyleProps::new().color(Color::token("black")).mb(2));
    let elem = button.clone().build();

    assert_eq!(elem.style, button.style_props());
    assert_eq!(elem.style.color, Some(Color::token("black")));
    assert_eq!(elem.style.bg, Some(Color::token("blue")));
    assert_eq!(elem.style.font_weight, Some(600));
    assert_eq!(elem.style.font_size, Some(Dimension::Scale(1)));
    assert_eq!(elem.style.space.mb, Some(Dimension::Scale(2)));
    assert_eq!(elem.style.space.pt, Some(Dimension::Scale(3)));
    assert_eq!(elem.style.space.pl, Some(Dimension::Scale(4)));
}

#[test]
fn test_style_padding_replaces_default_axes() {
    let theme = DefaultTheme::dark();
    let resolved = Button::new().style(StyleProps::new().p(1)).resolve(&theme, 0);

    // p 1 -> 4px on every side
    assert_eq!(resolved.padding, Edges::symmetric(4, 4));
    assert_eq!(resolved.font_weight, Some(600));
}

#[test]
fn test_style_calls_accumulate() {
    let theme = DefaultTheme::dark();
    let resolved = Button::new()
        .style(StyleProps::new().font_weight(400))
        .style(StyleProps::new().bg(Color::token("black")))
        .resolve(&theme, 0);

    assert_eq!(resolved.font_weight, Some(400));
    assert_eq!(resolved.bg, Some(Rgb::new(0, 0, 0)));
    assert_eq!(resolved.color, Some(Rgb::new(255, 255, 255)));
    assert_eq!(resolved.padding, Edges::symmetric(16, 32));
}
