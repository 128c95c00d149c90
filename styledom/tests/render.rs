use styledom::{
    layout, render, Buffer, Color, DefaultTheme, Element, Rgb, StyleProps, Theme,
};

fn render_tree(root: &Element, width: u16) -> Buffer {
    let theme = DefaultTheme::dark();
    let node = layout(root, &theme, width);
    render(&node, &theme)
}

fn theme_fg() -> Rgb {
    DefaultTheme::dark().foreground().to_rgb().unwrap()
}

// ============================================================================
// Swatches
// ============================================================================

#[test]
fn test_swatch_fills_block_with_its_color() {
    let root = Element::swatch(Color::token("#ff0000"), "#ff0000");

    let buf = render_tree(&root, 10);

    for y in 0..2 {
        for x in 0..10 {
            assert_eq!(buf.get(x, y).unwrap().bg, Rgb::new(255, 0, 0));
        }
    }
    assert_eq!(buf.to_lines()[2], "#ff0000");
}

#[test]
fn test_unresolvable_swatch_is_hatched() {
    let root = Element::swatch(Color::token("nope"), "nope");

    let buf = render_tree(&root, 6);

    let cell = buf.get(0, 0).unwrap();
    assert_eq!(cell.char, '░');
    assert!(cell.style.dim);
    assert_eq!(buf.to_lines()[2], "nope");
}

// ============================================================================
// Text
// ============================================================================

#[test]
fn test_text_uses_own_color_and_weight() {
    let root = Element::text("A").style(
        StyleProps::new()
            .color(Color::token("rgb(0, 255, 0)"))
            .font_weight(900),
    );

    let buf = render_tree(&root, 4);
    let cell = buf.get(0, 0).unwrap();

    assert_eq!(cell.char, 'A');
    assert_eq!(cell.fg, Rgb::new(0, 255, 0));
    assert!(cell.style.bold);
}

#[test]
fn test_text_inherits_parent_color() {
    let root = Element::box_()
        .style(StyleProps::new().color(Color::rgb(1, 2, 3)))
        .child(Element::text("x"));

    let buf = render_tree(&root, 4);

    assert_eq!(buf.get(0, 0).unwrap().fg, Rgb::new(1, 2, 3));
}

#[test]
fn test_unknown_text_color_falls_back_to_theme() {
    let root = Element::text("x").style(StyleProps::new().color(Color::token("???")));

    let buf = render_tree(&root, 4);

    assert_eq!(buf.get(0, 0).unwrap().fg, theme_fg());
}

#[test]
fn test_headings_render_bold() {
    let root = Element::heading(2, "Title");

    let buf = render_tree(&root, 10);

    assert!(buf.get(0, 0).unwrap().style.bold);
    assert_eq!(buf.to_lines(), vec!["Title"]);
}

#[test]
fn test_background_fills_border_box() {
    let root = Element::box_()
        .style(StyleProps::new().bg(Color::var("blue")).p(3))
        .child(Element::text("go"));

    let buf = render_tree(&root, 8);

    assert_eq!(buf.height(), 3);
    assert_eq!(buf.get(0, 0).unwrap().bg, Rgb::new(0, 103, 238));
    assert_eq!(buf.get(7, 2).unwrap().bg, Rgb::new(0, 103, 238));
    assert_eq!(buf.to_lines()[1], "  go");
}
