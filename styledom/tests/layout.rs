use styledom::{
    layout, Appearance, DefaultTheme, Display, Element, LayoutNode, Rect, Responsive, Size,
    StyleProps, Wrap,
};

fn lay_out(root: &Element, width: u16) -> LayoutNode {
    layout(root, &DefaultTheme::default(), width)
}

// ============================================================================
// Block flow
// ============================================================================

#[test]
fn test_block_children_stack_vertically() {
    let root = Element::box_()
        .child(Element::text("first"))
        .child(Element::text("second"));

    let node = lay_out(&root, 20);

    assert_eq!(node.rect, Rect::new(0, 0, 20, 2));
    assert_eq!(node.children[0].rect, Rect::new(0, 0, 20, 1));
    assert_eq!(node.children[1].rect, Rect::new(0, 1, 20, 1));
}

#[test]
fn test_text_wraps_to_content_width() {
    let root = Element::text("one two three");

    let node = lay_out(&root, 7);

    assert_eq!(node.lines, vec!["one two", "three"]);
    assert_eq!(node.rect.height, 2);
}

#[test]
fn test_padding_and_margin_convert_to_cells() {
    // p(3) = 16px = 2 columns / 1 row, mb(2) = 8px = 1 row.
    let root = Element::box_()
        .child(Element::text("x").style(StyleProps::new().p(3).mb(2)))
        .child(Element::text("y"));

    let node = lay_out(&root, 20);
    let padded = &node.children[0];

    assert_eq!(padded.rect, Rect::new(0, 0, 20, 3));
    assert_eq!(padded.content, Rect::new(2, 1, 16, 1));
    assert_eq!(padded.outer_height(), 4);
    assert_eq!(node.children[1].rect.y, 4);
}

// ============================================================================
// Flex rows
// ============================================================================

#[test]
fn test_flex_children_flow_left_to_right() {
    let root = Element::flex()
        .child(Element::text("ab"))
        .child(Element::text("cde"));

    let node = lay_out(&root, 20);

    assert_eq!(node.children[0].rect, Rect::new(0, 0, 2, 1));
    assert_eq!(node.children[1].rect, Rect::new(2, 0, 3, 1));
    assert_eq!(node.rect.height, 1);
}

#[test]
fn test_flex_wrap_starts_new_lines() {
    let cell = || Element::text("ab").style(StyleProps::new().width(Size::Px(32)));
    let root = Element::flex()
        .wrap(Wrap::Wrap)
        .children((0..5).map(|_| cell()));

    let node = lay_out(&root, 10);

    // 4 columns each, two per line of 10.
    let origins: Vec<(u16, u16)> = node.children.iter().map(|c| (c.rect.x, c.rect.y)).collect();
    assert_eq!(origins, vec![(0, 0), (4, 0), (0, 1), (4, 1), (0, 2)]);
    assert_eq!(node.rect.height, 3);
}

#[test]
fn test_flex_without_wrap_keeps_one_line() {
    let root = Element::flex().children((0..5).map(|_| Element::text("abc")));

    let node = lay_out(&root, 10);

    assert!(node.children.iter().all(|c| c.rect.y == 0));
    assert_eq!(node.children[4].rect.x, 12);
}

// ============================================================================
// Widths
// ============================================================================

#[test]
fn test_responsive_fraction_follows_breakpoints() {
    let widths = Responsive::new([
        Size::fraction(2, 5),
        Size::fraction(1, 3),
        Size::fraction(1, 6),
    ]);
    let root = Element::flex().child(Element::box_().style(StyleProps::new().width(widths)));

    // 40 columns = 320px, below the first breakpoint.
    assert_eq!(lay_out(&root, 40).children[0].rect.width, 16);
    // 100 columns = 800px, first breakpoint.
    assert_eq!(lay_out(&root, 100).children[0].rect.width, 33);
    // 200 columns = 1600px, past the last breakpoint.
    assert_eq!(lay_out(&root, 200).children[0].rect.width, 33);
}

#[test]
fn test_inline_block_shrinks_to_content() {
    let appearance = Appearance {
        display: Display::InlineBlock,
        ..Appearance::block()
    };
    let root = Element::box_().child(
        Element::button(appearance)
            .style(StyleProps::new().px(4))
            .child(Element::text("Hi")),
    );

    let node = lay_out(&root, 40);

    // 32px of padding per side = 4 columns.
    assert_eq!(node.children[0].rect.width, 10);
    assert_eq!(node.children[0].content, Rect::new(4, 0, 2, 1));
}

#[test]
fn test_swatch_reserves_color_rows() {
    let root = Element::swatch(styledom::Color::rgb(1, 2, 3), "label");

    let node = lay_out(&root, 10);

    assert_eq!(node.rect.height, styledom::layout::SWATCH_ROWS + 1);
}

#[test]
fn test_layout_is_deterministic() {
    let root = Element::flex()
        .wrap(Wrap::Wrap)
        .children((0..20).map(|i| Element::text(format!("item{i}"))));

    assert_eq!(lay_out(&root, 30), lay_out(&root, 30));
}
