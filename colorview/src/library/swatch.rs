use styledom::{Color, Element};

/// A swatch of `color`, labelled with the color token itself.
///
/// The token is not validated; the renderer decides whether it can be drawn.
pub fn color_swatch(color: &str) -> Element {
    Element::swatch(Color::token(color), color)
}
