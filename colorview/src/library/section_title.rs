use styledom::{Color, Element, Key, StyleProps};

pub const TITLE_KEY: &str = "title";
pub const DESCRIPTION_KEY: &str = "description";

/// A section header: a bold title over a muted description line.
pub fn section_title(title: impl Into<String>, description: impl Into<String>) -> Element {
    Element::box_()
        .style(StyleProps::new().mb(2))
        .child(Element::heading(2, title).key(Key::name(TITLE_KEY)))
        .child(
            Element::text(description)
                .key(Key::name(DESCRIPTION_KEY))
                .style(StyleProps::new().color(Color::var("muted"))),
        )
}
