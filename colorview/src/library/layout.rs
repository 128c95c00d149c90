use styledom::{Element, Wrap};

/// A block container.
pub fn div() -> Element {
    Element::box_()
}

/// A flex row that wraps overflowing children onto new lines.
pub fn flex() -> Element {
    Element::flex().wrap(Wrap::Wrap)
}
