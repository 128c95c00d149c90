use super::Display;

/// Fixed base rules an element kind carries before any style props apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Appearance {
    pub display: Display,
    /// Use the parent's font family rather than the platform default.
    pub inherit_font: bool,
    pub border_width: u16,
    pub border_radius: u16,
    /// Strip native platform styling.
    pub native: bool,
}

impl Appearance {
    pub const fn block() -> Self {
        Self {
            display: Display::Block,
            inherit_font: true,
            border_width: 0,
            border_radius: 0,
            native: false,
        }
    }

    pub const fn flex() -> Self {
        Self {
            display: Display::Flex,
            ..Self::block()
        }
    }
}
