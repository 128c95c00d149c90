use crate::types::{Rgb, TextStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub char: char,
    pub fg: Rgb,
    pub bg: Rgb,
    pub style: TextStyle,
}

impl Cell {
    pub fn blank(fg: Rgb, bg: Rgb) -> Self {
        Self {
            char: ' ',
            fg,
            bg,
            style: TextStyle::new(),
        }
    }
}
