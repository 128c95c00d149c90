/// Resolved box edges, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Edges {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

impl Edges {
    pub const fn new(top: u16, right: u16, bottom: u16, left: u16) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub const fn symmetric(vertical: u16, horizontal: u16) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    pub const fn horizontal_total(&self) -> u16 {
        self.left + self.right
    }

    pub const fn vertical_total(&self) -> u16 {
        self.top + self.bottom
    }

    /// Convert pixel edges to terminal cells, rounding up so any non-zero
    /// spacing stays visible.
    pub fn to_cells(self, px_per_col: u16, px_per_row: u16) -> Self {
        let col = |v: u16| v.div_ceil(px_per_col);
        let row = |v: u16| v.div_ceil(px_per_row);
        Self::new(
            row(self.top),
            col(self.right),
            row(self.bottom),
            col(self.left),
        )
    }
}
