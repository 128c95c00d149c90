use super::{Dimension, Edges};

/// Margin and padding properties.
///
/// Per side the most specific property wins: `mt` over `my` over `m`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpaceProps {
    pub m: Option<Dimension>,
    pub mt: Option<Dimension>,
    pub mr: Option<Dimension>,
    pub mb: Option<Dimension>,
    pub ml: Option<Dimension>,
    pub mx: Option<Dimension>,
    pub my: Option<Dimension>,
    pub p: Option<Dimension>,
    pub pt: Option<Dimension>,
    pub pr: Option<Dimension>,
    pub pb: Option<Dimension>,
    pub pl: Option<Dimension>,
    pub px: Option<Dimension>,
    pub py: Option<Dimension>,
}

impl SpaceProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn margin_sides(&self) -> [Option<Dimension>; 4] {
        [
            self.mt.or(self.my).or(self.m),
            self.mr.or(self.mx).or(self.m),
            self.mb.or(self.my).or(self.m),
            self.ml.or(self.mx).or(self.m),
        ]
    }

    pub fn padding_sides(&self) -> [Option<Dimension>; 4] {
        [
            self.pt.or(self.py).or(self.p),
            self.pr.or(self.px).or(self.p),
            self.pb.or(self.py).or(self.p),
            self.pl.or(self.px).or(self.p),
        ]
    }

    /// Resolve margin sides with `lookup`, unset sides are 0.
    pub fn margin(&self, lookup: impl Fn(Dimension) -> u16) -> Edges {
        resolve_sides(self.margin_sides(), lookup)
    }

    /// Resolve padding sides with `lookup`, unset sides are 0.
    pub fn padding(&self, lookup: impl Fn(Dimension) -> u16) -> Edges {
        resolve_sides(self.padding_sides(), lookup)
    }
}

fn resolve_sides(sides: [Option<Dimension>; 4], lookup: impl Fn(Dimension) -> u16) -> Edges {
    let [top, right, bottom, left] = sides.map(|side| side.map(&lookup).unwrap_or(0));
    Edges::new(top, right, bottom, left)
}
