use super::{Color, Dimension, Responsive, Size, SpaceProps};

/// The full set of style properties an element accepts.
///
/// Every field is optional; unset fields inherit (colors, font) or fall back
/// to the engine default (spacing, width).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyleProps {
    pub space: SpaceProps,
    pub font_size: Option<Dimension>,
    pub width: Option<Responsive<Size>>,
    pub color: Option<Color>,
    pub bg: Option<Color>,
    pub font_weight: Option<u16>,
}

impl StyleProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn m(mut self, index: usize) -> Self {
        self.space.m = Some(Dimension::Scale(index));
        self
    }

    pub fn mb(mut self, index: usize) -> Self {
        self.space.mb = Some(Dimension::Scale(index));
        self
    }

    pub fn mx(mut self, index: usize) -> Self {
        self.space.mx = Some(Dimension::Scale(index));
        self
    }

    pub fn my(mut self, index: usize) -> Self {
        self.space.my = Some(Dimension::Scale(index));
        self
    }

    pub fn p(mut self, index: usize) -> Self {
        self.space.p = Some(Dimension::Scale(index));
        self
    }

    pub fn px(mut self, index: usize) -> Self {
        self.space.px = Some(Dimension::Scale(index));
        self
    }

    pub fn py(mut self, index: usize) -> Self {
        self.space.py = Some(Dimension::Scale(index));
        self
    }

    pub fn space(mut self, space: SpaceProps) -> Self {
        self.space = space;
        self
    }

    pub fn font_size(mut self, index: usize) -> Self {
        self.font_size = Some(Dimension::Scale(index));
        self
    }

    pub fn font_size_px(mut self, px: u16) -> Self {
        self.font_size = Some(Dimension::Px(px));
        self
    }

    pub fn width(mut self, width: impl Into<Responsive<Size>>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    pub fn font_weight(mut self, weight: u16) -> Self {
        self.font_weight = Some(weight);
        self
    }

    /// Layer `other` on top of `self`: every property set in `other` wins.
    pub fn merge(self, other: &StyleProps) -> Self {
        let [mt, mr, mb, ml] = merge_sides(self.space.margin_sides(), other.space.margin_sides());
        let [pt, pr, pb, pl] = merge_sides(self.space.padding_sides(), other.space.padding_sides());
        Self {
            space: SpaceProps {
                mt,
                mr,
                mb,
                ml,
                pt,
                pr,
                pb,
                pl,
                ..SpaceProps::default()
            },
            font_size: other.font_size.or(self.font_size),
            width: other.width.clone().or(self.width),
            color: other.color.clone().or(self.color),
            bg: other.bg.clone().or(self.bg),
            font_weight: other.font_weight.or(self.font_weight),
        }
    }
}

fn merge_sides(
    base: [Option<Dimension>; 4],
    over: [Option<Dimension>; 4],
) -> [Option<Dimension>; 4] {
    let mut out = base;
    for (slot, value) in out.iter_mut().zip(over) {
        if value.is_some() {
            *slot = value;
        }
    }
    out
}
