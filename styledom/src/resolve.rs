use crate::theme::{breakpoint_index, font_size_px, resolve_color, space_px, Theme};
use crate::types::{Edges, Rgb, Size, StyleProps};

/// Weight at and above which text renders bold.
pub const BOLD_WEIGHT: u16 = 600;

/// Concrete values for one element, after theme lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle {
    pub margin: Edges,
    pub padding: Edges,
    /// `None` inherits the parent's font size.
    pub font_size: Option<u16>,
    pub width: Size,
    pub color: Option<Rgb>,
    pub bg: Option<Rgb>,
    pub font_weight: Option<u16>,
}

impl ResolvedStyle {
    pub fn bold(&self) -> bool {
        self.font_weight.is_some_and(|w| w >= BOLD_WEIGHT)
    }
}

/// Resolve style props against a theme at a viewport width.
///
/// Pure: the same props, theme and viewport always give the same result.
pub fn resolve_style(props: &StyleProps, theme: &dyn Theme, viewport_px: u16) -> ResolvedStyle {
    let bp = breakpoint_index(theme, viewport_px);
    ResolvedStyle {
        margin: props.space.margin(|d| space_px(theme, d)),
        padding: props.space.padding(|d| space_px(theme, d)),
        font_size: props.font_size.map(|d| font_size_px(theme, d)),
        width: props
            .width
            .as_ref()
            .and_then(|w| w.at(bp))
            .unwrap_or_default(),
        color: props.color.as_ref().and_then(|c| resolve_color(theme, c)),
        bg: props.bg.as_ref().and_then(|c| resolve_color(theme, c)),
        font_weight: props.font_weight,
    }
}
