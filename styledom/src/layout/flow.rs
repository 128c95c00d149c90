use super::Rect;
use crate::element::{Content, Element, ElementKind};
use crate::resolve::{resolve_style, ResolvedStyle};
use crate::text::{display_width, wrap_words};
use crate::theme::Theme;
use crate::types::{Display, Edges, Size, Wrap};

/// Horizontal pixels per terminal column.
pub const PX_PER_COL: u16 = 8;
/// Vertical pixels per terminal row.
pub const PX_PER_ROW: u16 = 16;
/// Rows of solid color drawn above a swatch label.
pub const SWATCH_ROWS: u16 = 2;
const SWATCH_MIN_COLS: u16 = 4;

/// The laid-out form of an element, mirroring the element tree.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutNode {
    pub kind: ElementKind,
    /// Border box.
    pub rect: Rect,
    /// Box inside padding.
    pub content: Rect,
    pub margin: Edges,
    pub style: ResolvedStyle,
    /// Wrapped text lines, for text-bearing elements.
    pub lines: Vec<String>,
    pub children: Vec<LayoutNode>,
}

impl LayoutNode {
    pub fn outer_width(&self) -> u16 {
        self.rect.width.saturating_add(self.margin.horizontal_total())
    }

    pub fn outer_height(&self) -> u16 {
        self.rect.height.saturating_add(self.margin.vertical_total())
    }
}

/// Lay out `root` into a viewport `width` columns wide.
///
/// The viewport width in pixels picks the active breakpoint for
/// responsive values. Height grows to fit the content.
pub fn layout(root: &Element, theme: &dyn Theme, width: u16) -> LayoutNode {
    let cx = LayoutContext {
        theme,
        viewport_px: width.saturating_mul(PX_PER_COL),
    };
    cx.layout_element(root, 0, 0, width, false)
}

struct LayoutContext<'a> {
    theme: &'a dyn Theme,
    viewport_px: u16,
}

impl LayoutContext<'_> {
    fn resolve(&self, el: &Element) -> (ResolvedStyle, Edges, Edges) {
        let style = resolve_style(&el.style, self.theme, self.viewport_px);
        let margin = style.margin.to_cells(PX_PER_COL, PX_PER_ROW);
        let padding = style.padding.to_cells(PX_PER_COL, PX_PER_ROW);
        (style, margin, padding)
    }

    fn layout_element(&self, el: &Element, x: u16, y: u16, avail: u16, in_row: bool) -> LayoutNode {
        let (style, margin, padding) = self.resolve(el);
        let outer_avail = avail.saturating_sub(margin.horizontal_total());
        let shrink = in_row || el.appearance.display == Display::InlineBlock;

        let width = match style.width {
            Size::Fill => outer_avail,
            Size::Px(px) => (px / PX_PER_COL).min(outer_avail),
            Size::Fraction(f) => {
                let share = (f32::from(avail) * f.clamp(0.0, 1.0)) as u16;
                share.saturating_sub(margin.horizontal_total())
            }
            Size::Auto if shrink => self
                .intrinsic_width(el)
                .saturating_add(padding.horizontal_total())
                .min(outer_avail),
            Size::Auto => outer_avail,
        };

        let rect_x = x.saturating_add(margin.left);
        let rect_y = y.saturating_add(margin.top);
        let content_x = rect_x.saturating_add(padding.left);
        let content_y = rect_y.saturating_add(padding.top);
        let inner_width = width.saturating_sub(padding.horizontal_total());

        let block_rows = if el.kind == ElementKind::Swatch {
            SWATCH_ROWS
        } else {
            0
        };

        let mut lines = Vec::new();
        let mut children = Vec::new();
        let content_height = match &el.content {
            Content::None => block_rows,
            Content::Text(text) => {
                lines = wrap_words(text, inner_width as usize);
                block_rows.saturating_add(lines.len() as u16)
            }
            Content::Children(kids) if el.appearance.display == Display::Flex => {
                self.layout_row(kids, el.wrap, content_x, content_y, inner_width, &mut children)
            }
            Content::Children(kids) => {
                self.layout_column(kids, content_x, content_y, inner_width, &mut children)
            }
        };

        LayoutNode {
            kind: el.kind,
            rect: Rect::new(
                rect_x,
                rect_y,
                width,
                content_height.saturating_add(padding.vertical_total()),
            ),
            content: Rect::new(content_x, content_y, inner_width, content_height),
            margin,
            style,
            lines,
            children,
        }
    }

    fn layout_column(
        &self,
        kids: &[Element],
        x: u16,
        y: u16,
        width: u16,
        out: &mut Vec<LayoutNode>,
    ) -> u16 {
        let mut cursor_y = y;
        for kid in kids {
            let node = self.layout_element(kid, x, cursor_y, width, false);
            cursor_y = cursor_y.saturating_add(node.outer_height());
            out.push(node);
        }
        cursor_y - y
    }

    fn layout_row(
        &self,
        kids: &[Element],
        wrap: Wrap,
        x: u16,
        y: u16,
        width: u16,
        out: &mut Vec<LayoutNode>,
    ) -> u16 {
        let mut cursor_x = x;
        let mut line_y = y;
        let mut line_height = 0u16;

        for kid in kids {
            let mut node = self.layout_element(kid, cursor_x, line_y, width, true);
            let used = cursor_x - x;
            if wrap == Wrap::Wrap && used > 0 && used.saturating_add(node.outer_width()) > width {
                line_y = line_y.saturating_add(line_height);
                line_height = 0;
                cursor_x = x;
                node = self.layout_element(kid, cursor_x, line_y, width, true);
            }
            cursor_x = cursor_x.saturating_add(node.outer_width());
            line_height = line_height.max(node.outer_height());
            out.push(node);
        }

        (line_y - y).saturating_add(line_height)
    }

    /// Width of the content alone, ignoring the element's own padding.
    fn intrinsic_width(&self, el: &Element) -> u16 {
        let own = match &el.content {
            Content::None => 0,
            Content::Text(text) => text
                .lines()
                .map(display_width)
                .max()
                .unwrap_or(0)
                .min(u16::MAX as usize) as u16,
            Content::Children(kids) => {
                let widths = kids.iter().map(|kid| {
                    let (_, margin, padding) = self.resolve(kid);
                    self.intrinsic_width(kid)
                        .saturating_add(padding.horizontal_total())
                        .saturating_add(margin.horizontal_total())
                });
                if el.appearance.display == Display::Flex {
                    widths.fold(0u16, u16::saturating_add)
                } else {
                    widths.max().unwrap_or(0)
                }
            }
        };

        if el.kind == ElementKind::Swatch {
            own.max(SWATCH_MIN_COLS)
        } else {
            own
        }
    }
}
