mod flow;
mod rect;

pub use flow::{layout, LayoutNode, PX_PER_COL, PX_PER_ROW, SWATCH_ROWS};
pub use rect::Rect;
