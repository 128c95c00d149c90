pub mod buffer;
pub mod element;
pub mod layout;
pub mod render;
pub mod resolve;
pub mod terminal;
pub mod text;
pub mod theme;
pub mod types;

pub use buffer::{Buffer, Cell};
pub use element::{find_by_key, Content, Element, ElementKind, Key};
pub use layout::{layout, LayoutNode, Rect};
pub use render::render;
pub use resolve::{resolve_style, ResolvedStyle};
pub use theme::{breakpoint_index, resolve_color, DefaultTheme, Theme};
pub use types::*;
