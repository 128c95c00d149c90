//! View components for color usage reports.
//!
//! Components are plain functions and builders that return immutable
//! [`styledom::Element`] trees. Styling is declared through
//! [`styledom::StyleProps`] and resolved by the engine at layout time.

pub mod button;
pub mod colors;
pub mod library;

pub use button::{Button, ButtonProps};
pub use colors::{ColorReport, color_report};

pub mod prelude {
    pub use crate::button::{Button, ButtonProps};
    pub use crate::colors::{ColorReport, color_report};
    pub use crate::library::{color_swatch, div, flex, section_title};
    pub use styledom::{Color, Element, Key, Responsive, Size, StyleProps, Theme};
}
