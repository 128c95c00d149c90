//! Generic layout primitives shared by the views.

mod layout;
mod section_title;
mod swatch;

pub use layout::{div, flex};
pub use section_title::{DESCRIPTION_KEY, TITLE_KEY, section_title};
pub use swatch::color_swatch;
