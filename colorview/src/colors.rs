//! Color usage report.
//!
//! Takes every color occurrence found in some source (duplicates included)
//! and renders two sections:
//!
//! - a swatch grid of the distinct colors, in first-seen order
//! - one `A` glyph per occurrence, sorted, each drawn in its own color, so
//!   frequently used colors show up as long runs

use std::collections::HashSet;

use log::debug;
use styledom::{Color, Element, Key, Responsive, Size, StyleProps};

use crate::library::{color_swatch, div, flex, section_title};

pub const ROOT_KEY: &str = "colors";
pub const UNIQUE_SECTION_KEY: &str = "unique";
pub const UNIQUE_BODY_KEY: &str = "unique-swatches";
pub const DECLARATIONS_SECTION_KEY: &str = "declarations";
pub const DECLARATIONS_BODY_KEY: &str = "declaration-markers";

/// Swatch widths as fractions of the row, smallest breakpoint first.
pub const SWATCH_WIDTHS: [(u16, u16); 3] = [(2, 5), (1, 3), (1, 6)];
pub const MARKER_GLYPH: &str = "A";
pub const MARKER_FONT_SIZE_PX: u16 = 16;
pub const MARKER_FONT_WEIGHT: u16 = 900;

/// Distinct colors in first-seen order. Equality is exact string equality.
pub fn unique_colors<S: AsRef<str>>(colors: &[S]) -> Vec<&str> {
    let mut seen = HashSet::new();
    colors
        .iter()
        .map(|color| color.as_ref())
        .filter(|color| seen.insert(*color))
        .collect()
}

/// Every color occurrence in lexicographic order. The input is left as is.
///
/// Strings compare by UTF-16 code unit, the way browsers sort stylesheet
/// values, so supplementary-plane characters sort below U+E000..=U+FFFF.
pub fn sorted_colors<S: AsRef<str>>(colors: &[S]) -> Vec<&str> {
    let mut sorted: Vec<&str> = colors.iter().map(|color| color.as_ref()).collect();
    sorted.sort_by(|a, b| a.encode_utf16().cmp(b.encode_utf16()));
    sorted
}

/// The derived data behind one render of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorReport<'a> {
    unique: Vec<&'a str>,
    sorted: Vec<&'a str>,
}

impl<'a> ColorReport<'a> {
    pub fn new<S: AsRef<str>>(colors: &'a [S]) -> Self {
        Self {
            unique: unique_colors(colors),
            sorted: sorted_colors(colors),
        }
    }

    pub fn unique(&self) -> &[&'a str] {
        &self.unique
    }

    pub fn sorted(&self) -> &[&'a str] {
        &self.sorted
    }

    /// Number of occurrences, duplicates included.
    pub fn total(&self) -> usize {
        self.sorted.len()
    }

    pub fn unique_title(&self) -> String {
        format!("{} Unique Colors", self.unique.len())
    }

    pub fn total_description(&self) -> String {
        format!("{} total", self.total())
    }

    pub fn declarations_title(&self) -> String {
        format!("{} declarations", self.total())
    }

    pub fn render(&self) -> Element {
        debug!(
            "rendering color report: {} unique of {}",
            self.unique.len(),
            self.total()
        );

        div()
            .key(Key::name(ROOT_KEY))
            .child(self.unique_section())
            .child(self.declarations_section())
    }

    fn unique_section(&self) -> Element {
        let width = Responsive::new(SWATCH_WIDTHS.map(|(n, d)| Size::fraction(n, d)));
        let swatches = self.unique.iter().map(|color| {
            div()
                .key(Key::name(*color))
                .style(StyleProps::new().p(3).mb(2).width(width.clone()))
                .child(color_swatch(color))
        });

        div()
            .key(Key::name(UNIQUE_SECTION_KEY))
            .child(section_title(self.unique_title(), self.total_description()))
            .child(flex().key(Key::name(UNIQUE_BODY_KEY)).children(swatches))
    }

    fn declarations_section(&self) -> Element {
        let markers = self.sorted.iter().enumerate().map(|(i, color)| {
            Element::text(MARKER_GLYPH)
                .key(Key::indexed(i, *color))
                .style(
                    StyleProps::new()
                        .font_size_px(MARKER_FONT_SIZE_PX)
                        .font_weight(MARKER_FONT_WEIGHT)
                        .color(Color::token(*color)),
                )
        });

        div()
            .key(Key::name(DECLARATIONS_SECTION_KEY))
            .child(section_title(
                self.declarations_title(),
                "Total usage frequency",
            ))
            .child(flex().key(Key::name(DECLARATIONS_BODY_KEY)).children(markers))
    }
}

/// Build the report tree for a color collection.
pub fn color_report<S: AsRef<str>>(colors: &[S]) -> Element {
    ColorReport::new(colors).render()
}
