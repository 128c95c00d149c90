//! Themes: named colors plus the numeric scales style props index into.

use crate::types::{Color, Dimension};

/// Trait for theme types that resolve scale indices and named colors.
pub trait Theme: Send + Sync {
    /// Resolve a named color. Returns `None` if the theme does not define it.
    fn color(&self, name: &str) -> Option<Color>;

    /// The spacing scale, in pixels.
    fn space(&self) -> &[u16];

    /// The font size scale, in pixels.
    fn font_sizes(&self) -> &[u16];

    /// Breakpoint widths in pixels, ascending.
    fn breakpoints(&self) -> &[u16];

    /// Foreground used when an element sets no color of its own.
    fn foreground(&self) -> Color;

    /// Background used when no element sets one.
    fn background(&self) -> Color;
}

/// Look up a space dimension in pixels.
///
/// Out-of-range indices resolve to 0.
pub fn space_px(theme: &dyn Theme, value: Dimension) -> u16 {
    scale_px(theme.space(), value, "space")
}

/// Look up a font-size dimension in pixels.
pub fn font_size_px(theme: &dyn Theme, value: Dimension) -> u16 {
    scale_px(theme.font_sizes(), value, "font size")
}

fn scale_px(scale: &[u16], value: Dimension, scale_name: &str) -> u16 {
    match value {
        Dimension::Px(px) => px,
        Dimension::Scale(idx) => match scale.get(idx) {
            Some(px) => *px,
            None => {
                log::warn!("{scale_name} index {idx} outside scale of {}", scale.len());
                0
            }
        },
    }
}

/// Index of the breakpoint range `viewport_px` falls into: 0 below the
/// first breakpoint, `n` at or above the n-th.
pub fn breakpoint_index(theme: &dyn Theme, viewport_px: u16) -> usize {
    theme
        .breakpoints()
        .iter()
        .take_while(|bp| viewport_px >= **bp)
        .count()
}

const SPACE: [u16; 9] = [0, 4, 8, 16, 32, 64, 128, 256, 512];
const FONT_SIZES: [u16; 9] = [12, 14, 16, 20, 24, 32, 48, 64, 72];
/// 40em, 52em, 64em at a 16px root.
const BREAKPOINTS: [u16; 3] = [640, 832, 1024];

/// The default theme: styled-system scales and a small named palette.
#[derive(Debug, Clone)]
pub struct DefaultTheme {
    pub text: Color,
    pub background: Color,
    pub muted: Color,
    pub primary: Color,
    pub space: Vec<u16>,
    pub font_sizes: Vec<u16>,
    pub breakpoints: Vec<u16>,
}

impl Default for DefaultTheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl DefaultTheme {
    /// Light text on a near-black background.
    pub fn dark() -> Self {
        Self {
            text: Color::WHITE,
            background: Color::oklch(0.15, 0.0, 0.0),
            muted: Color::rgb(128, 128, 128),
            primary: Color::rgb(0, 103, 238),
            space: SPACE.to_vec(),
            font_sizes: FONT_SIZES.to_vec(),
            breakpoints: BREAKPOINTS.to_vec(),
        }
    }

    /// Dark text on white.
    pub fn light() -> Self {
        Self {
            text: Color::rgb(17, 17, 17),
            background: Color::WHITE,
            muted: Color::rgb(102, 102, 102),
            ..Self::dark()
        }
    }
}

impl Theme for DefaultTheme {
    fn color(&self, name: &str) -> Option<Color> {
        match name {
            "text" | "fg" => Some(self.text.clone()),
            "background" | "bg" => Some(self.background.clone()),
            "muted" => Some(self.muted.clone()),
            "primary" => Some(self.primary.clone()),
            // Theme blue is the primary; other CSS names come from the parser.
            "blue" => Some(self.primary.clone()),
            "white" => Some(Color::WHITE),
            "black" => Some(Color::BLACK),
            _ => None,
        }
    }

    fn space(&self) -> &[u16] {
        &self.space
    }

    fn font_sizes(&self) -> &[u16] {
        &self.font_sizes
    }

    fn breakpoints(&self) -> &[u16] {
        &self.breakpoints
    }

    fn foreground(&self) -> Color {
        self.text.clone()
    }

    fn background(&self) -> Color {
        self.background.clone()
    }
}

/// Resolve any color to concrete RGB against a theme.
///
/// Theme names take priority over CSS literals, so a theme can restyle
/// `blue`. Unresolvable colors return `None`.
pub fn resolve_color(theme: &dyn Theme, color: &Color) -> Option<crate::types::Rgb> {
    match color {
        Color::Rgb { .. } | Color::Oklch { .. } => color.to_rgb(),
        Color::Var(name) => theme.color(name).and_then(|c| c.to_rgb()),
        Color::Raw(token) => {
            if let Some(named) = theme.color(token.trim()) {
                return named.to_rgb();
            }
            match Color::parse(token) {
                Ok(parsed) => parsed.to_rgb(),
                Err(err) => {
                    log::debug!("leaving color unresolved: {err}");
                    None
                }
            }
        }
    }
}
