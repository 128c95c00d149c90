use palette::Srgb;
use thiserror::Error;

/// A color as it flows through the style pipeline.
///
/// `Var` names a theme color and `Raw` carries an uninterpreted token
/// (for example a value scanned out of a stylesheet). Both are resolved to
/// concrete RGB only at render time.
#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    Rgb { r: u8, g: u8, b: u8 },
    Oklch { l: f32, c: f32, h: f32 },
    Var(String),
    Raw(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("empty color value")]
    Empty,
    #[error("invalid hex color: {0}")]
    InvalidHex(String),
    #[error("invalid rgb() color: {0}")]
    InvalidRgb(String),
    #[error("unknown color: {0}")]
    Unknown(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Color {
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    pub fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h }
    }

    pub fn var(name: impl Into<String>) -> Self {
        Self::Var(name.into())
    }

    /// Wrap an arbitrary color token without interpreting it.
    pub fn token(value: impl Into<String>) -> Self {
        Self::Raw(value.into())
    }

    /// Parse a CSS-like color literal: `#rgb`, `#rrggbb`, `rgb(r, g, b)` or a
    /// CSS named color.
    pub fn parse(value: &str) -> Result<Self, ColorError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(ColorError::Empty);
        }

        if value.starts_with('#') {
            let srgb: Srgb<u8> = value
                .parse()
                .map_err(|_| ColorError::InvalidHex(value.to_string()))?;
            return Ok(Self::rgb(srgb.red, srgb.green, srgb.blue));
        }

        let lower = value.to_ascii_lowercase();
        if let Some(args) = lower
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return parse_rgb_args(args).ok_or_else(|| ColorError::InvalidRgb(value.to_string()));
        }

        palette::named::from_str(&lower)
            .map(|c| Self::rgb(c.red, c.green, c.blue))
            .ok_or_else(|| ColorError::Unknown(value.to_string()))
    }

    /// Concrete RGB for colors that need no theme. `Var` and `Raw` return
    /// `None`; use `Theme`-aware resolution for those.
    pub fn to_rgb(&self) -> Option<Rgb> {
        match self {
            Self::Rgb { r, g, b } => Some(Rgb::new(*r, *g, *b)),
            Self::Oklch { l, c, h } => Some(oklch_to_rgb(*l, *c, *h)),
            Self::Var(_) | Self::Raw(_) => None,
        }
    }
}

fn parse_rgb_args(args: &str) -> Option<Color> {
    let parts: Vec<u8> = args
        .split(',')
        .map(|p| p.trim().parse::<u8>())
        .collect::<Result<_, _>>()
        .ok()?;
    match parts.as_slice() {
        [r, g, b] => Some(Color::rgb(*r, *g, *b)),
        _ => None,
    }
}

fn oklch_to_rgb(l: f32, c: f32, h: f32) -> Rgb {
    use palette::{IntoColor, Oklch};

    let oklch = Oklch::new(l, c, h);
    let srgb: Srgb = oklch.into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();

    Rgb::new(r, g, b)
}
