//! Button primitive.

use styledom::{
    Appearance, Color, Dimension, Display, Element, Responsive, ResolvedStyle, Size, SpaceProps,
    StyleProps, Theme, resolve_style,
};

pub const DEFAULT_FONT_SIZE: usize = 1;
pub const DEFAULT_FONT_WEIGHT: u16 = 600;
pub const DEFAULT_COLOR: &str = "white";
pub const DEFAULT_BG: &str = "blue";
pub const DEFAULT_PY: usize = 3;
pub const DEFAULT_PX: usize = 4;
pub const BORDER_RADIUS_PX: u16 = 4;

/// Base rules every button carries regardless of props.
pub const APPEARANCE: Appearance = Appearance {
    display: Display::InlineBlock,
    inherit_font: true,
    border_width: 0,
    border_radius: BORDER_RADIUS_PX,
    native: false,
};

/// The style properties a button accepts, with their defaults filled in.
///
/// Theme-scale fields hold scale indices; the active theme turns them into
/// pixels in [`ButtonProps::resolve`].
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonProps {
    pub space: SpaceProps,
    pub font_size: Dimension,
    pub width: Option<Responsive<Size>>,
    pub color: Color,
    pub bg: Color,
    pub font_weight: u16,
}

impl Default for ButtonProps {
    fn default() -> Self {
        Self {
            space: SpaceProps {
                py: Some(Dimension::Scale(DEFAULT_PY)),
                px: Some(Dimension::Scale(DEFAULT_PX)),
                ..SpaceProps::default()
            },
            font_size: Dimension::Scale(DEFAULT_FONT_SIZE),
            width: None,
            color: Color::token(DEFAULT_COLOR),
            bg: Color::token(DEFAULT_BG),
            font_weight: DEFAULT_FONT_WEIGHT,
        }
    }
}

impl ButtonProps {
    pub fn to_style_props(&self) -> StyleProps {
        StyleProps {
            space: self.space,
            font_size: Some(self.font_size),
            width: self.width.clone(),
            color: Some(self.color.clone()),
            bg: Some(self.bg.clone()),
            font_weight: Some(self.font_weight),
        }
    }

    /// Concrete values under `theme` at a viewport width in pixels.
    pub fn resolve(&self, theme: &dyn Theme, viewport_px: u16) -> ResolvedStyle {
        resolve_style(&self.to_style_props(), theme, viewport_px)
    }
}

/// A button builder.
///
/// Stateless: it describes a styled element and carries any label,
/// children and attributes through unchanged. Interaction is left to
/// whatever hosts the element.
///
/// # Example
///
/// ```
/// use colorview::Button;
/// use styledom::Color;
///
/// let button = Button::new().label("Export").bg(Color::token("green")).build();
/// assert_eq!(button.style.font_weight, Some(600));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Button {
    props: ButtonProps,
    overrides: StyleProps,
    id: Option<String>,
    label: Option<String>,
    children: Vec<Element>,
    attrs: Vec<(String, String)>,
}

impl Button {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn props(&self) -> &ButtonProps {
        &self.props
    }

    /// Layer arbitrary style props over the button's own. Every property set
    /// in `overrides` wins, with the usual side > axis > all precedence
    /// applied within `overrides` first, so `p` here replaces the default
    /// `px`/`py`.
    pub fn style(mut self, overrides: StyleProps) -> Self {
        self.overrides = self.overrides.merge(&overrides);
        self
    }

    /// The style props the built element carries.
    pub fn style_props(&self) -> StyleProps {
        self.props.to_style_props().merge(&self.overrides)
    }

    /// Concrete values of [`Button::style_props`] under `theme`.
    pub fn resolve(&self, theme: &dyn Theme, viewport_px: u16) -> ResolvedStyle {
        resolve_style(&self.style_props(), theme, viewport_px)
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Pass an attribute through to the element untouched.
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((key.into(), value.into()));
        self
    }

    pub fn font_size(mut self, index: usize) -> Self {
        self.props.font_size = Dimension::Scale(index);
        self
    }

    pub fn font_size_px(mut self, px: u16) -> Self {
        self.props.font_size = Dimension::Px(px);
        self
    }

    pub fn font_weight(mut self, weight: u16) -> Self {
        self.props.font_weight = weight;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.props.color = color;
        self
    }

    pub fn bg(mut self, color: Color) -> Self {
        self.props.bg = color;
        self
    }

    pub fn width(mut self, width: impl Into<Responsive<Size>>) -> Self {
        self.props.width = Some(width.into());
        self
    }

    pub fn space(mut self, space: SpaceProps) -> Self {
        self.props.space = space;
        self
    }

    /// Padding on every side. The default `px`/`py` still take precedence on
    /// their axes unless overridden too.
    pub fn p(mut self, index: usize) -> Self {
        self.props.space.p = Some(Dimension::Scale(index));
        self
    }

    pub fn px(mut self, index: usize) -> Self {
        self.props.space.px = Some(Dimension::Scale(index));
        self
    }

    pub fn py(mut self, index: usize) -> Self {
        self.props.space.py = Some(Dimension::Scale(index));
        self
    }

    pub fn m(mut self, index: usize) -> Self {
        self.props.space.m = Some(Dimension::Scale(index));
        self
    }

    pub fn mx(mut self, index: usize) -> Self {
        self.props.space.mx = Some(Dimension::Scale(index));
        self
    }

    pub fn my(mut self, index: usize) -> Self {
        self.props.space.my = Some(Dimension::Scale(index));
        self
    }

    /// Build the button element.
    pub fn build(self) -> Element {
        let mut elem = Element::button(APPEARANCE).style(self.style_props());

        if let Some(id) = self.id {
            elem = elem.id(id);
        }
        if let Some(label) = self.label {
            elem = elem.child(Element::text(label));
        }
        elem = elem.children(self.children);
        for (key, value) in self.attrs {
            elem = elem.attr(key, value);
        }

        elem
    }
}
