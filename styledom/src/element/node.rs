use std::collections::BTreeMap;

use super::Content;
use crate::types::{Appearance, Color, StyleProps, Wrap};

/// Stable identity of an element among its siblings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    Name(String),
    /// Position plus value, for lists that may repeat values.
    Indexed(usize, String),
}

impl Key {
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    pub fn indexed(index: usize, name: impl Into<String>) -> Self {
        Self::Indexed(index, name.into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Box,
    Flex,
    Heading(u8),
    Text,
    /// A solid block of the element's background color above its label.
    Swatch,
    Button,
}

/// An immutable description of one node in the UI tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub kind: ElementKind,
    pub key: Option<Key>,
    pub id: Option<String>,
    pub content: Content,
    pub style: StyleProps,
    pub appearance: Appearance,
    pub wrap: Wrap,
    /// Pass-through attributes the engine does not interpret.
    pub attrs: BTreeMap<String, String>,
}

impl Element {
    fn of_kind(kind: ElementKind, appearance: Appearance) -> Self {
        Self {
            kind,
            key: None,
            id: None,
            content: Content::None,
            style: StyleProps::default(),
            appearance,
            wrap: Wrap::NoWrap,
            attrs: BTreeMap::new(),
        }
    }

    pub fn box_() -> Self {
        Self::of_kind(ElementKind::Box, Appearance::block())
    }

    pub fn flex() -> Self {
        Self::of_kind(ElementKind::Flex, Appearance::flex())
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self::of_kind(ElementKind::Text, Appearance::block()).content(Content::Text(content.into()))
    }

    pub fn heading(level: u8, content: impl Into<String>) -> Self {
        Self::of_kind(ElementKind::Heading(level), Appearance::block())
            .content(Content::Text(content.into()))
    }

    /// A swatch of `color`, labelled with `label`.
    pub fn swatch(color: Color, label: impl Into<String>) -> Self {
        let mut el = Self::of_kind(ElementKind::Swatch, Appearance::block())
            .content(Content::Text(label.into()));
        el.style.bg = Some(color);
        el
    }

    pub fn button(appearance: Appearance) -> Self {
        Self::of_kind(ElementKind::Button, appearance)
    }

    pub fn key(mut self, key: Key) -> Self {
        self.key = Some(key);
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn content(mut self, content: Content) -> Self {
        self.content = content;
        self
    }

    pub fn style(mut self, style: StyleProps) -> Self {
        self.style = style;
        self
    }

    pub fn wrap(mut self, wrap: Wrap) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    /// Child elements, empty for text and empty nodes.
    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    /// The element's own text, if it holds text directly.
    pub fn text_content(&self) -> Option<&str> {
        match &self.content {
            Content::Text(text) => Some(text),
            _ => None,
        }
    }
}
