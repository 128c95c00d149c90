/// A length that is either an index into a theme scale or a raw pixel value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Scale(usize),
    Px(u16),
}

/// Element width.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Size {
    #[default]
    Auto,
    Fill,
    Px(u16),
    /// Fraction of the parent's content width, `0.0..=1.0`.
    Fraction(f32),
}

impl Size {
    pub fn fraction(numerator: u16, denominator: u16) -> Self {
        Self::Fraction(f32::from(numerator) / f32::from(denominator.max(1)))
    }
}

/// A mobile-first list of values, one per breakpoint.
///
/// Index 0 applies below the first breakpoint, index `i` from breakpoint
/// `i - 1` upward. Missing trailing entries inherit the last given value.
#[derive(Debug, Clone, PartialEq)]
pub struct Responsive<T>(Vec<T>);

impl<T: Clone> Responsive<T> {
    pub fn new(values: impl IntoIterator<Item = T>) -> Self {
        Self(values.into_iter().collect())
    }

    pub fn single(value: T) -> Self {
        Self(vec![value])
    }

    pub fn values(&self) -> &[T] {
        &self.0
    }

    /// Value in effect at the given breakpoint index.
    pub fn at(&self, breakpoint: usize) -> Option<T> {
        if self.0.is_empty() {
            return None;
        }
        let idx = breakpoint.min(self.0.len() - 1);
        Some(self.0[idx].clone())
    }
}

impl<T: Clone> From<T> for Responsive<T> {
    fn from(value: T) -> Self {
        Self::single(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn responsive_inherits_last_value() {
        let widths = Responsive::new([Size::Px(1), Size::Px(2)]);
        assert_eq!(widths.at(0), Some(Size::Px(1)));
        assert_eq!(widths.at(1), Some(Size::Px(2)));
        assert_eq!(widths.at(3), Some(Size::Px(2)));
    }

    #[test]
    fn empty_responsive_has_no_value() {
        let empty: Responsive<Size> = Responsive::new([]);
        assert_eq!(empty.at(0), None);
    }
}
