//! Outside-click detection for the expanded region.

use crate::layout::{Point, Rect};

/// Kind of pointer activity that counts as a click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    /// `mousedown`
    Mouse,
    /// `touchstart`
    Touch,
}

/// Reports pointer activity that lands outside a region.
///
/// With no region mounted nothing is ever outside, so a closed gallery
/// ignores pointer activity entirely.
///
/// ## Example
///
/// ```rust
/// use showcase_core_view::{OutsideClick, Point, Rect};
///
/// let detector = OutsideClick::new(Some(Rect::new(0.0, 0.0, 100.0, 100.0)));
/// assert!(detector.is_outside(Point::new(150.0, 50.0)));
/// assert!(!detector.is_outside(Point::new(50.0, 50.0)));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OutsideClick {
    region: Option<Rect>,
}

impl OutsideClick {
    pub fn new(region: Option<Rect>) -> Self {
        Self { region }
    }

    /// Region being watched.
    #[inline]
    pub fn region(&self) -> Option<Rect> {
        self.region
    }

    /// Check if a pointer position falls outside the watched region.
    pub fn is_outside(&self, point: Point) -> bool {
        self.region.is_some_and(|region| !region.contains(point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_region_never_outside() {
        let detector = OutsideClick::default();
        assert!(!detector.is_outside(Point::new(-1000.0, 5000.0)));
    }

    #[test]
    fn test_region_edges() {
        let detector = OutsideClick::new(Some(Rect::new(390.0, 124.0, 500.0, 552.0)));
        assert!(!detector.is_outside(Point::new(390.0, 124.0)));
        assert!(detector.is_outside(Point::new(389.0, 300.0)));
        assert!(detector.is_outside(Point::new(890.0, 300.0)));
        assert!(detector.is_outside(Point::new(600.0, 676.0)));
    }
}
