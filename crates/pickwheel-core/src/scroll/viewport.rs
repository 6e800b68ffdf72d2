//! L4 Atomic Layer: Page geometry
//!
//! A picker always shows three slots along its axis, so one page takes a
//! third of the axis once the two inner gaps are removed.

/// Axis geometry of a snapping scroller
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    axis_length: f64,
    gap: f64,
}

impl Default for Viewport {
    /// Unit pages: each page is exactly 1.0 long with no gap
    fn default() -> Self {
        Self {
            axis_length: 3.0,
            gap: 0.0,
        }
    }
}

impl Viewport {
    /// Number of slots visible at once
    pub const VISIBLE_SLOTS: f64 = 3.0;

    /// Negative or non-finite inputs are treated as zero
    pub fn new(axis_length: f64, gap: f64) -> Self {
        let sanitize = |v: f64| if v.is_finite() { v.max(0.0) } else { 0.0 };
        Self {
            axis_length: sanitize(axis_length),
            gap: sanitize(gap),
        }
    }

    pub fn axis_length(&self) -> f64 {
        self.axis_length
    }

    pub fn gap(&self) -> f64 {
        self.gap
    }

    /// `(axis_length - 2*gap) / 3`, never negative
    pub fn page_length(&self) -> f64 {
        ((self.axis_length - 2.0 * self.gap) / Self::VISIBLE_SLOTS).max(0.0)
    }

    /// Distance between the offsets of two adjacent pages
    ///
    /// Falls back to 1.0 for degenerate viewports so offsets stay finite.
    pub fn stride(&self) -> f64 {
        let stride = self.page_length() + self.gap;
        if stride > f64::EPSILON {
            stride
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unit_pages() {
        let viewport = Viewport::default();
        assert_eq!(viewport.page_length(), 1.0);
        assert_eq!(viewport.stride(), 1.0);
    }

    #[test]
    fn test_page_length_subtracts_two_gaps() {
        let viewport = Viewport::new(150.0, 15.0);
        assert!((viewport.page_length() - 40.0).abs() < 1e-9);
        assert!((viewport.stride() - 55.0).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_viewport() {
        let viewport = Viewport::new(-5.0, f64::NAN);
        assert_eq!(viewport.page_length(), 0.0);
        assert_eq!(viewport.stride(), 1.0);

        let tiny = Viewport::new(1.0, 10.0);
        assert_eq!(tiny.page_length(), 0.0);
        assert_eq!(tiny.stride(), 10.0);
    }
}
