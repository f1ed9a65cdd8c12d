/// Index of the section nearest the top of the viewport.
///
/// Boundaries sit at half a viewport height, so with an 800px viewport a scroll
/// of 399 is still section 0 and 400 is section 1. A non-positive viewport
/// height maps everything to section 0.
#[inline]
pub fn section_index(scroll_y: f32, viewport_height: f32) -> i64 {
    if viewport_height <= 0.0 || !scroll_y.is_finite() {
        return 0;
    }
    // Half-up rounding, matching the page's behaviour for negative overscroll.
    (scroll_y / viewport_height + 0.5).floor() as i64
}

/// Clamp a raw section index to a valid object slot.
#[inline]
pub fn clamp_section(index: i64, object_count: usize) -> Option<usize> {
    if object_count == 0 {
        return None;
    }
    Some(index.clamp(0, object_count as i64 - 1) as usize)
}

/// Remembers the current section and reports only actual changes.
///
/// The tracked index is always a valid object slot, so overscroll past either
/// end of the page collapses onto the first or last section.
#[derive(Clone, Debug, Default)]
pub struct SectionTracker {
    current: usize,
}

impl SectionTracker {
    pub fn new(current: usize) -> Self {
        Self { current }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Feed a scroll position; returns the new section if it differs from the last one.
    pub fn observe(
        &mut self,
        scroll_y: f32,
        viewport_height: f32,
        object_count: usize,
    ) -> Option<usize> {
        let next = clamp_section(section_index(scroll_y, viewport_height), object_count)?;
        if next == self.current {
            return None;
        }
        self.current = next;
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_viewport_boundary() {
        assert_eq!(section_index(350.0, 800.0), 0);
        assert_eq!(section_index(399.9, 800.0), 0);
        assert_eq!(section_index(400.0, 800.0), 1);
        assert_eq!(section_index(450.0, 800.0), 1);
        assert_eq!(section_index(1250.0, 800.0), 2);
    }

    #[test]
    fn degenerate_viewport() {
        assert_eq!(section_index(500.0, 0.0), 0);
        assert_eq!(section_index(f32::NAN, 800.0), 0);
    }

    #[test]
    fn clamps_to_objects() {
        assert_eq!(clamp_section(-1, 3), Some(0));
        assert_eq!(clamp_section(1, 3), Some(1));
        assert_eq!(clamp_section(7, 3), Some(2));
        assert_eq!(clamp_section(0, 0), None);
    }

    #[test]
    fn tracker_ignores_overscroll_bounce() {
        let mut t = SectionTracker::new(0);
        assert_eq!(t.observe(-500.0, 800.0, 3), None);
        assert_eq!(t.observe(0.0, 800.0, 3), None);
        assert_eq!(t.observe(1600.0, 800.0, 3), Some(2));
        assert_eq!(t.observe(2500.0, 800.0, 3), None);
        assert_eq!(t.observe(1600.0, 800.0, 3), None);
        assert_eq!(t.current(), 2);
    }

    #[test]
    fn tracker_without_objects_never_fires() {
        let mut t = SectionTracker::new(0);
        assert_eq!(t.observe(1600.0, 800.0, 0), None);
    }
}
