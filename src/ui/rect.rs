//! Rectangle type for layout and hit boxes

/// A rectangle defined by position and size
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Create from screen dimensions
    pub fn screen(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Right edge
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Bottom edge
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Center X
    pub fn center_x(&self) -> f32 {
        self.x + self.w * 0.5
    }

    /// Center Y
    pub fn center_y(&self) -> f32 {
        self.y + self.h * 0.5
    }

    /// Check if point is inside
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Strict overlap test (touching edges do not count)
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Shrink by padding on all sides
    pub fn pad(&self, padding: f32) -> Self {
        Self::new(
            self.x + padding,
            self.y + padding,
            (self.w - padding * 2.0).max(0.0),
            (self.h - padding * 2.0).max(0.0),
        )
    }

    /// Split horizontally at ratio (0.0 - 1.0), returns (left, right)
    pub fn split_h(&self, ratio: f32) -> (Self, Self) {
        let split_x = self.w * ratio.clamp(0.0, 1.0);
        (
            Self::new(self.x, self.y, split_x, self.h),
            Self::new(self.x + split_x, self.y, self.w - split_x, self.h),
        )
    }

    /// Get a horizontal slice from bottom
    pub fn slice_top(&self, height: f32) -> Self {
        Self::new(self.x, self.y, self.w, height.min(self.h))
    }

    pub fn slice_bottom(&self, height: f32) -> Self {
        let h = height.min(self.h);
        Self::new(self.x, self.bottom() - h, self.w, h)
    }

    /// Rectangle of the given size centred inside this one
    pub fn centered(&self, w: f32, h: f32) -> Self {
        let w = w.min(self.w);
        let h = h.min(self.h);
        Self::new(self.center_x() - w * 0.5, self.center_y() - h * 0.5, w, h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_h() {
        let r = Rect::new(0.0, 0.0, 100.0, 50.0);
        let (left, right) = r.split_h(0.3);
        assert!((left.w - 30.0).abs() < 0.001);
        assert!((right.w - 70.0).abs() < 0.001);
        assert!((right.x - 30.0).abs() < 0.001);
    }

    #[test]
    fn test_contains() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert!(r.contains(50.0, 40.0));
        assert!(!r.contains(5.0, 40.0));
        assert!(!r.contains(50.0, 100.0));
    }

    #[test]
    fn test_overlaps_is_strict() {
        let a = Rect::new(0.0, 0.0, 40.0, 40.0);
        assert!(a.overlaps(&Rect::new(39.0, 39.0, 10.0, 10.0)));
        // Sharing an edge is not an overlap
        assert!(!a.overlaps(&Rect::new(40.0, 0.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Rect::new(0.0, 40.0, 10.0, 10.0)));
    }

    #[test]
    fn test_slices() {
        let r = Rect::new(0.0, 100.0, 200.0, 100.0);
        assert_eq!(r.slice_top(30.0), Rect::new(0.0, 100.0, 200.0, 30.0));
        assert_eq!(r.slice_bottom(30.0), Rect::new(0.0, 170.0, 200.0, 30.0));
        assert_eq!(r.slice_top(500.0), r);
    }

    #[test]
    fn test_centered() {
        let r = Rect::new(0.0, 100.0, 200.0, 100.0);
        let c = r.centered(50.0, 20.0);
        assert_eq!(c, Rect::new(75.0, 140.0, 50.0, 20.0));
    }
}
