use super::Vec2;

/// Axis-aligned rectangle in logical pixels, top-left origin.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Rectangle spanning two arbitrary corner points.
    ///
    /// The rubber-band gesture hands in its anchor and the pointer in
    /// whichever order the drag produced them; the result is normalized.
    #[inline]
    pub fn from_points(a: Vec2, b: Vec2) -> Self {
        Rect::new(
            a.x.min(b.x),
            a.y.min(b.y),
            (a.x - b.x).abs(),
            (a.y - b.y).abs(),
        )
    }

    /// Square of side `side` centered on `center` (the eraser stamp shape).
    #[inline]
    pub fn centered_square(center: Vec2, side: f32) -> Self {
        let half = side / 2.0;
        Rect::new(center.x - half, center.y - half, side, side)
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Flips negative extents so width and height come out non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        Rect::from_points(self.origin, self.max())
    }

    /// Half-open containment: the min edges count as inside, the max edges
    /// do not.
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let r = self.normalized();
        let (lo, hi) = (r.min(), r.max());
        p.x >= lo.x && p.y >= lo.y && p.x < hi.x && p.y < hi.y
    }

    /// Overlap of two rectangles, `None` when they share no area.
    #[inline]
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let (a, b) = (self.normalized(), other.normalized());

        let lo = Vec2::new(a.min().x.max(b.min().x), a.min().y.max(b.min().y));
        let hi = Vec2::new(a.max().x.min(b.max().x), a.max().y.min(b.max().y));

        let overlap = Rect::new(lo.x, lo.y, hi.x - lo.x, hi.y - lo.y);
        if overlap.is_empty() { None } else { Some(overlap) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_flips_negative_extents() {
        let n = Rect::new(10.0, 10.0, -4.0, -6.0).normalized();
        assert_eq!(n, Rect::new(6.0, 4.0, 4.0, 6.0));

        let already = Rect::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(already.normalized(), already);
    }

    #[test]
    fn from_points_any_corner_order() {
        let a = Vec2::new(10.0, 20.0);
        let b = Vec2::new(4.0, 2.0);
        assert_eq!(Rect::from_points(a, b), Rect::new(4.0, 2.0, 6.0, 18.0));
        assert_eq!(Rect::from_points(b, a), Rect::new(4.0, 2.0, 6.0, 18.0));
    }

    #[test]
    fn centered_square_is_centered() {
        let sq = Rect::centered_square(Vec2::new(50.0, 50.0), 100.0);
        assert_eq!(sq, Rect::new(0.0, 0.0, 100.0, 100.0));
    }

    #[test]
    fn contains_is_half_open() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);

        assert!(r.contains(Vec2::new(0.0, 0.0)));
        assert!(r.contains(Vec2::new(9.9, 9.9)));
        // The max edges lie outside.
        assert!(!r.contains(Vec2::new(10.0, 5.0)));
        assert!(!r.contains(Vec2::new(5.0, 10.0)));
        assert!(!r.contains(Vec2::new(-0.1, 5.0)));
    }

    #[test]
    fn intersect_overlapping_and_contained() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert_eq!(a.intersect(b), Some(Rect::new(5.0, 5.0, 5.0, 5.0)));

        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert_eq!(outer.intersect(inner), Some(inner));
    }

    #[test]
    fn intersect_edge_touching_or_disjoint_is_none() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Shared edge: zero-width overlap does not count.
        assert!(a.intersect(Rect::new(10.0, 0.0, 10.0, 10.0)).is_none());
        assert!(a.intersect(Rect::new(50.0, 50.0, 5.0, 5.0)).is_none());
    }

    #[test]
    fn is_empty_zero_extent() {
        assert!(Rect::new(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(Rect::new(0.0, 0.0, 5.0, 0.0).is_empty());
        assert!(!Rect::new(0.0, 0.0, 1.0, 1.0).is_empty());
    }
}
