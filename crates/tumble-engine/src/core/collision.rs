use glam::Vec2;

/// Axis-aligned bounding box, stored as center + half-extents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub center: Vec2,
    pub half: Vec2,
}

/// Contact normal and penetration depth for an overlapping box pair.
/// The normal is a unit axis vector pointing from the first box toward
/// the second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactPoint {
    pub normal: Vec2,
    pub penetration: f32,
}

/// The four face normals tested by [`Aabb::contact`], in tie-break order.
const FACES: [Vec2; 4] = [
    Vec2::new(-1.0, 0.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(0.0, -1.0),
    Vec2::new(0.0, 1.0),
];

impl Aabb {
    pub fn new(center: Vec2, half: Vec2) -> Self {
        Self { center, half }
    }

    /// Build a box from its center and full extents.
    pub fn from_size(center: Vec2, size: Vec2) -> Self {
        Self {
            center,
            half: size * 0.5,
        }
    }

    /// Lowest corner.
    #[inline]
    pub fn min(&self) -> Vec2 {
        self.center - self.half
    }

    /// Highest corner.
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.center + self.half
    }

    /// Separating-axis overlap test for axis-aligned boxes.
    ///
    /// Strict inequality on both axes: boxes whose edges exactly touch do
    /// not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let delta = other.center - self.center;
        let reach = self.half + other.half;
        delta.x.abs() < reach.x && delta.y.abs() < reach.y
    }

    /// Contact normal and penetration depth, or `None` if the boxes do not
    /// overlap.
    ///
    /// Tests the four face-penetration candidates in the fixed order
    /// `-X, +X, -Y, +Y` and keeps the minimum; a tie keeps the first
    /// candidate scanned. The tie-break is a deterministic policy, not a
    /// geometric statement — corner contacts resolve along whichever face
    /// axis comes up shallowest first.
    pub fn contact(&self, other: &Aabb) -> Option<ContactPoint> {
        if !self.overlaps(other) {
            return None;
        }

        let min_a = self.min();
        let max_a = self.max();
        let min_b = other.min();
        let max_b = other.max();

        let distances = [
            max_b.x - min_a.x,
            max_a.x - min_b.x,
            max_b.y - min_a.y,
            max_a.y - min_b.y,
        ];

        let mut penetration = f32::MAX;
        let mut normal = Vec2::ZERO;
        for (face, distance) in FACES.iter().zip(distances) {
            if distance < penetration {
                penetration = distance;
                normal = *face;
            }
        }

        Some(ContactPoint {
            normal,
            penetration,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxed(x: f32, y: f32, w: f32, h: f32) -> Aabb {
        Aabb::from_size(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn overlapping_boxes_overlap() {
        let a = boxed(0.0, 0.0, 10.0, 10.0);
        let b = boxed(9.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
    }

    #[test]
    fn separated_boxes_do_not_overlap() {
        let a = boxed(0.0, 0.0, 10.0, 10.0);
        let b = boxed(20.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
        assert!(a.contact(&b).is_none());
    }

    #[test]
    fn edge_touching_is_not_a_collision() {
        // Centers exactly one full box apart: |delta| == sum of halves.
        let a = boxed(0.0, 0.0, 10.0, 10.0);
        let b = boxed(10.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn overlap_is_symmetric() {
        let cases = [
            (boxed(0.0, 0.0, 10.0, 10.0), boxed(9.0, 0.0, 10.0, 10.0)),
            (boxed(0.0, 0.0, 10.0, 10.0), boxed(20.0, 0.0, 10.0, 10.0)),
            (boxed(3.0, -2.0, 8.0, 4.0), boxed(0.0, 0.0, 2.0, 12.0)),
            (boxed(0.0, 0.0, 1.0, 1.0), boxed(0.0, 0.0, 5.0, 5.0)),
        ];
        for (a, b) in cases {
            assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }
    }

    #[test]
    fn shallow_x_overlap_resolves_along_x() {
        // A at origin, B just inside A's right edge: penetration 1 on +X.
        let a = boxed(0.0, 0.0, 10.0, 10.0);
        let b = boxed(9.0, 0.0, 10.0, 10.0);
        let point = a.contact(&b).unwrap();
        assert_eq!(point.normal, Vec2::new(1.0, 0.0));
        assert!((point.penetration - 1.0).abs() < 0.001);
    }

    #[test]
    fn shallow_y_overlap_resolves_along_y() {
        let a = boxed(0.0, 0.0, 10.0, 10.0);
        let b = boxed(0.0, -9.5, 10.0, 10.0);
        let point = a.contact(&b).unwrap();
        assert_eq!(point.normal, Vec2::new(0.0, -1.0));
        assert!((point.penetration - 0.5).abs() < 0.001);
    }

    #[test]
    fn tie_break_keeps_first_face_in_scan_order() {
        // Perfectly concentric equal boxes: all four candidates are equal,
        // so the -X face wins by scan order.
        let a = boxed(0.0, 0.0, 10.0, 10.0);
        let b = boxed(0.0, 0.0, 10.0, 10.0);
        let point = a.contact(&b).unwrap();
        assert_eq!(point.normal, Vec2::new(-1.0, 0.0));
        assert!((point.penetration - 10.0).abs() < 0.001);
    }

    #[test]
    fn corner_contact_picks_shallowest_axis() {
        // B overlaps A's top-right corner, shallower in Y than in X.
        let a = boxed(0.0, 0.0, 10.0, 10.0);
        let b = boxed(8.0, -9.0, 10.0, 10.0);
        let point = a.contact(&b).unwrap();
        assert_eq!(point.normal, Vec2::new(0.0, -1.0));
        assert!((point.penetration - 1.0).abs() < 0.001);
    }

    #[test]
    fn min_max_corners() {
        let b = boxed(5.0, -3.0, 4.0, 6.0);
        assert_eq!(b.min(), Vec2::new(3.0, -6.0));
        assert_eq!(b.max(), Vec2::new(7.0, 0.0));
    }
}
