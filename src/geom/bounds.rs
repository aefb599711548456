//! Axis-aligned bounding boxes for atom selections.

use glam::DVec3;

use super::types::GeomError;

/// Axis-aligned bounding box of a point cloud.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: DVec3,
    pub max: DVec3,
}

/// The 12 box edges as index pairs into [`BoundingBox::corners`].
pub const EDGES: [(usize, usize); 12] = [
    (0, 1),
    (2, 3),
    (4, 5),
    (6, 7),
    (0, 4),
    (2, 6),
    (3, 7),
    (1, 5),
    (0, 2),
    (4, 6),
    (1, 3),
    (5, 7),
];

impl BoundingBox {
    /// Minimal box spanning all points.
    pub fn from_points(points: &[DVec3]) -> Result<Self, GeomError> {
        if points.is_empty() {
            return Err(GeomError::InvalidInput(
                "point cloud is empty".to_string(),
            ));
        }
        if let Some(p) = points.iter().find(|p| !p.is_finite()) {
            return Err(GeomError::InvalidInput(format!(
                "point cloud contains non-finite coordinate: {p:?}"
            )));
        }

        let mut min = points[0];
        let mut max = points[0];
        for p in &points[1..] {
            min = min.min(*p);
            max = max.max(*p);
        }
        Ok(BoundingBox { min, max })
    }

    /// Box grown by `padding` on every face.
    pub fn padded(&self, padding: f64) -> Self {
        BoundingBox {
            min: self.min - DVec3::splat(padding),
            max: self.max + DVec3::splat(padding),
        }
    }

    /// Edge lengths along x, y, z.
    pub fn dimensions(&self) -> DVec3 {
        self.max - self.min
    }

    pub fn center(&self) -> DVec3 {
        0.5 * (self.min + self.max)
    }

    /// The 8 corners, low-to-high z fastest, then y, then x.
    pub fn corners(&self) -> [DVec3; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            DVec3::new(lo.x, lo.y, lo.z),
            DVec3::new(lo.x, lo.y, hi.z),
            DVec3::new(lo.x, hi.y, lo.z),
            DVec3::new(lo.x, hi.y, hi.z),
            DVec3::new(hi.x, lo.y, lo.z),
            DVec3::new(hi.x, lo.y, hi.z),
            DVec3::new(hi.x, hi.y, lo.z),
            DVec3::new(hi.x, hi.y, hi.z),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points_dimensions() {
        let points = vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(2.0, 4.0, 6.0),
            DVec3::new(1.0, 2.0, 3.0),
        ];
        let bb = BoundingBox::from_points(&points).unwrap();
        assert_eq!(bb.dimensions(), DVec3::new(2.0, 4.0, 6.0));
        assert_eq!(bb.center(), DVec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_padding_grows_each_dimension() {
        let bb = BoundingBox {
            min: DVec3::ZERO,
            max: DVec3::new(2.0, 4.0, 6.0),
        };
        let padded = bb.padded(1.0);
        assert_eq!(padded.dimensions(), DVec3::new(4.0, 6.0, 8.0));
        assert_eq!(padded.min, DVec3::splat(-1.0));
    }

    #[test]
    fn test_corners_and_edges() {
        let bb = BoundingBox {
            min: DVec3::ZERO,
            max: DVec3::new(1.0, 1.0, 1.0),
        };
        let corners = bb.corners();
        assert_eq!(corners[0], DVec3::ZERO);
        assert_eq!(corners[7], DVec3::new(1.0, 1.0, 1.0));

        // Every edge connects corners differing in exactly one coordinate.
        for &(a, b) in &EDGES {
            let d = corners[a] - corners[b];
            let changed = [d.x, d.y, d.z].iter().filter(|c| c.abs() > 0.0).count();
            assert_eq!(changed, 1, "edge ({a}, {b}) is not axis-aligned");
        }
    }

    #[test]
    fn test_empty_rejected() {
        assert!(BoundingBox::from_points(&[]).is_err());
    }

    #[test]
    fn test_non_finite_rejected() {
        let points = vec![DVec3::new(0.0, f64::INFINITY, 0.0)];
        assert!(BoundingBox::from_points(&points).is_err());
    }
}
