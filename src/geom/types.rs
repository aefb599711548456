//! Core data structures for selection geometry.

use std::str::FromStr;

use glam::{DMat3, DVec3};
use thiserror::Error;

/// Errors that can occur during geometry operations.
#[derive(Error, Debug)]
pub enum GeomError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Degenerate vector: {0}")]
    DegenerateVector(String),
}

/// Principal axes of a point cloud together with its centroid.
///
/// Axes are unit length, mutually orthogonal, and ordered by decreasing
/// spread: `axes[0]` is the direction of largest variance, `axes[2]` the
/// smallest. `spreads` holds the matching eigenvalues of the second-moment
/// matrix in the same order.
///
/// When two or more eigenvalues coincide (spherical or cylindrical point
/// distributions) the assignment among the tied directions is arbitrary;
/// the axes are still orthonormal.
#[derive(Debug, Clone)]
pub struct PrincipalAxes {
    pub axes: [DVec3; 3],
    pub spreads: [f64; 3],
    pub centroid: DVec3,
}

impl PrincipalAxes {
    /// Axis by principal rank: 1 = largest spread, 3 = smallest.
    pub fn axis(&self, rank: usize) -> Result<DVec3, GeomError> {
        match rank {
            1..=3 => Ok(self.axes[rank - 1]),
            _ => Err(GeomError::InvalidInput(format!(
                "principal axis rank must be 1, 2 or 3, got {rank}"
            ))),
        }
    }
}

/// Target direction for axis alignment: a coordinate axis or an explicit
/// vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AlignTarget {
    X,
    Y,
    Z,
    Vector(DVec3),
}

impl AlignTarget {
    /// Resolve to a concrete direction vector.
    ///
    /// An explicit vector must be finite and non-zero.
    pub fn direction(&self) -> Result<DVec3, GeomError> {
        match *self {
            AlignTarget::X => Ok(DVec3::X),
            AlignTarget::Y => Ok(DVec3::Y),
            AlignTarget::Z => Ok(DVec3::Z),
            AlignTarget::Vector(v) => {
                if !v.is_finite() {
                    return Err(GeomError::InvalidInput(format!(
                        "target vector has non-finite components: {v:?}"
                    )));
                }
                if v == DVec3::ZERO {
                    return Err(GeomError::DegenerateVector(
                        "target vector has zero magnitude".to_string(),
                    ));
                }
                Ok(v)
            }
        }
    }
}

impl FromStr for AlignTarget {
    type Err = GeomError;

    /// Parse an axis name (`"x"`, `"y"`, `"z"`) or a comma-separated vector,
    /// optionally bracketed (`"[0.7, 0.3, 1.35]"`).
    fn from_str(s: &str) -> Result<Self, GeomError> {
        match s.trim() {
            "x" | "X" => return Ok(AlignTarget::X),
            "y" | "Y" => return Ok(AlignTarget::Y),
            "z" | "Z" => return Ok(AlignTarget::Z),
            _ => {}
        }

        let inner = s.trim().trim_start_matches('[').trim_end_matches(']');
        let components: Vec<f64> = inner
            .split(',')
            .map(|part| {
                part.trim().parse::<f64>().map_err(|_| {
                    GeomError::InvalidInput(format!("cannot parse vector component {:?}", part.trim()))
                })
            })
            .collect::<Result<_, _>>()?;

        if components.len() != 3 {
            return Err(GeomError::InvalidInput(format!(
                "vector must have exactly 3 components, got {}",
                components.len()
            )));
        }
        let v = DVec3::new(components[0], components[1], components[2]);
        if !v.is_finite() {
            return Err(GeomError::InvalidInput(format!(
                "vector components must be finite: {s:?}"
            )));
        }
        Ok(AlignTarget::Vector(v))
    }
}

/// An affine transform produced by axis alignment: rotation plus an optional
/// translation (the negated centroid, or zero).
#[derive(Debug, Clone, Copy)]
pub struct TransformSpec {
    pub rotation: DMat3,
    pub translation: DVec3,
}

impl TransformSpec {
    /// Apply the transform to a point: `R * p + t`.
    pub fn apply(&self, point: DVec3) -> DVec3 {
        self.rotation * point + self.translation
    }

    /// Flatten to the viewer's row-major 4x4 layout: three rotation rows each
    /// padded with a trailing zero, then the translation row `[tx, ty, tz, 0]`.
    pub fn to_row_major(&self) -> [f64; 16] {
        let r = self.rotation;
        let t = self.translation;
        [
            r.x_axis.x, r.y_axis.x, r.z_axis.x, 0.0,
            r.x_axis.y, r.y_axis.y, r.z_axis.y, 0.0,
            r.x_axis.z, r.y_axis.z, r.z_axis.z, 0.0,
            t.x, t.y, t.z, 0.0,
        ]
    }
}
