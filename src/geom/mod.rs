//! Geometry core: principal axes, rotations, alignment transforms, and
//! bounding boxes over selection coordinates.
//!
//! This module provides:
//! - Principal axes: `axes::principal_axes`, `axes::centroid`
//! - Rotation between directions: `rotation::rotation_between`
//! - Axis alignment: `align::align_axes`
//! - Bounding boxes: `bounds::BoundingBox`

pub mod align;
pub mod axes;
pub mod bounds;
pub mod rotation;
pub mod types;

// Re-export commonly used items at the module level
pub use align::align_axes;
pub use axes::{centroid, principal_axes};
pub use bounds::{BoundingBox, EDGES};
pub use rotation::rotation_between;
pub use types::{AlignTarget, GeomError, PrincipalAxes, TransformSpec};
