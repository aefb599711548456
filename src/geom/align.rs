//! Axis alignment: compose a selection transform from principal axes.

use glam::DVec3;

use super::axes::principal_axes;
use super::rotation::rotation_between;
use super::types::{AlignTarget, GeomError, TransformSpec};

/// Build the transform that rotates a point cloud's principal axis of the
/// given rank (1 = largest spread) onto `target`, optionally translating the
/// cloud's centroid to the origin.
///
/// The returned [`TransformSpec`] is not applied here; the caller hands it to
/// the host's transform primitive or uses [`TransformSpec::apply`] on a
/// (possibly different) point set.
pub fn align_axes(
    points: &[DVec3],
    rank: usize,
    target: AlignTarget,
    translate_to_origin: bool,
) -> Result<TransformSpec, GeomError> {
    let axes = principal_axes(points)?;
    let source = axes.axis(rank)?;
    let rotation = rotation_between(source, target.direction()?)?;

    let translation = if translate_to_origin {
        -axes.centroid
    } else {
        DVec3::ZERO
    };

    Ok(TransformSpec {
        rotation,
        translation,
    })
}
