//! Selection-geometry utilities for a molecular viewer.
//!
//! Pure, stateless computations over selection data fetched from the host:
//! - Principal axes and centroid of a coordinate set, and the rotation that
//!   aligns a chosen axis to a coordinate axis or explicit vector
//! - Axis-aligned bounding boxes
//! - Residue-range compression for selection expressions
//! - Disulfide pairing and LEaP `bond` command formatting
//! - RGB quantization for color reports
//!
//! Fetching coordinates and applying the resulting transforms are host
//! concerns and stay outside this crate.

pub mod geom;
pub mod select;

pub use geom::{
    align_axes, centroid, principal_axes, rotation_between, AlignTarget, BoundingBox, GeomError,
    PrincipalAxes, TransformSpec,
};
pub use select::{compress_ranges, disulfide_pairs, leap_bond_commands, CysSulfur, ResiRange};
