//! Selection reporting helpers: residue ranges, disulfide pairing, and
//! color quantization over data fetched from the host.

pub mod colors;
pub mod disulfide;
pub mod ranges;

// Re-export commonly used items
pub use colors::{quantize_colors, quantize_rgb};
pub use disulfide::{disulfide_pairs, leap_bond_commands, CysSulfur};
pub use ranges::{compress_ranges, ResiRange};
