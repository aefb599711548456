//! RGB quantization for reporting atom colors.
//!
//! The host stores colors as unit-interval float tuples; reports use the
//! familiar 0-255 integer channels.

/// Quantize one unit-interval RGB tuple to 0-255 channels, clamped.
pub fn quantize_rgb(rgb: (f64, f64, f64)) -> [u8; 3] {
    [channel(rgb.0), channel(rgb.1), channel(rgb.2)]
}

/// Quantize a selection's per-atom color tuples.
pub fn quantize_colors(colors: &[(f64, f64, f64)]) -> Vec<[u8; 3]> {
    colors.iter().map(|&c| quantize_rgb(c)).collect()
}

fn channel(c: f64) -> u8 {
    (c * 255.0).round().clamp(0.0, 255.0) as u8
}
