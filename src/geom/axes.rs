//! Principal-axis extraction.
//!
//! Computes the centroid and the three principal axes of a point cloud from
//! the eigendecomposition of its centered second-moment matrix.

use glam::DVec3;

use super::types::{GeomError, PrincipalAxes};

/// Compute centroid of a point set.
pub fn centroid(points: &[DVec3]) -> DVec3 {
    if points.is_empty() {
        return DVec3::ZERO;
    }
    let sum: DVec3 = points.iter().copied().sum();
    sum / points.len() as f64
}

/// Compute the principal axes and centroid of a point cloud.
///
/// Axes are returned ordered by decreasing spread (axis 1 = direction of
/// largest variance). With repeated eigenvalues the assignment among the
/// tied directions is arbitrary but stays orthonormal.
pub fn principal_axes(points: &[DVec3]) -> Result<PrincipalAxes, GeomError> {
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

    let cog = centroid(points);

    // Second-moment matrix of the centered cloud: sum of outer products.
    let mut moment = [[0.0f64; 3]; 3];
    for p in points {
        let d = *p - cog;
        let d = [d.x, d.y, d.z];
        for i in 0..3 {
            for j in 0..3 {
                moment[i][j] += d[i] * d[j];
            }
        }
    }

    let (eigenvalues, v) = jacobi_eigendecomposition(moment);

    // Sort eigenpairs by decreasing eigenvalue; rank 1 = largest spread.
    let mut order = [0usize, 1, 2];
    order.sort_by(|&a, &b| eigenvalues[b].total_cmp(&eigenvalues[a]));

    let mut axes = [DVec3::ZERO; 3];
    let mut spreads = [0.0f64; 3];
    for (rank, &col) in order.iter().enumerate() {
        let axis = DVec3::new(v[0][col], v[1][col], v[2][col]);
        axes[rank] = axis.normalize();
        spreads[rank] = eigenvalues[col].max(0.0);
    }

    Ok(PrincipalAxes {
        axes,
        spreads,
        centroid: cog,
    })
}

/// Jacobi eigendecomposition of a symmetric 3x3 matrix.
/// Returns (eigenvalues, eigenvector matrix) with eigenvectors as columns.
fn jacobi_eigendecomposition(mut a: [[f64; 3]; 3]) -> ([f64; 3], [[f64; 3]; 3]) {
    let mut v = [[0.0f64; 3]; 3];
    for i in 0..3 {
        v[i][i] = 1.0;
    }

    const MAX_ITER: usize = 64;
    for _ in 0..MAX_ITER {
        // Largest off-diagonal element picks the rotation plane.
        let mut max_val = 0.0f64;
        let mut p = 0;
        let mut q = 1;
        for i in 0..3 {
            for j in (i + 1)..3 {
                if a[i][j].abs() > max_val {
                    max_val = a[i][j].abs();
                    p = i;
                    q = j;
                }
            }
        }

        if max_val < 1e-12 {
            break;
        }

        let diff = a[q][q] - a[p][p];
        let theta = if diff.abs() < 1e-12 {
            std::f64::consts::FRAC_PI_4
        } else {
            0.5 * (2.0 * a[p][q] / diff).atan()
        };

        let c = theta.cos();
        let s = theta.sin();

        let mut new_a = a;
        new_a[p][p] = c * c * a[p][p] - 2.0 * s * c * a[p][q] + s * s * a[q][q];
        new_a[q][q] = s * s * a[p][p] + 2.0 * s * c * a[p][q] + c * c * a[q][q];
        new_a[p][q] = 0.0;
        new_a[q][p] = 0.0;

        for i in 0..3 {
            if i != p && i != q {
                new_a[i][p] = c * a[i][p] - s * a[i][q];
                new_a[p][i] = new_a[i][p];
                new_a[i][q] = s * a[i][p] + c * a[i][q];
                new_a[q][i] = new_a[i][q];
            }
        }
        a = new_a;

        for i in 0..3 {
            let vip = v[i][p];
            let viq = v[i][q];
            v[i][p] = c * vip - s * viq;
            v[i][q] = s * vip + c * viq;
        }
    }

    ([a[0][0], a[1][1], a[2][2]], v)
}
