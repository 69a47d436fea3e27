//! Surface normal estimation for a wave height field.
//!
//! Normals are derived from the height field on demand rather than
//! stored: the simulation only moves the y component, so the gradient at
//! any sample is fully determined by its neighbors' current heights.

use bevy::math::Vec3;

use crate::field::WaveField;

/// Unit surface normal at grid coordinates `(i, j)`.
///
/// Interior samples use a central height difference along each axis;
/// edge samples fall back to a one-sided difference over a single cell.
/// The y component is pinned to 1 before normalizing, so the result is
/// always unit length and never degenerate.
pub fn vertex_normal(field: &WaveField, i: u32, j: u32) -> Vec3 {
    let rows = field.rows();
    let cols = field.cols();
    let dx = field.config().spatial_step;

    let j_lo = j.saturating_sub(1);
    let j_hi = (j + 1).min(cols - 1);
    let i_lo = i.saturating_sub(1);
    let i_hi = (i + 1).min(rows - 1);

    let slope_x =
        (field.height(i, j_hi) - field.height(i, j_lo)) / ((j_hi - j_lo) as f32 * dx);
    // z shrinks as i grows, so the lower row index sits on the +z side.
    let slope_z =
        (field.height(i_lo, j) - field.height(i_hi, j)) / ((i_hi - i_lo) as f32 * dx);

    Vec3::new(-slope_x, 1.0, -slope_z).normalize_or(Vec3::Y)
}
