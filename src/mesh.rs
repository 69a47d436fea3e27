//! CPU-side mesh data for a wave surface.
//!
//! The index topology of the surface never changes, so it is built once;
//! positions and normals are rewritten from the field every frame into
//! long-lived buffers, ready to be copied into a dynamic vertex buffer
//! by whatever renderer consumes them.

use bevy::math::Vec3;

use crate::field::WaveField;
use crate::normal;

/// Triangle-list indices for a `rows x cols` grid, two triangles per
/// quad:
///
/// ```text
/// i*n+j ---- i*n+j+1
///   |  \        |
///   |    \      |
/// (i+1)*n+j - (i+1)*n+j+1
/// ```
pub fn grid_indices(rows: u32, cols: u32) -> Vec<u32> {
    assert!(rows >= 2 && cols >= 2, "grid must be at least 2x2, got {rows}x{cols}");

    let mut indices = Vec::with_capacity(6 * (rows - 1) as usize * (cols - 1) as usize);
    for i in 0..rows - 1 {
        for j in 0..cols - 1 {
            indices.push(i * cols + j);
            indices.push(i * cols + j + 1);
            indices.push((i + 1) * cols + j);

            indices.push((i + 1) * cols + j);
            indices.push(i * cols + j + 1);
            indices.push((i + 1) * cols + j + 1);
        }
    }

    indices
}

/// Vertex and index data mirroring a [`WaveField`].
///
/// `indices` is fixed for the life of the mesh; `positions` and
/// `normals` are refreshed from the field without reallocating.
#[derive(Debug, Clone)]
pub struct SurfaceMesh {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub indices: Vec<u32>,
}

impl SurfaceMesh {
    /// Build mesh data for the field's current state.
    pub fn from_field(field: &WaveField) -> Self {
        let count = field.vertex_count() as usize;
        let mut mesh = Self {
            positions: vec![Vec3::ZERO; count],
            normals: vec![Vec3::Y; count],
            indices: grid_indices(field.rows(), field.cols()),
        };
        mesh.refresh(field);
        mesh
    }

    /// Re-read positions and normals from the field in place.
    ///
    /// The mesh must have been built from a field with the same grid
    /// dimensions.
    pub fn refresh(&mut self, field: &WaveField) {
        debug_assert_eq!(self.positions.len(), field.vertex_count() as usize);

        self.positions.copy_from_slice(field.positions());

        let cols = field.cols();
        for i in 0..field.rows() {
            for j in 0..cols {
                self.normals[(i * cols + j) as usize] = normal::vertex_normal(field, i, j);
            }
        }
    }

    /// Number of triangles described by the index list.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}
