//! Interactive wave height-field simulation over a fixed grid.
//!
//! The crate simulates a rippling water surface as a discrete damped
//! wave equation: a `rows x cols` grid of sample points whose heights
//! evolve under a finite-difference stencil, with runtime impulses
//! ("raindrops") injected straight into the solution. Positions,
//! normals, and triangle topology are exposed for rendering; the crate
//! itself never touches a GPU.
//!
//! ## Architecture
//!
//! ```text
//! WaveFieldConfig ──> WaveField ──> SurfaceMesh
//!   (parameters,       (two swapped    (positions + normals
//!    presets,           solution        refreshed per frame,
//!    RON files)         buffers)        fixed index list)
//!                          ▲
//!                WaveSurfacePlugin
//!             (per-frame stepping and
//!              periodic random ripples)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use ripplegrid::{SurfaceMesh, WaveField, WaveFieldConfig};
//!
//! let mut field = WaveField::new(&WaveFieldConfig::default());
//! field.disturb(100, 100, 1.5);
//! field.update(1.0 / 60.0);
//!
//! let mut mesh = SurfaceMesh::from_field(&field);
//! // ...each frame: field.update(dt); mesh.refresh(&field);
//! ```

pub mod config;
pub mod field;
pub mod mesh;
pub mod normal;
pub mod plugin;

pub use config::{SurfacePreset, WaveFieldConfig};
pub use field::WaveField;
pub use mesh::SurfaceMesh;
pub use plugin::{RippleSurface, WaveSurfacePlugin};
