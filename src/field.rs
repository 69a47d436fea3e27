//! Finite-difference wave height field.
//!
//! [`WaveField`] maintains a fixed grid of sample points whose heights
//! evolve under the damped 2D wave equation. The integrator is an
//! explicit leapfrog stencil: producing the next solution needs the two
//! previous ones, so the field owns exactly two buffers and swaps their
//! roles after every step instead of copying.
//!
//! ## Design principles
//! - Grid topology (counts and the x/z coordinate of every sample) is
//!   fixed at construction and never changes.
//! - Simulation advances in fixed `time_step` increments; callers feed in
//!   frame deltas of any size and the field converts them into zero or
//!   more discrete steps, carrying the remainder.
//! - The outermost ring of samples is never written by the stencil, so
//!   the surface edge stays pinned at its initial height.
//! - External impulses ([`WaveField::disturb`]) write straight into the
//!   current solution, bypassing the stencil.

use bevy::math::Vec3;
use bevy_log::{info, warn};

use crate::config::{StencilCoefficients, WaveFieldConfig};
use crate::normal;

/// A simulated water surface over a fixed grid.
///
/// Slices returned by [`positions`](Self::positions) borrow the current
/// solution buffer; the next [`update`](Self::update) swaps buffers, so
/// treat every view as stale once the simulation advances.
pub struct WaveField {
    config: WaveFieldConfig,
    coeffs: StencilCoefficients,
    /// Simulated seconds received but not yet consumed by a full step.
    accumulated: f32,
    /// Solution from two steps ago; scratch target for the next step.
    prev: Vec<Vec3>,
    /// Current solution, the publicly visible surface.
    curr: Vec<Vec3>,
}

impl WaveField {
    /// Build a flat surface from the given parameters.
    ///
    /// Panics if the config violates its parameter ranges. Assigning a
    /// freshly constructed field over an old one is the supported way to
    /// reset a surface.
    pub fn new(config: &WaveFieldConfig) -> Self {
        config.validate();

        let coeffs = config.coefficients();
        if !config.is_stable() {
            warn!(
                "wave surface parameters are unstable (e = {:.3}); \
                 largest stable time step is {:.4}",
                coeffs.e,
                config.max_stable_time_step()
            );
        }

        let rows = config.rows as usize;
        let cols = config.cols as usize;
        let dx = config.spatial_step;

        let mut points = vec![Vec3::ZERO; rows * cols];
        for i in 0..rows {
            for j in 0..cols {
                points[i * cols + j] = Vec3::new(
                    (j as f32 - 0.5 * cols as f32) * dx,
                    0.0,
                    (0.5 * rows as f32 - i as f32) * dx,
                );
            }
        }

        info!(
            "wave surface initialized: {}x{} samples, {:.1}x{:.1} world units",
            config.rows,
            config.cols,
            config.width(),
            config.depth()
        );

        Self {
            config: *config,
            coeffs,
            accumulated: 0.0,
            prev: points.clone(),
            curr: points,
        }
    }

    /// Advance the simulation by `delta_time` simulated seconds.
    ///
    /// Time is accumulated against the configured step size: a large
    /// delta runs several discrete steps, a small one may run none, and
    /// any remainder carries over to the next call. This keeps the
    /// solution independent of frame rate.
    pub fn update(&mut self, delta_time: f32) {
        self.accumulated += delta_time;

        while self.accumulated >= self.config.time_step {
            self.accumulated -= self.config.time_step;
            self.step();
        }
    }

    /// One discrete integration step over the interior samples.
    fn step(&mut self) {
        let rows = self.config.rows as usize;
        let cols = self.config.cols as usize;
        let StencilCoefficients { k1, k2, k3, .. } = self.coeffs;

        // The previous solution is overwritten in place; after the loop
        // it becomes the new current one. Only the y component moves.
        for i in 1..rows - 1 {
            for j in 1..cols - 1 {
                let idx = i * cols + j;
                self.prev[idx].y = k1 * self.prev[idx].y
                    + k2 * self.curr[idx].y
                    + k3 * (self.curr[idx + cols].y
                        + self.curr[idx - cols].y
                        + self.curr[idx + 1].y
                        + self.curr[idx - 1].y);
            }
        }

        std::mem::swap(&mut self.prev, &mut self.curr);
    }

    /// Apply an immediate impulse centered on sample `(i, j)`.
    ///
    /// Half the magnitude lands on the center, a quarter on each of the
    /// 4 direct neighbors. The splash must fit inside the interior, so
    /// both indices are required to stay at least 2 cells from the edge.
    pub fn disturb(&mut self, i: u32, j: u32, magnitude: f32) {
        assert!(
            i >= 2 && i + 2 < self.config.rows,
            "disturbance row {i} too close to the edge of {} rows",
            self.config.rows
        );
        assert!(
            j >= 2 && j + 2 < self.config.cols,
            "disturbance column {j} too close to the edge of {} columns",
            self.config.cols
        );

        let cols = self.config.cols as usize;
        let idx = i as usize * cols + j as usize;

        self.curr[idx].y += 0.5 * magnitude;
        self.curr[idx + 1].y += 0.25 * magnitude;
        self.curr[idx - 1].y += 0.25 * magnitude;
        self.curr[idx + cols].y += 0.25 * magnitude;
        self.curr[idx - cols].y += 0.25 * magnitude;
    }

    /// Parameters this field was built with.
    pub fn config(&self) -> &WaveFieldConfig {
        &self.config
    }

    /// Number of sample points along the depth axis.
    #[inline]
    pub fn rows(&self) -> u32 {
        self.config.rows
    }

    /// Number of sample points along the width axis.
    #[inline]
    pub fn cols(&self) -> u32 {
        self.config.cols
    }

    /// Total number of sample points.
    #[inline]
    pub fn vertex_count(&self) -> u32 {
        self.config.rows * self.config.cols
    }

    /// Number of triangles in the surface mesh (two per grid quad).
    #[inline]
    pub fn triangle_count(&self) -> u32 {
        2 * (self.config.rows - 1) * (self.config.cols - 1)
    }

    /// Surface extent along x, in world units.
    #[inline]
    pub fn width(&self) -> f32 {
        self.config.width()
    }

    /// Surface extent along z, in world units.
    #[inline]
    pub fn depth(&self) -> f32 {
        self.config.depth()
    }

    /// The current solution, row-major (`index = i * cols + j`).
    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        &self.curr
    }

    /// Sample position at a linear index.
    #[inline]
    pub fn position(&self, index: usize) -> Vec3 {
        self.curr[index]
    }

    /// Simulated height at grid coordinates `(i, j)`.
    #[inline]
    pub fn height(&self, i: u32, j: u32) -> f32 {
        self.curr[self.index(i, j)].y
    }

    /// Unit surface normal at grid coordinates `(i, j)`.
    pub fn normal(&self, i: u32, j: u32) -> Vec3 {
        // Bounds check up front; the estimator clamps neighbor lookups.
        let _ = self.index(i, j);
        normal::vertex_normal(self, i, j)
    }

    /// Sum of squared heights over the whole surface.
    ///
    /// Not a physical energy, but with damping enabled it trends to zero
    /// when no new disturbances arrive, which makes it a useful settle
    /// measure.
    pub fn energy(&self) -> f32 {
        self.curr.iter().map(|p| p.y * p.y).sum()
    }

    #[inline]
    fn index(&self, i: u32, j: u32) -> usize {
        assert!(
            i < self.config.rows && j < self.config.cols,
            "sample ({i}, {j}) outside {}x{} grid",
            self.config.rows,
            self.config.cols
        );
        (i * self.config.cols + j) as usize
    }
}
