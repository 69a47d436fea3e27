//! Wave surface configuration shared between simulation and rendering.
//!
//! All grid and physics parameters live in [`WaveFieldConfig`], which is
//! serializable so a surface definition can be stored in a world save or
//! synced between processes. The finite-difference integrator never reads
//! these values directly at step time; it precomputes
//! [`StencilCoefficients`] once and runs off those.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use bevy_log::info;

/// Upper bound on the squared Courant number `e` below which the explicit
/// scheme is well behaved. At `e = 0.5` the center weight `k2` reaches
/// zero; past it the stencil amplifies high-frequency modes and the
/// surface diverges.
pub const STABILITY_LIMIT: f32 = 0.5;

/// Grid and physics parameters for a wave surface.
///
/// The grid is `rows * cols` sample points spaced `spatial_step` world
/// units apart. The solver advances in fixed increments of `time_step`
/// simulated seconds regardless of frame rate; `speed` is the wave
/// propagation speed and `damping` controls how quickly ripples die out.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveFieldConfig {
    /// Number of sample points along the depth (z) axis.
    pub rows: u32,
    /// Number of sample points along the width (x) axis.
    pub cols: u32,
    /// Distance between adjacent sample points (world units).
    pub spatial_step: f32,
    /// Simulated seconds consumed per discrete solver step.
    pub time_step: f32,
    /// Wave propagation speed (world units per second).
    pub speed: f32,
    /// Damping coefficient, >= 0. Zero means ripples never decay.
    pub damping: f32,
}

impl Default for WaveFieldConfig {
    fn default() -> Self {
        Self {
            rows: 200,
            cols: 200,
            spatial_step: 0.8,
            time_step: 0.03,
            speed: 3.25,
            damping: 0.4,
        }
    }
}

impl WaveFieldConfig {
    /// Panics if any parameter is outside its valid range.
    ///
    /// Invalid parameters are caller bugs, not runtime conditions, so
    /// there is no `Result` path here.
    pub fn validate(&self) {
        assert!(
            self.rows >= 2 && self.cols >= 2,
            "wave grid needs at least 2x2 samples, got {}x{}",
            self.rows,
            self.cols
        );
        assert!(
            self.spatial_step > 0.0,
            "spatial step must be positive, got {}",
            self.spatial_step
        );
        assert!(
            self.time_step > 0.0,
            "time step must be positive, got {}",
            self.time_step
        );
        assert!(self.speed > 0.0, "wave speed must be positive, got {}", self.speed);
        assert!(
            self.damping >= 0.0,
            "damping must be non-negative, got {}",
            self.damping
        );
    }

    /// Precompute the integration weights for these parameters.
    pub fn coefficients(&self) -> StencilCoefficients {
        let d = self.damping * self.time_step + 2.0;
        let e = (self.speed * self.speed) * (self.time_step * self.time_step)
            / (self.spatial_step * self.spatial_step);

        StencilCoefficients {
            k1: (self.damping * self.time_step - 2.0) / d,
            k2: (4.0 - 8.0 * e) / d,
            k3: (2.0 * e) / d,
            e,
        }
    }

    /// Whether the time step is small enough for the explicit scheme to
    /// stay bounded. Instability is a tuning problem rather than a
    /// contract violation, so this is a query, not an assertion.
    pub fn is_stable(&self) -> bool {
        self.coefficients().e <= STABILITY_LIMIT
    }

    /// Largest `time_step` that keeps these parameters inside
    /// [`STABILITY_LIMIT`].
    pub fn max_stable_time_step(&self) -> f32 {
        self.spatial_step / self.speed * STABILITY_LIMIT.sqrt()
    }

    /// Total width of the surface along x: `(cols - 1) * spatial_step`.
    #[inline]
    pub fn width(&self) -> f32 {
        (self.cols - 1) as f32 * self.spatial_step
    }

    /// Total depth of the surface along z: `(rows - 1) * spatial_step`.
    #[inline]
    pub fn depth(&self) -> f32 {
        (self.rows - 1) as f32 * self.spatial_step
    }
}

/// Integration weights derived from a [`WaveFieldConfig`].
///
/// Each discrete step computes
/// `next = k1 * prev + k2 * curr + k3 * (sum of 4 neighbors)`.
/// `e` is the squared Courant number, kept around for stability
/// diagnostics.
#[derive(Debug, Clone, Copy)]
pub struct StencilCoefficients {
    pub k1: f32,
    pub k2: f32,
    pub k3: f32,
    pub e: f32,
}

/// Preset surface characters for common water bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SurfacePreset {
    /// Small, heavily damped surface. Ripples die out within seconds.
    Pond,
    /// Gentle propagation with light damping; ripples linger and reflect.
    Lake,
    /// Fast, moderately damped waves.
    #[default]
    Ocean,
}

impl SurfacePreset {
    /// Build a config for this preset at the given grid resolution.
    pub fn to_config(self, rows: u32, cols: u32) -> WaveFieldConfig {
        match self {
            SurfacePreset::Pond => WaveFieldConfig {
                rows,
                cols,
                spatial_step: 0.5,
                time_step: 0.03,
                speed: 2.0,
                damping: 1.2,
            },
            SurfacePreset::Lake => WaveFieldConfig {
                rows,
                cols,
                spatial_step: 0.8,
                time_step: 0.03,
                speed: 2.5,
                damping: 0.2,
            },
            SurfacePreset::Ocean => WaveFieldConfig {
                rows,
                cols,
                ..WaveFieldConfig::default()
            },
        }
    }
}

/// Load a surface config from a RON file.
pub fn load_config(path: impl AsRef<Path>) -> Result<WaveFieldConfig, Box<dyn Error>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let config: WaveFieldConfig = ron::de::from_str(&contents)?;

    info!("Loaded wave surface config from {}", path.display());

    Ok(config)
}

/// Save a surface config as pretty-printed RON.
pub fn save_config(config: &WaveFieldConfig, path: impl AsRef<Path>) -> Result<(), Box<dyn Error>> {
    let path = path.as_ref();
    let pretty_config = ron::ser::PrettyConfig::new().with_separate_tuple_members(true);

    let serialized = ron::ser::to_string_pretty(config, pretty_config)?;
    let mut file = File::create(path)?;
    file.write_all(serialized.as_bytes())?;

    info!("Saved wave surface config to {}", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coefficient_formula() {
        let config = WaveFieldConfig {
            rows: 8,
            cols: 8,
            spatial_step: 1.0,
            time_step: 0.5,
            speed: 1.0,
            damping: 2.0,
        };
        let coeffs = config.coefficients();

        // d = 3, e = 0.25 by hand.
        assert!((coeffs.e - 0.25).abs() < 1e-6);
        assert!((coeffs.k1 - (-1.0 / 3.0)).abs() < 1e-6);
        assert!((coeffs.k2 - (2.0 / 3.0)).abs() < 1e-6);
        assert!((coeffs.k3 - (1.0 / 6.0)).abs() < 1e-6);
    }

    #[test]
    fn test_default_config_is_stable() {
        let config = WaveFieldConfig::default();
        assert!(config.is_stable(), "default parameters must be usable as-is");
        assert!(config.coefficients().e < 0.1);
    }

    #[test]
    fn test_presets_are_stable() {
        for preset in [SurfacePreset::Pond, SurfacePreset::Lake, SurfacePreset::Ocean] {
            let config = preset.to_config(64, 64);
            config.validate();
            assert!(config.is_stable(), "{preset:?} preset must be stable");
        }
    }

    #[test]
    fn test_stability_boundary() {
        let mut config = WaveFieldConfig {
            speed: 100.0,
            ..WaveFieldConfig::default()
        };
        assert!(!config.is_stable(), "absurd propagation speed must trip the check");

        config.time_step = config.max_stable_time_step() * 0.99;
        assert!(config.is_stable());
        config.time_step = config.max_stable_time_step() * 1.01;
        assert!(!config.is_stable());
    }

    #[test]
    fn test_dimensions() {
        let config = WaveFieldConfig {
            rows: 4,
            cols: 3,
            spatial_step: 2.0,
            ..WaveFieldConfig::default()
        };
        assert_eq!(config.width(), 4.0);
        assert_eq!(config.depth(), 6.0);
    }

    #[test]
    #[should_panic(expected = "at least 2x2")]
    fn test_validate_rejects_degenerate_grid() {
        WaveFieldConfig {
            rows: 1,
            ..WaveFieldConfig::default()
        }
        .validate();
    }

    #[test]
    #[should_panic(expected = "spatial step")]
    fn test_validate_rejects_zero_spacing() {
        WaveFieldConfig {
            spatial_step: 0.0,
            ..WaveFieldConfig::default()
        }
        .validate();
    }

    #[test]
    #[should_panic(expected = "damping")]
    fn test_validate_rejects_negative_damping() {
        WaveFieldConfig {
            damping: -0.1,
            ..WaveFieldConfig::default()
        }
        .validate();
    }

    #[test]
    fn test_ron_round_trip() {
        let config = SurfacePreset::Lake.to_config(48, 96);
        let path = std::env::temp_dir().join("ripplegrid_config_round_trip.ron");

        save_config(&config, &path).expect("save should succeed");
        let loaded = load_config(&path).expect("load should succeed");
        let _ = fs::remove_file(&path);

        assert_eq!(config, loaded);
    }
}
