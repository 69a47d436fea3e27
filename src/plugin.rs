//! Bevy plugin that drives a wave surface each frame.
//!
//! The plugin owns the [`WaveField`] as a resource, feeds it the frame
//! delta every `Update`, and periodically drops a random ripple onto the
//! surface so an otherwise idle body of water stays alive. Rendering is
//! left to the consumer: read [`RippleSurface`] after the step systems
//! and repack positions/normals however the target pipeline wants them.

use bevy::prelude::*;
use bevy_ecs::resource::Resource;
use rand::{thread_rng, Rng};

use crate::config::WaveFieldConfig;
use crate::field::WaveField;

/// Seconds between automatically spawned ripples.
pub const RIPPLE_INTERVAL: f32 = 0.25;

/// Automatic ripples keep at least this many cells between their center
/// and the grid edge.
pub const RIPPLE_MARGIN: u32 = 5;

/// Smallest magnitude for an automatic ripple.
pub const RIPPLE_MIN_MAGNITUDE: f32 = 1.0;

/// Largest magnitude for an automatic ripple (exclusive).
pub const RIPPLE_MAX_MAGNITUDE: f32 = 2.0;

/// The simulated surface driven by [`WaveSurfacePlugin`].
#[derive(Resource)]
pub struct RippleSurface {
    pub field: WaveField,
}

/// Accumulates frame time between automatic ripples.
#[derive(Resource, Default)]
struct RippleClock {
    elapsed: f32,
}

/// Plugin that adds an animated wave surface to the app.
///
/// This plugin:
/// - Inserts a [`RippleSurface`] built from the given config
/// - Spawns a random ripple every [`RIPPLE_INTERVAL`] seconds
/// - Steps the simulation with the frame delta each `Update`
pub struct WaveSurfacePlugin {
    pub config: WaveFieldConfig,
}

impl Default for WaveSurfacePlugin {
    fn default() -> Self {
        Self {
            config: WaveFieldConfig::default(),
        }
    }
}

impl Plugin for WaveSurfacePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(RippleSurface {
            field: WaveField::new(&self.config),
        })
        .init_resource::<RippleClock>()
        .add_systems(Update, (spawn_ripples, step_wave_surface).chain());
    }
}

/// System that advances the wave simulation.
///
/// The field converts the frame delta into fixed-size solver steps
/// internally, so this runs in `Update` rather than `FixedUpdate`.
fn step_wave_surface(mut surface: ResMut<RippleSurface>, time: Res<Time>) {
    surface.field.update(time.delta_secs());
}

/// System that injects a random disturbance every quarter second.
fn spawn_ripples(
    mut surface: ResMut<RippleSurface>,
    mut clock: ResMut<RippleClock>,
    time: Res<Time>,
) {
    let field = &mut surface.field;
    if field.rows() <= 2 * RIPPLE_MARGIN || field.cols() <= 2 * RIPPLE_MARGIN {
        // Grid too small to keep ripples away from the edge.
        return;
    }

    clock.elapsed += time.delta_secs();
    while clock.elapsed >= RIPPLE_INTERVAL {
        clock.elapsed -= RIPPLE_INTERVAL;

        let mut rng = thread_rng();
        let i = rng.gen_range(RIPPLE_MARGIN..field.rows() - RIPPLE_MARGIN);
        let j = rng.gen_range(RIPPLE_MARGIN..field.cols() - RIPPLE_MARGIN);
        let magnitude = rng.gen_range(RIPPLE_MIN_MAGNITUDE..RIPPLE_MAX_MAGNITUDE);

        field.disturb(i, j, magnitude);
    }
}
