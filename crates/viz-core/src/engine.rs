//! The stateful per-frame particle update.
//!
//! The engine owns the current-position buffer and the output instance
//! buffer; both are allocated once at construction and never resized.
//! Each `update` lerps the persistent positions toward the active
//! shape's target cloud, then layers transient effects (audio jitter,
//! swirl, beat scale, hand repulsion) on a working copy before emitting
//! renderer-ready instances. Only the lerp result persists, so the
//! transient effects never compound across frames.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use rand::prelude::*;

use crate::audio::AudioFeatures;
use crate::color;
use crate::constants::*;
use crate::hands::{Hand, HandInteraction};
use crate::shape::{ParticleShape, ShapeCatalog};

/// Construction-time engine configuration.
#[derive(Clone, Debug)]
pub struct EngineParams {
    pub particle_count: usize,
    pub base_color: Vec3,
    pub hot_color: Vec3,
}

impl Default for EngineParams {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            base_color: color::from_hex(DEFAULT_BASE_COLOR_HEX),
            hot_color: color::HOT_PINK,
        }
    }
}

/// Snapshot of the external inputs for one frame. All fields are read
/// as already-available values; the engine never waits on I/O.
#[derive(Clone, Copy, Debug)]
pub struct FrameInput<'a> {
    /// Monotonic seconds since start, from the render clock.
    pub elapsed_seconds: f64,
    /// Shape the swarm is currently morphing toward.
    pub shape: ParticleShape,
    /// Analyser byte magnitudes; empty when no audio source is active.
    pub frequency_bins: &'a [u8],
    /// Up to two tracked hands; extras are ignored.
    pub hands: &'a [Hand],
}

impl Default for FrameInput<'_> {
    fn default() -> Self {
        Self {
            elapsed_seconds: 0.0,
            shape: ParticleShape::Sphere,
            frequency_bins: &[],
            hands: &[],
        }
    }
}

/// One renderer-ready particle, laid out for direct buffer upload.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct ParticleInstance {
    pub position: Vec3,
    pub color: Vec3,
}

/// Output of one engine update, overwritten in full every frame.
#[derive(Clone, Debug, Default)]
pub struct EngineFrame {
    pub instances: Vec<ParticleInstance>,
    /// Whole-mesh Y rotation advance for this frame, in radians.
    pub mesh_rotation_delta: f32,
    /// Accumulated whole-mesh Y rotation, for renderers that let the
    /// engine own orientation.
    pub mesh_rotation_y: f32,
}

pub struct ParticleMorphEngine {
    params: EngineParams,
    shapes: ShapeCatalog,
    current: Vec<Vec3>,
    frame: EngineFrame,
    mesh_rotation_y: f32,
}

impl ParticleMorphEngine {
    pub fn new(params: EngineParams) -> Self {
        let shapes = ShapeCatalog::new(params.particle_count);
        Self::with_catalog(params, shapes)
    }

    /// Build around an existing catalog (tests hand in seeded clouds).
    pub fn with_catalog(params: EngineParams, shapes: ShapeCatalog) -> Self {
        let current = shapes.cloud(ParticleShape::Sphere).to_vec();
        let frame = EngineFrame {
            instances: vec![ParticleInstance::default(); current.len()],
            ..EngineFrame::default()
        };
        log::info!("particle engine ready: {} particles", current.len());
        Self {
            params,
            shapes,
            current,
            frame,
            mesh_rotation_y: 0.0,
        }
    }

    pub fn params(&self) -> &EngineParams {
        &self.params
    }

    /// The persistent per-particle positions (lerp state only; transient
    /// effects are never written back here).
    pub fn positions(&self) -> &[Vec3] {
        &self.current
    }

    pub fn mesh_rotation_y(&self) -> f32 {
        self.mesh_rotation_y
    }

    /// Run one simulation frame and emit the instance buffer.
    pub fn update(&mut self, input: &FrameInput<'_>) -> &EngineFrame {
        let audio = AudioFeatures::analyze(input.frequency_bins);
        let interaction = HandInteraction::resolve(input.hands);
        let closeness = interaction.and_then(|h| h.closeness);

        let speed = audio.morph_speed();
        let beat = audio.beat_scale();
        let jitter = audio.jitter_amplitude();
        // Shared time term of the swirl; the per-particle angle scales
        // with distance from the Y axis.
        let swirl_phase = SWIRL_RADIUS_COEFF
            * (input.elapsed_seconds * SWIRL_TIME_RATE).sin() as f32;

        let target = self.shapes.cloud(input.shape);
        let bins = input.frequency_bins;
        let base = self.params.base_color;
        let hot = self.params.hot_color;
        let mut rng = rand::thread_rng();

        for (i, (cur, out)) in self
            .current
            .iter_mut()
            .zip(self.frame.instances.iter_mut())
            .enumerate()
        {
            // 1. Persistent state: exponential decay toward the target.
            let goal = target.get(i).copied().unwrap_or(*cur);
            *cur += (goal - *cur) * speed;

            // Everything below is transient, applied to a working copy.
            let mut pos = *cur;

            if let Some(amp) = jitter {
                pos.x += (rng.gen::<f32>() - 0.5) * amp;
                pos.y += (rng.gen::<f32>() - 0.5) * amp;
                pos.z += (rng.gen::<f32>() - 0.5) * amp;
            }

            let radius = (pos.x * pos.x + pos.z * pos.z).sqrt();
            let angle = radius * swirl_phase;
            let (sin_a, cos_a) = angle.sin_cos();
            let (px, pz) = (pos.x, pos.z);
            pos.x = px * cos_a - pz * sin_a;
            pos.z = px * sin_a + pz * cos_a;

            pos *= beat;

            if let Some(hit) = interaction {
                pos = repel(pos, hit.center);
            }

            let bin = if bins.is_empty() {
                None
            } else {
                Some(bins[i % bins.len()])
            };
            out.position = pos;
            out.color = color::particle_color(base, hot, bin, closeness);
        }

        let delta = audio.mesh_spin_delta();
        self.mesh_rotation_y += delta;
        self.frame.mesh_rotation_delta = delta;
        self.frame.mesh_rotation_y = self.mesh_rotation_y;
        &self.frame
    }
}

/// Fixed-magnitude push away from the interaction center while inside
/// its radius. A particle sitting exactly on the center has no usable
/// direction and is left alone.
fn repel(pos: Vec3, center: Vec3) -> Vec3 {
    let offset = pos - center;
    let dist = offset.length();
    if dist >= REPEL_RADIUS || dist <= f32::EPSILON {
        return pos;
    }
    pos + offset / dist * REPEL_STEP
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repel_pushes_directly_away() {
        let center = Vec3::new(1.0, 0.0, 0.0);
        let pos = Vec3::new(3.0, 0.0, 0.0);
        let pushed = repel(pos, center);
        assert!((pushed - Vec3::new(3.2, 0.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn repel_ignores_out_of_range_and_coincident_points() {
        let center = Vec3::ZERO;
        let far = Vec3::new(6.0, 0.0, 0.0);
        assert_eq!(repel(far, center), far);
        // Coincident point: no direction, no NaN.
        let pushed = repel(center, center);
        assert_eq!(pushed, center);
        assert!(pushed.is_finite());
    }
}
