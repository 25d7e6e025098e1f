//! Procedural target point clouds for each morph shape.
//!
//! Generation is randomized (no seed contract) but reproduces the same
//! statistical distribution on every call. Clouds are generated once per
//! particle count and cached in a [`ShapeCatalog`]; the morph engine reads
//! them immutably for the rest of its lifetime.

use std::f32::consts::{PI, TAU};

use fnv::FnvHashMap;
use glam::{Quat, Vec3};
use rand::prelude::*;

use crate::constants::*;

/// The closed set of shapes the swarm can morph between.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParticleShape {
    Sphere,
    Heart,
    Tree,
    Saturn,
    Dna,
}

impl ParticleShape {
    pub const ALL: [ParticleShape; 5] = [
        ParticleShape::Sphere,
        ParticleShape::Heart,
        ParticleShape::Tree,
        ParticleShape::Saturn,
        ParticleShape::Dna,
    ];
}

/// Uniform-on-sphere sample at the given radius.
fn sphere_point(rng: &mut impl Rng, radius: f32) -> Vec3 {
    let theta = rng.gen::<f32>() * TAU;
    let phi = rng.gen_range(-1.0_f32..=1.0).acos();
    Vec3::new(
        radius * phi.sin() * theta.cos(),
        radius * phi.sin() * theta.sin(),
        radius * phi.cos(),
    )
}

fn heart_point(rng: &mut impl Rng) -> Vec3 {
    let t = rng.gen::<f32>() * TAU;
    let x = 16.0 * t.sin().powi(3);
    let y = 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();
    let z = rng.gen_range(-HEART_DEPTH..HEART_DEPTH);
    Vec3::new(x, y, z) * HEART_SCALE
}

fn tree_point(rng: &mut impl Rng) -> Vec3 {
    let half = TREE_HEIGHT / 2.0;
    let y = rng.gen_range(-half..half);
    let radius = (half - y) * TREE_TAPER; // wide at the base, a point at the tip
    let angle = rng.gen::<f32>() * TAU;
    Vec3::new(angle.cos() * radius, y, angle.sin() * radius)
}

fn saturn_point(rng: &mut impl Rng) -> Vec3 {
    if rng.gen::<f32>() < SATURN_RING_FRACTION {
        let angle = rng.gen::<f32>() * TAU;
        let dist = rng.gen_range(SATURN_RING_INNER..SATURN_RING_OUTER);
        let y = rng.gen_range(-SATURN_RING_HALF_THICKNESS..SATURN_RING_HALF_THICKNESS);
        let flat = Vec3::new(angle.cos() * dist, y, angle.sin() * dist);
        Quat::from_rotation_x(SATURN_RING_TILT) * flat
    } else {
        sphere_point(rng, SATURN_BODY_RADIUS)
    }
}

fn dna_point(rng: &mut impl Rng) -> Vec3 {
    let t = rng.gen_range(-DNA_HALF_HEIGHT..DNA_HALF_HEIGHT);
    let strand = if rng.gen::<bool>() { 0.0 } else { PI };
    let angle = t * DNA_TWIST + strand;
    Vec3::new(angle.cos() * DNA_RADIUS, t, angle.sin() * DNA_RADIUS)
}

/// Sample a target cloud of exactly `count` points for `shape`.
///
/// Pure with respect to state; all randomness comes from `rng`.
pub fn generate_cloud(shape: ParticleShape, count: usize, rng: &mut impl Rng) -> Vec<Vec3> {
    let mut cloud = Vec::with_capacity(count);
    for _ in 0..count {
        cloud.push(match shape {
            ParticleShape::Sphere => sphere_point(rng, SPHERE_RADIUS),
            ParticleShape::Heart => heart_point(rng),
            ParticleShape::Tree => tree_point(rng),
            ParticleShape::Saturn => saturn_point(rng),
            ParticleShape::Dna => dna_point(rng),
        });
    }
    cloud
}

/// All five target clouds for a fixed particle count, generated up front
/// and immutable afterwards.
pub struct ShapeCatalog {
    clouds: FnvHashMap<ParticleShape, Vec<Vec3>>,
    count: usize,
}

impl ShapeCatalog {
    pub fn new(count: usize) -> Self {
        let mut rng = rand::thread_rng();
        Self::with_rng(count, &mut rng)
    }

    pub fn with_rng(count: usize, rng: &mut impl Rng) -> Self {
        let mut clouds = FnvHashMap::default();
        for shape in ParticleShape::ALL {
            clouds.insert(shape, generate_cloud(shape, count, rng));
        }
        log::debug!("generated {} shape clouds of {count} points", clouds.len());
        Self { clouds, count }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Target cloud for `shape`, falling back to the sphere cloud when the
    /// requested one is missing.
    pub fn cloud(&self, shape: ParticleShape) -> &[Vec3] {
        match self.clouds.get(&shape) {
            Some(cloud) => cloud,
            None => self
                .clouds
                .get(&ParticleShape::Sphere)
                .map(Vec::as_slice)
                .unwrap_or(&[]),
        }
    }
}
