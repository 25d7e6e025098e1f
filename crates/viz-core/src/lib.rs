//! Particle simulation core for an audio-reactive morphing swarm.
//!
//! The engine owns per-particle positions, morphs them between
//! procedurally generated shape clouds, and modulates the emitted
//! frame with audio frequency content and camera-tracked hand
//! positions. Rendering, audio analysis, and hand inference are
//! external collaborators; this crate is pure computation and is
//! usable from both native and web frontends.

pub mod audio;
pub mod color;
pub mod constants;
pub mod engine;
pub mod hands;
pub mod shape;

pub use audio::*;
pub use color::{from_hex, parse_hex, ColorParseError, HOT_PINK};
pub use constants::*;
pub use engine::*;
pub use hands::*;
pub use shape::*;
