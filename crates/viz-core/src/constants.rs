// Shared simulation tuning constants used across the morph engine.

// Shape sampling
pub const SPHERE_RADIUS: f32 = 6.0;
pub const HEART_SCALE: f32 = 0.3; // curve is authored at ~16 units wide
pub const HEART_DEPTH: f32 = 2.0; // z extruded in (-2, 2) before scaling
pub const TREE_HEIGHT: f32 = 15.0;
pub const TREE_TAPER: f32 = 0.4; // cone radius per unit of height below the tip
pub const SATURN_BODY_RADIUS: f32 = 3.5;
pub const SATURN_RING_INNER: f32 = 6.0;
pub const SATURN_RING_OUTER: f32 = 9.0;
pub const SATURN_RING_HALF_THICKNESS: f32 = 0.25;
pub const SATURN_RING_TILT: f32 = 0.3; // radians about X
pub const SATURN_RING_FRACTION: f32 = 0.6; // remainder samples the planet body
pub const DNA_HALF_HEIGHT: f32 = 10.0;
pub const DNA_TWIST: f32 = 1.5; // helix radians per unit of height
pub const DNA_RADIUS: f32 = 3.0;

// Audio feature bands (analyser bin indices)
pub const BASS_BIN_COUNT: usize = 20;
pub const HIGHS_BIN_START: usize = 50;
pub const HIGHS_BIN_END: usize = 100;

// Audio-driven modulation
pub const BEAT_SCALE_SPAN: f32 = 0.5; // full bass grows the swarm by 50%
pub const MORPH_SPEED_BASE: f32 = 0.03;
pub const MORPH_SPEED_SPAN: f32 = 0.05;
pub const JITTER_BASS_GATE: f32 = 50.0; // jitter only above this bass level
pub const JITTER_DIVISOR: f32 = 1000.0;
pub const MESH_SPIN_BASE: f32 = 0.001; // radians per frame
pub const MESH_SPIN_SPAN: f32 = 0.005;

// Swirl rotation about Y
pub const SWIRL_RADIUS_COEFF: f32 = 0.1;
pub const SWIRL_TIME_RATE: f64 = 0.5;

// Hand interaction
pub const HAND_WINDOW_X: f32 = 20.0; // one-hand camera-to-world window width
pub const HAND_WINDOW_Y: f32 = 15.0;
pub const REPEL_RADIUS: f32 = 5.0;
pub const REPEL_STEP: f32 = 0.2; // world units pushed per frame in range

// Color mapping
pub const HUE_SHIFT_SPAN: f32 = 0.2; // max hue offset from a saturated bin

// Defaults
pub const DEFAULT_PARTICLE_COUNT: usize = 4000;
pub const DEFAULT_BASE_COLOR_HEX: u32 = 0x00ffff;
