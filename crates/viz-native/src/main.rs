//! Headless driver for the particle core.
//!
//! Stands in for a render loop: runs the engine at a fixed timestep
//! with synthetic audio and hand input, logging a one-line summary per
//! second. Useful for profiling and for eyeballing engine behavior
//! without a GPU frontend.

use std::thread;
use std::time::{Duration, Instant};

use viz_core::{EngineParams, FrameInput, Hand, ParticleMorphEngine, ParticleShape};

const FRAME_RATE: f64 = 60.0;
const RUN_SECONDS: f64 = 20.0;
const SHAPE_HOLD_SECONDS: f64 = 4.0;
const BIN_COUNT: usize = 128;

/// Fake analyser snapshot: a bass pulse at ~1 Hz plus steady highs.
fn synth_bins(elapsed: f64, bins: &mut [u8]) {
    let pulse = ((elapsed * std::f64::consts::TAU).sin() * 0.5 + 0.5) as f32;
    for (i, bin) in bins.iter_mut().enumerate() {
        *bin = if i < 20 {
            (pulse * 220.0) as u8
        } else if (50..100).contains(&i) {
            90
        } else {
            0
        };
    }
}

/// Fake tracker snapshot: one hand sweeping across the frame.
fn synth_hands(elapsed: f64) -> Vec<Hand> {
    let x = ((elapsed * 0.25).fract()) as f32;
    vec![Hand::from_wrist(x, 0.5)]
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let engine_params = EngineParams::default();
    let mut engine = ParticleMorphEngine::new(engine_params);
    let shapes = ParticleShape::ALL;

    let frame_dt = Duration::from_secs_f64(1.0 / FRAME_RATE);
    let start = Instant::now();
    let mut bins = vec![0u8; BIN_COUNT];
    let mut last_report = 0u64;

    loop {
        let elapsed = start.elapsed().as_secs_f64();
        if elapsed >= RUN_SECONDS {
            break;
        }

        synth_bins(elapsed, &mut bins);
        let hands = synth_hands(elapsed);
        let shape = shapes[(elapsed / SHAPE_HOLD_SECONDS) as usize % shapes.len()];

        let frame_start = Instant::now();
        let frame = engine.update(&FrameInput {
            elapsed_seconds: elapsed,
            shape,
            frequency_bins: &bins,
            hands: &hands,
        });

        let second = elapsed as u64;
        if second != last_report {
            last_report = second;
            let mean_radius = frame
                .instances
                .iter()
                .map(|p| p.position.length())
                .sum::<f32>()
                / frame.instances.len().max(1) as f32;
            log::info!(
                "t={second:>3}s shape={shape:?} mean_radius={mean_radius:.2} \
                 spin_delta={:.4} frame_time={:?}",
                frame.mesh_rotation_delta,
                frame_start.elapsed()
            );
        }

        let spent = frame_start.elapsed();
        if spent < frame_dt {
            thread::sleep(frame_dt - spent);
        }
    }

    log::info!(
        "done: final mesh rotation {:.3} rad",
        engine.mesh_rotation_y()
    );
    Ok(())
}
