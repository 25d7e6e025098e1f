//! Scalar modulation factors derived from analyser frequency bins.
//!
//! The external audio analyser hands the engine a snapshot of byte
//! magnitudes (0-255) each frame, 128 bins for a 256-sample window. An
//! empty or undersized snapshot degrades to neutral modulation rather
//! than erroring.

use crate::constants::*;

/// Band means extracted from one frame of frequency bins.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AudioFeatures {
    /// Mean of bins [0, 20), 0 when fewer than 20 bins are available.
    pub bass: f32,
    /// Mean of bins [50, min(len, 100)), 0 when that range is empty.
    pub highs: f32,
}

impl AudioFeatures {
    pub fn analyze(bins: &[u8]) -> Self {
        let bass = if bins.len() < BASS_BIN_COUNT {
            0.0
        } else {
            band_mean(&bins[..BASS_BIN_COUNT])
        };
        let end = bins.len().min(HIGHS_BIN_END);
        let highs = if end <= HIGHS_BIN_START {
            0.0
        } else {
            band_mean(&bins[HIGHS_BIN_START..end])
        };
        Self { bass, highs }
    }

    /// Radial pulse factor, 1.0 at silence up to 1.5 at full bass.
    pub fn beat_scale(&self) -> f32 {
        1.0 + (self.bass / 255.0) * BEAT_SCALE_SPAN
    }

    /// Per-frame lerp factor toward the target cloud; highs speed it up.
    pub fn morph_speed(&self) -> f32 {
        MORPH_SPEED_BASE + (self.highs / 255.0) * MORPH_SPEED_SPAN
    }

    /// Per-axis jitter amplitude, active only when bass clears the gate.
    pub fn jitter_amplitude(&self) -> Option<f32> {
        (self.bass > JITTER_BASS_GATE).then(|| self.bass / JITTER_DIVISOR)
    }

    /// Whole-mesh Y rotation advance for this frame, in radians.
    pub fn mesh_spin_delta(&self) -> f32 {
        MESH_SPIN_BASE + (self.bass / 255.0) * MESH_SPIN_SPAN
    }
}

fn band_mean(band: &[u8]) -> f32 {
    if band.is_empty() {
        return 0.0;
    }
    let sum: u32 = band.iter().map(|&b| b as u32).sum();
    sum as f32 / band.len() as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undersized_bins_give_zero_bass() {
        let feats = AudioFeatures::analyze(&[255u8; 19]);
        assert_eq!(feats.bass, 0.0);
        let feats = AudioFeatures::analyze(&[255u8; 20]);
        assert_eq!(feats.bass, 255.0);
    }

    #[test]
    fn highs_range_clamps_to_available_bins() {
        // 60 bins: highs window is [50, 60)
        let mut bins = vec![0u8; 60];
        for b in &mut bins[50..60] {
            *b = 100;
        }
        let feats = AudioFeatures::analyze(&bins);
        assert!((feats.highs - 100.0).abs() < 1e-6);
    }
}
