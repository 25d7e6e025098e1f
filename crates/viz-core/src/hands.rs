//! Interaction center and two-hand closeness derived from tracked hand
//! landmarks.
//!
//! The external tracker delivers up to two hands per frame, each a list
//! of normalized (x, y) landmarks; only the wrist (landmark 0) is
//! consulted here. The tracker is an injected collaborator: the engine
//! reads whatever snapshot the caller puts in the frame input.

use glam::{Vec2, Vec3};
use smallvec::SmallVec;

use crate::constants::{HAND_WINDOW_X, HAND_WINDOW_Y};

/// Normalized camera-space landmark, x and y in [0, 1].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HandLandmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Inline storage sized for the tracker's 21 landmarks per hand.
pub type LandmarkList = SmallVec<[HandLandmark; 21]>;

#[derive(Clone, Debug, Default)]
pub struct Hand {
    pub landmarks: LandmarkList,
}

impl Hand {
    /// Build a hand from just a wrist position (enough for interaction).
    pub fn from_wrist(x: f32, y: f32) -> Self {
        let mut landmarks = LandmarkList::new();
        landmarks.push(HandLandmark { x, y, z: 0.0 });
        Self { landmarks }
    }

    fn wrist(&self) -> Option<HandLandmark> {
        self.landmarks.first().copied()
    }
}

/// Resolved per-frame hand interaction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandInteraction {
    /// World-space repulsion center.
    pub center: Vec3,
    /// Euclidean distance between the two wrists in camera space;
    /// `None` unless exactly two hands are tracked.
    pub closeness: Option<f32>,
}

impl HandInteraction {
    /// Resolve at most the first two tracked hands; hands with no
    /// landmarks are skipped, extra hands are ignored.
    pub fn resolve(hands: &[Hand]) -> Option<Self> {
        let wrists: SmallVec<[HandLandmark; 2]> =
            hands.iter().take(2).filter_map(Hand::wrist).collect();
        match wrists.as_slice() {
            [w] => Some(Self {
                center: Vec3::new(
                    (0.5 - w.x) * HAND_WINDOW_X,
                    (0.5 - w.y) * HAND_WINDOW_Y,
                    0.0,
                ),
                closeness: None,
            }),
            [a, b] => {
                let closeness = Vec2::new(a.x, a.y).distance(Vec2::new(b.x, b.y));
                Some(Self {
                    center: Vec3::new(
                        ((0.5 - a.x) + (0.5 - b.x)) * (HAND_WINDOW_X / 2.0),
                        ((0.5 - a.y) + (0.5 - b.y)) * (HAND_WINDOW_Y / 2.0),
                        0.0,
                    ),
                    closeness: Some(closeness),
                })
            }
            _ => None,
        }
    }
}
