//! Synthetic hand generator
//!
//! Builds full 21-point hands whose fingertip reach lands well inside the
//! default extended/curled bands, so each pose classifies deterministically.

use gestura_core::{Landmark, LandmarkFrame, Vec2, HAND_LANDMARK_COUNT};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Scripted hand pose
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandPose {
    /// All fingers extended
    Open,
    /// All fingers curled
    Fist,
    /// Index extended, middle and ring curled
    Pointing { pinky_extended: bool },
    /// Index and middle extended, ring and pinky curled
    Victory,
}

/// Tip distance from the wrist, as a fraction of hand size
const EXTENDED_REACH: f32 = 0.35;
const CURLED_REACH: f32 = 0.10;

/// Lateral offset of each long finger from the wrist axis
const FINGER_OFFSETS: [f32; 4] = [-0.06, -0.02, 0.02, 0.06];

/// One synthetic hand in image coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SyntheticHand {
    pub wrist: Vec2,
    pub pose: HandPose,
    /// Overall hand size multiplier
    pub size: f32,
    /// Hand roll about the wrist, radians (0 = fingers up)
    pub tilt: f32,
}

impl SyntheticHand {
    pub fn new(pose: HandPose, wrist: Vec2) -> Self {
        Self {
            wrist,
            pose,
            size: 1.0,
            tilt: 0.0,
        }
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn with_tilt(mut self, tilt: f32) -> Self {
        self.tilt = tilt;
        self
    }

    fn reaches(&self) -> [f32; 4] {
        match self.pose {
            HandPose::Open => [EXTENDED_REACH; 4],
            HandPose::Fist => [CURLED_REACH; 4],
            HandPose::Pointing { pinky_extended } => [
                EXTENDED_REACH,
                CURLED_REACH,
                CURLED_REACH,
                if pinky_extended {
                    EXTENDED_REACH
                } else {
                    CURLED_REACH
                },
            ],
            HandPose::Victory => [EXTENDED_REACH, EXTENDED_REACH, CURLED_REACH, CURLED_REACH],
        }
    }

    /// Hand-local offset (x right, y up) to image coordinates
    fn place(&self, lateral: f32, up: f32) -> Landmark {
        let (sin, cos) = self.tilt.sin_cos();
        let x = (lateral * cos - up * sin) * self.size;
        let y = (lateral * sin + up * cos) * self.size;
        // Image y grows downward
        Landmark::new(self.wrist.x + x, self.wrist.y - y, 0.0)
    }

    /// All 21 landmarks in standard order
    pub fn landmarks(&self) -> Vec<Landmark> {
        let mut points = Vec::with_capacity(HAND_LANDMARK_COUNT);
        points.push(self.place(0.0, 0.0));

        // Thumb: CMC, MCP, IP, TIP
        for (lateral, up) in [(-0.04, 0.04), (-0.08, 0.07), (-0.11, 0.10), (-0.13, 0.12)] {
            points.push(self.place(lateral, up));
        }

        // Long fingers: MCP, PIP, DIP, TIP
        for (offset, reach) in FINGER_OFFSETS.into_iter().zip(self.reaches()) {
            let mcp = 0.15;
            let joints = if reach >= mcp {
                [mcp, mcp + (reach - mcp) / 3.0, mcp + 2.0 * (reach - mcp) / 3.0, reach]
            } else {
                // Curled back toward the palm
                [mcp, 0.18, 0.14, reach]
            };
            for up in joints {
                points.push(self.place(offset, up));
            }
        }

        points
    }

    pub fn frame(&self) -> LandmarkFrame {
        LandmarkFrame::new(vec![self.landmarks()])
    }
}

/// Frame holding two open hands `distance` apart, centered horizontally
pub fn two_hand_frame(distance: f32, y: f32) -> LandmarkFrame {
    let left = SyntheticHand::new(HandPose::Open, Vec2::new(0.5 - distance / 2.0, y));
    let right = SyntheticHand::new(HandPose::Open, Vec2::new(0.5 + distance / 2.0, y));
    LandmarkFrame::new(vec![left.landmarks(), right.landmarks()])
}

/// Seeded generator of randomized hands
pub struct HandSimulator {
    rng: StdRng,
}

impl HandSimulator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Random placement, size and tilt, keeping the pose unambiguous
    pub fn hand(&mut self, pose: HandPose) -> SyntheticHand {
        let wrist = Vec2::new(self.rng.gen_range(0.2..0.8), self.rng.gen_range(0.3..0.9));
        SyntheticHand::new(pose, wrist)
            .with_size(self.rng.gen_range(0.9..1.1))
            .with_tilt(self.rng.gen_range(-0.4..0.4))
    }

    pub fn random_pose(&mut self) -> HandPose {
        match self.rng.gen_range(0..5) {
            0 => HandPose::Open,
            1 => HandPose::Fist,
            2 => HandPose::Pointing {
                pinky_extended: false,
            },
            3 => HandPose::Pointing {
                pinky_extended: true,
            },
            _ => HandPose::Victory,
        }
    }

    /// Frame with 0, 1 or 2 random hands
    pub fn random_frame(&mut self) -> LandmarkFrame {
        let count = self.rng.gen_range(0..=2);
        let hands = (0..count)
            .map(|_| {
                let pose = self.random_pose();
                self.hand(pose).landmarks()
            })
            .collect();
        LandmarkFrame::new(hands)
    }
}
