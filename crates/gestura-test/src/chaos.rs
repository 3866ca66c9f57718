//! Chaos for landmark streams
//!
//! Simulates a noisy hand tracker:
//! - Coordinate jitter
//! - Tracking dropouts (frames with no hands), single or in bursts
//! - Malformed hands (truncated landmark lists, NaN coordinates)

use gestura_core::{Landmark, LandmarkFrame};
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Landmark chaos configuration
#[derive(Clone, Debug)]
pub struct LandmarkChaosConfig {
    /// Maximum absolute jitter added to each coordinate
    pub jitter: f32,
    /// Probability a frame loses all hands
    pub dropout_rate: f64,
    /// Probability a dropout starts a burst
    pub burst_dropout_prob: f64,
    /// Burst length range in frames
    pub burst_length: (u32, u32),
    /// Probability one hand in a frame is corrupted
    pub malformed_rate: f64,
}

impl Default for LandmarkChaosConfig {
    fn default() -> Self {
        LandmarkChaosConfig {
            jitter: 0.002,
            dropout_rate: 0.01,
            burst_dropout_prob: 0.1,
            burst_length: (2, 5),
            malformed_rate: 0.005,
        }
    }
}

impl LandmarkChaosConfig {
    /// Clean input: no chaos at all
    pub fn clean() -> Self {
        LandmarkChaosConfig {
            jitter: 0.0,
            dropout_rate: 0.0,
            burst_dropout_prob: 0.0,
            burst_length: (0, 0),
            malformed_rate: 0.0,
        }
    }

    /// Good lighting, steady hands
    pub fn good() -> Self {
        LandmarkChaosConfig {
            jitter: 0.001,
            dropout_rate: 0.002,
            burst_dropout_prob: 0.01,
            burst_length: (1, 2),
            malformed_rate: 0.0,
        }
    }

    /// Dim room, partial occlusion
    pub fn poor() -> Self {
        LandmarkChaosConfig {
            jitter: 0.005,
            dropout_rate: 0.05,
            burst_dropout_prob: 0.2,
            burst_length: (3, 8),
            malformed_rate: 0.02,
        }
    }

    /// Tracker barely coping
    pub fn hostile() -> Self {
        LandmarkChaosConfig {
            jitter: 0.01,
            dropout_rate: 0.15,
            burst_dropout_prob: 0.3,
            burst_length: (5, 15),
            malformed_rate: 0.05,
        }
    }
}

/// Chaos statistics
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LandmarkChaosStats {
    pub frames_in: u64,
    pub frames_dropped: u64,
    pub hands_corrupted: u64,
}

impl LandmarkChaosStats {
    pub fn dropout_rate(&self) -> f64 {
        if self.frames_in == 0 {
            0.0
        } else {
            self.frames_dropped as f64 / self.frames_in as f64
        }
    }
}

/// Seeded landmark chaos injector
pub struct LandmarkChaos {
    config: LandmarkChaosConfig,
    rng: StdRng,
    burst_remaining: u32,
    stats: LandmarkChaosStats,
}

impl LandmarkChaos {
    pub fn new(config: LandmarkChaosConfig, seed: u64) -> Self {
        LandmarkChaos {
            config,
            rng: StdRng::seed_from_u64(seed),
            burst_remaining: 0,
            stats: LandmarkChaosStats::default(),
        }
    }

    /// Pass one frame through the chaos model
    pub fn apply(&mut self, frame: &LandmarkFrame) -> LandmarkFrame {
        self.stats.frames_in += 1;

        if self.should_drop() {
            self.stats.frames_dropped += 1;
            return LandmarkFrame {
                timestamp: frame.timestamp,
                hands: Vec::new(),
            };
        }

        let mut hands = frame.hands.clone();
        if self.config.jitter > 0.0 {
            let jitter = Uniform::new_inclusive(-self.config.jitter, self.config.jitter);
            for point in hands.iter_mut().flatten() {
                point.x += jitter.sample(&mut self.rng);
                point.y += jitter.sample(&mut self.rng);
                point.z += jitter.sample(&mut self.rng);
            }
        }

        if !hands.is_empty() && self.rng.gen::<f64>() < self.config.malformed_rate {
            let victim = self.rng.gen_range(0..hands.len());
            self.corrupt(&mut hands[victim]);
            self.stats.hands_corrupted += 1;
        }

        LandmarkFrame {
            timestamp: frame.timestamp,
            hands,
        }
    }

    fn should_drop(&mut self) -> bool {
        if self.burst_remaining > 0 {
            self.burst_remaining -= 1;
            return true;
        }

        if self.rng.gen::<f64>() >= self.config.dropout_rate {
            return false;
        }

        if self.rng.gen::<f64>() < self.config.burst_dropout_prob {
            let (min, max) = self.config.burst_length;
            // This frame is the first of the burst
            self.burst_remaining = self.rng.gen_range(min..=max).saturating_sub(1);
        }
        true
    }

    fn corrupt(&mut self, hand: &mut Vec<Landmark>) {
        if hand.is_empty() || self.rng.gen_bool(0.5) {
            let keep = self.rng.gen_range(0..hand.len().max(1));
            hand.truncate(keep);
        } else {
            let idx = self.rng.gen_range(0..hand.len());
            hand[idx].x = f32::NAN;
        }
    }

    pub fn stats(&self) -> &LandmarkChaosStats {
        &self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = LandmarkChaosStats::default();
    }
}
