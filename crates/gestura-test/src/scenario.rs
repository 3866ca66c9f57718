//! Scripted gesture scenarios
//!
//! A scenario is a list of segments, each a number of detector frames:
//! - hold a pose at a fixed wrist position
//! - drag a fist from one wrist position to another
//! - spread or close two hands between two distances
//! - no hands at all
//!
//! The runner feeds the frames through a [`GesturePipeline`], optionally via
//! [`LandmarkChaos`], with a configurable number of render ticks per frame.

use std::time::Duration;

use gestura_core::{FrameTime, GestureState, GestureType, LandmarkFrame, Vec2};
use gestura_runtime::{GesturePipeline, PipelineStats};
use gestura_transform::ObjectTransform;

use crate::{two_hand_frame, HandPose, LandmarkChaos, SyntheticHand};

/// One scripted stretch of input
#[derive(Clone, Debug, PartialEq)]
pub enum Segment {
    Hold {
        pose: HandPose,
        wrist: Vec2,
        frames: usize,
    },
    Drag {
        from: Vec2,
        to: Vec2,
        frames: usize,
    },
    Spread {
        from: f32,
        to: f32,
        frames: usize,
    },
    Absent {
        frames: usize,
    },
}

impl Segment {
    pub fn frames(&self) -> usize {
        match self {
            Segment::Hold { frames, .. }
            | Segment::Drag { frames, .. }
            | Segment::Spread { frames, .. }
            | Segment::Absent { frames } => *frames,
        }
    }

    /// Interpolation parameter of frame `i`, reaching 1 on the last frame
    fn progress(i: usize, frames: usize) -> f32 {
        if frames <= 1 {
            1.0
        } else {
            i as f32 / (frames - 1) as f32
        }
    }

    fn frame(&self, i: usize) -> LandmarkFrame {
        match *self {
            Segment::Hold { pose, wrist, .. } => SyntheticHand::new(pose, wrist).frame(),
            Segment::Drag { from, to, frames } => {
                let t = Self::progress(i, frames);
                let wrist = from + (to - from) * t;
                SyntheticHand::new(HandPose::Fist, wrist).frame()
            }
            Segment::Spread { from, to, frames } => {
                let t = Self::progress(i, frames);
                two_hand_frame(from + (to - from) * t, 0.6)
            }
            Segment::Absent { .. } => LandmarkFrame::empty(),
        }
    }
}

/// Scenario builder
#[derive(Clone, Debug)]
pub struct Scenario {
    segments: Vec<Segment>,
    frame_interval: Duration,
}

impl Default for Scenario {
    fn default() -> Self {
        Self::new()
    }
}

impl Scenario {
    /// Empty scenario at 30 detector frames per second
    pub fn new() -> Self {
        Scenario {
            segments: Vec::new(),
            frame_interval: Duration::from_micros(33_333),
        }
    }

    pub fn with_frame_interval(mut self, interval: Duration) -> Self {
        self.frame_interval = interval;
        self
    }

    pub fn hold(mut self, pose: HandPose, wrist: Vec2, frames: usize) -> Self {
        self.segments.push(Segment::Hold {
            pose,
            wrist,
            frames,
        });
        self
    }

    pub fn drag(mut self, from: Vec2, to: Vec2, frames: usize) -> Self {
        self.segments.push(Segment::Drag { from, to, frames });
        self
    }

    pub fn spread(mut self, from: f32, to: f32, frames: usize) -> Self {
        self.segments.push(Segment::Spread { from, to, frames });
        self
    }

    pub fn absent(mut self, frames: usize) -> Self {
        self.segments.push(Segment::Absent { frames });
        self
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    pub fn len(&self) -> usize {
        self.segments.iter().map(Segment::frames).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Timestamped detector frames
    pub fn frames(&self) -> Vec<LandmarkFrame> {
        let mut time = FrameTime::ZERO;
        let mut out = Vec::with_capacity(self.len());
        for segment in &self.segments {
            for i in 0..segment.frames() {
                out.push(segment.frame(i).with_timestamp(time));
                time = time + self.frame_interval;
            }
        }
        out
    }
}

/// Outcome of a scenario run
#[derive(Clone, Debug)]
pub struct ScenarioReport {
    /// Gesture state per detector frame
    pub states: Vec<GestureState>,
    /// Displayed transform after each detector frame's render ticks
    pub transforms: Vec<ObjectTransform>,
    pub stats: PipelineStats,
}

impl ScenarioReport {
    pub fn final_transform(&self) -> ObjectTransform {
        self.transforms.last().copied().unwrap_or_default()
    }

    pub fn count(&self, gesture: GestureType) -> usize {
        self.states.iter().filter(|s| s.gesture == gesture).count()
    }

    /// Largest scale change between consecutive detector frames
    pub fn max_scale_step(&self) -> f32 {
        self.transforms
            .windows(2)
            .map(|w| (w[1].scale - w[0].scale).abs())
            .fold(0.0, f32::max)
    }
}

/// Drives a pipeline through a scenario
pub struct ScenarioRunner {
    pipeline: GesturePipeline,
    chaos: Option<LandmarkChaos>,
    renders_per_frame: usize,
}

impl ScenarioRunner {
    pub fn new(pipeline: GesturePipeline) -> Self {
        ScenarioRunner {
            pipeline,
            chaos: None,
            renders_per_frame: 1,
        }
    }

    pub fn with_chaos(mut self, chaos: LandmarkChaos) -> Self {
        self.chaos = Some(chaos);
        self
    }

    /// Render ticks per detector frame (level signal reuse)
    pub fn with_renders_per_frame(mut self, renders: usize) -> Self {
        self.renders_per_frame = renders.max(1);
        self
    }

    pub fn run(&mut self, scenario: &Scenario) -> ScenarioReport {
        let render_dt = scenario.frame_interval() / self.renders_per_frame as u32;
        let mut states = Vec::with_capacity(scenario.len());
        let mut transforms = Vec::with_capacity(scenario.len());

        for frame in scenario.frames() {
            let frame = match self.chaos.as_mut() {
                Some(chaos) => chaos.apply(&frame),
                None => frame,
            };
            states.push(self.pipeline.ingest(&frame));

            let mut transform = self.pipeline.transform();
            for _ in 0..self.renders_per_frame {
                transform = self.pipeline.render_tick_for(render_dt);
            }
            transforms.push(transform);
        }

        ScenarioReport {
            states,
            transforms,
            stats: self.pipeline.stats().clone(),
        }
    }

    pub fn pipeline(&self) -> &GesturePipeline {
        &self.pipeline
    }

    pub fn chaos(&self) -> Option<&LandmarkChaos> {
        self.chaos.as_ref()
    }
}
