//! Gesture pipeline - classifier and accumulator in strict sequence

use std::time::Duration;

use gestura_classify::GestureClassifier;
use gestura_core::{GesturaResult, GestureState, LandmarkFrame};
use gestura_transform::{ObjectTransform, SmoothingStep, TransformAccumulator};
use tracing::{debug, info, trace};

use crate::{GestureLatch, PipelineConfig, PipelineStats, SmoothingMode};

/// Single-threaded pipeline: landmark frames in, object transform out
#[derive(Debug, Clone)]
pub struct GesturePipeline {
    classifier: GestureClassifier,
    accumulator: TransformAccumulator,
    smoothing: SmoothingMode,
    /// Level signal re-read by every render tick
    latest: GestureState,
    stats: PipelineStats,
}

impl Default for GesturePipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl GesturePipeline {
    /// Create a pipeline with default thresholds and smoothing
    pub fn new() -> Self {
        Self::build(
            GestureClassifier::new(),
            TransformAccumulator::new(),
            SmoothingMode::default(),
        )
    }

    /// Create a pipeline from a validated configuration
    pub fn with_config(config: PipelineConfig) -> GesturaResult<Self> {
        config.validate()?;
        let accumulator = TransformAccumulator::with_config(config.accumulator)?;
        Ok(Self::build(
            GestureClassifier::with_config(config.classifier),
            accumulator,
            config.smoothing,
        ))
    }

    fn build(
        classifier: GestureClassifier,
        accumulator: TransformAccumulator,
        smoothing: SmoothingMode,
    ) -> Self {
        info!(
            smoothing = ?smoothing,
            rotation_sensitivity = classifier.config().rotation_sensitivity,
            zoom_sensitivity = classifier.config().zoom_sensitivity,
            "gesture pipeline created"
        );
        Self {
            classifier,
            accumulator,
            smoothing,
            latest: GestureState::absent(),
            stats: PipelineStats::default(),
        }
    }

    /// Classify a detector frame and latch the result
    pub fn ingest(&mut self, frame: &LandmarkFrame) -> GestureState {
        let malformed_before = self.classifier.malformed_frames();
        let state = self.classifier.classify(frame);
        let malformed = self.classifier.malformed_frames() > malformed_before;

        if self.latest.hand_present && !state.hand_present {
            debug!("Hand lost");
        }
        self.stats.record(&self.latest, &state, malformed);
        self.latest = state;
        state
    }

    /// Apply the latched state and advance smoothing.
    ///
    /// `None` advances one fixed step; `Some(dt)` smooths by elapsed time.
    pub fn render_tick(&mut self, dt: Option<Duration>) -> ObjectTransform {
        let step = match dt {
            Some(dt) => SmoothingStep::Elapsed(dt),
            None => SmoothingStep::Frame,
        };
        self.stats.render_ticks += 1;
        self.accumulator.update_with(&self.latest, step)
    }

    /// Render tick under the configured smoothing mode.
    ///
    /// `dt` is honored only in [`SmoothingMode::Elapsed`].
    pub fn render_tick_for(&mut self, dt: Duration) -> ObjectTransform {
        self.render_tick(self.tick_interval(dt))
    }

    /// Ingest a frame, then run exactly one render tick
    pub fn step(&mut self, frame: &LandmarkFrame, dt: Duration) -> (GestureState, ObjectTransform) {
        let state = self.ingest(frame);
        let transform = self.render_tick_for(dt);
        trace!(gesture = %state.gesture, scale = transform.scale, "pipeline step");
        (state, transform)
    }

    fn tick_interval(&self, dt: Duration) -> Option<Duration> {
        match self.smoothing {
            SmoothingMode::FixedStep => None,
            SmoothingMode::Elapsed => Some(dt),
        }
    }

    /// Latched gesture state
    pub fn latest(&self) -> GestureState {
        self.latest
    }

    /// Displayed (smoothed) transform
    pub fn transform(&self) -> ObjectTransform {
        self.accumulator.snapshot()
    }

    /// Gesture-driven target transform
    pub fn target(&self) -> ObjectTransform {
        self.accumulator.target()
    }

    pub fn stats(&self) -> &PipelineStats {
        &self.stats
    }

    pub fn smoothing(&self) -> SmoothingMode {
        self.smoothing
    }

    pub fn classifier(&self) -> &GestureClassifier {
        &self.classifier
    }

    /// External control of the transform (e.g. a reset button or UI slider)
    pub fn accumulator_mut(&mut self) -> &mut TransformAccumulator {
        &mut self.accumulator
    }

    /// Forget gesture history and return to the identity transform
    pub fn reset(&mut self) {
        self.classifier.reset();
        self.accumulator.reset();
        self.latest = GestureState::absent();
        debug!("Pipeline reset");
    }

    /// Split into a detector half and a render half joined by a latch.
    ///
    /// The latch starts with the pipeline's current latched state.
    pub fn into_split(self) -> (Detector, Renderer) {
        let latch = GestureLatch::new();
        latch.publish(self.latest);
        let detector = Detector {
            classifier: self.classifier,
            latch: latch.clone(),
            latest: self.latest,
            stats: self.stats,
        };
        let renderer = Renderer {
            accumulator: self.accumulator,
            latch,
            smoothing: self.smoothing,
        };
        (detector, renderer)
    }
}

/// Detector half: classifies frames and publishes to the latch
#[derive(Debug)]
pub struct Detector {
    classifier: GestureClassifier,
    latch: GestureLatch,
    latest: GestureState,
    stats: PipelineStats,
}

impl Detector {
    pub fn ingest(&mut self, frame: &LandmarkFrame) -> GestureState {
        let malformed_before = self.classifier.malformed_frames();
        let state = self.classifier.classify(frame);
        let malformed = self.classifier.malformed_frames() > malformed_before;

        self.stats.record(&self.latest, &state, malformed);
        self.latest = state;
        self.latch.publish(state);
        state
    }

    pub fn latch(&self) -> &GestureLatch {
        &self.latch
    }

    /// Frame counters; `render_ticks` stays zero on this half
    pub fn stats(&self) -> &PipelineStats {
        &self.stats
    }
}

/// Render half: reads the latch once per tick and smooths the transform
#[derive(Debug)]
pub struct Renderer {
    accumulator: TransformAccumulator,
    latch: GestureLatch,
    smoothing: SmoothingMode,
}

impl Renderer {
    /// One render tick against the latest published state
    pub fn tick(&mut self, dt: Duration) -> ObjectTransform {
        let state = self.latch.latest();
        let step = match self.smoothing {
            SmoothingMode::FixedStep => SmoothingStep::Frame,
            SmoothingMode::Elapsed => SmoothingStep::Elapsed(dt),
        };
        self.accumulator.update_with(&state, step)
    }

    pub fn transform(&self) -> ObjectTransform {
        self.accumulator.snapshot()
    }

    pub fn ticks(&self) -> u64 {
        self.accumulator.ticks()
    }

    pub fn accumulator_mut(&mut self) -> &mut TransformAccumulator {
        &mut self.accumulator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gestura_core::{
        GestureType, Landmark, Quat, Vec2, Vec3, HAND_LANDMARK_COUNT, INDEX_TIP, MIDDLE_TIP,
        PINKY_TIP, RING_TIP, WRIST,
    };
    use gestura_transform::AccumulatorConfig;
    use proptest::prelude::*;
    use std::thread;

    const FRAME: Duration = Duration::from_micros(16_667);

    fn hand(wx: f32, wy: f32, reach: [f32; 4]) -> Vec<Landmark> {
        let mut points = vec![Landmark::new(wx, wy, 0.0); HAND_LANDMARK_COUNT];
        points[WRIST] = Landmark::new(wx, wy, 0.0);
        for (tip, r) in [INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP].into_iter().zip(reach) {
            points[tip] = Landmark::new(wx, wy - r, 0.0);
        }
        points
    }

    fn fist(x: f32, y: f32) -> LandmarkFrame {
        LandmarkFrame::new(vec![hand(x, y, [0.1; 4])])
    }

    fn pointing() -> LandmarkFrame {
        LandmarkFrame::new(vec![hand(0.5, 0.8, [0.35, 0.1, 0.1, 0.1])])
    }

    fn two_hands(distance: f32) -> LandmarkFrame {
        LandmarkFrame::new(vec![
            hand(0.5 - distance / 2.0, 0.6, [0.35; 4]),
            hand(0.5 + distance / 2.0, 0.6, [0.35; 4]),
        ])
    }

    #[test]
    fn test_pipeline_creation() {
        let pipeline = GesturePipeline::new();
        assert_eq!(pipeline.latest(), GestureState::absent());
        assert_eq!(pipeline.transform(), ObjectTransform::default());
        assert_eq!(pipeline.stats(), &PipelineStats::default());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = PipelineConfig::default();
        config.accumulator.smoothing_factor = 2.0;
        assert!(GesturePipeline::with_config(config).is_err());
    }

    #[test]
    fn test_reference_sequence() {
        let mut pipeline = GesturePipeline::new();
        let frames = [
            LandmarkFrame::empty(),
            fist(0.50, 0.50),
            fist(0.55, 0.50),
            two_hands(0.30),
            two_hands(0.35),
        ];
        let states: Vec<_> = frames.iter().map(|f| pipeline.step(f, FRAME).0).collect();

        assert_eq!(states[0], GestureState::absent());
        assert_eq!(states[1], GestureState::grip(Vec2::ZERO));
        assert_eq!(states[2].gesture, GestureType::Grip);
        assert!((states[2].rotation_delta.x + 0.15).abs() < 1e-5);
        assert_eq!(states[3], GestureState::pinch_zoom(1.0));
        assert!((states[4].scale_factor - 1.075).abs() < 1e-4);

        let stats = pipeline.stats();
        assert_eq!(stats.frames_ingested, 5);
        assert_eq!(stats.render_ticks, 5);
        assert_eq!(stats.grip_frames, 2);
        assert_eq!(stats.pinch_zoom_frames, 2);
        assert_eq!(stats.none_frames, 1);
    }

    #[test]
    fn test_level_signal_reapplied_each_tick() {
        let mut pipeline = GesturePipeline::new();
        pipeline.ingest(&two_hands(0.30));
        pipeline.ingest(&two_hands(0.40));
        let factor = pipeline.latest().scale_factor;

        // Three render frames per detector frame
        for _ in 0..3 {
            pipeline.render_tick(None);
        }
        let expected = factor.powi(3);
        assert!((pipeline.target().scale - expected).abs() < 1e-4);
        assert_eq!(pipeline.stats().render_ticks, 3);
        assert_eq!(pipeline.stats().frames_ingested, 2);
    }

    #[test]
    fn test_render_without_frames_is_idle() {
        let mut pipeline = GesturePipeline::new();
        for _ in 0..10 {
            pipeline.render_tick(Some(FRAME));
        }
        assert_eq!(pipeline.transform(), ObjectTransform::default());
    }

    #[test]
    fn test_hand_loss_and_malformed_frames_counted() {
        let mut pipeline = GesturePipeline::new();
        pipeline.ingest(&pointing());
        pipeline.ingest(&LandmarkFrame::new(vec![vec![Landmark::default(); 5]]));
        pipeline.ingest(&pointing());
        pipeline.ingest(&LandmarkFrame::empty());

        let stats = pipeline.stats();
        assert_eq!(stats.malformed_frames, 1);
        assert_eq!(stats.hand_losses, 2);
        assert_eq!(stats.point_frames, 2);
        assert!(pipeline.classifier().history().is_empty());
    }

    #[test]
    fn test_grip_rotates_displayed_transform() {
        let config = PipelineConfig {
            accumulator: AccumulatorConfig::unsmoothed(),
            ..PipelineConfig::default()
        };
        let mut pipeline = GesturePipeline::with_config(config).unwrap();
        pipeline.step(&fist(0.50, 0.50), FRAME);
        let (state, transform) = pipeline.step(&fist(0.55, 0.50), FRAME);

        let expected = Quat::from_axis_angle(Vec3::UP, state.rotation_delta.x);
        assert!(transform.orientation.angle_to(&expected) < 1e-4);
    }

    #[test]
    fn test_elapsed_mode_matches_fixed_at_reference_rate() {
        let mut fixed = GesturePipeline::new();
        let mut elapsed = GesturePipeline::with_config(PipelineConfig::elapsed()).unwrap();
        let dt = Duration::from_secs_f64(1.0 / 60.0);

        for frame in [two_hands(0.2), two_hands(0.4), two_hands(0.5)] {
            let (_, a) = fixed.step(&frame, dt);
            let (_, b) = elapsed.step(&frame, dt);
            assert!((a.scale - b.scale).abs() < 1e-4);
        }
    }

    #[test]
    fn test_reset_returns_to_identity() {
        let mut pipeline = GesturePipeline::new();
        pipeline.step(&two_hands(0.2), FRAME);
        pipeline.step(&two_hands(0.6), FRAME);
        pipeline.reset();
        assert_eq!(pipeline.latest(), GestureState::absent());
        assert_eq!(pipeline.target(), ObjectTransform::default());
    }

    #[test]
    fn test_split_handoff_across_threads() {
        let pipeline = GesturePipeline::new();
        let (mut detector, mut renderer) = pipeline.into_split();

        let handle = thread::spawn(move || {
            detector.ingest(&two_hands(0.30));
            detector.ingest(&two_hands(0.40));
            detector
        });
        let detector = handle.join().unwrap();

        let factor = detector.latch().latest().scale_factor;
        assert!(factor > 1.0);
        renderer.tick(FRAME);
        renderer.tick(FRAME);
        assert_eq!(renderer.ticks(), 2);
        assert!(renderer.transform().scale > 1.0);
        assert_eq!(detector.stats().frames_ingested, 2);

        renderer.accumulator_mut().reset();
        assert_eq!(renderer.ticks(), 0);
        assert_eq!(renderer.transform(), ObjectTransform::default());
    }

    proptest! {
        #[test]
        fn prop_displayed_transform_stays_bounded(
            frames in prop::collection::vec((0u8..4, 0.01f32..1.5, 0.0f32..1.0), 1..80),
            renders in 1usize..4,
        ) {
            let mut pipeline = GesturePipeline::with_config(PipelineConfig::elapsed()).unwrap();
            for (kind, distance, x) in frames {
                let frame = match kind {
                    0 => LandmarkFrame::new(vec![]),
                    1 => fist(x, 0.5),
                    2 => pointing(),
                    _ => two_hands(distance),
                };
                pipeline.ingest(&frame);
                for _ in 0..renders {
                    let shown = pipeline.render_tick(Some(FRAME));
                    prop_assert!(shown.scale >= 0.1 && shown.scale <= 5.0);
                    prop_assert!((shown.orientation.length() - 1.0).abs() < 1e-3);
                }
            }
        }
    }
}
