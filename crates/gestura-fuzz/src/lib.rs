//! GESTURA Fuzz - Structured inputs and invariant checks
//!
//! Fuzz targets under `fuzz/` decode raw bytes into these types and run the
//! checks below. The checks panic on any violated invariant, which is what
//! libFuzzer reports as a crash.

use arbitrary::Arbitrary;
use gestura_classify::{classify, ClassifierConfig, ClassifierHistory};
use gestura_core::{GestureState, GestureType, Landmark, LandmarkFrame, Vec2};
use gestura_transform::{AccumulatorConfig, SmoothingStep, TransformAccumulator};
use std::time::Duration;

/// Landmark with arbitrary (possibly non-finite) coordinates
#[derive(Debug, Clone, Copy, Arbitrary)]
pub struct FuzzLandmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Detector frame with any number of hands of any length
#[derive(Debug, Clone, Arbitrary)]
pub struct FuzzFrame {
    pub hands: Vec<Vec<FuzzLandmark>>,
}

impl FuzzFrame {
    pub fn to_frame(&self) -> LandmarkFrame {
        LandmarkFrame::new(
            self.hands
                .iter()
                .map(|hand| hand.iter().map(|p| Landmark::new(p.x, p.y, p.z)).collect())
                .collect(),
        )
    }
}

/// Arbitrary gesture state, including values the classifier never emits
#[derive(Debug, Clone, Copy, Arbitrary)]
pub enum FuzzGesture {
    None,
    Grip { dx: f32, dy: f32 },
    PinchZoom { factor: f32 },
    Point { x: f32, y: f32 },
}

impl FuzzGesture {
    pub fn to_state(self) -> GestureState {
        match self {
            FuzzGesture::None => GestureState::idle(true),
            FuzzGesture::Grip { dx, dy } => GestureState::grip(Vec2::new(dx, dy)),
            FuzzGesture::PinchZoom { factor } => GestureState::pinch_zoom(factor),
            FuzzGesture::Point { x, y } => GestureState::point(Vec2::new(x, y)),
        }
    }
}

/// One accumulator step: a gesture and an optional elapsed time
#[derive(Debug, Clone, Copy, Arbitrary)]
pub struct FuzzTick {
    pub gesture: FuzzGesture,
    pub elapsed_micros: Option<u32>,
}

/// Classify a frame sequence; every output must be well formed
pub fn check_classifier_totality(frames: &[FuzzFrame]) {
    let config = ClassifierConfig::default();
    let mut history = ClassifierHistory::default();

    for fuzz in frames {
        let frame = fuzz.to_frame();
        let (state, next) = classify(&frame, &history, &config);

        match state.gesture {
            GestureType::None => {}
            GestureType::Grip | GestureType::PinchZoom | GestureType::Point => {
                assert!(state.hand_present, "gesture without a hand: {:?}", state)
            }
        }
        if !state.hand_present {
            assert_eq!(state.gesture, GestureType::None);
            assert!(next.is_empty(), "history kept across hand loss");
        }
        if frame.validate().is_err() {
            assert_eq!(state, GestureState::absent());
        }
        history = next;
    }
}

/// Feed arbitrary gesture states; scale bounds and unit orientation must hold
pub fn check_accumulator_bounds(ticks: &[FuzzTick]) {
    let config = AccumulatorConfig::default();
    let mut accumulator = TransformAccumulator::new();

    for tick in ticks {
        let step = match tick.elapsed_micros {
            Some(us) => SmoothingStep::Elapsed(Duration::from_micros(us as u64)),
            None => SmoothingStep::Frame,
        };
        let transform = accumulator.update_with(&tick.gesture.to_state(), step);

        assert!(
            transform.scale >= config.min_scale && transform.scale <= config.max_scale,
            "scale out of range: {}",
            transform.scale
        );
        assert!(transform.orientation.is_finite(), "{:?}", transform);
        assert!((transform.orientation.length() - 1.0).abs() < 1e-3);
    }
}
