//! Gesture classifier - frame in, gesture state out
//!
//! Decision order per frame:
//! 1. No hands (or a malformed frame) → idle, all history cleared
//! 2. Two hands → pinch zoom from the change in inter-wrist distance
//! 3. One hand → grip (rotate), point (inspect) or idle from finger pose
//!
//! Two hands always win over any one-hand interpretation.

use gestura_core::{
    GestureState, GestureType, GesturaResult, HandLandmarks, HandSet, LandmarkFrame, Vec2,
    MAX_HANDS,
};
use tracing::{debug, trace};

use crate::{finger_pose, ClassifierConfig};

/// Cross-frame memory of the classifier
///
/// This is the only state carried between frames. A new hand after a loss
/// starts from an empty history, so it never produces a delta against a
/// stale position.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ClassifierHistory {
    /// Wrist position of the previous one-hand grip frame
    pub previous_wrist: Option<Vec2>,
    /// Inter-wrist distance of the previous two-hand frame
    pub previous_wrist_distance: Option<f32>,
}

impl ClassifierHistory {
    pub fn is_empty(&self) -> bool {
        self.previous_wrist.is_none() && self.previous_wrist_distance.is_none()
    }
}

/// Classify one raw detector frame.
///
/// Malformed frames (wrong landmark count, non-finite coordinates) are
/// treated exactly like a frame with no hands.
pub fn classify(
    frame: &LandmarkFrame,
    history: &ClassifierHistory,
    config: &ClassifierConfig,
) -> (GestureState, ClassifierHistory) {
    match validate_frame(frame) {
        Ok(hands) => classify_hands(&hands, history, config),
        Err(e) => {
            debug!("Malformed landmark frame treated as empty: {}", e);
            (GestureState::absent(), ClassifierHistory::default())
        }
    }
}

fn validate_frame(frame: &LandmarkFrame) -> GesturaResult<HandSet> {
    if frame.reported_hands() > MAX_HANDS {
        trace!(
            reported = frame.reported_hands(),
            "Discarding hands beyond the first {}",
            MAX_HANDS
        );
    }
    frame.validate()
}

/// Classify an already validated set of hands
pub fn classify_hands(
    hands: &HandSet,
    history: &ClassifierHistory,
    config: &ClassifierConfig,
) -> (GestureState, ClassifierHistory) {
    match hands {
        HandSet::None => (GestureState::absent(), ClassifierHistory::default()),
        HandSet::Two(first, second) => classify_two_hands(first, second, history, config),
        HandSet::One(hand) => classify_one_hand(hand, history, config),
    }
}

fn classify_two_hands(
    first: &HandLandmarks,
    second: &HandLandmarks,
    history: &ClassifierHistory,
    config: &ClassifierConfig,
) -> (GestureState, ClassifierHistory) {
    let distance = first.wrist().planar_distance(&second.wrist());

    // No signal on the first two-hand frame
    let scale_factor = match history.previous_wrist_distance {
        Some(previous) => 1.0 + (distance - previous) * config.zoom_sensitivity,
        None => 1.0,
    };

    trace!(distance, scale_factor, "two-hand frame");

    let next = ClassifierHistory {
        previous_wrist: None,
        previous_wrist_distance: Some(distance),
    };
    (GestureState::pinch_zoom(scale_factor), next)
}

fn classify_one_hand(
    hand: &HandLandmarks,
    history: &ClassifierHistory,
    config: &ClassifierConfig,
) -> (GestureState, ClassifierHistory) {
    let pose = finger_pose(hand, config);

    if pose.is_grip() {
        let wrist = hand.wrist().xy();
        let rotation_delta = match history.previous_wrist {
            // X is inverted: the front camera image is mirrored
            Some(previous) => Vec2::new(
                -(wrist.x - previous.x) * config.rotation_sensitivity,
                (wrist.y - previous.y) * config.rotation_sensitivity,
            ),
            None => Vec2::ZERO,
        };

        trace!(?wrist, ?rotation_delta, "grip frame");

        let next = ClassifierHistory {
            previous_wrist: Some(wrist),
            previous_wrist_distance: None,
        };
        return (GestureState::grip(rotation_delta), next);
    }

    // Any non-grip pose drops the wrist so a later grip starts fresh
    let next = ClassifierHistory::default();

    if pose.is_point() {
        let tip = hand.index_tip();
        let pointer = Vec2::new((1.0 - tip.x) * 2.0 - 1.0, -(tip.y * 2.0 - 1.0));
        trace!(?pointer, "point frame");
        return (GestureState::point(pointer), next);
    }

    trace!(?pose, "hand present, no gesture");
    (GestureState::idle(true), next)
}

/// Stateful classifier owning its history and configuration
#[derive(Debug, Clone, Default)]
pub struct GestureClassifier {
    config: ClassifierConfig,
    history: ClassifierHistory,
    last_gesture: GestureType,
    malformed_frames: u64,
}

impl GestureClassifier {
    /// Create a classifier with default thresholds
    pub fn new() -> Self {
        Self::with_config(ClassifierConfig::default())
    }

    /// Create a classifier with custom thresholds
    pub fn with_config(config: ClassifierConfig) -> Self {
        Self {
            config,
            history: ClassifierHistory::default(),
            last_gesture: GestureType::None,
            malformed_frames: 0,
        }
    }

    /// Classify the next frame and advance the history
    pub fn classify(&mut self, frame: &LandmarkFrame) -> GestureState {
        let hands = match validate_frame(frame) {
            Ok(hands) => hands,
            Err(e) => {
                self.malformed_frames += 1;
                debug!("Malformed landmark frame treated as empty: {}", e);
                HandSet::None
            }
        };

        let (state, next) = classify_hands(&hands, &self.history, &self.config);
        self.history = next;

        if state.gesture != self.last_gesture {
            debug!("Gesture changed: {} -> {}", self.last_gesture, state.gesture);
            self.last_gesture = state.gesture;
        }

        state
    }

    /// Forget all cross-frame memory
    pub fn reset(&mut self) {
        self.history = ClassifierHistory::default();
        self.last_gesture = GestureType::None;
    }

    pub fn history(&self) -> &ClassifierHistory {
        &self.history
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Frames rejected by validation so far
    pub fn malformed_frames(&self) -> u64 {
        self.malformed_frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gestura_core::{
        Landmark, HAND_LANDMARK_COUNT, INDEX_TIP, MIDDLE_TIP, PINKY_TIP, RING_TIP, WRIST,
    };
    use proptest::prelude::*;

    fn hand(wrist: (f32, f32), index: f32, middle: f32, ring: f32, pinky: f32) -> Vec<Landmark> {
        let (wx, wy) = wrist;
        let mut points = vec![Landmark::new(wx, wy, 0.0); HAND_LANDMARK_COUNT];
        points[WRIST] = Landmark::new(wx, wy, 0.0);
        points[INDEX_TIP] = Landmark::new(wx, wy - index, 0.0);
        points[MIDDLE_TIP] = Landmark::new(wx, wy - middle, 0.0);
        points[RING_TIP] = Landmark::new(wx, wy - ring, 0.0);
        points[PINKY_TIP] = Landmark::new(wx, wy - pinky, 0.0);
        points
    }

    fn fist(x: f32, y: f32) -> Vec<Landmark> {
        hand((x, y), 0.1, 0.1, 0.1, 0.1)
    }

    fn pointing(x: f32, y: f32, pinky: f32) -> Vec<Landmark> {
        hand((x, y), 0.35, 0.1, 0.1, pinky)
    }

    fn open(x: f32, y: f32) -> Vec<Landmark> {
        hand((x, y), 0.35, 0.35, 0.35, 0.35)
    }

    fn one(h: Vec<Landmark>) -> LandmarkFrame {
        LandmarkFrame::new(vec![h])
    }

    fn two_at_distance(d: f32) -> LandmarkFrame {
        LandmarkFrame::new(vec![open(0.5 - d / 2.0, 0.6), open(0.5 + d / 2.0, 0.6)])
    }

    #[test]
    fn test_reference_scenario() {
        let mut classifier = GestureClassifier::new();

        // Frame 1: no hands
        let s1 = classifier.classify(&LandmarkFrame::empty());
        assert_eq!(s1.gesture, GestureType::None);
        assert!(!s1.hand_present);

        // Frame 2: fist, no prior wrist
        let s2 = classifier.classify(&one(fist(0.5, 0.5)));
        assert_eq!(s2.gesture, GestureType::Grip);
        assert_eq!(s2.rotation_delta, Vec2::ZERO);

        // Frame 3: wrist moved right by 0.05
        let s3 = classifier.classify(&one(fist(0.55, 0.5)));
        assert_eq!(s3.gesture, GestureType::Grip);
        assert!((s3.rotation_delta.x - (-0.15)).abs() < 1e-5);
        assert!(s3.rotation_delta.y.abs() < 1e-6);

        // Frame 4: two hands, first two-hand frame
        let s4 = classifier.classify(&two_at_distance(0.3));
        assert_eq!(s4.gesture, GestureType::PinchZoom);
        assert_eq!(s4.scale_factor, 1.0);

        // Frame 5: hands moved apart
        let s5 = classifier.classify(&two_at_distance(0.35));
        assert_eq!(s5.gesture, GestureType::PinchZoom);
        assert!((s5.scale_factor - 1.075).abs() < 1e-4);
    }

    #[test]
    fn test_pure_classify_matches_stateful() {
        let config = ClassifierConfig::default();
        let frames = [
            one(fist(0.4, 0.5)),
            one(fist(0.45, 0.52)),
            two_at_distance(0.2),
            one(pointing(0.3, 0.6, 0.1)),
        ];

        let mut classifier = GestureClassifier::new();
        let mut history = ClassifierHistory::default();
        for frame in &frames {
            let (pure, next) = classify(frame, &history, &config);
            history = next;
            assert_eq!(pure, classifier.classify(frame));
            assert_eq!(&history, classifier.history());
        }
    }

    #[test]
    fn test_point_maps_to_mirrored_ndc() {
        let (state, history) = classify(
            &one(pointing(0.25, 0.75, 0.1)),
            &ClassifierHistory::default(),
            &ClassifierConfig::default(),
        );
        // Index tip sits at (0.25, 0.40)
        assert_eq!(state.gesture, GestureType::Point);
        assert!((state.pointer_position.x - 0.5).abs() < 1e-5);
        assert!((state.pointer_position.y - 0.2).abs() < 1e-5);
        assert!(history.is_empty());
    }

    #[test]
    fn test_grip_delta_y_not_mirrored() {
        let config = ClassifierConfig::default();
        let (_, history) = classify(&one(fist(0.5, 0.5)), &ClassifierHistory::default(), &config);
        let (state, _) = classify(&one(fist(0.5, 0.6)), &history, &config);
        assert!((state.rotation_delta.y - 0.3).abs() < 1e-5);
        assert!(state.rotation_delta.x.abs() < 1e-6);
    }

    #[test]
    fn test_open_hand_is_present_but_idle() {
        let (state, history) = classify(
            &one(open(0.5, 0.6)),
            &ClassifierHistory {
                previous_wrist: Some(Vec2::new(0.1, 0.1)),
                previous_wrist_distance: Some(0.4),
            },
            &ClassifierConfig::default(),
        );
        assert_eq!(state.gesture, GestureType::None);
        assert!(state.hand_present);
        assert!(history.is_empty());
    }

    #[test]
    fn test_pointing_interrupts_grip_tracking() {
        let mut classifier = GestureClassifier::new();
        classifier.classify(&one(fist(0.2, 0.5)));
        classifier.classify(&one(pointing(0.2, 0.5, 0.1)));
        let resumed = classifier.classify(&one(fist(0.8, 0.5)));
        assert_eq!(resumed.rotation_delta, Vec2::ZERO);
    }

    #[test]
    fn test_one_hand_clears_pinch_history() {
        let mut classifier = GestureClassifier::new();
        classifier.classify(&two_at_distance(0.2));
        classifier.classify(&one(fist(0.5, 0.5)));
        let zoom = classifier.classify(&two_at_distance(0.6));
        assert_eq!(zoom.scale_factor, 1.0);
    }

    #[test]
    fn test_two_hands_win_over_fists() {
        let frame = LandmarkFrame::new(vec![fist(0.3, 0.5), fist(0.7, 0.5)]);
        let (state, history) =
            classify(&frame, &ClassifierHistory::default(), &ClassifierConfig::default());
        assert_eq!(state.gesture, GestureType::PinchZoom);
        assert!(history.previous_wrist.is_none());
    }

    #[test]
    fn test_malformed_frame_is_absent_and_resets() {
        let mut classifier = GestureClassifier::new();
        classifier.classify(&one(fist(0.5, 0.5)));

        let mut short = fist(0.5, 0.5);
        short.truncate(10);
        let state = classifier.classify(&one(short));

        assert_eq!(state, GestureState::absent());
        assert!(classifier.history().is_empty());
        assert_eq!(classifier.malformed_frames(), 1);
    }

    #[test]
    fn test_more_than_two_hands_uses_first_two() {
        let config = ClassifierConfig::default();
        let three = LandmarkFrame::new(vec![open(0.3, 0.5), open(0.6, 0.5), open(0.9, 0.5)]);
        let (state, history) = classify(&three, &ClassifierHistory::default(), &config);
        assert_eq!(state.gesture, GestureType::PinchZoom);
        assert!((history.previous_wrist_distance.unwrap() - 0.3).abs() < 1e-5);
    }

    #[test]
    fn test_reset_forgets_history() {
        let mut classifier = GestureClassifier::new();
        classifier.classify(&one(fist(0.5, 0.5)));
        classifier.reset();
        let state = classifier.classify(&one(fist(0.9, 0.9)));
        assert_eq!(state.rotation_delta, Vec2::ZERO);
    }

    fn coord() -> impl Strategy<Value = f32> {
        0.35f32..0.65
    }

    proptest! {
        #[test]
        fn prop_point_independent_of_pinky(x in coord(), y in 0.5f32..0.9, pinky in 0.0f32..0.45) {
            let (state, _) = classify(
                &one(pointing(x, y, pinky)),
                &ClassifierHistory::default(),
                &ClassifierConfig::default(),
            );
            prop_assert_eq!(state.gesture, GestureType::Point);
        }

        #[test]
        fn prop_grip_delta_from_displacement(
            x0 in coord(), y0 in coord(), dx in -0.1f32..0.1, dy in -0.1f32..0.1
        ) {
            let config = ClassifierConfig::default();
            let s = config.rotation_sensitivity;
            let (first, history) = classify(&one(fist(x0, y0)), &ClassifierHistory::default(), &config);
            prop_assert_eq!(first.rotation_delta, Vec2::ZERO);

            let (second, _) = classify(&one(fist(x0 + dx, y0 + dy)), &history, &config);
            let expected_x = -((x0 + dx) - x0) * s;
            let expected_y = ((y0 + dy) - y0) * s;
            prop_assert!((second.rotation_delta.x - expected_x).abs() < 1e-4);
            prop_assert!((second.rotation_delta.y - expected_y).abs() < 1e-4);
        }

        #[test]
        fn prop_zoom_factor_tracks_distance_change(d0 in 0.1f32..0.6, d1 in 0.1f32..0.6) {
            let config = ClassifierConfig::default();
            let (first, history) = classify(&two_at_distance(d0), &ClassifierHistory::default(), &config);
            prop_assert_eq!(first.scale_factor, 1.0);

            let (second, _) = classify(&two_at_distance(d1), &history, &config);
            let previous = history.previous_wrist_distance.unwrap();
            let expected = 1.0 + (d1 - previous) * config.zoom_sensitivity;
            prop_assert!((second.scale_factor - expected).abs() < 1e-4);
        }

        #[test]
        fn prop_hand_loss_resets_history(x in coord(), y in coord(), d in 0.1f32..0.6) {
            let mut classifier = GestureClassifier::new();
            classifier.classify(&one(fist(x, y)));
            classifier.classify(&two_at_distance(d));
            classifier.classify(&one(fist(x, y)));
            classifier.classify(&LandmarkFrame::empty());
            prop_assert!(classifier.history().is_empty());

            let regrip = classifier.classify(&one(fist(1.0 - x, 1.0 - y)));
            prop_assert_eq!(regrip.rotation_delta, Vec2::ZERO);

            classifier.classify(&LandmarkFrame::empty());
            let rezoom = classifier.classify(&two_at_distance(d + 0.2));
            prop_assert_eq!(rezoom.scale_factor, 1.0);
        }

        #[test]
        fn prop_classification_is_total(
            hands in prop::collection::vec(
                prop::collection::vec(
                    (-10.0f32..10.0, -10.0f32..10.0, -1.0f32..1.0)
                        .prop_map(|(x, y, z)| Landmark::new(x, y, z)),
                    0..25,
                ),
                0..4,
            )
        ) {
            let frame = LandmarkFrame::new(hands);
            let (state, _) = classify(&frame, &ClassifierHistory::default(), &ClassifierConfig::default());
            prop_assert!(state.scale_factor.is_finite());
            prop_assert!(state.rotation_delta.is_finite());
            if state.gesture != GestureType::None {
                prop_assert!(state.hand_present);
            }
        }
    }
}
