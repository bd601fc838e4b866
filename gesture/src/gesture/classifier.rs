//! Rule-based gesture classification from finger states.
//!
//! Rules run in a fixed priority order and the first match wins.  Several
//! rule conditions overlap (a thumb+index hand can satisfy both the pinch
//! rule and the pointing rule), so the order is part of the contract.

use tracing::trace;

use crate::error::{GestureError, Result};
use crate::hand::{Finger, FingerStates, FingerThresholds, HandLandmarks, Landmark, LandmarkIndex};

use super::registry::{GestureInfo, GestureKind};

// ── Config ─────────────────────────────────────────────────

/// Classification thresholds.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureConfig {
    /// Finger extension thresholds.
    pub fingers: FingerThresholds,
    /// Minimum thumb-index pinch distance threshold (pixels).
    pub pinch_min_px: i32,
    /// Pinch threshold as a fraction of image width; the larger of the two applies.
    pub pinch_width_ratio: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            fingers: FingerThresholds::default(),
            pinch_min_px: 40,
            pinch_width_ratio: 0.07,
        }
    }
}

impl GestureConfig {
    /// Thumb-index distance below which a pinch ("perfect") is recognized.
    pub fn pinch_threshold(&self, image_width: i32) -> f64 {
        let scaled = (f64::from(image_width) * self.pinch_width_ratio).floor();
        scaled.max(f64::from(self.pinch_min_px))
    }
}

// ── Result ─────────────────────────────────────────────────

/// Per-frame classification outcome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureResult {
    pub kind: GestureKind,
    /// Rule-specific score in [0, 1].
    pub confidence: f32,
}

impl GestureResult {
    pub fn new(kind: GestureKind, confidence: f32) -> Self {
        Self { kind, confidence }
    }

    pub fn key(&self) -> &'static str {
        self.kind.as_str()
    }

    pub fn numeric_id(&self) -> u32 {
        self.kind.id()
    }

    pub fn info(&self) -> &'static GestureInfo {
        self.kind.info()
    }
}

// ── Classifier ─────────────────────────────────────────────

/// Stateless classifier; one instance may serve any number of sessions.
#[derive(Debug, Clone, Default)]
pub struct GestureClassifier {
    pub config: GestureConfig,
}

impl GestureClassifier {
    pub fn new(config: GestureConfig) -> Self {
        Self { config }
    }

    /// Classify one hand's 21 landmarks captured in a `image_width` x
    /// `image_height` frame.
    ///
    /// Fails with `InvalidInput` on a wrong landmark count or a non-positive
    /// image dimension.
    pub fn classify(
        &self,
        landmarks: &[Landmark],
        image_width: i32,
        image_height: i32,
    ) -> Result<GestureResult> {
        let hand = HandLandmarks::from_slice(landmarks)?;
        self.classify_hand(&hand, image_width, image_height)
    }

    /// Classify an already validated hand.
    pub fn classify_hand(
        &self,
        hand: &HandLandmarks,
        image_width: i32,
        image_height: i32,
    ) -> Result<GestureResult> {
        if image_width <= 0 || image_height <= 0 {
            return Err(GestureError::invalid_input(format!(
                "image dimensions must be positive, got {}x{}",
                image_width, image_height
            )));
        }

        let states = FingerStates::from_hand(hand, &self.config.fingers);
        let pinch_dist = hand[LandmarkIndex::ThumbTip].distance_xy(&hand[LandmarkIndex::IndexTip]);
        let pinch_close = pinch_dist < self.config.pinch_threshold(image_width);

        let result = apply_rules(&states, pinch_close);
        trace!(
            "classified {} ({:.2}) fingers={} pinch={:.1}",
            result.key(),
            result.confidence,
            states.to_sexp(),
            pinch_dist,
        );
        Ok(result)
    }
}

/// Classify with default thresholds.
pub fn classify(landmarks: &[Landmark], image_width: i32, image_height: i32) -> Result<GestureResult> {
    GestureClassifier::default().classify(landmarks, image_width, image_height)
}

/// Priority-ordered rule table.
fn apply_rules(st: &FingerStates, pinch_close: bool) -> GestureResult {
    // 1. Thumb and index tips touching
    if pinch_close && st.thumb() && st.index() {
        return GestureResult::new(GestureKind::Perfect, 0.95);
    }

    // 2. Open palm
    if st.index() && st.middle() && st.ring() && st.pinky() {
        return GestureResult::new(GestureKind::Stop, 0.90);
    }

    // 3. Horns
    if st.index() && st.pinky() && !st.middle() && !st.ring() {
        return GestureResult::new(GestureKind::Rock, 0.90);
    }

    // 4. V sign
    if st.index() && st.middle() && !st.ring() && !st.pinky() {
        return GestureResult::new(GestureKind::Victory, 0.92);
    }

    // 5. Pointing; thumb unconstrained
    if st.index() && !st.middle() && !st.ring() && !st.pinky() {
        return GestureResult::new(GestureKind::Calm, 0.90);
    }

    // 6. Thumbs up
    if st.thumb() && !st.index() && !st.middle() && !st.ring() && !st.pinky() {
        return GestureResult::new(GestureKind::Ok, 0.90);
    }

    // 7. Single-finger fallback.  A lone middle or ring finger has no class.
    match st.sole_extended() {
        Some(Finger::Thumb) => return GestureResult::new(GestureKind::Ok, 0.80),
        Some(Finger::Index) => return GestureResult::new(GestureKind::Calm, 0.80),
        Some(Finger::Pinky) => return GestureResult::new(GestureKind::Rock, 0.75),
        _ => {}
    }

    GestureResult::new(GestureKind::Neutral, 0.50)
}
