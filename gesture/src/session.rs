//! One hand-tracking session: classifier + smoother, driven frame by frame.
//!
//! A session owns its smoothing window exclusively.  Hosts that track
//! several hands or cameras at once create one session per stream.

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::gesture::registry::{self, GestureInfo, GestureKind};
use crate::gesture::{GestureClassifier, GestureConfig, GestureResult, TemporalSmoother, DEFAULT_WINDOW};
use crate::hand::Landmark;

// ── Config ─────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// Number of recent frames in the majority vote.
    pub smoothing_window: usize,
    /// Classification thresholds.
    pub gesture: GestureConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            smoothing_window: DEFAULT_WINDOW,
            gesture: GestureConfig::default(),
        }
    }
}

// ── Frame outcome ──────────────────────────────────────────

/// Overlay text for a frame: label line plus optional meaning line.
#[derive(Debug, Clone, PartialEq)]
pub struct Caption {
    pub label: String,
    pub meaning: Option<&'static str>,
}

/// Result of one processed frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameOutcome {
    /// Raw classification for this frame.
    pub raw: GestureResult,
    /// Majority-vote key over the smoothing window.
    pub stable_key: String,
    /// False when the detector reported no hand.
    pub hand_present: bool,
}

impl FrameOutcome {
    /// Registry entry for the stable key.  `None` if the key is unknown.
    pub fn stable_info(&self) -> Option<&'static GestureInfo> {
        registry::by_key(&self.stable_key)
    }

    /// Text shown over the video: `"<key> (<confidence>)"` and the
    /// gesture's meaning, or the bare key when the registry has no entry.
    pub fn caption(&self) -> Caption {
        match self.stable_info() {
            Some(info) => Caption {
                label: format!("{} ({:.2})", info.key, self.raw.confidence),
                meaning: Some(info.meaning),
            },
            None => Caption {
                label: format!("{} ({:.2})", self.stable_key, self.raw.confidence),
                meaning: None,
            },
        }
    }

    pub fn to_sexp(&self, frame: u64) -> String {
        let display = match self.stable_info() {
            Some(info) => format!(
                ":display \"{}\" :meaning \"{}\" :avatar \"{}\"",
                info.display_name, info.meaning, info.avatar_reference
            ),
            None => ":display nil".to_string(),
        };
        format!(
            "(:frame {} :hand {} :raw \"{}\" :id {} :confidence {:.2} :stable \"{}\" {})",
            frame,
            if self.hand_present { "t" } else { "nil" },
            self.raw.key(),
            self.raw.numeric_id(),
            self.raw.confidence,
            self.stable_key,
            display,
        )
    }
}

// ── Session ────────────────────────────────────────────────

pub struct TrackingSession {
    classifier: GestureClassifier,
    smoother: TemporalSmoother,
    /// Frames that produced an outcome.
    frames: u64,
    /// Frames rejected as invalid input.
    skipped: u64,
    last_raw: Option<GestureResult>,
}

impl TrackingSession {
    /// Start a session.  Fails with `Configuration` on a zero smoothing window.
    pub fn new(config: SessionConfig) -> Result<Self> {
        let smoother = TemporalSmoother::new(config.smoothing_window)?;
        info!(
            "gesture session started (window {})",
            config.smoothing_window
        );
        Ok(Self {
            classifier: GestureClassifier::new(config.gesture),
            smoother,
            frames: 0,
            skipped: 0,
            last_raw: None,
        })
    }

    /// Process one detector frame.
    ///
    /// Only the first hand is classified.  A frame with no hands counts as a
    /// zero-confidence neutral observation.  On `InvalidInput` the frame is
    /// skipped: the smoother is not pushed and the previous stable label
    /// stays in effect.
    pub fn process_frame<H: AsRef<[Landmark]>>(
        &mut self,
        hands: &[H],
        image_width: i32,
        image_height: i32,
    ) -> Result<FrameOutcome> {
        let (raw, hand_present) = match hands.first() {
            Some(hand) => {
                match self
                    .classifier
                    .classify(hand.as_ref(), image_width, image_height)
                {
                    Ok(r) => (r, true),
                    Err(e) => {
                        self.skipped += 1;
                        warn!("skipping frame: {}", e);
                        return Err(e);
                    }
                }
            }
            None => (GestureResult::new(GestureKind::Neutral, 0.0), false),
        };

        self.frames += 1;
        self.last_raw = Some(raw);
        let stable_key = self.smoother.push(raw.key()).to_string();
        debug!(
            "frame {}: raw {} ({:.2}) stable {}",
            self.frames,
            raw.key(),
            raw.confidence,
            stable_key
        );

        Ok(FrameOutcome {
            raw,
            stable_key,
            hand_present,
        })
    }

    /// Current stable key, if any frame has been accepted.
    pub fn stable_key(&self) -> Option<&str> {
        self.smoother.stable()
    }

    pub fn last_raw(&self) -> Option<&GestureResult> {
        self.last_raw.as_ref()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn skipped(&self) -> u64 {
        self.skipped
    }

    pub fn config(&self) -> &GestureConfig {
        &self.classifier.config
    }

    /// End the session and drop its smoothing history.
    pub fn end(&mut self) {
        info!(
            "gesture session ended ({} frames, {} skipped)",
            self.frames, self.skipped
        );
        self.smoother.clear();
        self.last_raw = None;
        self.frames = 0;
        self.skipped = 0;
    }

    /// Generate s-expression for session status.
    pub fn status_sexp(&self) -> String {
        let stable = self
            .smoother
            .stable()
            .map(|k| format!("\"{}\"", k))
            .unwrap_or_else(|| "nil".to_string());
        let (raw, conf) = match &self.last_raw {
            Some(r) => (format!("\"{}\"", r.key()), r.confidence),
            None => ("nil".to_string(), 0.0),
        };
        format!(
            "(:stable {} :raw {} :confidence {:.2} :window {} :filled {} :frames {} :skipped {})",
            stable,
            raw,
            conf,
            self.smoother.capacity(),
            self.smoother.len(),
            self.frames,
            self.skipped,
        )
    }

    /// Generate s-expression for session config.
    pub fn config_sexp(&self) -> String {
        let c = &self.classifier.config;
        format!(
            "(:window {} :tip-margin-px {} :thumb-wrist-px {} :thumb-ip-px {} :pinch-min-px {} :pinch-width-ratio {:.3})",
            self.smoother.capacity(),
            c.fingers.tip_margin_px,
            c.fingers.thumb_wrist_px,
            c.fingers.thumb_ip_px,
            c.pinch_min_px,
            c.pinch_width_ratio,
        )
    }
}
