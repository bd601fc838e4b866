//! Per-finger extension state from landmark geometry.
//!
//! Assumes an upright camera feed: a finger is extended when its tip sits
//! above its proximal joint in the image. The thumb moves sideways, so it is
//! judged on horizontal offsets instead. Depth is never consulted.

use crate::error::Result;

use super::landmarks::{HandLandmarks, Landmark, LandmarkIndex};

// ── Finger ─────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    pub const ALL: [Finger; 5] = [
        Finger::Thumb,
        Finger::Index,
        Finger::Middle,
        Finger::Ring,
        Finger::Pinky,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Thumb => "thumb",
            Self::Index => "index",
            Self::Middle => "middle",
            Self::Ring => "ring",
            Self::Pinky => "pinky",
        }
    }

    pub fn tip(&self) -> LandmarkIndex {
        match self {
            Self::Thumb => LandmarkIndex::ThumbTip,
            Self::Index => LandmarkIndex::IndexTip,
            Self::Middle => LandmarkIndex::MiddleTip,
            Self::Ring => LandmarkIndex::RingTip,
            Self::Pinky => LandmarkIndex::PinkyTip,
        }
    }

    /// Joint the tip is compared against (IP for the thumb, PIP otherwise).
    pub fn pip(&self) -> LandmarkIndex {
        match self {
            Self::Thumb => LandmarkIndex::ThumbIp,
            Self::Index => LandmarkIndex::IndexPip,
            Self::Middle => LandmarkIndex::MiddlePip,
            Self::Ring => LandmarkIndex::RingPip,
            Self::Pinky => LandmarkIndex::PinkyPip,
        }
    }

    fn slot(&self) -> usize {
        *self as usize
    }
}

// ── Thresholds ─────────────────────────────────────────────

/// Pixel thresholds for extension tests.
#[derive(Debug, Clone, PartialEq)]
pub struct FingerThresholds {
    /// A non-thumb tip must be this many pixels above its PIP.
    pub tip_margin_px: i32,
    /// Thumb tip this far (horizontally) from the wrist counts as extended.
    pub thumb_wrist_px: i32,
    /// Otherwise, thumb tip this far (horizontally) from the IP joint counts.
    pub thumb_ip_px: i32,
}

impl Default for FingerThresholds {
    fn default() -> Self {
        Self {
            tip_margin_px: 5,
            thumb_wrist_px: 30,
            thumb_ip_px: 20,
        }
    }
}

// ── Finger states ──────────────────────────────────────────

/// Extended/folded flag for each of the five fingers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FingerStates {
    extended: [bool; 5],
}

impl FingerStates {
    /// Build from flags in thumb, index, middle, ring, pinky order.
    pub fn new(extended: [bool; 5]) -> Self {
        Self { extended }
    }

    /// Derive states from a validated hand.
    pub fn from_hand(hand: &HandLandmarks, thresholds: &FingerThresholds) -> Self {
        let mut extended = [false; 5];
        for finger in Finger::ALL {
            extended[finger.slot()] = match finger {
                Finger::Thumb => thumb_extended(hand, thresholds),
                _ => {
                    let tip = hand[finger.tip()];
                    let pip = hand[finger.pip()];
                    i64::from(tip.y) < i64::from(pip.y) - i64::from(thresholds.tip_margin_px)
                }
            };
        }
        Self { extended }
    }

    pub fn is_extended(&self, finger: Finger) -> bool {
        self.extended[finger.slot()]
    }

    pub fn thumb(&self) -> bool {
        self.is_extended(Finger::Thumb)
    }

    pub fn index(&self) -> bool {
        self.is_extended(Finger::Index)
    }

    pub fn middle(&self) -> bool {
        self.is_extended(Finger::Middle)
    }

    pub fn ring(&self) -> bool {
        self.is_extended(Finger::Ring)
    }

    pub fn pinky(&self) -> bool {
        self.is_extended(Finger::Pinky)
    }

    /// Number of extended fingers, thumb included.
    pub fn extended_count(&self) -> usize {
        self.extended.iter().filter(|e| **e).count()
    }

    /// The single extended finger, if exactly one is extended.
    pub fn sole_extended(&self) -> Option<Finger> {
        if self.extended_count() != 1 {
            return None;
        }
        Finger::ALL.into_iter().find(|f| self.is_extended(*f))
    }

    /// Flags in thumb, index, middle, ring, pinky order.
    pub fn as_array(&self) -> [bool; 5] {
        self.extended
    }

    /// S-expression plist, e.g. `(:thumb t :index nil ...)`.
    pub fn to_sexp(&self) -> String {
        let fields: Vec<String> = Finger::ALL
            .iter()
            .map(|f| {
                format!(
                    ":{} {}",
                    f.as_str(),
                    if self.is_extended(*f) { "t" } else { "nil" }
                )
            })
            .collect();
        format!("({})", fields.join(" "))
    }
}

fn thumb_extended(hand: &HandLandmarks, thresholds: &FingerThresholds) -> bool {
    let wrist = hand[LandmarkIndex::Wrist];
    let tip = hand[LandmarkIndex::ThumbTip];
    let ip = hand[LandmarkIndex::ThumbIp];

    if horizontal_gap(&tip, &wrist) > i64::from(thresholds.thumb_wrist_px) {
        return true;
    }
    horizontal_gap(&tip, &ip) > i64::from(thresholds.thumb_ip_px)
}

/// Absolute x offset, widened so extreme pixel values cannot overflow.
fn horizontal_gap(a: &Landmark, b: &Landmark) -> i64 {
    (i64::from(a.x) - i64::from(b.x)).abs()
}

/// Finger states for a raw landmark sequence, with default thresholds.
///
/// Fails with `InvalidInput` unless `landmarks` holds exactly 21 points.
pub fn extract_finger_states(landmarks: &[Landmark]) -> Result<FingerStates> {
    let hand = HandLandmarks::from_slice(landmarks)?;
    Ok(FingerStates::from_hand(&hand, &FingerThresholds::default()))
}
