//! RT-Gesture - hand gesture classification from 21-point hand landmarks.
//!
//! Per frame: landmarks -> finger states -> rule-based gesture -> majority
//! vote over recent frames.  Capture, landmark detection and rendering live
//! outside this crate.

pub mod error;
pub mod gesture;
pub mod hand;
pub mod replay;
pub mod session;

pub use error::{GestureError, Result};
pub use gesture::{registry, GestureClassifier, GestureConfig, GestureInfo, GestureKind, GestureResult, TemporalSmoother};
pub use hand::{extract_finger_states, Finger, FingerStates, HandLandmarks, Landmark, LandmarkIndex};
pub use session::{FrameOutcome, SessionConfig, TrackingSession};
