//! Gesture classification: registry, rule engine and temporal smoothing.

pub mod classifier;
pub mod registry;
pub mod smoothing;

pub use classifier::{classify, GestureClassifier, GestureConfig, GestureResult};
pub use registry::{GestureInfo, GestureKind};
pub use smoothing::{RingBuffer, TemporalSmoother, DEFAULT_WINDOW};
