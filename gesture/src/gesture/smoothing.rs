//! Majority-vote smoothing of per-frame gesture keys.
//!
//! A fixed-capacity recency window holds the last K raw keys; the stable
//! label is the most frequent key in the window.
//!
//! Tie-break: when several keys share the top count, the winner is the one
//! whose earliest occurrence in the window comes first, scanning oldest to
//! newest.  Eviction can therefore change the winner between two tied keys
//! even if neither count changes.

use std::collections::{HashMap, VecDeque};

use tracing::debug;

use crate::error::{GestureError, Result};

/// Default smoothing window (frames).
pub const DEFAULT_WINDOW: usize = 7;

// ── Ring buffer ────────────────────────────────────────────

/// Fixed-capacity FIFO that keeps only the most recent items.
#[derive(Debug, Clone)]
pub struct RingBuffer<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> RingBuffer<T> {
    /// Fails with `Configuration` when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(GestureError::Configuration {
                reason: "ring buffer capacity must be > 0".to_string(),
            });
        }
        Ok(Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        })
    }

    /// Append an item, returning the evicted oldest item when full.
    pub fn push(&mut self, item: T) -> Option<T> {
        let evicted = if self.items.len() == self.capacity {
            self.items.pop_front()
        } else {
            None
        };
        self.items.push_back(item);
        evicted
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Most recently pushed item.
    pub fn latest(&self) -> Option<&T> {
        self.items.back()
    }

    /// Iterate oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.iter().cloned().collect()
    }
}

// ── Temporal smoother ──────────────────────────────────────

/// Per-session label smoother.  Not shared between sessions.
#[derive(Debug, Clone)]
pub struct TemporalSmoother {
    window: RingBuffer<String>,
    stable: Option<String>,
}

impl TemporalSmoother {
    /// Fails with `Configuration` when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self {
            window: RingBuffer::new(capacity)?,
            stable: None,
        })
    }

    /// Record a raw key and return the current stable key.
    pub fn push(&mut self, key: impl Into<String>) -> &str {
        self.window.push(key.into());

        let winner = majority(&self.window);
        if self.stable.as_deref() != Some(winner) {
            debug!(
                "stable label {} -> {}",
                self.stable.as_deref().unwrap_or("nil"),
                winner
            );
            self.stable = Some(winner.to_string());
        }
        self.stable.as_deref().unwrap_or(winner)
    }

    /// Stable key from the last push, if any.
    pub fn stable(&self) -> Option<&str> {
        self.stable.as_deref()
    }

    pub fn len(&self) -> usize {
        self.window.len()
    }

    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.window.is_full()
    }

    pub fn capacity(&self) -> usize {
        self.window.capacity()
    }

    /// Window contents, oldest first.
    pub fn window(&self) -> &RingBuffer<String> {
        &self.window
    }

    /// Forget all history, e.g. when the tracking session ends.
    pub fn clear(&mut self) {
        self.window.clear();
        self.stable = None;
    }
}

/// Most frequent key; ties go to the key seen first, oldest to newest.
fn majority(window: &RingBuffer<String>) -> &str {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for key in window.iter() {
        *counts.entry(key.as_str()).or_insert(0) += 1;
    }
    let best = counts.values().copied().max().unwrap_or(0);
    window
        .iter()
        .map(String::as_str)
        .find(|k| counts.get(k).copied() == Some(best))
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push_all(s: &mut TemporalSmoother, keys: &[&str]) -> String {
        let mut last = String::new();
        for k in keys {
            last = s.push(*k).to_string();
        }
        last
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert!(matches!(
            TemporalSmoother::new(0),
            Err(GestureError::Configuration { .. })
        ));
        assert!(matches!(
            RingBuffer::<u8>::new(0),
            Err(GestureError::Configuration { .. })
        ));
    }

    #[test]
    fn test_fifo_eviction() {
        let mut s = TemporalSmoother::new(DEFAULT_WINDOW).unwrap();
        let keys: Vec<String> = (0..10).map(|i| format!("k{}", i)).collect();
        for k in &keys {
            s.push(k.as_str());
        }
        assert_eq!(s.len(), 7);
        assert!(s.is_full());
        assert_eq!(s.window().to_vec(), keys[3..].to_vec());
        assert_eq!(s.window().latest().map(String::as_str), Some("k9"));
    }

    #[test]
    fn test_ring_buffer_push_returns_evicted() {
        let mut buf = RingBuffer::new(2).unwrap();
        assert!(buf.is_empty());
        assert_eq!(buf.push(1), None);
        assert_eq!(buf.push(2), None);
        assert!(buf.is_full());
        assert_eq!(buf.push(3), Some(1));
        assert_eq!(buf.to_vec(), vec![2, 3]);
        assert_eq!(buf.capacity(), 2);
        buf.clear();
        assert_eq!(buf.len(), 0);
        assert_eq!(buf.latest(), None);
    }

    #[test]
    fn test_majority_vote() {
        let mut s = TemporalSmoother::new(7).unwrap();
        let stable = push_all(&mut s, &["a", "a", "b", "a", "c", "a", "b"]);
        assert_eq!(stable, "a");
    }

    #[test]
    fn test_first_push_is_stable() {
        let mut s = TemporalSmoother::new(7).unwrap();
        assert_eq!(s.stable(), None);
        assert_eq!(s.push("victory"), "victory");
        assert_eq!(s.stable(), Some("victory"));
    }

    #[test]
    fn test_tie_goes_to_first_seen() {
        let mut s = TemporalSmoother::new(7).unwrap();
        assert_eq!(push_all(&mut s, &["b", "a"]), "b");
        assert_eq!(push_all(&mut s, &["a", "b"]), "b");

        let mut s = TemporalSmoother::new(4).unwrap();
        assert_eq!(push_all(&mut s, &["x", "y", "y", "x"]), "x");
        // Window becomes [y, y, x, z]: y leads outright.
        assert_eq!(s.push("z"), "y");
    }

    #[test]
    fn test_tie_shifts_after_eviction() {
        let mut s = TemporalSmoother::new(4).unwrap();
        assert_eq!(push_all(&mut s, &["a", "b", "a", "b"]), "a");
        // Window [b, a, b, a]: still tied, b is now seen first.
        assert_eq!(s.push("a"), "b");
        // Window [a, b, a, b] after one more b.
        assert_eq!(s.push("b"), "a");

        let mut s = TemporalSmoother::new(3).unwrap();
        assert_eq!(push_all(&mut s, &["a", "b", "c"]), "a");
        assert_eq!(s.push("d"), "b");
    }

    #[test]
    fn test_flicker_suppressed() {
        let mut s = TemporalSmoother::new(7).unwrap();
        push_all(&mut s, &["stop"; 7]);
        assert_eq!(s.push("rock"), "stop");
        assert_eq!(s.push("stop"), "stop");
        assert_eq!(s.push("neutral"), "stop");
    }

    #[test]
    fn test_clear() {
        let mut s = TemporalSmoother::new(3).unwrap();
        push_all(&mut s, &["ok", "ok"]);
        s.clear();
        assert!(s.is_empty());
        assert_eq!(s.stable(), None);
        assert_eq!(s.push("calm"), "calm");
    }
}
