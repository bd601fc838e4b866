//! Static table of known gesture classes and their display metadata.
//!
//! Built at compile time and never mutated; exposed only through the
//! read-only accessors below.

use crate::error::{GestureError, Result};

/// The gesture classes the classifier can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureKind {
    /// Fist or unrecognized pose.
    Neutral,
    /// Index and middle extended.
    Victory,
    /// Thumb only (thumbs up).
    Ok,
    /// Thumb and index tips touching.
    Perfect,
    /// Open palm.
    Stop,
    /// Index and pinky extended.
    Rock,
    /// Index only (pointing).
    Calm,
}

impl GestureKind {
    pub const ALL: [GestureKind; 7] = [
        GestureKind::Neutral,
        GestureKind::Victory,
        GestureKind::Ok,
        GestureKind::Perfect,
        GestureKind::Stop,
        GestureKind::Rock,
        GestureKind::Calm,
    ];

    pub fn id(&self) -> u32 {
        *self as u32
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Victory => "victory",
            Self::Ok => "ok",
            Self::Perfect => "perfect",
            Self::Stop => "stop",
            Self::Rock => "rock",
            Self::Calm => "calm",
        }
    }

    pub fn from_id(id: u32) -> Option<Self> {
        Self::ALL.get(id as usize).copied()
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == key)
    }

    /// Registry entry for this gesture.
    pub fn info(&self) -> &'static GestureInfo {
        &GESTURES[self.id() as usize]
    }
}

/// Display metadata for one gesture class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GestureInfo {
    pub numeric_id: u32,
    pub key: &'static str,
    pub display_name: &'static str,
    pub meaning: &'static str,
    /// Asset file name resolved by the renderer.
    pub avatar_reference: &'static str,
}

impl GestureInfo {
    pub fn kind(&self) -> GestureKind {
        GestureKind::ALL[self.numeric_id as usize]
    }

    pub fn to_sexp(&self) -> String {
        format!(
            "(:id {} :key \"{}\" :display \"{}\" :meaning \"{}\" :avatar \"{}\")",
            self.numeric_id, self.key, self.display_name, self.meaning, self.avatar_reference,
        )
    }
}

/// Entries are stored in id order.
static GESTURES: [GestureInfo; 7] = [
    GestureInfo {
        numeric_id: 0,
        key: "neutral",
        display_name: "Neutral",
        meaning: "Neutral",
        avatar_reference: "neutral.png",
    },
    GestureInfo {
        numeric_id: 1,
        key: "victory",
        display_name: "Victory",
        meaning: "Victory Sign",
        avatar_reference: "victory.jpg",
    },
    GestureInfo {
        numeric_id: 2,
        key: "ok",
        display_name: "OK",
        meaning: "OK / Thumbs Up",
        avatar_reference: "ok.jpg",
    },
    GestureInfo {
        numeric_id: 3,
        key: "perfect",
        display_name: "Perfect",
        meaning: "Perfect Gesture",
        avatar_reference: "perfect.jpg",
    },
    GestureInfo {
        numeric_id: 4,
        key: "stop",
        display_name: "Stop",
        meaning: "Stop / Open Palm",
        avatar_reference: "stop.jpg",
    },
    GestureInfo {
        numeric_id: 5,
        key: "rock",
        display_name: "Rock",
        meaning: "Rock Sign",
        avatar_reference: "rock.jpg",
    },
    GestureInfo {
        numeric_id: 6,
        key: "calm",
        display_name: "Calm",
        meaning: "Calm / Point Gesture",
        avatar_reference: "calm.jpg",
    },
];

/// All registry entries in id order.
pub fn all() -> &'static [GestureInfo] {
    &GESTURES
}

pub fn by_key(key: &str) -> Option<&'static GestureInfo> {
    GESTURES.iter().find(|g| g.key == key)
}

pub fn by_id(id: u32) -> Option<&'static GestureInfo> {
    GESTURES.get(id as usize)
}

/// Like [`by_key`], but reports a miss as `LookupMiss`.
pub fn lookup_key(key: &str) -> Result<&'static GestureInfo> {
    by_key(key).ok_or_else(|| GestureError::LookupMiss {
        query: format!("key \"{}\"", key),
    })
}

/// Like [`by_id`], but reports a miss as `LookupMiss`.
pub fn lookup_id(id: u32) -> Result<&'static GestureInfo> {
    by_id(id).ok_or_else(|| GestureError::LookupMiss {
        query: format!("id {}", id),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seven_entries_in_id_order() {
        assert_eq!(all().len(), 7);
        for (i, info) in all().iter().enumerate() {
            assert_eq!(info.numeric_id as usize, i);
        }
    }

    #[test]
    fn test_bijection() {
        let mut ids = HashSet::new();
        let mut keys = HashSet::new();
        for info in all() {
            assert!(ids.insert(info.numeric_id), "duplicate id {}", info.numeric_id);
            assert!(keys.insert(info.key), "duplicate key {}", info.key);
            assert_eq!(by_id(info.numeric_id).unwrap().key, info.key);
            assert_eq!(by_key(info.key).unwrap().numeric_id, info.numeric_id);
        }
    }

    #[test]
    fn test_kind_matches_table() {
        for kind in GestureKind::ALL {
            let info = kind.info();
            assert_eq!(info.key, kind.as_str());
            assert_eq!(info.numeric_id, kind.id());
            assert_eq!(info.kind(), kind);
            assert_eq!(GestureKind::from_key(kind.as_str()), Some(kind));
            assert_eq!(GestureKind::from_id(kind.id()), Some(kind));
        }
    }

    #[test]
    fn test_expected_keys() {
        let keys: Vec<&str> = all().iter().map(|g| g.key).collect();
        assert_eq!(
            keys,
            ["neutral", "victory", "ok", "perfect", "stop", "rock", "calm"]
        );
    }

    #[test]
    fn test_unknown_lookups() {
        assert!(by_key("wave").is_none());
        assert!(by_key("").is_none());
        assert!(by_key("Neutral").is_none());
        assert!(by_id(7).is_none());
        assert!(GestureKind::from_id(99).is_none());

        assert!(matches!(
            lookup_key("wave"),
            Err(GestureError::LookupMiss { .. })
        ));
        assert!(matches!(lookup_id(42), Err(GestureError::LookupMiss { .. })));
        assert_eq!(lookup_id(0).unwrap().key, "neutral");
    }

    #[test]
    fn test_info_sexp() {
        let sexp = by_key("ok").unwrap().to_sexp();
        assert!(sexp.contains(":id 2"));
        assert!(sexp.contains(":display \"OK\""));
        assert!(sexp.contains(":avatar \"ok.jpg\""));
    }
}
