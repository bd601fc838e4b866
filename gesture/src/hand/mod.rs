//! Hand input: landmark containers and finger-state extraction.

pub mod fingers;
pub mod landmarks;

pub use fingers::{extract_finger_states, Finger, FingerStates, FingerThresholds};
pub use landmarks::{HandLandmarks, Landmark, LandmarkIndex, LANDMARK_COUNT};

// ── Test helpers ───────────────────────────────────────────

#[cfg(test)]
pub(crate) mod testutil {
    use super::{Finger, Landmark, LandmarkIndex, LANDMARK_COUNT};

    /// Upright hand with the wrist at (200, 400) and each finger posed
    /// extended or folded per `flags` (thumb, index, middle, ring, pinky).
    pub fn hand_with(flags: [bool; 5]) -> Vec<Landmark> {
        let mut pts = vec![Landmark::default(); LANDMARK_COUNT];
        set_point(&mut pts, LandmarkIndex::Wrist, 200, 400);

        set_point(&mut pts, LandmarkIndex::ThumbCmc, 185, 380);
        set_point(&mut pts, LandmarkIndex::ThumbMcp, 180, 360);
        set_point(&mut pts, LandmarkIndex::ThumbIp, 195, 340);
        if flags[Finger::Thumb as usize] {
            set_point(&mut pts, LandmarkIndex::ThumbTip, 130, 320);
        } else {
            set_point(&mut pts, LandmarkIndex::ThumbTip, 205, 330);
        }

        let columns = [
            (Finger::Index, 230, [LandmarkIndex::IndexMcp, LandmarkIndex::IndexPip, LandmarkIndex::IndexDip, LandmarkIndex::IndexTip]),
            (Finger::Middle, 250, [LandmarkIndex::MiddleMcp, LandmarkIndex::MiddlePip, LandmarkIndex::MiddleDip, LandmarkIndex::MiddleTip]),
            (Finger::Ring, 270, [LandmarkIndex::RingMcp, LandmarkIndex::RingPip, LandmarkIndex::RingDip, LandmarkIndex::RingTip]),
            (Finger::Pinky, 290, [LandmarkIndex::PinkyMcp, LandmarkIndex::PinkyPip, LandmarkIndex::PinkyDip, LandmarkIndex::PinkyTip]),
        ];
        for (finger, x, [mcp, pip, dip, tip]) in columns {
            set_point(&mut pts, mcp, x, 320);
            set_point(&mut pts, pip, x, 280);
            if flags[finger as usize] {
                set_point(&mut pts, dip, x, 240);
                set_point(&mut pts, tip, x, 200);
            } else {
                set_point(&mut pts, dip, x, 300);
                set_point(&mut pts, tip, x, 300);
            }
        }
        pts
    }

    pub fn set_point(pts: &mut [Landmark], idx: LandmarkIndex, x: i32, y: i32) {
        let z = pts[idx.index()].z;
        pts[idx.index()] = Landmark::new(x, y, z);
    }
}
