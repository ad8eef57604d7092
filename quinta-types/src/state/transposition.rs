//! Transposition counters and the naming-mode tag.

use serde::{Deserialize, Serialize};

/// Note-name display selection.
///
/// `Auto` carries the key index used for table lookup; the other variants
/// are the fixed displays. Stored as a single tagged value because the two
/// halves are mutually exclusive and switch together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoteNames {
    /// Automatic spelling from the key index (fifths from the reference).
    Auto(i32),
    /// Naturals plus enharmonic pairs on the black keys.
    Enharmonics1,
    /// The alternate enharmonic layout.
    Enharmonics2,
    /// Pitch-class numbers 0-11.
    PitchClasses,
}

impl NoteNames {
    /// Preference-store tag (`note_names` key). `Auto` always persists as
    /// `"auto"`; the key index is recomputed from the fifths counter on load.
    pub fn pref_value(&self) -> &'static str {
        match self {
            NoteNames::Auto(_) => "auto",
            NoteNames::Enharmonics1 => "enharmonics1",
            NoteNames::Enharmonics2 => "enharmonics2",
            NoteNames::PitchClasses => "numbers",
        }
    }

    pub fn key(&self) -> Option<i32> {
        match self {
            NoteNames::Auto(k) => Some(*k),
            _ => None,
        }
    }

    pub fn is_auto(&self) -> bool {
        matches!(self, NoteNames::Auto(_))
    }
}

impl Default for NoteNames {
    fn default() -> Self {
        NoteNames::Auto(0)
    }
}

/// Cumulative transposition from the reference key.
///
/// `chromatic` counts semitones, `fifths` counts perfect fifths. The two are
/// tracked independently: the fifths disc's display angle depends on how the
/// transposition was reached, not just on `chromatic * 7 mod 12`. Both are
/// unbounded and signed. Mutated only through the reducers in
/// [`crate::reduce`] and the drag-commit path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranspositionState {
    pub chromatic: i32,
    pub fifths: i32,
    pub names: NoteNames,
}
