//! Pure transposition reducers.
//!
//! These functions are the single source of truth for how the chromatic and
//! fifths counters and the automatic key index advance. They mutate
//! [`TranspositionState`] only; rotation sync and render effects are the
//! dispatch layer's job.
//!
//! The two counters are coupled but not derivable from each other: a
//! semitone step turns the fifths disc by seven positions, a whole tone by
//! two, a fifth by one. The common single steps use precomputed deltas (and
//! the table links for the key index, which is what produces musically
//! sensible respellings at the enharmonic seams); arbitrary step counts fall
//! back to linear arithmetic folded into a single-revolution window.

use crate::pitch::clamp_pitch;
use crate::state::{Mask, NoteNames, TranspositionState};

/// Transpose by `steps` semitones.
pub fn transpose_semitones(state: &mut TranspositionState, mask: Option<Mask>, steps: i32) {
    state.chromatic += steps;
    state.fifths += match steps {
        2 | -2 => steps,
        7 => 1,
        -7 => -1,
        _ => clamp_pitch(7 * steps, -12, 12),
    };
    if let NoteNames::Auto(key) = state.names {
        let table = Mask::stepping_family(mask).table();
        let key = table.normalize(key);
        let row = table.row(key);
        let next = match steps {
            1 => row.semitone.up,
            -1 => row.semitone.down,
            2 => row.whole_tone.up,
            -2 => row.whole_tone.down,
            7 => row.fifth.up,
            -7 => row.fifth.down,
            _ => table.normalize(key + 7 * steps),
        };
        state.names = NoteNames::Auto(next);
    }
}

/// Transpose by `fifths` perfect fifths.
///
/// The link used for the key index follows what the fifths delta is
/// congruent to in semitones: ±1 fifth is the fifth link, ±2 fifths a whole
/// tone (14 ≡ 2), ±7 fifths a semitone (49 ≡ 1).
pub fn transpose_fifths(state: &mut TranspositionState, mask: Option<Mask>, fifths: i32) {
    state.fifths += fifths;
    state.chromatic += match fifths {
        1 => 7,
        -1 => -7,
        _ => clamp_pitch(7 * fifths, -5, 6),
    };
    if let NoteNames::Auto(key) = state.names {
        let table = Mask::stepping_family(mask).table();
        let key = table.normalize(key);
        let row = table.row(key);
        let next = match fifths {
            1 => row.fifth.up,
            -1 => row.fifth.down,
            2 => row.whole_tone.up,
            -2 => row.whole_tone.down,
            7 => row.semitone.up,
            -7 => row.semitone.down,
            _ => table.normalize(key + fifths),
        };
        state.names = NoteNames::Auto(next);
    }
}

/// Return to the reference key. The key index resets only in automatic
/// naming; a fixed display is left alone.
pub fn reset(state: &mut TranspositionState) {
    state.chromatic = 0;
    state.fifths = 0;
    if state.names.is_auto() {
        state.names = NoteNames::Auto(0);
    }
}
