//! Key-dependent note-spelling tables.
//!
//! Each table maps a signed key index (position on the circle of fifths,
//! 0 = reference key) to the accidental spelling of all 12 pitch classes in
//! that key, plus the neighbouring keys reached by stepping a semitone, a
//! whole tone or a perfect fifth, and the key of the enharmonically
//! equivalent spelling.
//!
//! The three tables cover the three interval families the visualizer masks
//! fall into: diatonic (major/minor and their pentatonic/harmonic/melodic
//! relatives), augmented (major thirds) and diminished (minor thirds).

mod tables;

use serde::{Deserialize, Serialize};

use crate::pitch::clamp_pitch;

/// Display symbol for one pitch class in one key.
///
/// `Enharmonic` means "show both enharmonic names", `PitchClass` means "show
/// the pitch-class number"; both appear only in the fixed display arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Glyph {
    Natural,
    Sharp,
    DoubleSharp,
    Flat,
    DoubleFlat,
    Enharmonic,
    PitchClass,
}

impl Glyph {
    /// Renderer-facing suffix, matching the SVG element id scheme.
    pub fn suffix(&self) -> &'static str {
        match self {
            Glyph::Natural => "n",
            Glyph::Sharp => "s",
            Glyph::DoubleSharp => "ss",
            Glyph::Flat => "f",
            Glyph::DoubleFlat => "ff",
            Glyph::Enharmonic => "e",
            Glyph::PitchClass => "p",
        }
    }
}

/// Keys reached by stepping one interval up or down from a table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Links {
    pub up: i32,
    pub down: i32,
}

/// One key's spelling: 12 glyphs indexed by pitch class (0 = the reference
/// tonic), transition links per interval, and the enharmonic twin key.
///
/// `enharmonic` may point outside the table's domain; resolvers renormalize
/// it with [`SpellingTable::normalize`] before lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpellingRow {
    pub glyphs: [Glyph; 12],
    pub semitone: Links,
    pub whole_tone: Links,
    pub fifth: Links,
    pub enharmonic: i32,
}

const fn row(
    glyphs: [Glyph; 12],
    semitone: (i32, i32),
    whole_tone: (i32, i32),
    fifth: (i32, i32),
    enharmonic: i32,
) -> SpellingRow {
    SpellingRow {
        glyphs,
        semitone: Links { up: semitone.0, down: semitone.1 },
        whole_tone: Links { up: whole_tone.0, down: whole_tone.1 },
        fifth: Links { up: fifth.0, down: fifth.1 },
        enharmonic,
    }
}

/// A complete spelling table over a contiguous signed key range.
pub struct SpellingTable {
    name: &'static str,
    min_key: i32,
    max_key: i32,
    rows: &'static [(i32, SpellingRow)],
}

impl SpellingTable {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn min_key(&self) -> i32 {
        self.min_key
    }

    pub fn max_key(&self) -> i32 {
        self.max_key
    }

    pub fn get(&self, key: i32) -> Option<&SpellingRow> {
        self.rows.iter().find(|(k, _)| *k == key).map(|(_, r)| r)
    }

    /// Look up a key that the caller has already normalized.
    ///
    /// # Panics
    ///
    /// Panics on a missing key: an unnormalized lookup is a programming
    /// error, and a wrong spelling must never be returned silently.
    pub fn row(&self, key: i32) -> &SpellingRow {
        match self.get(key) {
            Some(row) => row,
            None => panic!("key {key} not in {} table", self.name),
        }
    }

    /// Fold `key` into this table's domain by ±12 shifts.
    pub fn normalize(&self, key: i32) -> i32 {
        clamp_pitch(key, self.min_key, self.max_key)
    }

    pub fn keys(&self) -> impl Iterator<Item = i32> + '_ {
        self.rows.iter().map(|(k, _)| *k)
    }
}

/// Which spelling table a mask family consults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableFamily {
    Diatonic,
    MajorThirds,
    MinorThirds,
}

impl TableFamily {
    pub fn table(&self) -> &'static SpellingTable {
        match self {
            TableFamily::Diatonic => &DIATONIC,
            TableFamily::MajorThirds => &MAJOR_THIRDS,
            TableFamily::MinorThirds => &MINOR_THIRDS,
        }
    }
}

/// Major/minor family table, keys −12 (Dbb) through 14 (C##).
pub static DIATONIC: SpellingTable = SpellingTable {
    name: "diatonic",
    min_key: -12,
    max_key: 14,
    rows: &tables::DIATONIC_ROWS,
};

/// Augmented (major-thirds) family table, keys −15 (Fbb) through 11 (E#).
pub static MAJOR_THIRDS: SpellingTable = SpellingTable {
    name: "major-thirds",
    min_key: -15,
    max_key: 11,
    rows: &tables::MAJOR_THIRDS_ROWS,
};

/// Diminished (minor-thirds) family table, keys −6 (Gb) through 19 (B##).
pub static MINOR_THIRDS: SpellingTable = SpellingTable {
    name: "minor-thirds",
    min_key: -6,
    max_key: 19,
    rows: &tables::MINOR_THIRDS_ROWS,
};

/// Fixed display: naturals with enharmonic pairs on the black keys.
pub static ENHARMONICS_1: [Glyph; 12] = {
    use Glyph::{Enharmonic as E, Natural as N};
    [N, E, N, E, N, N, E, N, E, N, E, N]
};

/// Fixed display: enharmonic pairs everywhere except C and G.
pub static ENHARMONICS_2: [Glyph; 12] = {
    use Glyph::{Enharmonic as E, Natural as N};
    [E, E, N, E, E, E, E, N, E, N, E, E]
};

/// Fixed display: pitch-class numbers 0-11.
pub static PITCH_CLASSES: [Glyph; 12] = [Glyph::PitchClass; 12];

#[cfg(test)]
mod tests {
    use super::*;
    use Glyph::*;

    #[test]
    fn domains_are_contiguous() {
        for table in [&DIATONIC, &MAJOR_THIRDS, &MINOR_THIRDS] {
            for key in table.min_key()..=table.max_key() {
                assert!(
                    table.get(key).is_some(),
                    "{} table missing key {key}",
                    table.name()
                );
            }
            assert_eq!(
                table.keys().count() as i32,
                table.max_key() - table.min_key() + 1
            );
        }
    }

    #[test]
    fn reference_key_spellings() {
        // C major: flats on the "minor" black keys, F# for the tritone.
        assert_eq!(
            DIATONIC.row(0).glyphs,
            [
                Natural, Flat, Natural, Flat, Natural, Natural, Sharp, Natural,
                Flat, Natural, Flat, Natural
            ]
        );
        // C# major picks up a double sharp on pitch class 7.
        assert_eq!(
            DIATONIC.row(7).glyphs,
            [
                Sharp, Sharp, Natural, Sharp, Natural, Sharp, Sharp,
                DoubleSharp, Sharp, Natural, Sharp, Natural
            ]
        );
    }

    #[test]
    fn normalize_folds_into_domain() {
        assert_eq!(DIATONIC.normalize(12), 12);
        assert_eq!(DIATONIC.normalize(26), 14);
        assert_eq!(DIATONIC.normalize(-20), -8);
        assert_eq!(MAJOR_THIRDS.normalize(12), 0);
        assert_eq!(MINOR_THIRDS.normalize(-7), 5);
    }

    #[test]
    #[should_panic(expected = "not in diatonic table")]
    fn unnormalized_lookup_panics() {
        DIATONIC.row(15);
    }

    #[test]
    fn enharmonic_twins_normalize_into_domain() {
        for table in [&DIATONIC, &MAJOR_THIRDS, &MINOR_THIRDS] {
            for key in table.keys() {
                let twin = table.normalize(table.row(key).enharmonic);
                assert!(
                    table.get(twin).is_some(),
                    "{} key {key}: enharmonic twin {twin} undefined",
                    table.name()
                );
            }
        }
    }

    #[test]
    fn enharmonic_twins_are_twelve_fifths_apart() {
        // A respelling by sharps/flats moves the key index by ±12 (the
        // enharmonic residue of the circle of fifths).
        for table in [&DIATONIC, &MAJOR_THIRDS, &MINOR_THIRDS] {
            for key in table.keys() {
                let twin = table.row(key).enharmonic;
                assert_eq!(
                    (twin - key).rem_euclid(12),
                    0,
                    "{} key {key} twin {twin}",
                    table.name()
                );
            }
        }
    }

    #[test]
    fn link_targets_step_by_their_interval() {
        // Up links move +7 (semitone), +2 (whole tone), +1 (fifth) fifths
        // modulo 12, down links the inverse. Intentional boundary
        // irregularities in the data: the flat-side semitone-down shortcuts
        // of the diatonic and major-thirds tables (keys −7 and below step by
        // a diminished sixth instead), the diatonic −11 whole-tone-down row,
        // and the minor-thirds −6 whole-tone-down row.
        let skip_semitone_down = |table: &SpellingTable, key: i32| {
            (table.name() == "diatonic" || table.name() == "major-thirds") && key <= -7
        };
        for table in [&DIATONIC, &MAJOR_THIRDS, &MINOR_THIRDS] {
            for key in table.keys() {
                let row = table.row(key);
                assert_eq!((row.semitone.up - key).rem_euclid(12), 7);
                if !skip_semitone_down(table, key) {
                    assert_eq!(
                        (row.semitone.down - key).rem_euclid(12),
                        5,
                        "{} key {key}",
                        table.name()
                    );
                }
                assert_eq!((row.whole_tone.up - key).rem_euclid(12), 2);
                let skip_whole_down = (table.name() == "minor-thirds" && key == -6)
                    || (table.name() == "diatonic" && key == -11);
                if !skip_whole_down {
                    assert_eq!(
                        (row.whole_tone.down - key).rem_euclid(12),
                        10,
                        "{} key {key}",
                        table.name()
                    );
                }
                assert_eq!((row.fifth.up - key).rem_euclid(12), 1);
                assert_eq!((row.fifth.down - key).rem_euclid(12), 11);
            }
        }
    }
}
