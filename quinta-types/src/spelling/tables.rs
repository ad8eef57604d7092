//! Static spelling data for the three table families.
//!
//! Row layout: glyphs per pitch class, then (up, down) key links for a
//! semitone, a whole tone and a perfect fifth, then the enharmonic twin key.
//! The flat-side boundary rows carry intentional irregularities that must
//! not be "corrected".

use super::{row, Glyph, SpellingRow};

use Glyph::{
    DoubleFlat as FF, DoubleSharp as SS, Flat as F, Natural as N, Sharp as S,
};

pub(super) static DIATONIC_ROWS: [(i32, SpellingRow); 27] = [
    // C
    (0, row([N, F, N, F, N, N, S, N, F, N, F, N], (7, 5), (2, -2), (1, -1), 12)),
    // G
    (1, row([N, S, N, F, N, N, S, N, F, N, F, N], (8, -6), (3, -1), (2, 0), 13)),
    // D
    (2, row([N, S, N, F, N, N, S, N, S, N, F, N], (9, -5), (4, 0), (3, 1), 14)),
    // A
    (3, row([N, S, N, S, N, N, S, N, S, N, F, N], (10, -4), (5, 1), (4, 2), -9)),
    // E
    (4, row([N, S, N, S, N, N, S, N, S, N, S, N], (-1, -3), (6, 2), (5, 3), -8)),
    // B
    (5, row([N, S, N, S, N, S, S, N, S, N, S, N], (0, -2), (7, 3), (6, 4), -7)),
    // F#
    (6, row([S, S, N, S, N, S, S, N, S, N, S, N], (1, -1), (8, 4), (7, 5), -6)),
    // C#
    (7, row([S, S, N, S, N, S, S, SS, S, N, S, N], (2, 0), (9, 5), (8, 6), -5)),
    // G#
    (8, row([S, S, SS, S, N, S, S, SS, S, N, S, N], (3, 1), (10, 6), (9, 7), -4)),
    // D#
    (9, row([S, S, SS, S, N, S, S, SS, S, SS, S, N], (4, 2), (11, 7), (10, 8), -3)),
    // A#
    (10, row([S, S, SS, S, SS, S, S, SS, S, SS, S, N], (5, 3), (12, 8), (11, 9), -2)),
    // E#
    (11, row([S, S, SS, S, SS, S, S, SS, S, SS, S, SS], (6, 4), (13, 9), (12, 10), -1)),
    // B#
    (12, row([S, S, SS, S, SS, S, SS, SS, S, SS, S, SS], (7, 5), (14, 10), (13, 11), -12)),
    // F##
    (13, row([S, S, SS, S, SS, S, SS, SS, S, SS, S, SS], (8, 6), (3, 11), (14, 12), -11)),
    // C##
    (14, row([S, SS, SS, S, SS, S, SS, SS, S, SS, S, SS], (9, 7), (4, 12), (3, 13), -10)),
    // F
    (-1, row([N, F, N, F, N, N, S, N, F, N, F, N], (6, 4), (1, -3), (0, -2), 11)),
    // Bb
    (-2, row([N, F, N, F, N, N, F, N, F, N, F, N], (5, 3), (0, -4), (-1, -3), 10)),
    // Eb
    (-3, row([N, F, N, F, N, N, F, N, F, N, F, F], (4, 2), (-1, -5), (-2, -4), 9)),
    // Ab
    (-4, row([N, F, N, F, F, N, F, N, F, N, F, F], (3, 1), (-2, -6), (-3, -5), 8)),
    // Db
    (-5, row([N, F, N, F, F, N, F, N, F, FF, F, F], (2, 0), (-3, -7), (-4, -6), 7)),
    // Gb
    (-6, row([N, F, FF, F, F, N, F, N, F, FF, F, F], (1, -1), (-4, -8), (-5, -7), 6)),
    // Cb
    (-7, row([N, F, FF, F, F, N, F, FF, F, FF, F, F], (0, -1), (-5, -9), (-6, -8), 5)),
    // Fb
    (-8, row([FF, F, FF, F, F, N, F, FF, F, FF, F, F], (-1, -2), (-6, -10), (-7, -9), 4)),
    // Bbb
    (-9, row([FF, F, FF, F, F, FF, F, FF, F, FF, F, F], (-2, -3), (-7, -11), (-8, -10), 3)),
    // Ebb
    (-10, row([FF, F, FF, F, F, FF, F, FF, F, FF, FF, F], (-3, -4), (-8, -12), (-9, -11), 2)),
    // Abb
    (-11, row([FF, F, FF, FF, F, FF, F, FF, F, FF, FF, F], (-4, -5), (-9, 0), (-10, -12), 1)),
    // Dbb
    (-12, row([FF, F, FF, FF, F, FF, F, FF, F, FF, FF, F], (-5, -6), (-10, -2), (-11, -1), 0)),
];

pub(super) static MAJOR_THIRDS_ROWS: [(i32, SpellingRow); 27] = [
    // C aug
    (0, row([N, S, N, S, N, N, S, N, S, N, F, N], (7, 5), (2, -2), (1, -1), -12)),
    // G aug
    (1, row([N, S, N, S, N, N, S, N, S, N, S, N], (8, -6), (3, -1), (2, 0), -11)),
    // D aug
    (2, row([N, S, N, S, N, S, S, N, S, N, S, N], (9, -5), (4, 0), (3, 1), -10)),
    // A aug
    (3, row([S, S, N, S, N, S, S, N, S, N, S, N], (10, -4), (5, 1), (4, 2), -9)),
    // E aug
    (4, row([S, S, N, S, N, S, S, SS, S, N, S, N], (-1, -3), (6, 2), (5, 3), -8)),
    // B aug
    (5, row([S, S, SS, S, N, S, S, SS, S, N, S, N], (0, -2), (7, 3), (6, 4), -7)),
    // F# aug
    (6, row([S, S, SS, S, N, S, S, SS, S, SS, S, N], (1, -1), (8, 4), (7, 5), -6)),
    // C# aug
    (7, row([S, S, SS, S, SS, S, S, SS, S, SS, S, N], (2, 0), (9, 5), (8, 6), -5)),
    // G# aug
    (8, row([S, S, SS, S, SS, S, S, SS, S, SS, S, SS], (3, 1), (10, 6), (9, 7), -4)),
    // D# aug
    (9, row([S, S, SS, S, SS, S, SS, SS, S, SS, S, SS], (4, 2), (11, 7), (10, 8), -3)),
    // A# aug
    (10, row([S, SS, SS, S, SS, S, SS, SS, S, SS, S, SS], (5, 3), (0, 8), (11, 9), -2)),
    // E# aug
    (11, row([S, SS, SS, S, SS, S, SS, SS, S, SS, S, SS], (6, 4), (1, 9), (0, 10), -1)),
    // F aug
    (-1, row([N, S, N, S, N, N, S, N, S, N, F, N], (6, 4), (1, -3), (0, -2), 11)),
    // Bb aug
    (-2, row([N, S, N, F, N, N, S, N, S, N, F, N], (5, 3), (0, -4), (-1, -3), 10)),
    // Eb aug
    (-3, row([N, S, N, F, N, N, S, N, F, N, F, N], (4, 2), (-1, -5), (-2, -4), 9)),
    // Ab aug
    (-4, row([N, F, N, F, N, N, S, N, F, N, F, N], (3, 1), (-2, -6), (-3, -5), 8)),
    // Db aug
    (-5, row([N, F, N, F, N, N, F, N, F, N, F, N], (2, 0), (-3, -7), (-4, -6), 7)),
    // Gb aug
    (-6, row([N, F, N, F, N, N, F, N, F, N, F, F], (1, -1), (-4, -8), (-5, -7), 6)),
    // Cb aug
    (-7, row([N, F, N, F, F, N, F, N, F, N, F, F], (0, -1), (-5, -9), (-6, -8), 5)),
    // Fb aug
    (-8, row([N, F, N, F, F, N, F, N, F, FF, F, F], (-1, -2), (-6, -10), (-7, -9), 4)),
    // Bbb aug
    (-9, row([N, F, FF, F, F, N, F, N, F, FF, F, F], (-2, -3), (-7, -11), (-8, -10), 3)),
    // Ebb aug
    (-10, row([N, F, FF, F, F, N, F, FF, F, FF, F, F], (-3, -4), (-8, -12), (-9, -11), 2)),
    // Abb aug
    (-11, row([FF, F, FF, F, F, N, F, FF, F, FF, F, F], (-4, -5), (-9, -13), (-10, -12), 1)),
    // Dbb aug
    (-12, row([FF, F, FF, F, F, FF, F, FF, F, FF, F, F], (-5, -6), (-10, -14), (-11, -13), 0)),
    // Gbb aug
    (-13, row([FF, F, FF, F, F, FF, F, FF, F, FF, FF, F], (-6, -7), (-11, -15), (-12, -14), -1)),
    // Cbb aug
    (-14, row([FF, F, FF, FF, F, FF, F, FF, F, FF, FF, F], (-7, -8), (-12, -4), (-13, -15), -2)),
    // Fbb aug
    (-15, row([FF, F, FF, FF, F, FF, F, FF, F, FF, FF, F], (-8, -9), (-13, -5), (-14, -4), -3)),
];

pub(super) static MINOR_THIRDS_ROWS: [(i32, SpellingRow); 26] = [
    // C dim
    (0, row([N, F, N, F, F, N, F, N, F, FF, F, F], (7, 5), (2, -2), (1, -1), 12)),
    // G dim
    (1, row([N, F, N, F, F, N, F, N, F, N, F, F], (8, -6), (3, -1), (2, 0), 1)),
    // D dim
    (2, row([N, F, N, F, N, N, F, N, F, N, F, F], (9, -5), (4, 0), (3, 1), 2)),
    // A dim
    (3, row([N, F, N, F, N, N, F, N, F, N, F, N], (10, -4), (5, 1), (4, 2), 3)),
    // E dim
    (4, row([N, F, N, F, N, N, S, N, F, N, F, N], (-1, -3), (6, 2), (5, 3), -8)),
    // B dim
    (5, row([N, S, N, F, N, N, S, N, F, N, F, N], (0, -2), (7, 3), (6, 4), -7)),
    // F# dim
    (6, row([N, S, N, F, N, N, S, N, S, N, F, N], (1, -1), (8, 4), (7, 5), -6)),
    // C# dim
    (7, row([N, S, N, S, N, N, S, N, S, N, F, N], (2, 0), (9, 5), (8, 6), -5)),
    // G# dim
    (8, row([N, S, N, S, N, N, S, N, S, N, S, N], (3, 1), (10, 6), (9, 7), -4)),
    // D# dim
    (9, row([N, S, N, S, N, S, S, N, S, N, S, N], (4, 2), (11, 7), (10, 8), -3)),
    // A# dim
    (10, row([S, S, N, S, N, S, S, N, S, N, S, N], (5, 3), (12, 8), (11, 9), -2)),
    // E# dim
    (11, row([S, S, N, S, N, S, S, SS, S, N, S, N], (6, 4), (13, 9), (12, 10), -1)),
    // B# dim
    (12, row([S, S, SS, S, N, S, S, SS, S, N, S, N], (7, 5), (14, 10), (13, 11), 0)),
    // F## dim
    (13, row([S, S, SS, S, N, S, S, SS, S, SS, S, N], (8, 6), (15, 11), (14, 12), 1)),
    // C## dim
    (14, row([S, S, SS, S, SS, S, S, SS, S, SS, S, N], (9, 7), (16, 12), (15, 13), 2)),
    // G## dim
    (15, row([S, S, SS, S, SS, S, S, SS, S, SS, S, SS], (10, 8), (17, 13), (16, 14), 3)),
    // D## dim
    (16, row([S, S, SS, S, SS, S, SS, SS, S, SS, S, SS], (-1, 9), (18, 14), (17, 15), 4)),
    // A## dim
    (17, row([S, SS, SS, S, SS, S, SS, SS, S, SS, S, SS], (0, 10), (19, 15), (18, 16), 5)),
    // E## dim
    (18, row([S, SS, SS, S, SS, S, SS, SS, S, SS, S, SS], (1, -1), (-4, 16), (19, 17), 6)),
    // B## dim
    (19, row([S, SS, SS, S, SS, S, SS, SS, S, SS, S, SS], (2, 0), (-3, 17), (-4, 18), 7)),
    // F dim
    (-1, row([N, F, FF, F, F, N, F, N, F, FF, F, F], (6, 4), (1, -3), (0, -2), 11)),
    // Bb dim
    (-2, row([N, F, FF, F, F, N, F, FF, F, FF, F, F], (5, 3), (0, -4), (-1, -3), 10)),
    // Eb dim
    (-3, row([FF, F, FF, F, F, N, F, FF, F, FF, F, F], (4, 2), (-1, -5), (-2, -4), 9)),
    // Ab dim
    (-4, row([FF, F, FF, F, F, FF, F, FF, F, FF, F, F], (3, 1), (-2, -6), (-3, -5), 8)),
    // Db dim
    (-5, row([FF, F, FF, F, F, FF, F, FF, F, FF, FF, F], (2, 0), (-3, 5), (-4, -6), 7)),
    // Gb dim
    (-6, row([FF, F, FF, FF, F, FF, F, FF, F, FF, FF, F], (1, -1), (-4, 7), (-5, 5), 6)),
];
