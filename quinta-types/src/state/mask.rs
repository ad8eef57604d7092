//! Scale masks and their table-family mapping.

use serde::{Deserialize, Serialize};

use crate::spelling::TableFamily;

/// The nine scale/interval masks a disc can display. "No mask" is
/// `Option::<Mask>::None` throughout the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mask {
    Pentatonic,
    Diatonic,
    HarmonicMinor,
    MelodicMinor,
    WholeTones,
    Octatonic,
    MajorThirds,
    MinorThirds,
    Chromatic,
}

impl Mask {
    pub const ALL: [Mask; 9] = [
        Mask::Pentatonic,
        Mask::Diatonic,
        Mask::HarmonicMinor,
        Mask::MelodicMinor,
        Mask::WholeTones,
        Mask::Octatonic,
        Mask::MajorThirds,
        Mask::MinorThirds,
        Mask::Chromatic,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Mask::Pentatonic => "Pentatonic",
            Mask::Diatonic => "Diatonic",
            Mask::HarmonicMinor => "HarmonicMinor",
            Mask::MelodicMinor => "MelodicMinor",
            Mask::WholeTones => "WholeTones",
            Mask::Octatonic => "Octatonic",
            Mask::MajorThirds => "MajorThirds",
            Mask::MinorThirds => "MinorThirds",
            Mask::Chromatic => "Chromatic",
        }
    }

    /// Case-insensitive name lookup. Unknown names are `None`; callers
    /// treat that as "no mask", never as an error.
    pub fn parse(s: &str) -> Option<Mask> {
        Mask::ALL
            .iter()
            .copied()
            .find(|m| m.name().eq_ignore_ascii_case(s))
    }

    /// The table consulted when automatic naming resolves under this mask.
    /// `None` for masks that show the fixed enharmonic default.
    pub fn naming_family(&self) -> Option<TableFamily> {
        match self {
            Mask::Pentatonic | Mask::Diatonic | Mask::HarmonicMinor | Mask::MelodicMinor => {
                Some(TableFamily::Diatonic)
            }
            Mask::MajorThirds => Some(TableFamily::MajorThirds),
            Mask::MinorThirds => Some(TableFamily::MinorThirds),
            Mask::WholeTones | Mask::Octatonic | Mask::Chromatic => None,
        }
    }

    /// Valid key window for automatic naming under this mask. Narrower than
    /// the full table domain for the minor pair (no Dbb minor row).
    pub fn key_window(&self) -> Option<(i32, i32)> {
        match self {
            Mask::Pentatonic | Mask::Diatonic => Some((-12, 14)),
            Mask::HarmonicMinor | Mask::MelodicMinor => Some((-11, 14)),
            Mask::MajorThirds => Some((-15, 11)),
            Mask::MinorThirds => Some((-6, 19)),
            Mask::WholeTones | Mask::Octatonic | Mask::Chromatic => None,
        }
    }

    /// The table whose links drive key-index advancement while this mask is
    /// active. Unlike [`Mask::naming_family`], every mask (and no mask at
    /// all) falls back to the diatonic table here.
    pub fn stepping_family(mask: Option<Mask>) -> TableFamily {
        match mask {
            Some(Mask::MajorThirds) => TableFamily::MajorThirds,
            Some(Mask::MinorThirds) => TableFamily::MinorThirds,
            _ => TableFamily::Diatonic,
        }
    }
}
