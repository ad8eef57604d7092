//! Action types for the dispatch system.
//!
//! Actions are the engine's whole command surface: every input source
//! (buttons, keyboard shortcuts, wheel, pointer/touch drags, MIDI) is mapped
//! to these by the caller and handed to dispatch one at a time.

use serde::{Deserialize, Serialize};

use crate::state::{Disc, GestureId, Mask};

/// Top-level action, grouped by the component that handles it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Action {
    Mask(MaskAction),
    Transpose(TransposeAction),
    Names(NamesAction),
    Drag(DragAction),
    Options(OptionsAction),
}

/// Mask visibility commands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MaskAction {
    /// Select a mask, or `None` to clear. Selecting the active mask again
    /// also clears.
    Select(Option<Mask>),
}

/// Stepped transposition commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransposeAction {
    /// Transpose by signed semitone steps.
    Semitones(i32),
    /// Transpose by signed perfect-fifth steps.
    Fifths(i32),
    /// Return to the reference key.
    Reset,
}

/// Note-name display commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NamesAction {
    SetMode(NamingMode),
    /// Respell the current automatic key with its enharmonic twin.
    /// No-op outside automatic naming.
    SwapEnharmonics,
}

/// Requested naming mode. Unlike [`crate::state::NoteNames`] this carries no
/// key: entering automatic mode derives the key from the fifths counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NamingMode {
    Automatic,
    Enharmonics1,
    Enharmonics2,
    PitchClasses,
}

impl NamingMode {
    /// Parse a preference-store tag. Anything unrecognized reads as
    /// automatic, matching the stored default.
    pub fn parse(s: &str) -> NamingMode {
        match s {
            "enharmonics1" => NamingMode::Enharmonics1,
            "enharmonics2" => NamingMode::Enharmonics2,
            "numbers" => NamingMode::PitchClasses,
            _ => NamingMode::Automatic,
        }
    }
}

/// Drag-gesture commands. Pointer angles are degrees around the disc
/// center, as measured by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DragAction {
    Begin {
        disc: Disc,
        gesture: GestureId,
        pointer_deg: f64,
    },
    Move {
        gesture: GestureId,
        pointer_deg: f64,
    },
    End {
        gesture: GestureId,
    },
    Cancel {
        gesture: GestureId,
    },
}

/// Display option toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OptionsAction {
    ToggleDarkBackground,
    ToggleBlackKeys,
}
