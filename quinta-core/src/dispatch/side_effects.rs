//! RenderEffect: describes display operations produced by dispatchers.
//!
//! Dispatch functions push effects into a `Vec<RenderEffect>` instead of
//! touching a renderer directly. This decouples state mutation from drawing;
//! the engine stays free of I/O and the renderer free of music logic.
//!
//! All `delay_ms` figures and the duration constants below are hints for the
//! renderer's transitions. The engine never waits on them.

use quinta_types::spelling::Glyph;
use quinta_types::state::Mask;

/// Mask fade in/out duration.
pub const MASK_FADE_MS: u32 = 200;
/// Extra delay before the incoming mask when another was fading out.
pub const MASK_SWAP_STAGGER_MS: u32 = 400;
/// Animated disc snap duration.
pub const ROTATION_SNAP_MS: u32 = 750;
/// Note-name label show/hide duration.
pub const NAME_FADE_MS: u32 = 100;
/// Note-name refresh delay after a stepped transposition, so the labels
/// change while the discs are still turning.
pub const NAMES_AFTER_STEP_MS: u32 = 250;

/// A deferred display operation produced during action dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderEffect {
    /// New disc angles. `animate` distinguishes a snap (duration hint
    /// [`ROTATION_SNAP_MS`]) from the raw angle stream of an active drag.
    Rotation {
        chromatic_deg: f64,
        fifths_deg: f64,
        animate: bool,
    },
    /// Mask selection changed: fade `previous` out and `mask` in.
    MaskVisibility {
        mask: Option<Mask>,
        previous: Option<Mask>,
    },
    /// Show these twelve glyphs on both discs after `delay_ms`.
    NoteNames {
        glyphs: &'static [Glyph; 12],
        delay_ms: u32,
    },
    /// Whether the enharmonic-swap control is operable.
    SwapAvailability(bool),
    DarkBackground(bool),
    BlackKeys(bool),
    /// Persist a preference; the caller owns the actual store.
    StorePreference {
        key: &'static str,
        value: String,
    },
}
