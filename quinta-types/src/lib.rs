//! Core types and pure logic for the transposition engine.
//!
//! Everything here is side-effect free: state structs, the spelling tables,
//! the modular clamping arithmetic, and the reducers that advance the
//! transposition counters. The `quinta-core` crate layers dispatch, render
//! effects, configuration and preferences on top.

pub mod action;
pub mod naming;
pub mod pitch;
pub mod reduce;
pub mod spelling;
pub mod state;

pub use action::{
    Action, DragAction, MaskAction, NamesAction, NamingMode, OptionsAction, TransposeAction,
};
pub use naming::{enharmonic_swap, resolve, ResolvedNames};
pub use pitch::{clamp_angle, clamp_angle_open, clamp_pitch};
pub use spelling::{Glyph, SpellingRow, SpellingTable, TableFamily};
pub use state::{
    Disc, DragSession, EngineState, GestureId, Mask, NoteNames, RotationState,
    TranspositionState, ANGLE_FIFTH, ANGLE_SEMITONE,
};
