//! Disc rotation angles derived from the transposition counters.

use serde::{Deserialize, Serialize};

use crate::pitch::clamp_angle;
use crate::state::TranspositionState;

/// Degrees per semitone step on either disc (12 steps per revolution).
pub const ANGLE_SEMITONE: f64 = 30.0;

/// Degrees per fifth step: 7 semitone steps. Also the half-window used when
/// folding a new target angle around the previous one, so that a full
/// fifth-step rotation never wraps ambiguously.
pub const ANGLE_FIFTH: f64 = 210.0;

/// Current rotation of the two discs, in degrees.
///
/// Angles are unbounded reals: instead of wrapping at 360 they are folded
/// into a ±[`ANGLE_FIFTH`] window around their previous value, which keeps
/// consecutive targets close and lets the renderer animate the short way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RotationState {
    pub chromatic_deg: f64,
    pub fifths_deg: f64,
}

impl RotationState {
    /// Derive both disc angles from the transposition counters.
    ///
    /// Idempotent: with unchanged counters the folded target equals the
    /// current angle, so repeated calls never drift.
    pub fn sync(&mut self, transposition: &TranspositionState) {
        self.chromatic_deg = clamp_angle(
            f64::from(transposition.chromatic) * ANGLE_SEMITONE,
            self.chromatic_deg,
            ANGLE_FIFTH,
        );
        self.fifths_deg = clamp_angle(
            f64::from(transposition.fifths) * ANGLE_SEMITONE,
            self.fifths_deg,
            ANGLE_FIFTH,
        );
    }
}
