//! Engine state: one struct per concern, aggregated into [`EngineState`].

pub mod drag;
pub mod mask;
pub mod rotation;
pub mod transposition;

pub use drag::{Disc, DragSession, GestureId};
pub use mask::Mask;
pub use rotation::{RotationState, ANGLE_FIFTH, ANGLE_SEMITONE};
pub use transposition::{NoteNames, TranspositionState};

/// Complete engine state for one visualizer widget.
///
/// Owned by exactly one engine instance; all mutation goes through the
/// dispatch layer so every public operation is atomic with respect to this
/// struct. No process-wide state anywhere.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EngineState {
    pub transposition: TranspositionState,
    pub active_mask: Option<Mask>,
    pub rotation: RotationState,
    /// The single admitted gesture, if any. A second gesture beginning while
    /// this is `Some` is dropped.
    pub drag: Option<DragSession>,
    pub dark_background: bool,
    pub black_keys_visible: bool,
}

impl EngineState {
    pub fn new() -> Self {
        EngineState {
            black_keys_visible: true,
            ..Default::default()
        }
    }

    /// Current angle of one disc, in degrees.
    pub fn disc_angle(&self, disc: Disc) -> f64 {
        match disc {
            Disc::Chromatic => self.rotation.chromatic_deg,
            Disc::Fifths => self.rotation.fifths_deg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_shows_black_keys() {
        let state = EngineState::new();
        assert!(state.black_keys_visible);
        assert!(!state.dark_background);
        assert_eq!(state.active_mask, None);
        assert!(state.drag.is_none());
    }

    #[test]
    fn disc_angle_selects_the_right_disc() {
        let mut state = EngineState::new();
        state.rotation.chromatic_deg = 30.0;
        state.rotation.fifths_deg = -60.0;
        assert_eq!(state.disc_angle(Disc::Chromatic), 30.0);
        assert_eq!(state.disc_angle(Disc::Fifths), -60.0);
    }
}
