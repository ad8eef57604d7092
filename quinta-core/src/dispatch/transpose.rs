use quinta_types::reduce;
use quinta_types::state::EngineState;
use quinta_types::TransposeAction;

use super::names;
use super::side_effects::{RenderEffect, NAMES_AFTER_STEP_MS};

pub(super) fn dispatch_transpose(
    action: &TransposeAction,
    state: &mut EngineState,
    effects: &mut Vec<RenderEffect>,
) {
    let mask = state.active_mask;
    match action {
        TransposeAction::Semitones(steps) => {
            reduce::transpose_semitones(&mut state.transposition, mask, *steps)
        }
        TransposeAction::Fifths(fifths) => {
            reduce::transpose_fifths(&mut state.transposition, mask, *fifths)
        }
        TransposeAction::Reset => reduce::reset(&mut state.transposition),
    }
    state.rotation.sync(&state.transposition);
    effects.push(RenderEffect::Rotation {
        chromatic_deg: state.rotation.chromatic_deg,
        fifths_deg: state.rotation.fifths_deg,
        animate: true,
    });
    names::refresh(state, NAMES_AFTER_STEP_MS, effects);
}
