use quinta_types::state::EngineState;
use quinta_types::MaskAction;

use super::names;
use super::side_effects::{RenderEffect, MASK_SWAP_STAGGER_MS};

pub(super) fn dispatch_mask(
    action: &MaskAction,
    state: &mut EngineState,
    effects: &mut Vec<RenderEffect>,
) {
    match action {
        MaskAction::Select(mask) => {
            let previous = state.active_mask;
            // Selecting the active mask again (or no mask) deactivates.
            state.active_mask = if *mask == previous { None } else { *mask };
            effects.push(RenderEffect::MaskVisibility {
                mask: state.active_mask,
                previous,
            });
            // When an outgoing mask is still fading, hold the new names back
            // until the incoming mask appears.
            let delay = if previous.is_some() && state.active_mask.is_some() {
                MASK_SWAP_STAGGER_MS
            } else {
                0
            };
            names::refresh(state, delay, effects);
        }
    }
}
