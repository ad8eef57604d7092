use quinta_types::naming::resolve;
use quinta_types::pitch::clamp_pitch;
use quinta_types::state::{EngineState, NoteNames};
use quinta_types::{naming, NamesAction, NamingMode};

use super::side_effects::RenderEffect;
use crate::prefs;

/// Re-resolve the note-name display from the current mask and naming state,
/// emitting the glyphs and swap-button availability. Folds the automatic key
/// back into the active mask's window.
pub(crate) fn refresh(state: &mut EngineState, delay_ms: u32, effects: &mut Vec<RenderEffect>) {
    let resolved = resolve(state.active_mask, state.transposition.names);
    state.transposition.names = resolved.names;
    effects.push(RenderEffect::NoteNames {
        glyphs: resolved.glyphs,
        delay_ms,
    });
    effects.push(RenderEffect::SwapAvailability(resolved.automatic));
}

pub(super) fn dispatch_names(
    action: &NamesAction,
    state: &mut EngineState,
    effects: &mut Vec<RenderEffect>,
) {
    match action {
        NamesAction::SetMode(mode) => {
            state.transposition.names = match mode {
                // Entering automatic mode re-derives the key from where the
                // fifths disc currently sits.
                NamingMode::Automatic => {
                    NoteNames::Auto(clamp_pitch(state.transposition.fifths, -5, 6))
                }
                NamingMode::Enharmonics1 => NoteNames::Enharmonics1,
                NamingMode::Enharmonics2 => NoteNames::Enharmonics2,
                NamingMode::PitchClasses => NoteNames::PitchClasses,
            };
            effects.push(RenderEffect::StorePreference {
                key: prefs::NOTE_NAMES,
                value: state.transposition.names.pref_value().to_string(),
            });
            refresh(state, 0, effects);
        }
        NamesAction::SwapEnharmonics => {
            match naming::enharmonic_swap(state.active_mask, state.transposition.names) {
                Some(key) => {
                    state.transposition.names = NoteNames::Auto(key);
                    refresh(state, 0, effects);
                }
                None => log::debug!(target: "names", "enharmonic swap ignored, not automatic"),
            }
        }
    }
}
