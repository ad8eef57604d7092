use quinta_types::state::EngineState;
use quinta_types::OptionsAction;

use super::side_effects::RenderEffect;
use crate::prefs;

pub(super) fn dispatch_options(
    action: &OptionsAction,
    state: &mut EngineState,
    effects: &mut Vec<RenderEffect>,
) {
    match action {
        OptionsAction::ToggleDarkBackground => {
            state.dark_background = !state.dark_background;
            effects.push(RenderEffect::DarkBackground(state.dark_background));
            effects.push(RenderEffect::StorePreference {
                key: prefs::DARK_BACKGROUND,
                value: state.dark_background.to_string(),
            });
        }
        OptionsAction::ToggleBlackKeys => {
            state.black_keys_visible = !state.black_keys_visible;
            effects.push(RenderEffect::BlackKeys(state.black_keys_visible));
            effects.push(RenderEffect::StorePreference {
                key: prefs::BLACK_KEYS_VISIBLE,
                value: state.black_keys_visible.to_string(),
            });
        }
    }
}
