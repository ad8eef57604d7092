//! Preference persistence: a string key/value contract.
//!
//! The engine never touches storage itself. It emits
//! [`RenderEffect::StorePreference`] when something should be saved and
//! reads values back through [`PrefStore`] at session start. Values are
//! plain strings; anything unreadable falls back to its default.

use std::collections::HashMap;

use quinta_types::state::EngineState;
use quinta_types::{Action, NamesAction, NamingMode};

use crate::dispatch::{dispatch_action, RenderEffect};

pub const DARK_BACKGROUND: &str = "dark_background";
pub const BLACK_KEYS_VISIBLE: &str = "black_keys_visible";
pub const NOTE_NAMES: &str = "note_names";

/// String key/value store for user preferences.
pub trait PrefStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store, for tests and for hosts without persistent storage.
#[derive(Debug, Default)]
pub struct MemoryPrefs {
    values: HashMap<String, String>,
}

impl PrefStore for MemoryPrefs {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// Apply stored preferences to a fresh state, emitting the effects that put
/// the display in sync. Only the literal string `"true"` reads as true, so a
/// corrupted value degrades to `false` rather than erroring.
pub fn load_preferences(
    state: &mut EngineState,
    prefs: &dyn PrefStore,
    effects: &mut Vec<RenderEffect>,
) {
    state.dark_background = read_bool(prefs, DARK_BACKGROUND, false);
    state.black_keys_visible = read_bool(prefs, BLACK_KEYS_VISIBLE, true);
    effects.push(RenderEffect::DarkBackground(state.dark_background));
    effects.push(RenderEffect::BlackKeys(state.black_keys_visible));

    let mode = NamingMode::parse(&prefs.get(NOTE_NAMES).unwrap_or_default());
    dispatch_action(&Action::Names(NamesAction::SetMode(mode)), state, effects);
}

/// Write every `StorePreference` in `effects` into `prefs`. Convenience for
/// hosts that persist synchronously.
pub fn apply_store_effects(effects: &[RenderEffect], prefs: &mut dyn PrefStore) {
    for effect in effects {
        if let RenderEffect::StorePreference { key, value } = effect {
            prefs.set(key, value);
        }
    }
}

fn read_bool(prefs: &dyn PrefStore, key: &str, default: bool) -> bool {
    prefs.get(key).unwrap_or_else(|| default.to_string()) == "true"
}
