//! Engine: owning facade over state, dispatch and effect collection.

use quinta_types::state::EngineState;
use quinta_types::{Action, MaskAction, TransposeAction};

use crate::config::StartupOptions;
use crate::dispatch::{dispatch_action, RenderEffect};
use crate::prefs::{self, PrefStore};

/// One visualizer widget's engine. Holds the state and an effect buffer;
/// every call runs to completion on the calling thread.
#[derive(Debug)]
pub struct Engine {
    state: EngineState,
    effects: Vec<RenderEffect>,
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new()
    }
}

impl Engine {
    pub fn new() -> Self {
        Engine {
            state: EngineState::new(),
            effects: Vec::new(),
        }
    }

    /// Bootstrap a session: stored preferences first, then the startup
    /// options (mask selection, initial rotation). Drain the returned
    /// engine's effects to paint the first frame.
    pub fn start(options: &StartupOptions, store: &dyn PrefStore) -> Self {
        let mut engine = Engine::new();
        prefs::load_preferences(&mut engine.state, store, &mut engine.effects);
        if options.mask.is_some() {
            dispatch_action(
                &Action::Mask(MaskAction::Select(options.mask)),
                &mut engine.state,
                &mut engine.effects,
            );
        }
        if options.rotate != 0 {
            dispatch_action(
                &Action::Transpose(TransposeAction::Fifths(options.rotate)),
                &mut engine.state,
                &mut engine.effects,
            );
        }
        engine
    }

    /// Dispatch one action and return the effects it produced (plus any
    /// still undrained from bootstrap).
    pub fn dispatch(&mut self, action: &Action) -> Vec<RenderEffect> {
        dispatch_action(action, &mut self.state, &mut self.effects);
        std::mem::take(&mut self.effects)
    }

    pub fn drain_effects(&mut self) -> Vec<RenderEffect> {
        std::mem::take(&mut self.effects)
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }
}
