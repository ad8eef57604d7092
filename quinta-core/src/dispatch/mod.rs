//! Action dispatch: mutate [`EngineState`], collect [`RenderEffect`]s.
//!
//! Each dispatcher runs to completion on the calling thread; a dispatch call
//! is atomic with respect to the state it was handed.

mod drag;
mod mask;
mod names;
mod options;
mod transpose;
pub mod side_effects;

pub use side_effects::RenderEffect;

use quinta_types::state::EngineState;
use quinta_types::Action;

/// Dispatch one action. Effects describing what the renderer (and the
/// preference store) should do are pushed onto `effects` in order.
pub fn dispatch_action(action: &Action, state: &mut EngineState, effects: &mut Vec<RenderEffect>) {
    match action {
        Action::Mask(a) => mask::dispatch_mask(a, state, effects),
        Action::Transpose(a) => transpose::dispatch_transpose(a, state, effects),
        Action::Names(a) => names::dispatch_names(a, state, effects),
        Action::Drag(a) => drag::dispatch_drag(a, state, effects),
        Action::Options(a) => options::dispatch_options(a, state, effects),
    }
}
