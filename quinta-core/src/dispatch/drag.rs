//! Drag-gesture dispatch: one admitted gesture at a time, raw angles while
//! the finger is down, a stepped commit on release.

use quinta_types::pitch::{clamp_angle, clamp_pitch};
use quinta_types::spelling::ENHARMONICS_1;
use quinta_types::state::{Disc, DragSession, EngineState, NoteNames, ANGLE_SEMITONE};
use quinta_types::DragAction;

use super::names;
use super::side_effects::RenderEffect;

pub(super) fn dispatch_drag(
    action: &DragAction,
    state: &mut EngineState,
    effects: &mut Vec<RenderEffect>,
) {
    match action {
        DragAction::Begin {
            disc,
            gesture,
            pointer_deg,
        } => {
            if let Some(active) = &state.drag {
                log::debug!(
                    target: "drag",
                    "dropping {:?}, gesture {:?} already active",
                    gesture,
                    active.gesture
                );
                return;
            }
            // Grab offset keeps the touched point under the finger; the disc
            // angle folds to a single revolution first.
            let offset = clamp_angle(state.disc_angle(*disc), 0.0, 180.0) - pointer_deg;
            state.drag = Some(DragSession::new(*disc, *gesture, offset));
        }
        DragAction::Move {
            gesture,
            pointer_deg,
        } => {
            let Some(session) = state.drag.as_mut() else {
                return;
            };
            if session.gesture != *gesture {
                return;
            }
            if !session.rotated {
                session.rotated = true;
                // Spelled names stop meaning anything mid-turn; show the
                // plain enharmonic labels until the gesture settles.
                if state.transposition.names.is_auto() {
                    effects.push(RenderEffect::NoteNames {
                        glyphs: &ENHARMONICS_1,
                        delay_ms: 0,
                    });
                    effects.push(RenderEffect::SwapAvailability(false));
                }
            }
            session.current_deg = pointer_deg + session.offset_deg;
            let (chromatic_deg, fifths_deg) = match session.disc {
                Disc::Chromatic => (session.current_deg, state.rotation.fifths_deg),
                Disc::Fifths => (state.rotation.chromatic_deg, session.current_deg),
            };
            effects.push(RenderEffect::Rotation {
                chromatic_deg,
                fifths_deg,
                animate: false,
            });
        }
        DragAction::End { gesture } => {
            let Some(session) = state.drag else {
                return;
            };
            if session.gesture != *gesture {
                return;
            }
            state.drag = None;
            if session.rotated {
                commit(&session, state, effects);
            }
        }
        DragAction::Cancel { gesture } => {
            let Some(session) = state.drag else {
                return;
            };
            if session.gesture != *gesture {
                return;
            }
            state.drag = None;
            if session.rotated {
                // Snap back to the stored angles; nothing was committed.
                effects.push(RenderEffect::Rotation {
                    chromatic_deg: state.rotation.chromatic_deg,
                    fifths_deg: state.rotation.fifths_deg,
                    animate: true,
                });
                names::refresh(state, 0, effects);
            }
        }
    }
}

/// Turn the released angle into transposition state and an animated snap.
///
/// The dragged disc's counter is set (not incremented) to the nearest step
/// folded into the single-fifths window; the other disc follows at seven
/// steps per step, folded likewise. The dragged disc re-centers on the angle
/// it was released at, the other on wherever it already was.
fn commit(session: &DragSession, state: &mut EngineState, effects: &mut Vec<RenderEffect>) {
    let steps = clamp_pitch(
        (session.current_deg / ANGLE_SEMITONE).round() as i32,
        -5,
        6,
    );
    let coupled = clamp_pitch(steps * 7, -5, 6);
    let t = &mut state.transposition;
    match session.disc {
        Disc::Chromatic => {
            t.chromatic = steps;
            t.fifths = coupled;
        }
        Disc::Fifths => {
            t.fifths = steps;
            t.chromatic = coupled;
        }
    }
    if t.names.is_auto() {
        t.names = NoteNames::Auto(t.fifths);
    }
    let (dragged_center, other_prev) = match session.disc {
        Disc::Chromatic => (session.current_deg, state.rotation.fifths_deg),
        Disc::Fifths => (session.current_deg, state.rotation.chromatic_deg),
    };
    match session.disc {
        Disc::Chromatic => {
            state.rotation.chromatic_deg =
                clamp_angle(t.chromatic as f64 * ANGLE_SEMITONE, dragged_center, 180.0);
            state.rotation.fifths_deg =
                clamp_angle(t.fifths as f64 * ANGLE_SEMITONE, other_prev, 180.0);
        }
        Disc::Fifths => {
            state.rotation.fifths_deg =
                clamp_angle(t.fifths as f64 * ANGLE_SEMITONE, dragged_center, 180.0);
            state.rotation.chromatic_deg =
                clamp_angle(t.chromatic as f64 * ANGLE_SEMITONE, other_prev, 180.0);
        }
    }
    effects.push(RenderEffect::Rotation {
        chromatic_deg: state.rotation.chromatic_deg,
        fifths_deg: state.rotation.fifths_deg,
        animate: true,
    });
    names::refresh(state, 0, effects);
}
