//! End-to-end dispatch scenarios against a live engine.

use quinta_core::{Engine, MemoryPrefs, PrefStore, RenderEffect, StartupOptions};
use quinta_types::spelling::{ENHARMONICS_1, DIATONIC};
use quinta_types::state::{Disc, GestureId, Mask, NoteNames};
use quinta_types::{
    Action, DragAction, MaskAction, NamesAction, NamingMode, TransposeAction,
};

fn fresh() -> Engine {
    let mut engine = Engine::start(&StartupOptions::default(), &MemoryPrefs::default());
    engine.drain_effects();
    engine
}

fn last_rotation(effects: &[RenderEffect]) -> (f64, f64, bool) {
    effects
        .iter()
        .rev()
        .find_map(|e| match e {
            RenderEffect::Rotation {
                chromatic_deg,
                fifths_deg,
                animate,
            } => Some((*chromatic_deg, *fifths_deg, *animate)),
            _ => None,
        })
        .expect("no rotation effect")
}

fn last_names(effects: &[RenderEffect]) -> &'static [quinta_types::Glyph; 12] {
    effects
        .iter()
        .rev()
        .find_map(|e| match e {
            RenderEffect::NoteNames { glyphs, .. } => Some(*glyphs),
            _ => None,
        })
        .expect("no note-names effect")
}

#[test]
fn fifths_steps_couple_onto_the_chromatic_disc() {
    let mut engine = fresh();
    let effects = engine.dispatch(&Action::Transpose(TransposeAction::Fifths(3)));
    let state = engine.state();
    assert_eq!(state.transposition.fifths, 3);
    assert_eq!(state.transposition.chromatic, -3);
    assert_eq!(state.transposition.names, NoteNames::Auto(3));
    let (chromatic_deg, fifths_deg, animate) = last_rotation(&effects);
    assert_eq!(chromatic_deg, -90.0);
    assert_eq!(fifths_deg, 90.0);
    assert!(animate);
}

#[test]
fn semitone_up_shows_the_sharp_side_spelling() {
    let mut engine = fresh();
    engine.dispatch(&Action::Mask(MaskAction::Select(Some(Mask::Diatonic))));
    let effects = engine.dispatch(&Action::Transpose(TransposeAction::Semitones(1)));
    assert_eq!(engine.state().transposition.names, NoteNames::Auto(7));
    assert_eq!(last_names(&effects), &DIATONIC.row(7).glyphs);
    let (chromatic_deg, fifths_deg, _) = last_rotation(&effects);
    assert_eq!(chromatic_deg, 30.0);
    assert_eq!(fifths_deg, 210.0);
}

#[test]
fn reselecting_the_active_mask_clears_it() {
    let mut engine = fresh();
    let effects = engine.dispatch(&Action::Mask(MaskAction::Select(Some(Mask::Pentatonic))));
    assert_eq!(engine.state().active_mask, Some(Mask::Pentatonic));
    assert!(effects.iter().any(|e| matches!(
        e,
        RenderEffect::MaskVisibility {
            mask: Some(Mask::Pentatonic),
            previous: None,
        }
    )));

    let effects = engine.dispatch(&Action::Mask(MaskAction::Select(Some(Mask::Pentatonic))));
    assert_eq!(engine.state().active_mask, None);
    assert!(effects.iter().any(|e| matches!(
        e,
        RenderEffect::MaskVisibility {
            mask: None,
            previous: Some(Mask::Pentatonic),
        }
    )));
    // Without a table-backed mask the plain enharmonic labels come back.
    assert_eq!(last_names(&effects), &ENHARMONICS_1);
}

#[test]
fn enharmonic_swap_from_the_reference_key() {
    let mut engine = fresh();
    engine.dispatch(&Action::Mask(MaskAction::Select(Some(Mask::Diatonic))));
    engine.dispatch(&Action::Names(NamesAction::SwapEnharmonics));
    assert_eq!(engine.state().transposition.names, NoteNames::Auto(12));
}

#[test]
fn swap_is_inert_without_a_table_backed_mask() {
    let mut engine = fresh();
    engine.dispatch(&Action::Mask(MaskAction::Select(Some(Mask::Chromatic))));
    engine.dispatch(&Action::Names(NamesAction::SwapEnharmonics));
    assert_eq!(engine.state().transposition.names, NoteNames::Auto(0));
}

#[test]
fn entering_automatic_mode_rederives_the_key() {
    let mut engine = fresh();
    engine.dispatch(&Action::Names(NamesAction::SetMode(NamingMode::PitchClasses)));
    engine.dispatch(&Action::Transpose(TransposeAction::Fifths(3)));
    assert_eq!(engine.state().transposition.names, NoteNames::PitchClasses);
    let effects = engine.dispatch(&Action::Names(NamesAction::SetMode(NamingMode::Automatic)));
    assert_eq!(engine.state().transposition.names, NoteNames::Auto(3));
    assert!(effects.iter().any(|e| matches!(
        e,
        RenderEffect::StorePreference { key: "note_names", value } if value == "auto"
    )));
}

#[test]
fn drag_commit_windows_into_a_single_turn() {
    let mut engine = fresh();
    let gesture = GestureId::Pointer(1);
    engine.dispatch(&Action::Drag(DragAction::Begin {
        disc: Disc::Chromatic,
        gesture,
        pointer_deg: 0.0,
    }));
    let effects = engine.dispatch(&Action::Drag(DragAction::Move {
        gesture,
        pointer_deg: 200.0,
    }));
    // Raw angle streams without animation while the finger is down.
    let (chromatic_deg, _, animate) = last_rotation(&effects);
    assert_eq!(chromatic_deg, 200.0);
    assert!(!animate);

    let effects = engine.dispatch(&Action::Drag(DragAction::End { gesture }));
    let state = engine.state();
    // 200 deg rounds to 7 steps, which folds to -5 in the single-turn
    // window; the fifths disc follows at -35 folded to 1.
    assert_eq!(state.transposition.chromatic, -5);
    assert_eq!(state.transposition.fifths, 1);
    assert_eq!(state.transposition.names, NoteNames::Auto(1));
    let (chromatic_deg, fifths_deg, animate) = last_rotation(&effects);
    // The dragged disc re-centers on the released angle.
    assert_eq!(chromatic_deg, 210.0);
    assert_eq!(fifths_deg, 30.0);
    assert!(animate);
    assert!(state.drag.is_none());
}

#[test]
fn drag_first_move_overrides_spelled_names() {
    let mut engine = fresh();
    engine.dispatch(&Action::Mask(MaskAction::Select(Some(Mask::Diatonic))));
    let gesture = GestureId::Touch(4);
    engine.dispatch(&Action::Drag(DragAction::Begin {
        disc: Disc::Fifths,
        gesture,
        pointer_deg: 10.0,
    }));
    let effects = engine.dispatch(&Action::Drag(DragAction::Move {
        gesture,
        pointer_deg: 40.0,
    }));
    assert_eq!(last_names(&effects), &ENHARMONICS_1);
    assert!(effects
        .iter()
        .any(|e| matches!(e, RenderEffect::SwapAvailability(false))));
    // The stored naming state is untouched until commit.
    assert_eq!(engine.state().transposition.names, NoteNames::Auto(0));
}

#[test]
fn second_gesture_is_dropped_while_one_is_active() {
    let mut engine = fresh();
    let first = GestureId::Pointer(1);
    engine.dispatch(&Action::Drag(DragAction::Begin {
        disc: Disc::Chromatic,
        gesture: first,
        pointer_deg: 0.0,
    }));
    engine.dispatch(&Action::Drag(DragAction::Begin {
        disc: Disc::Fifths,
        gesture: GestureId::Touch(1),
        pointer_deg: 90.0,
    }));
    let session = engine.state().drag.expect("first gesture still active");
    assert_eq!(session.gesture, first);
    assert_eq!(session.disc, Disc::Chromatic);

    // Moves and ends from the stranger are ignored.
    engine.dispatch(&Action::Drag(DragAction::Move {
        gesture: GestureId::Touch(1),
        pointer_deg: 120.0,
    }));
    engine.dispatch(&Action::Drag(DragAction::End {
        gesture: GestureId::Touch(1),
    }));
    assert!(engine.state().drag.is_some());
    assert_eq!(engine.state().transposition.chromatic, 0);
}

#[test]
fn press_without_movement_commits_nothing() {
    let mut engine = fresh();
    let gesture = GestureId::Pointer(2);
    engine.dispatch(&Action::Drag(DragAction::Begin {
        disc: Disc::Fifths,
        gesture,
        pointer_deg: 33.0,
    }));
    let effects = engine.dispatch(&Action::Drag(DragAction::End { gesture }));
    assert!(effects.is_empty());
    assert_eq!(engine.state().transposition.fifths, 0);
    assert!(engine.state().drag.is_none());
}

#[test]
fn cancel_never_commits() {
    let mut engine = fresh();
    let gesture = GestureId::Pointer(9);
    engine.dispatch(&Action::Drag(DragAction::Begin {
        disc: Disc::Chromatic,
        gesture,
        pointer_deg: 0.0,
    }));
    engine.dispatch(&Action::Drag(DragAction::Move {
        gesture,
        pointer_deg: 65.0,
    }));
    let effects = engine.dispatch(&Action::Drag(DragAction::Cancel { gesture }));
    let state = engine.state();
    assert_eq!(state.transposition.chromatic, 0);
    assert!(state.drag.is_none());
    // Snaps back to the stored angles, animated.
    let (chromatic_deg, fifths_deg, animate) = last_rotation(&effects);
    assert_eq!(chromatic_deg, 0.0);
    assert_eq!(fifths_deg, 0.0);
    assert!(animate);
}

#[test]
fn bootstrap_applies_prefs_then_startup_options() {
    let mut prefs = MemoryPrefs::default();
    prefs.set("dark_background", "true");
    prefs.set("note_names", "enharmonics2");
    let options = StartupOptions {
        mask: Some(Mask::Diatonic),
        rotate: 2,
        hide_controls: false,
    };
    let mut engine = Engine::start(&options, &prefs);
    let effects = engine.drain_effects();
    let state = engine.state();
    assert!(state.dark_background);
    assert_eq!(state.active_mask, Some(Mask::Diatonic));
    assert_eq!(state.transposition.fifths, 2);
    assert_eq!(state.transposition.chromatic, 2);
    assert_eq!(state.transposition.names, NoteNames::Enharmonics2);
    assert!(effects
        .iter()
        .any(|e| matches!(e, RenderEffect::DarkBackground(true))));
}

#[test]
fn option_toggles_emit_store_effects() {
    let mut engine = fresh();
    let effects = engine.dispatch(&Action::Options(
        quinta_types::OptionsAction::ToggleDarkBackground,
    ));
    assert!(engine.state().dark_background);
    let mut prefs = MemoryPrefs::default();
    quinta_core::apply_store_effects(&effects, &mut prefs);
    assert_eq!(prefs.get("dark_background").as_deref(), Some("true"));

    let effects = engine.dispatch(&Action::Options(
        quinta_types::OptionsAction::ToggleBlackKeys,
    ));
    assert!(!engine.state().black_keys_visible);
    quinta_core::apply_store_effects(&effects, &mut prefs);
    assert_eq!(prefs.get("black_keys_visible").as_deref(), Some("false"));
}

#[test]
fn rotation_sync_is_idempotent_across_resets() {
    let mut engine = fresh();
    engine.dispatch(&Action::Transpose(TransposeAction::Semitones(5)));
    let first = (
        engine.state().rotation.chromatic_deg,
        engine.state().rotation.fifths_deg,
    );
    engine.dispatch(&Action::Transpose(TransposeAction::Semitones(0)));
    let second = (
        engine.state().rotation.chromatic_deg,
        engine.state().rotation.fifths_deg,
    );
    assert_eq!(first, second);

    engine.dispatch(&Action::Transpose(TransposeAction::Reset));
    let state = engine.state();
    assert_eq!(state.transposition.chromatic, 0);
    assert_eq!(state.transposition.fifths, 0);
    assert_eq!(state.transposition.names, NoteNames::Auto(0));
}
