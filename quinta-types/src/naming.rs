//! Note-name resolution: which 12 glyphs the discs should display.

use crate::pitch::clamp_pitch;
use crate::spelling::{Glyph, ENHARMONICS_1, ENHARMONICS_2, PITCH_CLASSES};
use crate::state::{Mask, NoteNames};

/// Outcome of a resolution.
///
/// `names` echoes the input with the automatic key folded into the active
/// mask's window; callers store it back so the key index never strays from
/// the displayable range. `automatic` reports whether the glyphs came from a
/// table lookup; it gates the enharmonic-swap control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedNames {
    pub glyphs: &'static [Glyph; 12],
    pub automatic: bool,
    pub names: NoteNames,
}

/// Resolve the display glyphs for the given mask and naming state.
///
/// Automatic naming consults the mask's table family within the mask's key
/// window. Masks with no family (whole tones, octatonic, chromatic) and the
/// no-mask state fall back to the first enharmonic display, and the result
/// is not considered automatic even though the stored key survives.
pub fn resolve(mask: Option<Mask>, names: NoteNames) -> ResolvedNames {
    match names {
        NoteNames::Auto(key) => {
            let lookup = mask.and_then(|m| m.naming_family().zip(m.key_window()));
            match lookup {
                Some((family, (lo, hi))) => {
                    let key = clamp_pitch(key, lo, hi);
                    ResolvedNames {
                        glyphs: &family.table().row(key).glyphs,
                        automatic: true,
                        names: NoteNames::Auto(key),
                    }
                }
                None => ResolvedNames {
                    glyphs: &ENHARMONICS_1,
                    automatic: false,
                    names,
                },
            }
        }
        NoteNames::Enharmonics1 => ResolvedNames {
            glyphs: &ENHARMONICS_1,
            automatic: false,
            names,
        },
        NoteNames::Enharmonics2 => ResolvedNames {
            glyphs: &ENHARMONICS_2,
            automatic: false,
            names,
        },
        NoteNames::PitchClasses => ResolvedNames {
            glyphs: &PITCH_CLASSES,
            automatic: false,
            names,
        },
    }
}

/// Key of the enharmonic respelling of the current automatic key, or `None`
/// when no table-backed mask is active or naming is fixed. The returned key
/// may lie outside the mask's window; [`resolve`] renormalizes it.
pub fn enharmonic_swap(mask: Option<Mask>, names: NoteNames) -> Option<i32> {
    let family = mask?.naming_family()?;
    let key = names.key()?;
    let table = family.table();
    Some(table.row(table.normalize(key)).enharmonic)
}
