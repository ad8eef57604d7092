//! Drag-gesture session state.

use serde::{Deserialize, Serialize};

/// Which disc an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Disc {
    Chromatic,
    Fifths,
}

impl Disc {
    pub fn other(&self) -> Disc {
        match self {
            Disc::Chromatic => Disc::Fifths,
            Disc::Fifths => Disc::Chromatic,
        }
    }
}

/// Identity of the input device driving a gesture, compared by value.
/// Pointer and touch ids come from disjoint namespaces, so the kind is part
/// of the identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GestureId {
    Pointer(i64),
    Touch(i64),
}

/// An in-flight drag on one disc. Created at gesture start, dropped at
/// gesture end; at most one exists at a time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub disc: Disc,
    pub gesture: GestureId,
    /// Disc angle minus pointer angle at gesture start; adding it to later
    /// pointer angles keeps the grabbed point under the finger.
    pub offset_deg: f64,
    /// Latest raw (unstepped) disc angle.
    pub current_deg: f64,
    /// Set on the first move. A press-and-release without movement commits
    /// nothing.
    pub rotated: bool,
}

impl DragSession {
    pub fn new(disc: Disc, gesture: GestureId, offset_deg: f64) -> Self {
        DragSession {
            disc,
            gesture,
            offset_deg,
            current_deg: offset_deg,
            rotated: false,
        }
    }
}
