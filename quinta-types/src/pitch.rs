//! Modular pitch and angle arithmetic.
//!
//! Key indices live on a 12-periodic lattice (the circle of fifths folds back
//! on itself every 12 keys), disc rotations on a 360-degree circle. Both are
//! stored unbounded and folded into a caller-chosen window on demand.

/// Fold `value` into `[min, max]` by repeated ±12 shifts.
///
/// The window is inclusive on both ends and need not span exactly 12; callers
/// pass the valid key range of whichever spelling table they are addressing.
///
/// # Panics
///
/// Panics when no ±12 shift of `value` lands inside the window. A window that
/// excludes every representative is a programming error; returning some other
/// key would silently display the wrong spelling.
pub fn clamp_pitch(value: i32, min: i32, max: i32) -> i32 {
    let mut v = value;
    while v > max {
        v -= 12;
    }
    while v < min {
        v += 12;
    }
    assert!(
        v <= max,
        "no pitch representative of {value} in [{min}, {max}]"
    );
    v
}

/// Fold `deg` into `[center - half_window, center + half_window]` by
/// repeated ±360 shifts. Inclusive on both ends.
///
/// Keeping an angle inside a window centered on its previous value is what
/// prevents the disc from visually taking the long way around on wraparound.
pub fn clamp_angle(deg: f64, center: f64, half_window: f64) -> f64 {
    let mut d = deg;
    while d > center + half_window {
        d -= 360.0;
    }
    while d < center - half_window {
        d += 360.0;
    }
    d
}

/// Variant of [`clamp_angle`] with an exclusive lower bound:
/// `(center - half_window, center + half_window]`.
pub fn clamp_angle_open(deg: f64, center: f64, half_window: f64) -> f64 {
    let mut d = deg;
    while d > center + half_window {
        d -= 360.0;
    }
    while d <= center - half_window {
        d += 360.0;
    }
    d
}
