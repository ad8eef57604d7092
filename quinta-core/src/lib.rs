//! Dispatch layer for the transposition engine: actions in, render effects
//! out, plus startup configuration and preference persistence. The pure data
//! model lives in `quinta-types`.

pub mod config;
pub mod dispatch;
pub mod engine;
pub mod prefs;

pub use config::{Config, StartupOptions};
pub use dispatch::{dispatch_action, RenderEffect};
pub use engine::Engine;
pub use prefs::{apply_store_effects, load_preferences, MemoryPrefs, PrefStore};
