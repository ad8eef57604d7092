//! Startup configuration: embedded defaults, an optional user config file,
//! and one-shot query-string parameters, in that precedence order.

use std::path::PathBuf;

use serde::Deserialize;

use quinta_types::state::Mask;

const DEFAULT_CONFIG: &str = include_str!("../config.toml");

#[derive(Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    defaults: DefaultsConfig,
}

#[derive(Deserialize, Default)]
struct DefaultsConfig {
    mask: Option<String>,
    rotate: Option<i32>,
    hide_controls: Option<bool>,
}

/// Options a session starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StartupOptions {
    /// Mask to activate before the first render.
    pub mask: Option<Mask>,
    /// Initial transposition, in signed fifths.
    pub rotate: i32,
    /// Whether the host should hide the control panel. The engine passes
    /// this through untouched.
    pub hide_controls: bool,
}

pub struct Config {
    defaults: DefaultsConfig,
}

impl Config {
    pub fn load() -> Self {
        let mut base: ConfigFile =
            toml::from_str(DEFAULT_CONFIG).expect("Failed to parse embedded config.toml");

        if let Some(path) = user_config_path() {
            if path.exists() {
                match std::fs::read_to_string(&path) {
                    Ok(contents) => match toml::from_str::<ConfigFile>(&contents) {
                        Ok(user) => merge_defaults(&mut base.defaults, user.defaults),
                        Err(e) => {
                            log::warn!(target: "config", "ignoring malformed config {}: {}", path.display(), e)
                        }
                    },
                    Err(e) => {
                        log::warn!(target: "config", "could not read config {}: {}", path.display(), e)
                    }
                }
            }
        }

        Config {
            defaults: base.defaults,
        }
    }

    pub fn startup(&self) -> StartupOptions {
        StartupOptions {
            mask: self.defaults.mask.as_deref().and_then(parse_mask),
            rotate: self.defaults.rotate.unwrap_or(0),
            hide_controls: self.defaults.hide_controls.unwrap_or(false),
        }
    }

    /// Startup options with a query string applied on top, e.g.
    /// `"mask=diatonic&rotate=-3&hidecontrols"`. A leading `?` is tolerated.
    pub fn startup_with_query(&self, query: &str) -> StartupOptions {
        let mut options = self.startup();
        apply_query(&mut options, query);
        options
    }
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("quinta").join("config.toml"))
}

fn merge_defaults(base: &mut DefaultsConfig, user: DefaultsConfig) {
    if user.mask.is_some() {
        base.mask = user.mask;
    }
    if user.rotate.is_some() {
        base.rotate = user.rotate;
    }
    if user.hide_controls.is_some() {
        base.hide_controls = user.hide_controls;
    }
}

fn parse_mask(s: &str) -> Option<Mask> {
    let mask = Mask::parse(s);
    if mask.is_none() {
        log::warn!(target: "config", "unknown mask name {s:?}");
    }
    mask
}

fn apply_query(options: &mut StartupOptions, query: &str) {
    let query = query.strip_prefix('?').unwrap_or(query);
    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = match pair.split_once('=') {
            Some((k, v)) => (k, v),
            None => (pair, ""),
        };
        match key {
            "mask" => options.mask = parse_mask(value),
            "rotate" => match value.parse::<i32>() {
                Ok(n) => options.rotate = n,
                Err(_) => {
                    log::warn!(target: "config", "ignoring non-numeric rotate {value:?}")
                }
            },
            "hidecontrols" => options.hide_controls = parse_bool_like(value),
            _ => log::debug!(target: "config", "ignoring query parameter {key:?}"),
        }
    }
}

/// Boolean-like query values: a bare key counts as true.
fn parse_bool_like(value: &str) -> bool {
    matches!(value, "" | "1" | "true" | "yes")
}
