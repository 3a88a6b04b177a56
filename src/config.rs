use crate::data::{Preset, PresetCatalog};
use crate::error::{Result, RigsmithError};
use crate::utils::file::{expand_path, read_file_safe, write_if_missing};
use crate::utils::parsing::normalize_name;
use dirs::config_dir;
use serde::Deserialize;
use std::{
    collections::{BTreeMap, HashMap},
    path::{Path, PathBuf},
};

/// Default config shipped with the binary
pub const DEFAULT_CONFIG: &str = include_str!("../config/config.toml");

const SYSTEM_CONFIG_PATH: &str = "/usr/share/rigsmith/config.toml";

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub colors: HashMap<String, String>,
    pub presets: BTreeMap<String, Preset>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct DisplayConfig {
    pub separator: String,
    pub color: bool,
    pub align_keys: bool,
    pub header: String,
    pub bullet: String,
    pub key_color: Option<String>,
    pub value_color: Option<String>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            separator: ": ".to_string(),
            color: true,
            align_keys: false,
            header: crate::data::computer::DEFAULT_HEADER.to_string(),
            bullet: "-".to_string(),
            key_color: None,
            value_color: None,
        }
    }
}

impl Config {
    /// Parse config text; `origin` only labels errors
    pub fn from_toml(text: &str, origin: &Path) -> Result<Self> {
        toml::de::from_str(text).map_err(|source| RigsmithError::ConfigParse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Built-in presets merged with the ones declared under `[presets]`.
    ///
    /// Two tables whose names normalize to the same key (`home_server` and
    /// `home-server`) are rejected; replacing a built-in is allowed.
    pub fn catalog(&self) -> Result<PresetCatalog> {
        let mut declared: HashMap<String, &str> = HashMap::new();
        for name in self.presets.keys() {
            let key = normalize_name(name);
            if let Some(first) = declared.insert(key.clone(), name) {
                return Err(RigsmithError::InvalidPreset {
                    name: key,
                    reason: format!("declared twice, as `{}` and `{}`", first, name),
                });
            }
        }

        PresetCatalog::with_presets(self.presets.iter().map(|(name, preset)| Preset {
            name: name.clone(),
            ..preset.clone()
        }))
    }
}

/// `<config dir>/rigsmith/config.toml`, if the platform has a config dir
pub fn user_config_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join("rigsmith/config.toml"))
}

/// Copy the bundled default config into the user config dir if it is not there yet
pub fn ensure_user_config_exists() -> Result<PathBuf> {
    let user_config_path = user_config_path()
        .ok_or_else(|| RigsmithError::Config("could not determine config dir".to_string()))?;

    if write_if_missing(&user_config_path, DEFAULT_CONFIG)? {
        tracing::info!("Created config at {}", user_config_path.display());
    } else {
        tracing::debug!("Config already present at {}", user_config_path.display());
    }
    Ok(user_config_path)
}

/// Resolve and load the config.
///
/// An explicit path must exist. Otherwise the user config, then the system
/// config, then the bundled default are tried in that order.
pub fn load_config(explicit: Option<&str>) -> Result<Config> {
    if let Some(raw) = explicit {
        let path = expand_path(raw);
        if !path.exists() {
            return Err(RigsmithError::Config(format!(
                "config file `{}` does not exist",
                path.display()
            )));
        }
        return load_from(&path);
    }

    let candidates = user_config_path()
        .into_iter()
        .chain(std::iter::once(PathBuf::from(SYSTEM_CONFIG_PATH)));
    for path in candidates {
        if path.exists() {
            return load_from(&path);
        }
    }

    tracing::debug!("No config file found, using bundled defaults");
    Config::from_toml(DEFAULT_CONFIG, Path::new("<bundled>"))
}

fn load_from(path: &Path) -> Result<Config> {
    tracing::debug!("Loading config from {}", path.display());
    let config_data = read_file_safe(path)?;
    Config::from_toml(&config_data, path)
}
