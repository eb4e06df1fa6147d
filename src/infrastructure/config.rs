use std::path::PathBuf;

use color_eyre::eyre::Result;
use config::ConfigError;
use serde::Deserialize;

use crate::presentation::config::keybindings::KeyBindings;
use crate::presentation::config::styles::ThemeConfig;
use crate::utils;

const CONFIG: &str = include_str!("../../.config/config.json5");

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: KeyBindings,
    #[serde(default)]
    pub theme: ThemeConfig,
    /// Prepended to provider paths such as `/oauth/github`. Empty means
    /// relative to the booking host.
    #[serde(default)]
    pub provider_base_url: String,
}

impl Config {
    /// The embedded defaults, without consulting any user file.
    pub fn default_config() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    /// Embedded defaults merged with an optional user config file from the
    /// config directory. Unlike a private-key setup there is nothing a user
    /// must provide, so a missing file is fine.
    pub fn new() -> Result<Self, ConfigError> {
        let default_config = Self::default_config()?;
        let data_dir = utils::get_data_dir();
        let config_dir = utils::get_config_dir();
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().to_string())?
            .set_default("_config_dir", config_dir.to_string_lossy().to_string())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true;
            }
        }
        if !found_config {
            log::info!("No user configuration file found; using embedded defaults");
            return Ok(default_config);
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;

        // User bindings override per key; unset keys keep the defaults.
        for (mode, default_bindings) in default_config.keybindings.iter() {
            let user_bindings = cfg.keybindings.entry(*mode).or_default();
            for (key, action) in default_bindings.iter() {
                user_bindings
                    .entry(key.clone())
                    .or_insert_with(|| action.clone());
            }
        }

        if cfg.provider_base_url.is_empty() {
            cfg.provider_base_url = default_config.provider_base_url.clone();
        }

        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::nav::Mode;
    use crate::presentation::config::keybindings::{parse_key_sequence, Action};

    #[test]
    fn test_embedded_defaults_parse() {
        let config = Config::default_config().expect("embedded config parses");
        assert!(!config.theme.use_system_color_mode);

        let shell = config
            .keybindings
            .get(&Mode::Shell)
            .expect("shell bindings exist");
        assert_eq!(
            shell.get(&parse_key_sequence("<q>").expect("parses")),
            Some(&Action::Quit)
        );
        assert_eq!(
            shell.get(&parse_key_sequence("<enter>").expect("parses")),
            Some(&Action::MenuSelect)
        );
    }

    #[test]
    fn test_signup_mode_has_an_escape_hatch() {
        let config = Config::default_config().expect("embedded config parses");
        let signup = config
            .keybindings
            .get(&Mode::Signup)
            .expect("signup bindings exist");
        assert_eq!(
            signup.get(&parse_key_sequence("<esc>").expect("parses")),
            Some(&Action::Navigate("/".into()))
        );
    }
}
