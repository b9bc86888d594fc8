use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const FILENAME: &str = "config.yaml";
const APP_DIR: &str = "folioview";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// "light" or "dark".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub windowed: Option<bool>,

    /// Content directory used when none is given on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_dir: Option<String>,
}

impl Config {
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join(FILENAME))
    }

    /// Load the config file, or defaults when it does not exist.
    pub fn load() -> Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        serde_yaml::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    pub fn save(&self) -> Result<()> {
        let Some(path) = Self::config_path() else {
            bail!("could not determine the user config directory");
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let raw = serde_yaml::to_string(self)?;
        std::fs::write(&path, raw).with_context(|| format!("writing {}", path.display()))
    }

    fn defaults_mut(&mut self) -> &mut DefaultsConfig {
        self.defaults.get_or_insert_with(DefaultsConfig::default)
    }

    /// Apply a `key value` pair from `folio config set`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "defaults.theme" => {
                if value != "light" && value != "dark" {
                    bail!("theme must be \"light\" or \"dark\", got \"{value}\"");
                }
                self.defaults_mut().theme = Some(value.to_string());
            }
            "defaults.windowed" => {
                let parsed: bool = value
                    .parse()
                    .map_err(|_| anyhow::anyhow!("windowed must be true or false"))?;
                self.defaults_mut().windowed = Some(parsed);
            }
            "defaults.content_dir" => {
                self.defaults_mut().content_dir = Some(value.to_string());
            }
            _ => bail!(
                "unknown key \"{key}\" (expected defaults.theme, defaults.windowed \
                 or defaults.content_dir)"
            ),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_validates_theme_values() {
        let mut config = Config::default();
        assert!(config.set("defaults.theme", "dark").is_ok());
        assert!(config.set("defaults.theme", "solarized").is_err());
        assert_eq!(
            config.defaults.as_ref().and_then(|d| d.theme.as_deref()),
            Some("dark")
        );
    }

    #[test]
    fn set_rejects_unknown_keys() {
        let mut config = Config::default();
        assert!(config.set("defaults.nope", "x").is_err());
    }

    #[test]
    fn yaml_round_trip() {
        let mut config = Config::default();
        config.set("defaults.windowed", "true").unwrap();
        let raw = serde_yaml::to_string(&config).unwrap();
        let back: Config = serde_yaml::from_str(&raw).unwrap();
        assert_eq!(back.defaults.unwrap().windowed, Some(true));
    }
}
