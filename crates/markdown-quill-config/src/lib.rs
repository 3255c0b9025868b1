use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// A built-in inline formatting kind that can be switched on or off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModifierKind {
    /// `*text*`
    Emphasis,
    /// `**text**`
    Strong,
    /// `***text***`
    StrongEmphasis,
    /// `~~text~~`
    Strikethrough,
}

impl ModifierKind {
    pub const ALL: [ModifierKind; 4] = [
        ModifierKind::Emphasis,
        ModifierKind::Strong,
        ModifierKind::StrongEmphasis,
        ModifierKind::Strikethrough,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Built-in modifier kinds that are recognised while rendering.
    pub modifiers: Vec<ModifierKind>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            modifiers: ModifierKind::ALL.to_vec(),
        }
    }
}

impl RenderConfig {
    pub fn is_enabled(&self, kind: ModifierKind) -> bool {
        self.modifiers.contains(&kind)
    }

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            log::debug!("No config file at {}", config_path.display());
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: RenderConfig =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        log::debug!(
            "Loaded config from {} ({} modifiers enabled)",
            config_path.display(),
            config.modifiers.len()
        );
        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        log::debug!("Saved config to {}", config_path.display());
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/markdown-quill");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }
}
