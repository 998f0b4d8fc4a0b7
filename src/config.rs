use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: String,
    pub start_word: String,
    pub target_word: String,
    pub reject_flash_ms: u64,
    pub reveal_delay_ms: u64,
    pub theme_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "classic".to_string(),
            start_word: "START".to_string(),
            target_word: "END".to_string(),
            reject_flash_ms: 500,
            reveal_delay_ms: 600,
            theme_dir: dirs::config_dir().map(|dir| dir.join("chainword").join("themes")),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct PartialConfig {
    theme: Option<String>,
    start_word: Option<String>,
    target_word: Option<String>,
    reject_flash_ms: Option<u64>,
    reveal_delay_ms: Option<u64>,
    theme_dir: Option<PathBuf>,
}

impl PartialConfig {
    fn apply_defaults(self) -> (Config, bool) {
        let defaults = Config::default();
        let mut changed = false;

        let theme = match self.theme {
            Some(v) => v,
            None => {
                changed = true;
                defaults.theme
            }
        };
        let start_word = match self.start_word {
            Some(v) => v,
            None => {
                changed = true;
                defaults.start_word
            }
        };
        let target_word = match self.target_word {
            Some(v) => v,
            None => {
                changed = true;
                defaults.target_word
            }
        };
        let reject_flash_ms = match self.reject_flash_ms {
            Some(v) => v,
            None => {
                changed = true;
                defaults.reject_flash_ms
            }
        };
        let reveal_delay_ms = match self.reveal_delay_ms {
            Some(v) => v,
            None => {
                changed = true;
                defaults.reveal_delay_ms
            }
        };
        let theme_dir = match self.theme_dir {
            Some(v) => Some(v),
            None => {
                changed = true;
                defaults.theme_dir
            }
        };

        (
            Config {
                theme,
                start_word,
                target_word,
                reject_flash_ms,
                reveal_delay_ms,
                theme_dir,
            },
            changed,
        )
    }
}

pub fn config_path() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    Ok(base.join("chainword").join("config.toml"))
}

pub fn ensure_config_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    Ok(())
}

pub fn load_config() -> Result<Config> {
    let path = config_path()?;
    if !path.exists() {
        let cfg = Config::default();
        write_config(&cfg)?;
        return Ok(cfg);
    }

    let raw = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let partial: PartialConfig = toml::from_str(&raw)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    let (cfg, changed) = partial.apply_defaults();
    if changed {
        write_config(&cfg)?;
    }
    Ok(cfg)
}

pub fn write_config(cfg: &Config) -> Result<()> {
    let path = config_path()?;
    ensure_config_dir(&path)?;
    let text = toml::to_string_pretty(cfg).context("Failed to serialize config")?;
    fs::write(&path, text).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

pub fn open_config_in_editor() -> Result<()> {
    let path = config_path()?;
    if !path.exists() {
        let cfg = Config::default();
        write_config(&cfg)?;
    }

    let editor = env::var("EDITOR").unwrap_or_else(|_| "nvim".to_string());
    let mut parts = match shell_words::split(&editor) {
        Ok(p) if !p.is_empty() => p,
        _ => vec![editor],
    };
    let cmd = parts.remove(0);
    let status = Command::new(cmd)
        .args(parts)
        .arg(&path)
        .status()
        .with_context(|| format!("Failed to launch editor for {}", path.display()))?;
    if !status.success() {
        anyhow::bail!("Editor exited with status {}", status);
    }
    Ok(())
}
