use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::frame::FrameOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Defaults for the `win10colors` tool, stored in JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Report frame colors as if blur-behind were enabled
    #[serde(default)]
    pub glass_effect: bool,
    /// Always report accent-colored title bars
    #[serde(default)]
    pub title_bars_colored: bool,
    #[serde(default)]
    pub format: OutputFormat,
    /// tracing filter used when RUST_LOG is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_log_filter() -> String {
    "warn".into()
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            glass_effect: false,
            title_bars_colored: false,
            format: OutputFormat::Text,
            log_filter: default_log_filter(),
        }
    }
}

impl ToolConfig {
    pub fn frame_options(&self) -> FrameOptions {
        let mut options = FrameOptions::empty();
        options.set(FrameOptions::GLASS_EFFECT, self.glass_effect);
        options.set(FrameOptions::TITLE_BARS_COLORED, self.title_bars_colored);
        options
    }
}

pub fn config_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("Win10Colors").join("config.json")
}

pub fn load_config() -> ToolConfig {
    load_config_from(&config_path())
}

/// Missing file means defaults. A file that can't be read or parsed also
/// falls back to defaults, with a warning.
pub fn load_config_from(path: &Path) -> ToolConfig {
    if !path.exists() {
        return ToolConfig::default();
    }
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) => {
            warn!("could not read {}: {err}", path.display());
            return ToolConfig::default();
        }
    };
    serde_json::from_str(&data).unwrap_or_else(|err| {
        warn!("ignoring malformed config {}: {err}", path.display());
        ToolConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let cfg: ToolConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, ToolConfig::default());
        assert_eq!(cfg.log_filter, "warn");
        assert_eq!(cfg.frame_options(), FrameOptions::empty());
    }

    #[test]
    fn fields_map_to_frame_options() {
        let cfg: ToolConfig =
            serde_json::from_str(r#"{"glass_effect": true, "title_bars_colored": true, "format": "json"}"#)
                .unwrap();
        assert_eq!(cfg.format, OutputFormat::Json);
        assert_eq!(
            cfg.frame_options(),
            FrameOptions::GLASS_EFFECT | FrameOptions::TITLE_BARS_COLORED
        );
    }

    #[test]
    fn missing_and_malformed_files_fall_back() {
        let dir = std::env::temp_dir().join(format!("win10colors-cfg-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();

        let missing = dir.join("missing.json");
        assert_eq!(load_config_from(&missing), ToolConfig::default());

        let broken = dir.join("broken.json");
        fs::write(&broken, "{ glass_effect: yes").unwrap();
        assert_eq!(load_config_from(&broken), ToolConfig::default());

        let good = dir.join("good.json");
        fs::write(&good, r#"{"title_bars_colored": true}"#).unwrap();
        assert!(load_config_from(&good).title_bars_colored);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn config_lives_under_app_dir() {
        let path = config_path();
        assert!(path.ends_with(Path::new("Win10Colors").join("config.json")));
    }
}
