use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::pitch::{AxisMode, DisplayRequest, TimeWindow};
/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "PITCHSCOPE_CONFIG";
/// Config file looked up in the working directory when the variable is unset.
pub const CONFIG_FILE_NAME: &str = "pitchscope.json";
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}
/// Which chart adapter draws the cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RendererKind {
    /// Interactive egui_plot chart.
    #[default]
    Plot,
    /// plotters bitmap shown as a texture.
    Raster,
}
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub renderer: RendererKind,
    /// Cards shown at startup.
    pub cards: usize,
    /// Start with one file shared by every card.
    pub shared_file: bool,
    pub tick_count: usize,
    pub min_label_spacing_px: f64,
    pub plot_height_px: f64,
    pub default_window: TimeWindow,
    pub default_tonic: Option<f64>,
    pub default_axis: AxisMode,
}
impl Default for ViewerConfig {
    fn default() -> Self {
        let request = DisplayRequest::default();
        Self {
            renderer: RendererKind::default(),
            cards: 1,
            shared_file: false,
            tick_count: request.tick_count,
            min_label_spacing_px: request.min_label_spacing_px,
            plot_height_px: request.plot_height_px,
            default_window: request.window,
            default_tonic: None,
            default_axis: request.axis,
        }
    }
}
impl ViewerConfig {
    /// Clamps values the viewer cannot work with back to usable ones.
    fn normalized(mut self) -> Self {
        let defaults = ViewerConfig::default();
        self.cards = self.cards.clamp(1, 16);
        if self.tick_count == 0 {
            self.tick_count = defaults.tick_count;
        }
        if !self.min_label_spacing_px.is_finite() || self.min_label_spacing_px < 0.0 {
            self.min_label_spacing_px = defaults.min_label_spacing_px;
        }
        if !self.plot_height_px.is_finite() || self.plot_height_px < 80.0 {
            self.plot_height_px = defaults.plot_height_px;
        }
        self
    }
}
/// Resolve the configuration file path from the environment.
pub fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
}
/// Load configuration from `path`, returning defaults if the file is missing.
pub fn load_from(path: &Path) -> Result<ViewerConfig, ConfigError> {
    if !path.exists() {
        log::debug!("no config at {}, using defaults", path.display());
        return Ok(ViewerConfig::default());
    }
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: ViewerConfig =
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    log::info!("loaded config from {}", path.display());
    Ok(config.normalized())
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_from(&dir.path().join("nope.json")).unwrap();
        assert_eq!(config, ViewerConfig::default());
        assert_eq!(config.renderer, RendererKind::Plot);
        assert_eq!(config.tick_count, 5);
    }
    #[test]
    fn partial_file_overrides_only_given_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(
            &path,
            r#"{
                "renderer": "raster",
                "cards": 3,
                "default_window": { "start": 1.5, "end": 4.0 },
                "default_tonic": 146.83,
                "default_axis": "swara"
            }"#,
        )
        .unwrap();
        let config = load_from(&path).unwrap();
        assert_eq!(config.renderer, RendererKind::Raster);
        assert_eq!(config.cards, 3);
        assert_eq!(config.default_window, TimeWindow::new(1.5, 4.0));
        assert_eq!(config.default_tonic, Some(146.83));
        assert_eq!(config.default_axis, AxisMode::Swara);
        assert!(!config.shared_file);
        assert_eq!(config.plot_height_px, 260.0);
    }
    #[test]
    fn unusable_values_are_normalized() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, r#"{"cards": 0, "tick_count": 0, "plot_height_px": 5}"#).unwrap();
        let config = load_from(&path).unwrap();
        assert_eq!(config.cards, 1);
        assert_eq!(config.tick_count, 5);
        assert_eq!(config.plot_height_px, 260.0);
    }
    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "{ renderer: ").unwrap();
        let err = load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains(CONFIG_FILE_NAME));
    }
}
