use crate::domain::models::FlowSettings;
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid settings in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid settings in {path}: {reason}")]
    Invalid { path: PathBuf, reason: String },
}

/// Loads `config/flow.toml`; a missing file yields the defaults.
pub fn load_settings(path: &Path) -> Result<FlowSettings, SettingsError> {
    if !path.exists() {
        return Ok(FlowSettings::default());
    }
    let raw = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let settings: FlowSettings = toml::from_str(&raw).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    validate(&settings).map_err(|reason| SettingsError::Invalid {
        path: path.to_path_buf(),
        reason,
    })?;
    tracing::debug!(path = %path.display(), "loaded flow settings");
    Ok(settings)
}

fn validate(settings: &FlowSettings) -> Result<(), String> {
    if settings.tools.place_route.trim().is_empty() {
        return Err("tools.place_route must not be empty".to_string());
    }
    if settings.tools.required.iter().any(|t| t.trim().is_empty()) {
        return Err("tools.required contains an empty name".to_string());
    }
    let cfg = settings.flow.control_config.trim();
    if cfg.is_empty() {
        return Err("flow.control_config must not be empty".to_string());
    }
    if Path::new(cfg).is_absolute() || cfg.contains("..") {
        return Err("flow.control_config must be a file name under config/".to_string());
    }
    Ok(())
}
