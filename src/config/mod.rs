//! Configuration module
//!
//! Handles loading and saving of italicize.toml settings files.
//! Defines Settings, Slant, SlantPreset, Compensation and Options.

mod types;

pub use types::{Settings, SlantPreset};

use crate::error::{ItalicError, Result};
use std::fs;
use std::path::Path;

/// Default settings file name
pub const DEFAULT_CONFIG: &str = "italicize.toml";

/// Load settings from a TOML file
pub fn load(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path).map_err(|e| {
        ItalicError::Config(format!(
            "Cannot read config from '{}': {}. Run 'italicize config init' to create one.",
            path.display(),
            e
        ))
    })?;

    let settings: Settings = toml::from_str(&content)?;
    validate(&settings)?;
    Ok(settings)
}

/// Load settings if the file exists, defaults otherwise
pub fn load_or_default(path: &Path) -> Result<Settings> {
    if path.exists() {
        load(path)
    } else {
        log::debug!("No config at '{}', using defaults", path.display());
        Ok(Settings::default())
    }
}

/// Save settings to a TOML file
pub fn save(settings: &Settings, path: &Path) -> Result<()> {
    let toml = toml::to_string_pretty(settings)
        .map_err(|e| ItalicError::Config(format!("Failed to serialize config: {}", e)))?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, toml)?;
    Ok(())
}

/// Reject settings no build could use
fn validate(settings: &Settings) -> Result<()> {
    let grid = settings.options.grid;
    if !(grid > 0.0 && grid.is_finite()) {
        return Err(ItalicError::Config(format!(
            "Grid unit must be positive, got {}",
            grid
        )));
    }

    if !settings.slant.origin_y.is_finite() {
        return Err(ItalicError::Config(format!(
            "slant.origin_y must be a finite height, got {}",
            settings.slant.origin_y
        )));
    }

    for (base, candidates) in &settings.alternates {
        if candidates.is_empty() {
            return Err(ItalicError::Config(format!(
                "Alternate list for '{}' is empty",
                base
            )));
        }
    }

    Ok(())
}
