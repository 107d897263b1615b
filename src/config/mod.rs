mod schema;

pub use schema::Config;

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::scoring::validate_criteria;

/// Get the config directory path (~/.config/fair-jury/)
pub fn get_config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("fair-jury"))
}

/// Get the default config file path (~/.config/fair-jury/config.yaml)
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses the default path and
///   falls back to built-in defaults when that file does not exist.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found at {}", path.display());
            }
            path
        }
        None => {
            let default_path = get_config_path()?;
            if !default_path.exists() {
                tracing::debug!(
                    path = %default_path.display(),
                    "no config file, using built-in defaults"
                );
                return Ok(Config::default());
            }
            default_path
        }
    };

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content).with_context(|| {
        format!("Failed to parse config: invalid YAML in {}", config_path.display())
    })?;

    tracing::debug!(path = %config_path.display(), "loaded config");
    Ok(config)
}

/// Validate the whole config, collecting every problem.
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(window) = config.timeline {
        if !window.is_valid() {
            errors.push(format!(
                "timeline: day_end_hour ({}) must be after day_start_hour ({}) and at most 24",
                window.end_hour, window.start_hour
            ));
        }
    }

    if let Some(ref criteria) = config.criteria {
        if let Err(criteria_errors) = validate_criteria(criteria) {
            errors.extend(criteria_errors);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
