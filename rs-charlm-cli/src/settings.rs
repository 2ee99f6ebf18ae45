//! Settings configuration
//!
//! Default values are defined in `config/default.toml`; a user file only
//! overrides the keys it sets.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default configuration TOML embedded from config/default.toml
const DEFAULT_CONFIG_TOML: &str = include_str!("../config/default.toml");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
	pub generation: GenerationSettings,
	pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationSettings {
	/// Seed used when the generation mode is `fixed`
	pub fixed_seed: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
	/// Default `env_logger` filter
	pub filter: String,
}

impl Default for Settings {
	fn default() -> Self {
		toml::from_str(DEFAULT_CONFIG_TOML).expect("embedded default.toml must be valid")
	}
}

/// Recursively merge `overlay` TOML values on top of `base`.
fn merge_toml(base: &mut toml::Value, overlay: &toml::Value) {
	match (base, overlay) {
		(toml::Value::Table(base_table), toml::Value::Table(overlay_table)) => {
			for (key, value) in overlay_table {
				if let Some(base_value) = base_table.get_mut(key) {
					merge_toml(base_value, value);
				} else {
					base_table.insert(key.clone(), value.clone());
				}
			}
		}
		(base, _) => {
			*base = overlay.clone();
		}
	}
}

/// Parse user TOML content merged on top of default.toml.
fn parse_with_defaults(user_content: &str) -> Result<Settings> {
	let mut base: toml::Value = toml::from_str(DEFAULT_CONFIG_TOML)?;
	let user: toml::Value = toml::from_str(user_content)?;
	merge_toml(&mut base, &user);
	let settings: Settings = base.try_into()?;
	Ok(settings)
}

impl Settings {
	/// Loads settings from `path`, or the defaults when no path is given.
	pub fn load(path: Option<&Path>) -> Result<Self> {
		let Some(path) = path else {
			return Ok(Self::default());
		};

		let content = fs::read_to_string(path)
			.with_context(|| format!("failed to read settings file {}", path.display()))?;
		parse_with_defaults(&content)
			.with_context(|| format!("invalid settings file {}", path.display()))
	}
}
