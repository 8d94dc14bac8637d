// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Browse configuration, merged from defaults, a TOML file and the
//! environment. Later sources override earlier ones.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{ConfigError, Result as BrowseResult};

pub const ENV_SHOW_PARENT_PATH: &str = "LOOM_BROWSE__SHOW_PARENT_PATH";
pub const ENV_BLOB_SIZES: &str = "LOOM_BROWSE__BLOB_SIZES";
pub const ENV_DETECT_RENAMES: &str = "LOOM_BROWSE__DETECT_RENAMES";

/// Resolved browse settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowseConfig {
	/// Put a `..` entry at the top of subdirectory listings.
	pub show_parent_path: bool,
	/// Read blob objects to fill in entry sizes.
	pub blob_sizes: bool,
	/// Pair deleted and added paths with identical content into renames
	/// and copies.
	pub detect_renames: bool,
}

impl Default for BrowseConfig {
	fn default() -> Self {
		Self {
			show_parent_path: true,
			blob_sizes: true,
			detect_renames: true,
		}
	}
}

/// Partial configuration layer - all fields are Option for merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BrowseConfigLayer {
	#[serde(default)]
	pub show_parent_path: Option<bool>,
	#[serde(default)]
	pub blob_sizes: Option<bool>,
	#[serde(default)]
	pub detect_renames: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
	#[serde(default)]
	browse: Option<BrowseConfigLayer>,
}

impl BrowseConfigLayer {
	/// Merge another layer into this one. Other layer takes precedence.
	pub fn merge(&mut self, other: BrowseConfigLayer) {
		if other.show_parent_path.is_some() {
			self.show_parent_path = other.show_parent_path;
		}
		if other.blob_sizes.is_some() {
			self.blob_sizes = other.blob_sizes;
		}
		if other.detect_renames.is_some() {
			self.detect_renames = other.detect_renames;
		}
	}

	pub fn finalize(self) -> BrowseConfig {
		let defaults = BrowseConfig::default();
		BrowseConfig {
			show_parent_path: self.show_parent_path.unwrap_or(defaults.show_parent_path),
			blob_sizes: self.blob_sizes.unwrap_or(defaults.blob_sizes),
			detect_renames: self.detect_renames.unwrap_or(defaults.detect_renames),
		}
	}

	/// Parses the `[browse]` table of a TOML document.
	pub fn from_toml(content: &str, path: &Path) -> Result<Self, ConfigError> {
		let file: ConfigFile = toml::from_str(content).map_err(|e| ConfigError::TomlParse {
			path: path.to_path_buf(),
			source: e,
		})?;
		Ok(file.browse.unwrap_or_default())
	}

	/// Loads a TOML file. A missing file yields an empty layer.
	pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
		if !path.exists() {
			debug!(path = %path.display(), "config file not found, skipping");
			return Ok(Self::default());
		}

		debug!(path = %path.display(), "loading config file");
		let content = std::fs::read_to_string(path)?;
		let layer = Self::from_toml(&content, path)?;
		trace!(?layer, "parsed browse config layer");
		Ok(layer)
	}

	/// Reads `LOOM_BROWSE__*` variables through `lookup`.
	pub fn from_env_with<F>(lookup: F) -> Result<Self, ConfigError>
	where
		F: Fn(&str) -> Option<String>,
	{
		Ok(Self {
			show_parent_path: env_bool(&lookup, ENV_SHOW_PARENT_PATH)?,
			blob_sizes: env_bool(&lookup, ENV_BLOB_SIZES)?,
			detect_renames: env_bool(&lookup, ENV_DETECT_RENAMES)?,
		})
	}

	pub fn from_env() -> Result<Self, ConfigError> {
		Self::from_env_with(|var| std::env::var(var).ok())
	}
}

fn env_bool<F>(lookup: &F, var: &str) -> Result<Option<bool>, ConfigError>
where
	F: Fn(&str) -> Option<String>,
{
	let Some(value) = lookup(var) else {
		return Ok(None);
	};
	match value.trim().to_ascii_lowercase().as_str() {
		"1" | "true" | "yes" | "on" => Ok(Some(true)),
		"0" | "false" | "no" | "off" => Ok(Some(false)),
		_ => Err(ConfigError::InvalidEnv {
			var: var.to_string(),
			value,
		}),
	}
}

/// Loads the browse configuration: defaults, then `file` if given, then the
/// process environment.
pub fn load_config(file: Option<&Path>) -> BrowseResult<BrowseConfig> {
	let mut layer = BrowseConfigLayer::default();
	if let Some(path) = file {
		layer.merge(BrowseConfigLayer::from_file(path)?);
	}
	layer.merge(BrowseConfigLayer::from_env()?);
	let config = layer.finalize();
	debug!(?config, "browse config loaded");
	Ok(config)
}
