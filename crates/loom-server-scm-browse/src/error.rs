// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BrowseError>;

#[derive(Error, Debug)]
pub enum BrowseError {
	#[error("ref not found: {0}")]
	RefNotFound(String),

	#[error("object not found: {0}")]
	ObjectNotFound(String),

	#[error("not a directory: {0}")]
	NotADirectory(String),

	#[error("git error: {0}")]
	GitError(String),

	#[error("config error: {0}")]
	Config(#[from] ConfigError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
	#[error("failed to read config: {0}")]
	Io(#[from] std::io::Error),

	#[error("failed to parse {path}: {source}")]
	TomlParse {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("invalid value for {var}: {value}")]
	InvalidEnv { var: String, value: String },
}
