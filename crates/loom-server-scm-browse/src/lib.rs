// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Repository browsing on top of gitoxide.
//!
//! [`PathReader`] turns the trees of a git repository into the path entries
//! of [`loom_scm_paths`]: sorted directory listings and per-commit change
//! lists.

pub mod config;
pub mod error;
pub mod reader;

#[cfg(test)]
mod testing;

pub use config::{load_config, BrowseConfig, BrowseConfigLayer};
pub use error::{BrowseError, ConfigError, Result};
pub use reader::PathReader;
