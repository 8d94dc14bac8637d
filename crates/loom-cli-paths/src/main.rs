// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! `loom-paths` - list repository trees and commit changes.
//!
//! Listings are printed in browser order (directories, then submodules,
//! then files) with a `..` row for subdirectories. `--json` emits tagged
//! path records instead of text.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use loom_scm_paths::PathRecord;
use loom_server_scm_browse::{load_config, PathReader};

mod output;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum LogLevel {
	Trace,
	Debug,
	Info,
	Warn,
	Error,
}

/// Browse the trees and changes of a git repository
#[derive(Parser, Debug)]
#[command(name = "loom-paths", version, about, long_about = None)]
struct Args {
	/// Repository to read (bare or working copy)
	#[arg(short, long, env = "LOOM_REPO", default_value = ".")]
	repo: PathBuf,

	/// Path to a TOML configuration file
	#[arg(short, long, env = "LOOM_BROWSE_CONFIG")]
	config: Option<PathBuf>,

	/// Log level (RUST_LOG takes precedence)
	#[arg(short, long, value_enum, default_value = "warn")]
	log_level: LogLevel,

	/// Output logs as JSON
	#[arg(long)]
	json_logs: bool,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// List one directory of a commit
	Ls {
		/// Branch, tag or commit id
		reference: String,
		/// Directory inside the tree (defaults to the root)
		path: Option<String>,
		/// Print JSON records
		#[arg(long)]
		json: bool,
	},
	/// List the paths changed by a commit
	Changes {
		/// Branch, tag or commit id
		reference: String,
		/// Print JSON records
		#[arg(long)]
		json: bool,
	},
}

fn log_level_to_tracing(level: LogLevel) -> tracing::Level {
	match level {
		LogLevel::Trace => tracing::Level::TRACE,
		LogLevel::Debug => tracing::Level::DEBUG,
		LogLevel::Info => tracing::Level::INFO,
		LogLevel::Warn => tracing::Level::WARN,
		LogLevel::Error => tracing::Level::ERROR,
	}
}

fn init_tracing(level: LogLevel, json: bool) {
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(format!("loom={}", log_level_to_tracing(level))));

	if json {
		tracing_subscriber::registry()
			.with(filter)
			.with(fmt::layer().json().with_writer(io::stderr))
			.init();
	} else {
		tracing_subscriber::registry()
			.with(filter)
			.with(fmt::layer().compact().with_writer(io::stderr))
			.init();
	}
}

fn run(args: Args) -> Result<()> {
	let config = load_config(args.config.as_deref()).context("failed to load configuration")?;
	let reader = PathReader::with_config(&args.repo, config)
		.with_context(|| format!("failed to open repository at {}", args.repo.display()))?;
	debug!(repo = %reader.path().display(), "repository opened");

	let stdout = io::stdout();
	let mut out = stdout.lock();

	match args.command {
		Command::Ls {
			reference,
			path,
			json,
		} => {
			let path = path.unwrap_or_default();
			let listing = reader
				.list_paths(&reference, &path)
				.with_context(|| format!("failed to list '{}' at {}", path, reference))?;
			info!(commit = %listing.commit_id(), entries = listing.len(), "listing ready");
			if json {
				output::write_json(&mut out, listing.into_entries().into_iter().map(PathRecord::from))?;
			} else {
				output::write_listing(&mut out, &listing)?;
			}
		}
		Command::Changes { reference, json } => {
			let changes = reader
				.list_changes(&reference)
				.with_context(|| format!("failed to list changes of {}", reference))?;
			info!(changes = changes.len(), "change list ready");
			if json {
				output::write_json(&mut out, changes.into_iter().map(PathRecord::from))?;
			} else {
				output::write_changes(&mut out, &changes)?;
			}
		}
	}

	out.flush()?;
	Ok(())
}

fn main() -> Result<()> {
	let args = Args::parse();
	init_tracing(args.log_level, args.json_logs);
	run(args)
}
