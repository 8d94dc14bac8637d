// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use gix::object::tree::EntryKind;
use gix::ObjectId;
use loom_scm_paths::{ChangeEntry, ChangeType, FileMode, Listing, TreeEntry};
use tracing::{debug, instrument, trace, warn};

use crate::config::BrowseConfig;
use crate::error::{BrowseError, Result};

fn git_err(e: impl std::fmt::Display) -> BrowseError {
	BrowseError::GitError(e.to_string())
}

pub(crate) fn file_mode(kind: EntryKind) -> FileMode {
	match kind {
		EntryKind::Tree => FileMode::TREE,
		EntryKind::Blob => FileMode::REGULAR,
		EntryKind::BlobExecutable => FileMode::EXECUTABLE,
		EntryKind::Link => FileMode::SYMLINK,
		EntryKind::Commit => FileMode::GITLINK,
	}
}

fn has_blob(mode: FileMode) -> bool {
	!(mode.is_tree() || mode.is_submodule())
}

fn join_path(dir: &str, name: &str) -> String {
	if dir.is_empty() {
		name.to_string()
	} else {
		format!("{}/{}", dir, name)
	}
}

fn file_name(path: &str) -> &str {
	path.rsplit('/').next().unwrap_or(path)
}

fn normalize_dir(path: &str) -> &str {
	let path = path.trim_matches('/');
	if path == "." {
		""
	} else {
		path
	}
}

/// A non-directory entry of a flattened tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FlatEntry {
	pub oid: ObjectId,
	pub mode: FileMode,
}

/// Classifies the difference between two flattened trees.
///
/// Returns `(path, entry, change)` in path order. Deleted paths carry the
/// entry they had in `old`, everything else the entry from `new`.
pub(crate) fn classify_changes(
	old: &BTreeMap<String, FlatEntry>,
	new: &BTreeMap<String, FlatEntry>,
	detect_renames: bool,
) -> Vec<(String, FlatEntry, ChangeType)> {
	let mut changes = Vec::new();
	let mut added = Vec::new();

	for (path, entry) in new {
		match old.get(path) {
			None => added.push((path, *entry)),
			Some(prev) if prev != entry => changes.push((path.clone(), *entry, ChangeType::Modify)),
			Some(_) => {}
		}
	}

	let mut deleted: Vec<(&String, FlatEntry)> = old
		.iter()
		.filter(|(path, _)| !new.contains_key(*path))
		.map(|(path, entry)| (path, *entry))
		.collect();

	for (path, entry) in added {
		if detect_renames {
			if let Some(idx) = deleted.iter().position(|(_, d)| d.oid == entry.oid) {
				let (from, _) = deleted.remove(idx);
				trace!(from = %from, to = %path, "detected rename");
				changes.push((path.clone(), entry, ChangeType::Rename));
				continue;
			}
			let copied = old
				.iter()
				.any(|(src, e)| e.oid == entry.oid && new.get(src).is_some_and(|n| n.oid == entry.oid));
			if copied {
				changes.push((path.clone(), entry, ChangeType::Copy));
				continue;
			}
		}
		changes.push((path.clone(), entry, ChangeType::Add));
	}

	for (path, entry) in deleted {
		changes.push((path.clone(), entry, ChangeType::Delete));
	}

	changes.sort_by(|a, b| a.0.cmp(&b.0));
	changes
}

/// Reads path listings and change lists from a git repository.
pub struct PathReader {
	path: PathBuf,
	config: BrowseConfig,
}

impl PathReader {
	pub fn open(path: &Path) -> Result<Self> {
		Self::with_config(path, BrowseConfig::default())
	}

	#[instrument(skip_all, fields(path = %path.display()))]
	pub fn with_config(path: &Path, config: BrowseConfig) -> Result<Self> {
		let repo = gix::open(path).map_err(git_err)?;
		debug!(?config, "opened repository for browsing");
		Ok(Self {
			path: repo.path().to_path_buf(),
			config,
		})
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	pub fn config(&self) -> &BrowseConfig {
		&self.config
	}

	fn repo(&self) -> Result<gix::Repository> {
		gix::open(&self.path).map_err(git_err)
	}

	fn find_commit<'repo>(
		&self,
		repo: &'repo gix::Repository,
		refname: &str,
	) -> Result<gix::Commit<'repo>> {
		let id = repo
			.rev_parse_single(refname.as_bytes())
			.map_err(|_| BrowseError::RefNotFound(refname.to_string()))?;
		id.object()
			.map_err(git_err)?
			.peel_to_commit()
			.map_err(|_| BrowseError::RefNotFound(refname.to_string()))
	}

	fn blob_size(&self, repo: &gix::Repository, oid: ObjectId, mode: FileMode) -> u64 {
		if !self.config.blob_sizes || !has_blob(mode) {
			return 0;
		}
		match repo.find_object(oid) {
			Ok(object) => object.data.len() as u64,
			Err(e) => {
				warn!(oid = %oid, error = %e, "failed to read blob size");
				0
			}
		}
	}

	/// Resolves a revision to the full id of the commit it names.
	#[instrument(skip(self), fields(refname = %refname))]
	pub fn resolve_commit(&self, refname: &str) -> Result<String> {
		let repo = self.repo()?;
		let commit = self.find_commit(&repo, refname)?;
		Ok(commit.id.to_string())
	}

	/// Lists the directory at `path` in the commit named by `refname`.
	///
	/// An empty path or `.` lists the root tree.
	#[instrument(skip(self), fields(refname = %refname, path = %path))]
	pub fn list_paths(&self, refname: &str, path: &str) -> Result<Listing> {
		let repo = self.repo()?;
		let commit = self.find_commit(&repo, refname)?;
		let commit_id = commit.id.to_string();
		let tree = commit.tree().map_err(git_err)?;
		let dir = normalize_dir(path);

		let target_tree = if dir.is_empty() {
			tree
		} else {
			let entry = tree
				.lookup_entry_by_path(dir)
				.map_err(git_err)?
				.ok_or_else(|| BrowseError::ObjectNotFound(dir.to_string()))?;
			if !matches!(entry.mode().kind(), EntryKind::Tree) {
				return Err(BrowseError::NotADirectory(dir.to_string()));
			}
			entry.object().map_err(git_err)?.peel_to_tree().map_err(git_err)?
		};

		let mut entries = Vec::new();
		for entry_result in target_tree.iter() {
			let entry = entry_result.map_err(git_err)?;
			let name = entry.filename().to_string();
			let mode = file_mode(entry.mode().kind());
			let oid = entry.oid().to_owned();
			let size = self.blob_size(&repo, oid, mode);
			entries.push(TreeEntry::new(
				name.as_str(),
				join_path(dir, &name),
				size,
				mode,
				oid.to_string(),
				commit_id.as_str(),
			));
		}
		debug!(count = entries.len(), "listed tree entries");

		let listing = Listing::new(commit_id, dir, entries);
		if self.config.show_parent_path {
			Ok(listing.with_parent())
		} else {
			Ok(listing)
		}
	}

	/// Lists the paths changed by a commit relative to its first parent.
	///
	/// Every file of a root commit is reported as added.
	#[instrument(skip(self), fields(refname = %refname))]
	pub fn list_changes(&self, refname: &str) -> Result<Vec<ChangeEntry>> {
		let repo = self.repo()?;
		let commit = self.find_commit(&repo, refname)?;
		let commit_id = commit.id.to_string();

		let mut new_files = BTreeMap::new();
		flatten_tree(&commit.tree().map_err(git_err)?, "", &mut new_files)?;

		let mut old_files = BTreeMap::new();
		if let Some(parent_id) = commit.parent_ids().next() {
			trace!(parent = %parent_id, "comparing against first parent");
			let parent = parent_id
				.object()
				.map_err(git_err)?
				.peel_to_commit()
				.map_err(git_err)?;
			flatten_tree(&parent.tree().map_err(git_err)?, "", &mut old_files)?;
		}

		let changes: Vec<ChangeEntry> =
			classify_changes(&old_files, &new_files, self.config.detect_renames)
				.into_iter()
				.map(|(path, entry, change_type)| {
					let size = self.blob_size(&repo, entry.oid, entry.mode);
					let entry = TreeEntry::new(
						file_name(&path),
						path.as_str(),
						size,
						entry.mode,
						entry.oid.to_string(),
						commit_id.as_str(),
					);
					ChangeEntry::from_entry(entry, change_type)
				})
				.collect();
		debug!(count = changes.len(), "listed changed paths");
		Ok(changes)
	}

	/// Lists every non-directory path of the commit's tree.
	#[instrument(skip(self), fields(refname = %refname))]
	pub fn list_all_paths(&self, refname: &str) -> Result<Vec<TreeEntry>> {
		let repo = self.repo()?;
		let commit = self.find_commit(&repo, refname)?;
		let commit_id = commit.id.to_string();

		let mut files = BTreeMap::new();
		flatten_tree(&commit.tree().map_err(git_err)?, "", &mut files)?;

		let mut entries: Vec<TreeEntry> = files
			.into_iter()
			.map(|(path, entry)| {
				let size = self.blob_size(&repo, entry.oid, entry.mode);
				TreeEntry::new(
					file_name(&path),
					path.as_str(),
					size,
					entry.mode,
					entry.oid.to_string(),
					commit_id.as_str(),
				)
			})
			.collect();
		entries.sort();
		Ok(entries)
	}
}

fn flatten_tree(
	tree: &gix::Tree<'_>,
	prefix: &str,
	out: &mut BTreeMap<String, FlatEntry>,
) -> Result<()> {
	for entry_result in tree.iter() {
		let entry = entry_result.map_err(git_err)?;
		let path = join_path(prefix, &entry.filename().to_string());
		let kind = entry.mode().kind();
		if matches!(kind, EntryKind::Tree) {
			let subtree = entry.object().map_err(git_err)?.peel_to_tree().map_err(git_err)?;
			flatten_tree(&subtree, &path, out)?;
		} else {
			out.insert(
				path,
				FlatEntry {
					oid: entry.oid().to_owned(),
					mode: file_mode(kind),
				},
			);
		}
	}
	Ok(())
}
