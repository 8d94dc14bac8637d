// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::listing::{parent_path, PARENT_NAME};
use crate::mode::FileMode;

/// One path in the tree of a commit.
///
/// Equality and hashing use `path` alone; `path` is unique within a
/// commit. `is_parent_path` marks the synthetic `..` row of a listing and
/// is the only field that can change after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeEntry {
	name: String,
	path: String,
	size: u64,
	mode: FileMode,
	object_id: String,
	commit_id: String,
	#[serde(default)]
	is_parent_path: bool,
}

impl TreeEntry {
	pub fn new(
		name: impl Into<String>,
		path: impl Into<String>,
		size: u64,
		mode: FileMode,
		object_id: impl Into<String>,
		commit_id: impl Into<String>,
	) -> Self {
		Self {
			name: name.into(),
			path: path.into(),
			size,
			mode,
			object_id: object_id.into(),
			commit_id: commit_id.into(),
			is_parent_path: false,
		}
	}

	/// Builds the `..` entry shown at the top of the listing of `path`.
	///
	/// Returns `None` for the root, which has no parent.
	pub fn parent_of(path: &str, commit_id: impl Into<String>) -> Option<Self> {
		let parent = parent_path(path)?;
		let mut entry = Self::new(PARENT_NAME, parent, 0, FileMode::TREE, "", commit_id);
		entry.mark_parent_path();
		Some(entry)
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn path(&self) -> &str {
		&self.path
	}

	/// Content size in bytes. Zero for trees and submodules.
	pub fn size(&self) -> u64 {
		self.size
	}

	pub fn mode(&self) -> FileMode {
		self.mode
	}

	pub fn object_id(&self) -> &str {
		&self.object_id
	}

	pub fn commit_id(&self) -> &str {
		&self.commit_id
	}

	pub fn is_parent_path(&self) -> bool {
		self.is_parent_path
	}

	pub fn set_parent_path(&mut self, is_parent_path: bool) {
		self.is_parent_path = is_parent_path;
	}

	pub fn mark_parent_path(&mut self) {
		self.set_parent_path(true);
	}

	pub fn is_symlink(&self) -> bool {
		self.mode.is_symlink()
	}

	pub fn is_submodule(&self) -> bool {
		self.mode.is_submodule()
	}

	pub fn is_tree(&self) -> bool {
		self.mode.is_tree()
	}
}

impl PartialEq for TreeEntry {
	fn eq(&self, other: &Self) -> bool {
		self.path == other.path
	}
}

impl Eq for TreeEntry {}

/// Hashes the path alone. Hashing follows `Eq`, so entries of different
/// commits at the same path hash alike and the commit id is not mixed in.
impl Hash for TreeEntry {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.path.hash(state);
	}
}

impl PartialOrd for TreeEntry {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

/// Listing order: trees, then submodules, then everything else. Paths are
/// compared by UTF-16 code units inside each group, which differs from byte
/// order only for paths mixing `U+E000..=U+FFFF` with supplementary
/// characters.
///
/// Entries with the same path but different kinds are equal under `Eq` and
/// unequal here. Paths are unique within one commit, so a listing never
/// contains such a pair.
impl Ord for TreeEntry {
	fn cmp(&self, other: &Self) -> Ordering {
		match (self.is_tree(), other.is_tree()) {
			(true, true) => cmp_utf16(&self.path, &other.path),
			(false, false) => match (self.is_submodule(), other.is_submodule()) {
				(true, false) => Ordering::Less,
				(false, true) => Ordering::Greater,
				_ => cmp_utf16(&self.path, &other.path),
			},
			(true, false) => Ordering::Less,
			(false, true) => Ordering::Greater,
		}
	}
}

fn cmp_utf16(a: &str, b: &str) -> Ordering {
	a.encode_utf16().cmp(b.encode_utf16())
}
