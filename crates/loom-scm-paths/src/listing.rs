// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use serde::{Deserialize, Serialize};

use crate::entry::TreeEntry;

/// Display name of the synthetic parent directory entry.
pub const PARENT_NAME: &str = "..";

/// Sorts entries into listing order.
pub fn sort_entries<T: Ord>(entries: &mut [T]) {
	entries.sort();
}

/// Returns the parent directory of a slash separated tree path.
///
/// Top level paths have the root (`""`) as parent. The root itself has none.
pub fn parent_path(path: &str) -> Option<String> {
	let path = path.trim_end_matches('/');
	if path.is_empty() {
		return None;
	}
	match path.rfind('/') {
		Some(idx) => Some(path[..idx].to_string()),
		None => Some(String::new()),
	}
}

/// The sorted contents of one directory of one commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
	commit_id: String,
	path: String,
	entries: Vec<TreeEntry>,
}

impl Listing {
	pub fn new(commit_id: impl Into<String>, path: impl Into<String>, mut entries: Vec<TreeEntry>) -> Self {
		sort_entries(&mut entries);
		Self {
			commit_id: commit_id.into(),
			path: path.into(),
			entries,
		}
	}

	/// Puts the `..` entry at the top of the listing. Does nothing for the
	/// root directory or when the entry is already present.
	pub fn with_parent(mut self) -> Self {
		if self.entries.first().is_some_and(|e| e.is_parent_path()) {
			return self;
		}
		if let Some(parent) = TreeEntry::parent_of(&self.path, self.commit_id.as_str()) {
			self.entries.insert(0, parent);
		}
		self
	}

	pub fn commit_id(&self) -> &str {
		&self.commit_id
	}

	pub fn path(&self) -> &str {
		&self.path
	}

	pub fn entries(&self) -> &[TreeEntry] {
		&self.entries
	}

	pub fn iter(&self) -> std::slice::Iter<'_, TreeEntry> {
		self.entries.iter()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn into_entries(self) -> Vec<TreeEntry> {
		self.entries
	}
}

impl<'a> IntoIterator for &'a Listing {
	type Item = &'a TreeEntry;
	type IntoIter = std::slice::Iter<'a, TreeEntry>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}
