// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entry::TreeEntry;
use crate::mode::FileMode;

/// How a path changed between a commit and its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeType {
	Add,
	Modify,
	Delete,
	Rename,
	Copy,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid change type: {0}")]
pub struct InvalidChangeType(pub String);

impl ChangeType {
	pub fn as_str(&self) -> &'static str {
		match self {
			ChangeType::Add => "ADD",
			ChangeType::Modify => "MODIFY",
			ChangeType::Delete => "DELETE",
			ChangeType::Rename => "RENAME",
			ChangeType::Copy => "COPY",
		}
	}
}

impl fmt::Display for ChangeType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.pad(self.as_str())
	}
}

impl FromStr for ChangeType {
	type Err = InvalidChangeType;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_uppercase().as_str() {
			"ADD" => Ok(ChangeType::Add),
			"MODIFY" => Ok(ChangeType::Modify),
			"DELETE" => Ok(ChangeType::Delete),
			"RENAME" => Ok(ChangeType::Rename),
			"COPY" => Ok(ChangeType::Copy),
			_ => Err(InvalidChangeType(s.to_string())),
		}
	}
}

/// A path touched by a commit.
///
/// Identity, hashing and ordering come from the wrapped [`TreeEntry`]; the
/// change type is not part of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeEntry {
	#[serde(flatten)]
	entry: TreeEntry,
	change_type: ChangeType,
}

impl ChangeEntry {
	#[allow(clippy::too_many_arguments)]
	pub fn new(
		name: impl Into<String>,
		path: impl Into<String>,
		size: u64,
		mode: FileMode,
		object_id: impl Into<String>,
		commit_id: impl Into<String>,
		change_type: ChangeType,
	) -> Self {
		Self {
			entry: TreeEntry::new(name, path, size, mode, object_id, commit_id),
			change_type,
		}
	}

	pub fn from_entry(entry: TreeEntry, change_type: ChangeType) -> Self {
		Self { entry, change_type }
	}

	pub fn change_type(&self) -> ChangeType {
		self.change_type
	}

	pub fn entry(&self) -> &TreeEntry {
		&self.entry
	}

	pub fn into_entry(self) -> TreeEntry {
		self.entry
	}
}

impl Deref for ChangeEntry {
	type Target = TreeEntry;

	fn deref(&self) -> &TreeEntry {
		&self.entry
	}
}

impl PartialEq for ChangeEntry {
	fn eq(&self, other: &Self) -> bool {
		self.entry == other.entry
	}
}

impl Eq for ChangeEntry {}

impl PartialEq<TreeEntry> for ChangeEntry {
	fn eq(&self, other: &TreeEntry) -> bool {
		&self.entry == other
	}
}

impl PartialEq<ChangeEntry> for TreeEntry {
	fn eq(&self, other: &ChangeEntry) -> bool {
		self == &other.entry
	}
}

impl Hash for ChangeEntry {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.entry.hash(state);
	}
}

impl PartialOrd for ChangeEntry {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for ChangeEntry {
	fn cmp(&self, other: &Self) -> Ordering {
		self.entry.cmp(&other.entry)
	}
}
