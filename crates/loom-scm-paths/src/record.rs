// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use serde::{Deserialize, Serialize};

use crate::change::{ChangeEntry, ChangeType};
use crate::entry::TreeEntry;

/// Either kind of path entry, tagged for transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PathRecord {
	Path(TreeEntry),
	Change(ChangeEntry),
}

impl PathRecord {
	pub fn entry(&self) -> &TreeEntry {
		match self {
			PathRecord::Path(entry) => entry,
			PathRecord::Change(change) => change.entry(),
		}
	}

	pub fn change_type(&self) -> Option<ChangeType> {
		match self {
			PathRecord::Path(_) => None,
			PathRecord::Change(change) => Some(change.change_type()),
		}
	}
}

impl From<TreeEntry> for PathRecord {
	fn from(entry: TreeEntry) -> Self {
		PathRecord::Path(entry)
	}
}

impl From<ChangeEntry> for PathRecord {
	fn from(change: ChangeEntry) -> Self {
		PathRecord::Change(change)
	}
}
