// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Git file mode bits of a tree entry.
///
/// Any value is accepted. The kind predicates look only at the type bits
/// (`0o170000`), so permission bits never change the kind. Values whose type
/// bits are not a tree, symlink or gitlink behave like a regular file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileMode(u32);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid file mode: {0}")]
pub struct InvalidFileMode(pub String);

impl FileMode {
	pub const MISSING: FileMode = FileMode(0);
	pub const TREE: FileMode = FileMode(0o040000);
	pub const REGULAR: FileMode = FileMode(0o100644);
	pub const EXECUTABLE: FileMode = FileMode(0o100755);
	pub const SYMLINK: FileMode = FileMode(0o120000);
	pub const GITLINK: FileMode = FileMode(0o160000);

	const TYPE_MASK: u32 = 0o170000;

	pub const fn from_bits(bits: u32) -> Self {
		FileMode(bits)
	}

	pub const fn bits(self) -> u32 {
		self.0
	}

	fn has_type(self, kind: FileMode) -> bool {
		self.0 & Self::TYPE_MASK == kind.0
	}

	pub fn is_tree(self) -> bool {
		self.has_type(Self::TREE)
	}

	pub fn is_symlink(self) -> bool {
		self.has_type(Self::SYMLINK)
	}

	pub fn is_submodule(self) -> bool {
		self.has_type(Self::GITLINK)
	}

	/// True for anything that is not a tree, symlink or submodule.
	pub fn is_file(self) -> bool {
		!(self.is_tree() || self.is_symlink() || self.is_submodule())
	}

	/// Short label used by listings: `tree`, `link`, `commit` or `blob`.
	pub fn kind_str(self) -> &'static str {
		if self.is_tree() {
			"tree"
		} else if self.is_symlink() {
			"link"
		} else if self.is_submodule() {
			"commit"
		} else {
			"blob"
		}
	}
}

impl From<u32> for FileMode {
	fn from(bits: u32) -> Self {
		FileMode(bits)
	}
}

impl From<FileMode> for u32 {
	fn from(mode: FileMode) -> Self {
		mode.0
	}
}

impl fmt::Display for FileMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:06o}", self.0)
	}
}

impl FromStr for FileMode {
	type Err = InvalidFileMode;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		u32::from_str_radix(s.trim(), 8)
			.map(FileMode)
			.map_err(|_| InvalidFileMode(s.to_string()))
	}
}
