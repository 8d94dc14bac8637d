// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Path entries for repository browsing.
//!
//! A [`TreeEntry`] describes one path in a commit's tree: a file, a
//! directory, a symlink or a submodule reference. A [`ChangeEntry`] wraps a
//! tree entry with the kind of change the path went through in a commit.
//!
//! Entries are identified by their path. They sort the way a directory
//! listing is displayed: directories first, then submodules, then everything
//! else, each group in lexicographic path order.
//!
//! # Example
//!
//! ```
//! use loom_scm_paths::{sort_entries, FileMode, TreeEntry};
//!
//! let mut entries = vec![
//!     TreeEntry::new("README.md", "README.md", 12, FileMode::REGULAR, "a1", "c0"),
//!     TreeEntry::new("src", "src", 0, FileMode::TREE, "b2", "c0"),
//! ];
//! sort_entries(&mut entries);
//! assert_eq!(entries[0].path(), "src");
//! ```

pub mod change;
pub mod entry;
pub mod listing;
pub mod mode;
pub mod record;

pub use change::{ChangeEntry, ChangeType, InvalidChangeType};
pub use entry::TreeEntry;
pub use listing::{parent_path, sort_entries, Listing, PARENT_NAME};
pub use mode::{FileMode, InvalidFileMode};
pub use record::PathRecord;
