// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Bare repositories built object by object for tests.

use std::path::Path;

use gix::objs::tree::EntryKind;
use gix::ObjectId;
use tempfile::TempDir;

pub enum Node {
	File(String, Vec<u8>),
	Dir(String, Vec<Node>),
	Submodule(String, String),
	Symlink(String, String),
}

impl Node {
	pub fn file(name: &str, content: &[u8]) -> Self {
		Node::File(name.to_string(), content.to_vec())
	}

	pub fn dir(name: &str, children: Vec<Node>) -> Self {
		Node::Dir(name.to_string(), children)
	}

	pub fn submodule(name: &str, commit_hex: &str) -> Self {
		Node::Submodule(name.to_string(), commit_hex.to_string())
	}

	pub fn symlink(name: &str, target: &str) -> Self {
		Node::Symlink(name.to_string(), target.to_string())
	}
}

pub struct Fixture {
	_dir: TempDir,
	repo: gix::Repository,
}

impl Fixture {
	pub fn new() -> Self {
		let dir = tempfile::tempdir().unwrap();
		let repo = gix::init_bare(dir.path().join("test.git")).unwrap();
		Self { _dir: dir, repo }
	}

	pub fn path(&self) -> &Path {
		self.repo.path()
	}

	fn write_tree(&self, nodes: Vec<Node>) -> ObjectId {
		let mut entries: Vec<(Vec<u8>, gix::objs::tree::Entry)> = nodes
			.into_iter()
			.map(|node| {
				let (name, kind, oid) = match node {
					Node::File(name, content) => {
						let oid = self.repo.write_blob(&content).unwrap().detach();
						(name, EntryKind::Blob, oid)
					}
					Node::Dir(name, children) => (name, EntryKind::Tree, self.write_tree(children)),
					Node::Submodule(name, hex) => {
						(name, EntryKind::Commit, ObjectId::from_hex(hex.as_bytes()).unwrap())
					}
					Node::Symlink(name, target) => {
						let oid = self.repo.write_blob(target.as_bytes()).unwrap().detach();
						(name, EntryKind::Link, oid)
					}
				};
				// git orders tree entries as if directory names ended in '/'
				let mut key = name.as_bytes().to_vec();
				if kind == EntryKind::Tree {
					key.push(b'/');
				}
				let entry = gix::objs::tree::Entry {
					mode: kind.into(),
					filename: name.as_str().into(),
					oid,
				};
				(key, entry)
			})
			.collect();
		entries.sort_by(|a, b| a.0.cmp(&b.0));

		let tree = gix::objs::Tree {
			entries: entries.into_iter().map(|(_, entry)| entry).collect(),
		};
		self.repo.write_object(&tree).unwrap().detach()
	}

	/// Writes a commit with the given parents and tree, returning its id.
	pub fn commit(&self, parents: &[&str], nodes: Vec<Node>) -> String {
		let tree = self.write_tree(nodes);
		let time = gix::date::Time::now_local_or_utc();
		let signature = gix::actor::SignatureRef {
			name: "Test".into(),
			email: "test@example.com".into(),
			time,
		};
		let commit = gix::objs::Commit {
			tree,
			parents: parents
				.iter()
				.map(|p| ObjectId::from_hex(p.as_bytes()).unwrap())
				.collect::<smallvec::SmallVec<_>>(),
			author: signature.to_owned(),
			committer: signature.to_owned(),
			encoding: None,
			message: "test commit".into(),
			extra_headers: vec![],
		};
		self.repo.write_object(&commit).unwrap().to_string()
	}

	pub fn set_branch(&self, branch: &str, commit: &str) {
		let ref_path = self.path().join("refs/heads").join(branch);
		std::fs::create_dir_all(ref_path.parent().unwrap()).unwrap();
		std::fs::write(&ref_path, format!("{}\n", commit)).unwrap();
		std::fs::write(
			self.path().join("HEAD"),
			format!("ref: refs/heads/{}\n", branch),
		)
		.unwrap();
	}
}
