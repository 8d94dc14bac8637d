// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::io::{self, Write};

use loom_scm_paths::{ChangeEntry, Listing, PathRecord, TreeEntry, PARENT_NAME};

fn display_path(entry: &TreeEntry) -> &str {
	if entry.is_parent_path() {
		PARENT_NAME
	} else {
		entry.path()
	}
}

pub fn write_listing<W: Write>(out: &mut W, listing: &Listing) -> io::Result<()> {
	for entry in listing {
		writeln!(
			out,
			"{} {:<6} {:>10} {}",
			entry.mode(),
			entry.mode().kind_str(),
			entry.size(),
			display_path(entry)
		)?;
	}
	Ok(())
}

pub fn write_changes<W: Write>(out: &mut W, changes: &[ChangeEntry]) -> io::Result<()> {
	for change in changes {
		writeln!(
			out,
			"{:<6} {} {}",
			change.change_type(),
			change.mode(),
			change.path()
		)?;
	}
	Ok(())
}

pub fn write_json<W, I>(out: &mut W, records: I) -> anyhow::Result<()>
where
	W: Write,
	I: IntoIterator<Item = PathRecord>,
{
	let records: Vec<PathRecord> = records.into_iter().collect();
	serde_json::to_writer_pretty(&mut *out, &records)?;
	writeln!(out)?;
	Ok(())
}
