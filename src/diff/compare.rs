//! Top-level directory comparison
//!
//! Classifies the top-level entries of two directories into three disjoint
//! name sets. Purely observational: no caching, no side effects, recomputed
//! fresh on every call. Subdirectory entries are classified by name but
//! never recursed into.

use crate::types::SyncError;
use filetime::FileTime;
use std::collections::{BTreeMap, BTreeSet};
use std::ffi::OsString;
use std::fs::{self, Metadata};
use std::path::Path;

/// Three-way classification of two directories' top-level entry names.
///
/// The sets are pairwise disjoint. Entries present in both directories whose
/// equality check matches appear in none of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirDiff {
    /// Names present only in the source directory
    pub only_in_source: BTreeSet<OsString>,

    /// Names present only in the destination directory
    pub only_in_dest: BTreeSet<OsString>,

    /// Names present in both directories whose entries differ
    pub differing: BTreeSet<OsString>,
}

impl DirDiff {
    /// True iff all three sets are empty (directories are in sync).
    pub fn is_empty(&self) -> bool {
        self.only_in_source.is_empty() && self.only_in_dest.is_empty() && self.differing.is_empty()
    }
}

/// Compare the top-level contents of `source_dir` and `dest_dir`.
///
/// Two same-named entries are considered equal when their shallow metadata
/// matches: same file type, and for regular files same size and modification
/// time. Two directories of the same name always compare equal here; their
/// contents are outside this comparison's one-level scope.
///
/// A missing or unreadable directory propagates as a filesystem error.
pub fn compare_dirs(source_dir: &Path, dest_dir: &Path) -> Result<DirDiff, SyncError> {
    let source_entries = list_entries(source_dir)?;
    let dest_entries = list_entries(dest_dir)?;

    let mut diff = DirDiff::default();

    for (name, source_meta) in &source_entries {
        match dest_entries.get(name) {
            None => {
                diff.only_in_source.insert(name.clone());
            }
            Some(dest_meta) => {
                if !entries_match(source_meta, dest_meta) {
                    diff.differing.insert(name.clone());
                }
            }
        }
    }

    for name in dest_entries.keys() {
        if !source_entries.contains_key(name) {
            diff.only_in_dest.insert(name.clone());
        }
    }

    Ok(diff)
}

/// Cheap existence check used by the poll loop: true iff any of the three
/// classification sets is non-empty.
pub fn has_difference(source_dir: &Path, dest_dir: &Path) -> Result<bool, SyncError> {
    Ok(!compare_dirs(source_dir, dest_dir)?.is_empty())
}

fn list_entries(dir: &Path) -> Result<BTreeMap<OsString, Metadata>, SyncError> {
    let mut entries = BTreeMap::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        entries.insert(entry.file_name(), entry.metadata()?);
    }
    Ok(entries)
}

/// Shallow equality check between two same-named entries.
fn entries_match(source: &Metadata, dest: &Metadata) -> bool {
    if source.is_dir() != dest.is_dir() {
        return false;
    }
    if source.is_dir() {
        // Same-named directories compare equal at this one-level scope.
        return true;
    }

    source.len() == dest.len()
        && FileTime::from_last_modification_time(source)
            == FileTime::from_last_modification_time(dest)
}
