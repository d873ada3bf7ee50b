//! Synchronizer
//!
//! Applies the comparator's three-way classification to the destination
//! directory: copy new entries, overwrite differing ones, remove stale ones.
//! Every copy preserves modification time and permissions so the next
//! comparison reports the pair equal, and every copy is followed by a digest
//! verification.
//!
//! A filesystem error on any individual copy or remove propagates and aborts
//! the remainder of the cycle; the poll loop recomputes the same pending set
//! on its next tick, so nothing is lost when the cause is transient.

use crate::diff::compare_dirs;
use crate::logger::EventLog;
use crate::types::SyncError;
use crate::verify::verify_copy;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

/// Copy buffer size.
const COPY_CHUNK_SIZE: usize = 128 * 1024;

/// Per-cycle operation counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncStats {
    /// Entries copied because they were missing from the destination
    pub copied: usize,
    /// Entries overwritten because they differed
    pub updated: usize,
    /// Entries removed because the source no longer has them
    pub removed: usize,
    /// Source-side directory entries skipped (not mirrored)
    pub skipped: usize,
}

impl SyncStats {
    /// Total number of file operations performed.
    pub fn operations(&self) -> usize {
        self.copied + self.updated + self.removed
    }
}

/// Bring `dest_dir`'s top-level contents in line with `source_dir`.
///
/// Idempotent: a second call with no intervening source changes performs
/// zero file operations because the comparator reports empty sets.
///
/// Source-side directory entries are not mirrored; they are skipped with a
/// warning rather than copied as file-like units. Destination-only
/// directories are removed recursively so deletion completeness holds.
pub fn sync_dirs(source_dir: &Path, dest_dir: &Path, log: &EventLog) -> Result<SyncStats, SyncError> {
    let diff = compare_dirs(source_dir, dest_dir)?;
    let mut stats = SyncStats::default();

    for name in &diff.only_in_source {
        let src_path = source_dir.join(name);
        let dest_path = dest_dir.join(name);

        if src_path.is_dir() {
            log.warn(&format!(
                "Skipped directory entry (subdirectories are not mirrored): {}",
                src_path.display()
            ));
            stats.skipped += 1;
            continue;
        }

        copy_file(&src_path, &dest_path)?;
        log.info(&format!(
            "Copied file: {} -> {}",
            src_path.display(),
            dest_path.display()
        ));
        verify_copy(&src_path, &dest_path, log);
        stats.copied += 1;
    }

    for name in &diff.only_in_dest {
        let dest_path = dest_dir.join(name);

        if fs::symlink_metadata(&dest_path)?.is_dir() {
            fs::remove_dir_all(&dest_path)?;
            log.info(&format!("Removed directory: {}", dest_path.display()));
        } else {
            fs::remove_file(&dest_path)?;
            log.info(&format!("Removed file: {}", dest_path.display()));
        }
        stats.removed += 1;
    }

    for name in &diff.differing {
        let src_path = source_dir.join(name);
        let dest_path = dest_dir.join(name);

        if src_path.is_dir() {
            log.warn(&format!(
                "Skipped directory entry (subdirectories are not mirrored): {}",
                src_path.display()
            ));
            stats.skipped += 1;
            continue;
        }

        // Type mismatch: the stale destination directory must go before the
        // source file can take its place.
        if dest_path.is_dir() {
            fs::remove_dir_all(&dest_path)?;
        }

        copy_file(&src_path, &dest_path)?;
        log.info(&format!(
            "Updated file: {} -> {}",
            src_path.display(),
            dest_path.display()
        ));
        verify_copy(&src_path, &dest_path, log);
        stats.updated += 1;
    }

    Ok(stats)
}

/// Copy a file using the write-then-rename strategy, preserving metadata.
///
/// 1. Stream to a temporary `.part` file next to the destination
/// 2. Flush and sync to disk
/// 3. Carry over permissions and modification time from the source
/// 4. Atomic rename onto the final destination
///
/// Preserving mtime matters: the comparator's shallow equality check relies
/// on it to report the pair equal on the next cycle.
pub fn copy_file(src: &Path, dest: &Path) -> Result<u64, SyncError> {
    let file_name = dest
        .file_name()
        .ok_or_else(|| SyncError::Config(format!("Invalid destination path: {}", dest.display())))?;
    let mut part_name = file_name.to_os_string();
    part_name.push(".part");
    let part_path = dest.with_file_name(part_name);

    let mut src_file = File::open(src)?;
    let mut part_file = File::create(&part_path)?;

    let mut buffer = vec![0u8; COPY_CHUNK_SIZE];
    let mut total_bytes = 0u64;

    loop {
        let bytes_read = src_file.read(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        part_file.write_all(&buffer[0..bytes_read])?;
        total_bytes += bytes_read as u64;
    }

    part_file.sync_all()?;

    // Drop the handle before rename (required on Windows)
    drop(part_file);

    let src_metadata = fs::metadata(src)?;
    fs::set_permissions(&part_path, src_metadata.permissions())?;

    let mtime = filetime::FileTime::from_last_modification_time(&src_metadata);
    filetime::set_file_mtime(&part_path, mtime)?;

    // Atomic on POSIX systems; replaces an existing destination file
    fs::rename(&part_path, dest)?;

    Ok(total_bytes)
}
