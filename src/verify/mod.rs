//! Post-copy verification
//!
//! Digests both sides of a just-completed copy and reports a mismatch as a
//! warning-level event. Verification never fails the sync cycle: a corrupted
//! or unreadable copy is surfaced to the operator, not escalated, so a
//! long-running daemon is not taken down by a detectable condition.

use crate::hash::compute_digest;
use crate::logger::EventLog;
use std::path::Path;

/// Verify that `dest` is a byte-identical copy of `source`.
///
/// Called only after a copy/update operation believed to have succeeded.
/// Emits a warning line on digest mismatch, or if either file cannot be
/// read for digesting (e.g. permissions changed between copy and verify).
pub fn verify_copy(source: &Path, dest: &Path, log: &EventLog) {
    let source_digest = match compute_digest(source) {
        Ok(digest) => digest,
        Err(err) => {
            log.warn(&format!(
                "File copy validation skipped, source unreadable: {} ({err})",
                source.display()
            ));
            return;
        }
    };

    let dest_digest = match compute_digest(dest) {
        Ok(digest) => digest,
        Err(err) => {
            log.warn(&format!(
                "File copy validation skipped, destination unreadable: {} ({err})",
                dest.display()
            ));
            return;
        }
    };

    if source_digest != dest_digest {
        log.warn(&format!(
            "File copy validation failed: {} -> {}",
            source.display(),
            dest.display()
        ));
    } else {
        tracing::debug!(source = %source.display(), dest = %dest.display(), "copy verified");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn log_in(dir: &TempDir) -> (EventLog, std::path::PathBuf) {
        let path = dir.path().join("events.log");
        (EventLog::open(&path).unwrap(), path)
    }

    #[test]
    fn test_matching_copy_logs_nothing() {
        let dir = TempDir::new().unwrap();
        let (log, log_path) = log_in(&dir);

        fs::write(dir.path().join("src.txt"), b"payload").unwrap();
        fs::write(dir.path().join("dst.txt"), b"payload").unwrap();

        verify_copy(&dir.path().join("src.txt"), &dir.path().join("dst.txt"), &log);

        assert_eq!(fs::read_to_string(&log_path).unwrap(), "");
    }

    #[test]
    fn test_mismatch_logs_warning() {
        let dir = TempDir::new().unwrap();
        let (log, log_path) = log_in(&dir);

        fs::write(dir.path().join("src.txt"), b"payload").unwrap();
        fs::write(dir.path().join("dst.txt"), b"corrupt").unwrap();

        verify_copy(&dir.path().join("src.txt"), &dir.path().join("dst.txt"), &log);

        let contents = fs::read_to_string(&log_path).unwrap();
        assert!(contents.contains("File copy validation failed:"));
        assert!(contents.contains("src.txt"));
        assert!(contents.contains("dst.txt"));
    }

    #[test]
    fn test_unreadable_destination_is_warning_not_panic() {
        let dir = TempDir::new().unwrap();
        let (log, log_path) = log_in(&dir);

        fs::write(dir.path().join("src.txt"), b"payload").unwrap();
        // destination never written

        verify_copy(&dir.path().join("src.txt"), &dir.path().join("gone.txt"), &log);

        let contents = fs::read_to_string(&log_path).unwrap();
        assert!(contents.contains("destination unreadable"));
        assert!(contents.contains("gone.txt"));
    }

    #[test]
    fn test_unreadable_source_is_warning_not_panic() {
        let dir = TempDir::new().unwrap();
        let (log, log_path) = log_in(&dir);

        fs::write(dir.path().join("dst.txt"), b"payload").unwrap();

        verify_copy(&dir.path().join("gone.txt"), &dir.path().join("dst.txt"), &log);

        let contents = fs::read_to_string(&log_path).unwrap();
        assert!(contents.contains("source unreadable"));
    }
}
