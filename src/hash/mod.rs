//! Content digests
//!
//! Blake3 digests used to validate a just-completed copy. Files are streamed
//! in fixed-size chunks so file size is unbounded; digests are transient and
//! never stored between cycles.

use crate::types::SyncError;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Chunk size for streaming digest computation.
const DIGEST_CHUNK_SIZE: usize = 64 * 1024;

/// Compute the Blake3 digest of a file.
///
/// # Returns
/// * `Ok([u8; 32])` - 32-byte Blake3 digest
/// * `Err(SyncError)` - IO error if the file cannot be read
pub fn compute_digest(path: &Path) -> Result<[u8; 32], SyncError> {
    let mut file = File::open(path)?;
    let mut hasher = blake3::Hasher::new();
    let mut buffer = vec![0u8; DIGEST_CHUNK_SIZE];

    loop {
        let bytes_read = file.read(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        hasher.update(&buffer[0..bytes_read]);
    }

    Ok(*hasher.finalize().as_bytes())
}
