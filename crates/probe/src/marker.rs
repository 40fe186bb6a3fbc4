//! Script marker detection.
//!
//! A page counts as "scripted" when `<script` appears anywhere in its markup,
//! compared ASCII case-insensitively. Input is streamed in fixed-size chunks
//! so that large documents are never held in memory whole.

use std::fs::File;
use std::io::{ErrorKind as IoErrorKind, Read, Result as IoResult};
use std::path::Path;

pub const MARKER: &[u8] = b"<script";
/// Upper bound on how much of a document is inspected.
pub const MAX_SCAN_BYTES: u64 = 4 * 1024 * 1024;

/// Scans up to [`MAX_SCAN_BYTES`] of `reader` for [`MARKER`].
pub fn scan<R: Read>(reader: R) -> IoResult<bool> {
    const CARRY_SIZE: usize = MARKER.len() - 1;
    const BUFFER_CAPACITY: usize = 8192;
    const BUFFER_WINDOW: usize = BUFFER_CAPACITY - CARRY_SIZE;
    let mut reader = reader.take(MAX_SCAN_BYTES);
    // The last CARRY_SIZE bytes of each chunk are kept at the front of the
    // buffer so a marker split across two reads is still found.
    let mut buffer = vec![0; BUFFER_WINDOW + CARRY_SIZE];
    let mut carry: usize = 0;
    loop {
        let bytes = match reader.read(&mut buffer[carry..carry + BUFFER_WINDOW]) {
            Ok(0) => return Ok(false),
            Ok(bytes) => bytes,
            Err(e) if e.kind() == IoErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        let filled = carry + bytes;
        if buffer[..filled].windows(MARKER.len()).any(|w| w.eq_ignore_ascii_case(MARKER)) {
            return Ok(true);
        }
        let safe = filled.saturating_sub(CARRY_SIZE);
        buffer.copy_within(safe..filled, 0);
        carry = filled - safe;
    }
}

/// Scans a local HTML file for [`MARKER`].
pub fn scan_file(path: impl AsRef<Path>) -> IoResult<bool> {
    scan(File::open(path)?)
}
