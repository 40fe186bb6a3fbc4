//! Filename sanitization.

use crate::error::{ErrorKind, Result};

fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')
}

/// Strips every character outside `[A-Za-z0-9-_.]` from `name`.
///
/// Returns [`InvalidFilename`](ErrorKind::InvalidFilename) when nothing is
/// left, or when only dots are left (which would resolve to the current or
/// parent directory, or a hidden file with no name).
///
/// ```
/// use webpdf_output::sanitize;
/// assert_eq!(sanitize("my report (final).html").unwrap(), "myreportfinal.html");
/// assert!(sanitize("..").is_err());
/// assert!(sanitize("???").is_err());
/// ```
pub fn sanitize(name: &str) -> Result<String> {
    let safe: String = name.chars().filter(|&c| is_allowed(c)).collect();
    if safe.chars().all(|c| c == '.') {
        exn::bail!(ErrorKind::InvalidFilename(name.to_string()));
    }
    Ok(safe)
}
