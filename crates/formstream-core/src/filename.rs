//! Filename derivation for form parts.
//!
//! Everything here works on bytes of the path string: no locale, no
//! collation, no Unicode normalization. Non-ASCII names pass through as-is.

/// Locator prefix reported by in-memory and temporary streams.
pub const MEMORY_LOCATOR: &str = "memory://";
/// Locator prefix reported by streams over inline data.
pub const DATA_LOCATOR: &str = "data://";

#[cfg(windows)]
const SEPARATORS: &[char] = &['/', '\\'];
#[cfg(not(windows))]
const SEPARATORS: &[char] = &['/'];

/// Returns the trailing component of `path`.
///
/// Trailing separators are trimmed first, so `"dir/file/"` gives `"file"`.
/// A path made only of separators gives `""`.
pub fn basename(path: &str) -> &str {
    let trimmed = path.trim_end_matches(SEPARATORS);
    match trimmed.rfind(SEPARATORS) {
        Some(i) => &trimmed[i + 1..],
        None => trimmed,
    }
}

/// Extension of the basename of `filename` (text after its last `.`),
/// as written. `None` if there is no dot or nothing follows it.
pub fn extension(filename: &str) -> Option<&str> {
    let (_, ext) = basename(filename).rsplit_once('.')?;
    if ext.is_empty() {
        None
    } else {
        Some(ext)
    }
}

/// True if `locator` names something a server could use as a filename,
/// i.e. it is not one of the in-memory / inline-data pseudo-paths.
pub fn is_persistent_locator(locator: &str) -> bool {
    !locator.starts_with(MEMORY_LOCATOR) && !locator.starts_with(DATA_LOCATOR)
}

/// Picks the filename for a named part: the explicit one if non-empty,
/// otherwise the stream's locator when it is persistent.
pub fn infer_filename(explicit: Option<&str>, locator: Option<&str>) -> Option<String> {
    if let Some(name) = explicit.filter(|s| !s.is_empty()) {
        return Some(name.to_string());
    }
    locator
        .filter(|l| !l.is_empty() && is_persistent_locator(l))
        .map(str::to_string)
}
