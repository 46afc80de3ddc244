//! Resolution of mesh paths written in a geometry file.
//!
//! Paths are handled as text: a relative entry is prefixed with the directory
//! part of the geometry file name (everything up to and including its last
//! separator), exactly as written, without normalization.

use std::path::PathBuf;

#[cfg(windows)]
const SEPARATORS: &[char] = &['/', '\\'];
#[cfg(not(windows))]
const SEPARATORS: &[char] = &['/'];

/// Returns true if `name` does not start with a root indicator.
///
/// On Windows a drive prefix such as `C:\` or `C:/` is a root indicator too.
pub fn is_relative(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(c0) = chars.next() else {
        return true;
    };
    if SEPARATORS.contains(&c0) {
        return false;
    }
    if cfg!(windows) {
        let c1 = chars.next();
        let c2 = chars.next();
        let drive = c0.is_ascii_alphabetic()
            && c1 == Some(':')
            && matches!(c2, Some('/') | Some('\\'));
        return !drive;
    }
    true
}

/// Directory prefix of `filename`, including the trailing separator, or `""`.
pub fn directory_of(filename: &str) -> &str {
    match filename.rfind(SEPARATORS) {
        Some(pos) => &filename[..=pos],
        None => "",
    }
}

/// Resolve `filename` against `directory` unless it is already rooted.
pub fn resolve(filename: &str, directory: &str) -> PathBuf {
    if is_relative(filename) {
        PathBuf::from(format!("{directory}{filename}"))
    } else {
        PathBuf::from(filename)
    }
}
