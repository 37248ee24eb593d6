//! Snapshot keys and path helpers

use std::path::{Path, PathBuf};

/// Render a walked path as a snapshot key.
///
/// Keys are the root the operator passed, joined with the relative
/// components by the OS separator, exactly as traversal yields them. No case
/// folding or Unicode normalization is applied, so keys are compared
/// byte-for-byte. On Unix, bytes that are not valid UTF-8 are written as
/// `\xNN` so distinct file names keep distinct keys. Elsewhere non-Unicode
/// names are rendered lossily; the scanner reports any resulting collision.
pub fn snapshot_key(path: &Path) -> String {
    #[cfg(unix)]
    {
        use std::os::unix::ffi::OsStrExt;
        escape_invalid_utf8(path.as_os_str().as_bytes())
    }
    #[cfg(not(unix))]
    {
        path.to_string_lossy().into_owned()
    }
}

#[cfg(unix)]
fn escape_invalid_utf8(mut bytes: &[u8]) -> String {
    let mut key = String::with_capacity(bytes.len());
    loop {
        match std::str::from_utf8(bytes) {
            Ok(valid) => {
                key.push_str(valid);
                return key;
            }
            Err(err) => {
                let (valid, rest) = bytes.split_at(err.valid_up_to());
                key.push_str(&String::from_utf8_lossy(valid));
                let invalid_len = err.error_len().unwrap_or(rest.len());
                for byte in &rest[..invalid_len] {
                    key.push_str(&format!("\\x{:02x}", byte));
                }
                bytes = &rest[invalid_len..];
            }
        }
    }
}

/// Resolve where a path lives without following its final component.
///
/// The parent directory is canonicalized and the file name re-attached, so
/// a file that does not exist yet still resolves, and a symlink resolves to
/// its own location rather than its target. Returns `None` when the parent
/// directory cannot be resolved.
pub fn resolve_location(path: &Path) -> Option<PathBuf> {
    let file_name = path.file_name()?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    dunce::canonicalize(parent).ok().map(|p| p.join(file_name))
}
