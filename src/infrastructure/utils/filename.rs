use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::ALLOWED_RESUME_EXTENSIONS;
use crate::errors::AppError;

static UNSAFE_CHARS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^a-zA-Z0-9._-]+").expect("valid regex")
});

/// Derives a filesystem-safe name from an untrusted uploaded filename.
/// Anything outside `[A-Za-z0-9._-]` becomes an underscore, leading and
/// trailing underscores are trimmed, and an empty result falls back to
/// `"resume"`.
pub fn safe_filename(original: &str) -> String {
    let replaced = UNSAFE_CHARS.replace_all(original, "_");
    let trimmed = replaced.trim_matches('_');
    if trimmed.is_empty() {
        "resume".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Checks the uploaded filename's extension against the allowed resume
/// types. Returns the lower-cased extension (with dot) on success.
pub fn resume_extension(original: &str) -> Result<String, AppError> {
    let ext = Path::new(original)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e.to_lowercase()));

    match ext {
        Some(ext) if ALLOWED_RESUME_EXTENSIONS.contains(&ext.as_str()) => Ok(ext),
        Some(ext) => Err(AppError::UnsupportedFileType(ext)),
        None => Err(AppError::UnsupportedFileType("unknown".to_string())),
    }
}

/// Resolves a collision-free storage path for a resume. Prefers the
/// sanitized original name; when that is taken, appends `_(<id>)` before
/// the extension, and keeps appending a numeric suffix until a free name
/// is found. The existence check is injected so this stays free of direct
/// filesystem access.
pub fn resolve_storage_path(
    upload_dir: &Path,
    id: u64,
    original_filename: &str,
    exists: impl Fn(&Path) -> bool,
) -> PathBuf {
    let safe_name = safe_filename(original_filename);
    let preferred = upload_dir.join(&safe_name);
    if !exists(&preferred) {
        return preferred;
    }

    let (base, ext) = split_extension(&safe_name);

    let tagged = upload_dir.join(format!("{base}_({id}){ext}"));
    if !exists(&tagged) {
        return tagged;
    }

    let mut n = 2u32;
    loop {
        let candidate = upload_dir.join(format!("{base}_({id})_{n}{ext}"));
        if !exists(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

/// Splits `"cv.pdf"` into `("cv", ".pdf")`. A name without a dot, or with
/// only a leading dot, has an empty extension.
fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) if idx > 0 => name.split_at(idx),
        _ => (name, ""),
    }
}
