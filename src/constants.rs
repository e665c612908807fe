use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

/// Resume file extensions accepted by the upload gate, lower-case with dot.
pub const ALLOWED_RESUME_EXTENSIONS: [&str; 3] = [".pdf", ".doc", ".docx"];
