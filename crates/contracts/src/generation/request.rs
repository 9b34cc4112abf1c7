//! Request side of the generation contract.
//!
//! The request travels as a multipart form, not JSON: `language`, `format`
//! and `mode` are plain string fields, and exactly one of `code` (text) or
//! `file` (binary attachment) is present, matching `mode`.

/// Endpoint path, appended to the configured base URL
pub const GENERATE_PATH: &str = "/generate";

pub const FIELD_LANGUAGE: &str = "language";
pub const FIELD_FORMAT: &str = "format";
pub const FIELD_MODE: &str = "mode";
pub const FIELD_CODE: &str = "code";
pub const FIELD_FILE: &str = "file";

/// Upper bound for an uploaded source file (10 MB)
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;
