//! Document intake: extension allow-list and text decoding.
//!
//! Documents are never parsed. A `.pdf` or `.docx` is decoded exactly like a
//! `.txt`, so binary formats come out as replacement-character soup.

use crate::error::{CheckError, CheckResult};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Lower-cased text after the last `.`. A name without a dot yields the
/// whole name, which never matches an allow-list entry.
pub fn extension_of(name: &str) -> String {
    name.rsplit('.').next().unwrap_or_default().to_lowercase()
}

pub fn is_allowed(name: &str, allowed: &[String]) -> bool {
    name.contains('.') && allowed.contains(&extension_of(name))
}

pub fn check_extension(name: &str, allowed: &[String]) -> CheckResult<()> {
    if is_allowed(name, allowed) {
        Ok(())
    } else {
        warn!("Rejected '{}': extension not in {:?}", name, allowed);
        Err(CheckError::UnsupportedFileType(name.to_string()))
    }
}

/// `(.txt, .doc, ...)` for user-facing messages.
pub fn describe_allowed(allowed: &[String]) -> String {
    allowed
        .iter()
        .map(|ext| format!(".{}", ext))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn decode_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Checks the extension before touching the file.
pub fn read_document<P: AsRef<Path>>(path: P, allowed: &[String]) -> CheckResult<String> {
    let path = path.as_ref();
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    check_extension(&name, allowed)?;

    let bytes = fs::read(path)?;
    debug!("Read {} bytes from {}", bytes.len(), path.display());
    Ok(decode_text(&bytes))
}

/// Reduces an uploaded name to `[A-Za-z0-9_.-]`, with whitespace and path
/// separators collapsed to `_`. Falls back to `document` when nothing is left.
pub fn secure_filename(name: &str) -> String {
    let ascii: String = name
        .chars()
        .filter(char::is_ascii)
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();

    let joined = ascii.split_whitespace().collect::<Vec<_>>().join("_");

    let cleaned: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        .collect();

    let trimmed = cleaned.trim_matches(|c| c == '.' || c == '_');
    if trimmed.is_empty() {
        "document".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> Vec<String> {
        ["txt", "doc", "docx", "pdf"].map(String::from).to_vec()
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        assert!(is_allowed("Essay.TXT", &defaults()));
        assert!(is_allowed("report.final.Docx", &defaults()));
        assert!(!is_allowed("archive.tar.gz", &defaults()));
    }

    #[test]
    fn test_dotless_name_is_rejected() {
        assert!(!is_allowed("txt", &defaults()));
        assert!(!is_allowed("", &defaults()));
    }

    #[test]
    fn test_secure_filename() {
        assert_eq!(secure_filename("My cool movie.mov"), "My_cool_movie.mov");
        assert_eq!(secure_filename("../../../etc/passwd"), "etc_passwd");
        assert_eq!(secure_filename("i contain cool \u{fc}ml\u{e4}uts.txt"), "i_contain_cool_mluts.txt");
        assert_eq!(secure_filename("..."), "document");
    }

    #[test]
    fn test_describe_allowed() {
        assert_eq!(describe_allowed(&defaults()), ".txt, .doc, .docx, .pdf");
    }
}
