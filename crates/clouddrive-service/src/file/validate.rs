//! Upload validation rules.

use std::path::Path;

use clouddrive_core::config::StorageConfig;
use clouddrive_core::error::AppError;
use clouddrive_core::result::AppResult;

/// Validate an upload before any bytes touch the object store.
///
/// Checks, in order: filename presence, extension allow-list (when one is
/// configured), and the size ceiling. Content of size exactly at the
/// ceiling is accepted; one byte over is rejected.
pub fn validate_upload(filename: &str, size_bytes: u64, config: &StorageConfig) -> AppResult<()> {
    if filename.trim().is_empty() {
        return Err(AppError::validation("No filename"));
    }

    if !config.allowed_extensions.is_empty() {
        let ext = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        let allowed = ext
            .as_deref()
            .map(|e| config.allowed_extensions.iter().any(|a| a == e))
            .unwrap_or(false);

        if !allowed {
            return Err(AppError::validation("File extension not allowed"));
        }
    }

    if size_bytes > config.max_upload_size_bytes {
        return Err(AppError::payload_too_large("File too large"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(max: u64, extensions: &[&str]) -> StorageConfig {
        StorageConfig {
            max_upload_size_bytes: max,
            allowed_extensions: extensions.iter().map(|s| s.to_string()).collect(),
            ..StorageConfig::default()
        }
    }

    #[test]
    fn test_empty_filename_rejected() {
        let config = config_with(1024, &[]);
        assert!(validate_upload("", 10, &config).is_err());
        assert!(validate_upload("   ", 10, &config).is_err());
    }

    #[test]
    fn test_size_ceiling_is_inclusive() {
        let config = config_with(1024, &[]);
        assert!(validate_upload("a.txt", 1024, &config).is_ok());

        let err = validate_upload("a.txt", 1025, &config).unwrap_err();
        assert_eq!(
            err.kind,
            clouddrive_core::error::ErrorKind::PayloadTooLarge
        );
    }

    #[test]
    fn test_extension_allow_list() {
        let config = config_with(1024, &["pdf", "txt"]);
        assert!(validate_upload("report.pdf", 10, &config).is_ok());
        assert!(validate_upload("REPORT.PDF", 10, &config).is_ok());
        assert!(validate_upload("shell.sh", 10, &config).is_err());
        assert!(validate_upload("no-extension", 10, &config).is_err());
    }

    #[test]
    fn test_empty_allow_list_accepts_everything() {
        let config = config_with(1024, &[]);
        assert!(validate_upload("anything.xyz", 10, &config).is_ok());
        assert!(validate_upload("no-extension", 10, &config).is_ok());
    }
}
