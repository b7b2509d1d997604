//! Opaque object key generation.

use std::path::Path;

use uuid::Uuid;

/// Generate a storage key for a new object, namespaced under its owner.
///
/// The key is `{owner_id}/{random-hex}{ext}`: unique across all users,
/// unpredictable enough to prevent enumeration, and never derived from
/// user-controlled input beyond the file extension.
pub fn generate_object_key(owner_id: Uuid, original_filename: &str) -> String {
    let ext = Path::new(original_filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{e}"))
        .unwrap_or_default();

    format!("{owner_id}/{}{ext}", Uuid::new_v4().simple())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_is_owner_namespaced() {
        let owner = Uuid::new_v4();
        let key = generate_object_key(owner, "report.pdf");
        assert!(key.starts_with(&format!("{owner}/")));
        assert!(key.ends_with(".pdf"));
    }

    #[test]
    fn test_key_without_extension() {
        let owner = Uuid::new_v4();
        let key = generate_object_key(owner, "README");
        assert!(!key.contains('.'));
    }

    #[test]
    fn test_keys_are_unique_for_same_input() {
        let owner = Uuid::new_v4();
        let a = generate_object_key(owner, "a.txt");
        let b = generate_object_key(owner, "a.txt");
        assert_ne!(a, b);
    }

    #[test]
    fn test_key_ignores_filename_body() {
        let owner = Uuid::new_v4();
        let key = generate_object_key(owner, "../../../etc/passwd.txt");
        assert!(!key.contains(".."));
        assert!(key.ends_with(".txt"));
    }
}
