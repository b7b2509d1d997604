//! Activity action enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of action recorded in the activity ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "activity_action", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ActivityAction {
    /// A file was uploaded.
    Upload,
    /// A signed download URL was issued.
    Download,
    /// A file was deleted.
    Delete,
}

impl ActivityAction {
    /// Return the action as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upload => "upload",
            Self::Download => "download",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for ActivityAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ActivityAction {
    type Err = clouddrive_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "upload" => Ok(Self::Upload),
            "download" => Ok(Self::Download),
            "delete" => Ok(Self::Delete),
            _ => Err(clouddrive_core::AppError::validation(format!(
                "Invalid activity action: '{s}'. Expected one of: upload, download, delete"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        assert_eq!(
            "upload".parse::<ActivityAction>().unwrap(),
            ActivityAction::Upload
        );
        assert_eq!(
            "DELETE".parse::<ActivityAction>().unwrap(),
            ActivityAction::Delete
        );
        assert_eq!(ActivityAction::Download.to_string(), "download");
        assert!("rename".parse::<ActivityAction>().is_err());
    }
}
