//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
///
/// None of these reach the visitor: the controller logs them and degrades to
/// "do nothing further".
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Section not found
    #[error("Section not found: {0}")]
    SectionNotFound(String),

    /// Gallery group not found
    #[error("Gallery group not found: {0}")]
    GalleryNotFound(String),

    /// Middle item index outside the group
    #[error("Middle item {index} not found in gallery group {group}")]
    MiddleItemNotFound { group: String, index: usize },

    /// Lightbox image set not found
    #[error("Image set not found: {0}")]
    ImageSetNotFound(String),

    /// Trigger image not part of the resolved sibling set
    #[error("Image not found: {0}")]
    ImageNotFound(String),

    /// Navigation entry not found
    #[error("Navigation entry not found: {0}")]
    NavEntryNotFound(usize),

    /// Unit-3 panel not found
    #[error("Panel not found: {0}")]
    PanelNotFound(String),

    /// Session storage inaccessible (privacy mode, quota, ...)
    #[error("Session storage unavailable: {0}")]
    StorageUnavailable(String),

    /// History API refused to rewrite the fragment
    #[error("History unavailable: {0}")]
    HistoryUnavailable(String),

    /// Site description rejected by validation
    #[error("Invalid site configuration: {0}")]
    InvalidConfig(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl CoreError {
    /// Whether it is expected behavior (stale markup, missing target, etc.), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::SectionNotFound(_)
            | Self::GalleryNotFound(_)
            | Self::MiddleItemNotFound { .. }
            | Self::ImageSetNotFound(_)
            | Self::ImageNotFound(_)
            | Self::NavEntryNotFound(_)
            | Self::PanelNotFound(_)
            | Self::StorageUnavailable(_)
            | Self::HistoryUnavailable(_) => true,
            Self::InvalidConfig(_) | Self::SerializationError(_) => false,
        }
    }

    /// Log the error at the level `is_expected` implies.
    pub fn log(&self, context: &str) {
        if self.is_expected() {
            log::warn!("{context}: {self}");
        } else {
            log::error!("{context}: {self}");
        }
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::SerializationError(e.to_string())
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_targets_are_expected() {
        assert!(CoreError::SectionNotFound("x".into()).is_expected());
        assert!(CoreError::StorageUnavailable("private mode".into()).is_expected());
        assert!(!CoreError::InvalidConfig("dup".into()).is_expected());
    }

    #[test]
    fn serializes_with_code_tag() {
        let json = serde_json::to_value(CoreError::PanelNotFound("u3-Brief".into())).unwrap();
        assert_eq!(json["code"], "PanelNotFound");
        assert_eq!(json["details"], "u3-Brief");
    }
}
