//! Image reference type definition

use serde::{Deserialize, Serialize};

/// Image reference
///
/// `src` is the thumbnail already loaded on the page, `full` the optional full-size image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRef {
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full: Option<String>,
}

impl ImageRef {
    #[must_use]
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            full: None,
        }
    }

    #[must_use]
    pub fn with_full(mut self, full: impl Into<String>) -> Self {
        self.full = Some(full.into());
        self
    }

    /// Source shown in the lightbox: the full image if any, else the thumbnail
    ///
    /// An empty `full` counts as unset.
    #[must_use]
    pub fn display_source(&self) -> &str {
        match self.full.as_deref() {
            Some(full) if !full.is_empty() => full,
            _ => &self.src,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_source_prefers_full_resolution() {
        let img = ImageRef::new("thumb/a.jpg").with_full("full/a.jpg");
        assert_eq!(img.display_source(), "full/a.jpg");
    }

    #[test]
    fn display_source_falls_back_to_thumbnail() {
        assert_eq!(ImageRef::new("thumb/a.jpg").display_source(), "thumb/a.jpg");
        assert_eq!(
            ImageRef::new("thumb/a.jpg").with_full("").display_source(),
            "thumb/a.jpg"
        );
    }
}
