//! Lightbox key mapping

/// Keys the lightbox reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    Other,
}

impl Key {
    /// Parse from a DOM `KeyboardEvent.key` name
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "Escape" | "Esc" => Self::Escape,
            "ArrowLeft" | "Left" => Self::ArrowLeft,
            "ArrowRight" | "Right" => Self::ArrowRight,
            _ => Self::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dom_key_names() {
        assert_eq!(Key::from_key_name("Escape"), Key::Escape);
        assert_eq!(Key::from_key_name("ArrowLeft"), Key::ArrowLeft);
        assert_eq!(Key::from_key_name("ArrowRight"), Key::ArrowRight);
        assert_eq!(Key::from_key_name("Enter"), Key::Other);
    }
}
