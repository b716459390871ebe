//! Lightbox state
//!
//! Opening creates a session (sibling image sequence plus current index) that is
//! dropped on close. Stepping wraps within the sequence, but the arrows hide at
//! either end, unlike the gallery's unconditional wrap.

use crate::error::{CoreError, CoreResult};
use crate::types::ImageRef;

/// Lightbox session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxSession {
    images: Vec<ImageRef>,
    index: usize,
}

impl LightboxSession {
    pub fn images(&self) -> &[ImageRef] {
        &self.images
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn current(&self) -> &ImageRef {
        &self.images[self.index]
    }

    /// `(prev visible, next visible)`
    pub fn arrows(&self) -> (bool, bool) {
        let len = self.images.len();
        if len <= 1 {
            (false, false)
        } else {
            (self.index != 0, self.index != len - 1)
        }
    }
}

/// Lightbox
#[derive(Debug, Clone, Default)]
pub struct Lightbox {
    session: Option<LightboxSession>,
}

impl Lightbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> Option<&LightboxSession> {
        self.session.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// Source currently shown (full image first)
    pub fn current_source(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.current().display_source())
    }

    /// Open on a sibling sequence at the trigger's position
    ///
    /// An out-of-range index (trigger not in the sequence) leaves the state as is.
    pub fn open(&mut self, images: Vec<ImageRef>, index: usize) -> CoreResult<()> {
        if index >= images.len() {
            return Err(CoreError::ImageNotFound(format!(
                "index {index} of {}",
                images.len()
            )));
        }
        self.session = Some(LightboxSession { images, index });
        Ok(())
    }

    /// Next image (modular wrap)
    pub fn next(&mut self) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        session.index = (session.index + 1) % session.images.len();
        true
    }

    /// Previous image (modular wrap)
    pub fn prev(&mut self) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        let len = session.images.len();
        session.index = (session.index + len - 1) % len;
        true
    }

    /// Close and drop the session
    pub fn close(&mut self) -> bool {
        self.session.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images(n: usize) -> Vec<ImageRef> {
        (0..n)
            .map(|i| ImageRef::new(format!("t{i}.jpg")).with_full(format!("f{i}.jpg")))
            .collect()
    }

    #[test]
    fn arrows_hide_at_boundaries() {
        let mut lb = Lightbox::new();
        lb.open(images(4), 0).unwrap();
        assert_eq!(lb.session().unwrap().arrows(), (false, true));
        lb.next();
        assert_eq!(lb.session().unwrap().arrows(), (true, true));
        lb.next();
        lb.next();
        assert_eq!(lb.session().unwrap().index(), 3);
        assert_eq!(lb.session().unwrap().arrows(), (true, false));
    }

    #[test]
    fn singleton_hides_both_arrows_and_stays_put() {
        let mut lb = Lightbox::new();
        lb.open(images(1), 0).unwrap();
        assert_eq!(lb.session().unwrap().arrows(), (false, false));
        lb.prev();
        assert_eq!(lb.session().unwrap().index(), 0);
    }

    #[test]
    fn next_and_prev_wrap_within_session() {
        let mut lb = Lightbox::new();
        lb.open(images(3), 2).unwrap();
        lb.next();
        assert_eq!(lb.session().unwrap().index(), 0);
        lb.prev();
        assert_eq!(lb.session().unwrap().index(), 2);
        assert_eq!(lb.current_source(), Some("f2.jpg"));
    }

    #[test]
    fn open_with_missing_trigger_is_noop() {
        let mut lb = Lightbox::new();
        assert!(lb.open(images(2), 2).is_err());
        assert!(!lb.is_open());
    }

    #[test]
    fn close_discards_session() {
        let mut lb = Lightbox::new();
        lb.open(images(2), 1).unwrap();
        assert!(lb.close());
        assert!(lb.current_source().is_none());
        assert!(!lb.next());
    }
}
