//! Mutable state behind one open dashboard window.

use crate::error::ValidationError;

/// Thumbnails picked so far plus the news text being typed.
///
/// `has_uploaded` is true exactly when `uploaded` is non-empty; every mutation
/// goes through methods that keep the two in step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState<T> {
    uploaded: Vec<T>,
    has_uploaded: bool,
    news_text: String,
    /// Bumped on every reset so views can drop anything cached per image.
    generation: u64,
}

impl<T> SessionState<T> {
    pub fn new() -> Self {
        Self {
            uploaded: Vec::new(),
            has_uploaded: false,
            news_text: String::new(),
            generation: 0,
        }
    }

    pub fn uploaded(&self) -> &[T] {
        &self.uploaded
    }

    pub fn has_uploaded(&self) -> bool {
        self.has_uploaded
    }

    /// The "Upload Photo" hint is shown until the first image lands.
    pub fn shows_placeholder(&self) -> bool {
        !self.has_uploaded
    }

    pub fn news_text(&self) -> &str {
        &self.news_text
    }

    /// Live handle for the text area.
    pub fn news_text_mut(&mut self) -> &mut String {
        &mut self.news_text
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Appends one thumbnail. Returns true if this was the first since the last reset.
    pub fn push_thumbnail(&mut self, thumb: T) -> bool {
        let first = !self.has_uploaded;
        self.uploaded.push(thumb);
        self.has_uploaded = true;
        first
    }

    /// Checks the submit preconditions without touching anything.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.has_uploaded || self.news_text.trim().is_empty() {
            return Err(ValidationError);
        }
        Ok(())
    }

    /// Validates, then hands back the submitted images and text and resets to empty.
    ///
    /// On error nothing changes.
    pub fn submit(&mut self) -> Result<(Vec<T>, String), ValidationError> {
        self.validate()?;
        let images = std::mem::take(&mut self.uploaded);
        let news = std::mem::take(&mut self.news_text);
        self.reset();
        Ok((images, news))
    }

    pub fn reset(&mut self) {
        self.uploaded.clear();
        self.has_uploaded = false;
        self.news_text.clear();
        self.generation += 1;
    }
}

impl<T> Default for SessionState<T> {
    fn default() -> Self {
        Self::new()
    }
}
