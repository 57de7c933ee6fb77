//! The editing session
//!
//! A [`Session`] is an explicit context object owning the name-to-image
//! table for one editing session. It is passed to callers by value or
//! reference like any other object; nothing here is global. Each stored
//! name exclusively owns its buffer; operations borrow the source and
//! insert a fresh result, so a failed operation never leaves a
//! half-modified image behind.

use crate::ops::{Operation, execute};
use crate::{SessionError, SessionResult};
use rasterkit_core::{Histogram, PixelBuffer, combine_rgb, render_chart, split_rgb};
use std::collections::HashMap;

/// A name-to-image table scoped to one editing session
#[derive(Debug, Default)]
pub struct Session {
    images: HashMap<String, PixelBuffer>,
}

impl Session {
    /// Create an empty session.
    pub fn new() -> Self {
        Session::default()
    }

    /// Store a buffer under a name, replacing any previous image.
    pub fn insert(&mut self, name: impl Into<String>, buffer: PixelBuffer) {
        self.images.insert(name.into(), buffer);
    }

    /// Look up an image by name.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotFound`] if the name is absent.
    pub fn get(&self, name: &str) -> SessionResult<&PixelBuffer> {
        self.images
            .get(name)
            .ok_or_else(|| SessionError::NotFound(name.to_string()))
    }

    /// Remove an image, returning it if present.
    pub fn remove(&mut self, name: &str) -> Option<PixelBuffer> {
        self.images.remove(name)
    }

    /// Whether a name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.images.contains_key(name)
    }

    /// The stored names, sorted for deterministic listing.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.images.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Run an operation on `source` and store the result under `dest`.
    ///
    /// The source is only borrowed; `source` and `dest` may be the same
    /// name, in which case the stored image is replaced on success and
    /// untouched on failure.
    pub fn apply(&mut self, op: &Operation, source: &str, dest: &str) -> SessionResult<()> {
        let result = execute(op, self.get(source)?)?;
        self.insert(dest, result);
        Ok(())
    }

    /// Split `source` into isolated channel planes stored under three
    /// destination names.
    pub fn split_rgb(
        &mut self,
        source: &str,
        red_dest: &str,
        green_dest: &str,
        blue_dest: &str,
    ) -> SessionResult<()> {
        let (red, green, blue) = split_rgb(self.get(source)?);
        self.insert(red_dest, red);
        self.insert(green_dest, green);
        self.insert(blue_dest, blue);
        Ok(())
    }

    /// Combine three stored channel images into `dest`.
    ///
    /// # Errors
    ///
    /// Propagates [`rasterkit_core::Error::DimensionMismatch`] when the
    /// three sources disagree in size; nothing is stored in that case.
    pub fn combine_rgb(
        &mut self,
        red_source: &str,
        green_source: &str,
        blue_source: &str,
        dest: &str,
    ) -> SessionResult<()> {
        let combined = combine_rgb(
            self.get(red_source)?,
            self.get(green_source)?,
            self.get(blue_source)?,
        )?;
        self.insert(dest, combined);
        Ok(())
    }

    /// Compute the histogram of a stored image.
    pub fn histogram(&self, name: &str) -> SessionResult<Histogram> {
        Ok(Histogram::of(self.get(name)?))
    }

    /// Render the histogram chart of `source` and store it under `dest`.
    pub fn histogram_chart(&mut self, source: &str, dest: &str) -> SessionResult<()> {
        let chart = render_chart(&self.histogram(source)?);
        self.insert(dest, chart);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rasterkit_core::PixelBufferMut;

    fn sample() -> PixelBuffer {
        let mut m = PixelBufferMut::new(3, 3).unwrap();
        m.fill_rgb(50, 100, 150);
        m.into()
    }

    #[test]
    fn test_not_found() {
        let session = Session::new();
        assert!(matches!(
            session.get("missing"),
            Err(SessionError::NotFound(_))
        ));
    }

    #[test]
    fn test_insert_apply_get() {
        let mut session = Session::new();
        session.insert("base", sample());
        session
            .apply(&Operation::Brighten { value: 10 }, "base", "brighter")
            .unwrap();
        assert_eq!(
            session.get("brighter").unwrap().get_rgb_unchecked(0, 0),
            (60, 110, 160)
        );
        // Source untouched
        assert_eq!(
            session.get("base").unwrap().get_rgb_unchecked(0, 0),
            (50, 100, 150)
        );
    }

    #[test]
    fn test_apply_in_place_keeps_old_image_on_failure() {
        let mut session = Session::new();
        session.insert("base", sample());
        let err = session.apply(
            &Operation::Compress {
                retain_percent: -5,
            },
            "base",
            "base",
        );
        assert!(err.is_err());
        assert_eq!(
            session.get("base").unwrap().get_rgb_unchecked(0, 0),
            (50, 100, 150)
        );
    }

    #[test]
    fn test_split_and_combine() {
        let mut session = Session::new();
        session.insert("base", sample());
        session.split_rgb("base", "r", "g", "b").unwrap();
        assert_eq!(
            session.get("g").unwrap().get_rgb_unchecked(1, 1),
            (0, 100, 0)
        );
        session.combine_rgb("r", "g", "b", "rebuilt").unwrap();
        assert_eq!(session.get("rebuilt").unwrap(), session.get("base").unwrap());
    }

    #[test]
    fn test_combine_dimension_mismatch_stores_nothing() {
        let mut session = Session::new();
        session.insert("a", sample());
        session.insert("small", PixelBuffer::new(2, 2).unwrap());
        let err = session.combine_rgb("a", "a", "small", "out");
        assert!(err.is_err());
        assert!(!session.contains("out"));
    }

    #[test]
    fn test_names_sorted() {
        let mut session = Session::new();
        session.insert("zebra", sample());
        session.insert("apple", sample());
        assert_eq!(session.names(), vec!["apple", "zebra"]);
    }

    #[test]
    fn test_histogram_and_chart() {
        let mut session = Session::new();
        session.insert("base", sample());
        let hist = session.histogram("base").unwrap();
        assert_eq!(hist.red[50], 9);
        session.histogram_chart("base", "chart").unwrap();
        assert_eq!(session.get("chart").unwrap().width(), 256);
    }
}
