//! PixelBuffer - the image container
//!
//! `PixelBuffer` is the fundamental image type in rasterkit: a rectangular
//! grid of 8-bit RGB triples stored as packed 32-bit words, row-major.
//!
//! # Ownership model
//!
//! `PixelBuffer` uses `Arc` for efficient cloning (shared ownership) and is
//! immutable once produced. To build or modify pixel data, convert to
//! [`PixelBufferMut`] via [`PixelBuffer::try_into_mut`] or
//! [`PixelBuffer::to_mut`], then convert back with `Into<PixelBuffer>`.
//! Every engine in the toolkit takes buffers by reference and returns a
//! fresh buffer; inputs are never mutated in place.

use crate::color;
use crate::error::{Error, Result};
use std::sync::Arc;

/// Internal buffer data
#[derive(Debug)]
struct BufferData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Packed RGB words, row-major
    data: Vec<u32>,
}

/// An immutable grid of 8-bit RGB pixels
///
/// # Examples
///
/// ```
/// use rasterkit_core::PixelBuffer;
///
/// let buf = PixelBuffer::new(640, 480).unwrap();
/// assert_eq!(buf.width(), 640);
/// assert_eq!(buf.height(), 480);
/// assert_eq!(buf.get_rgb(0, 0), Some((0, 0, 0)));
/// ```
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    inner: Arc<BufferData>,
}

impl PixelBuffer {
    /// Create a new buffer with the specified dimensions.
    ///
    /// All pixels are initialized to black (0, 0, 0).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let data = vec![0u32; (width as usize) * (height as usize)];
        Ok(PixelBuffer {
            inner: Arc::new(BufferData {
                width,
                height,
                data,
            }),
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.inner.data.len()
    }

    /// Get raw access to the packed pixel words.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get the packed pixel words of a single row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u32] {
        let start = (y as usize) * (self.inner.width as usize);
        &self.inner.data[start..start + self.inner.width as usize]
    }

    /// Get the RGB triple at (x, y).
    ///
    /// Returns `None` if the coordinates are out of bounds.
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        if x >= self.inner.width || y >= self.inner.height {
            return None;
        }
        Some(self.get_rgb_unchecked(x, y))
    }

    /// Get the RGB triple at (x, y) without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_rgb_unchecked(&self, x: u32, y: u32) -> (u8, u8, u8) {
        let idx = (y as usize) * (self.inner.width as usize) + (x as usize);
        color::extract_rgb(self.inner.data[idx])
    }

    /// Get the number of strong references to this buffer.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Check if two buffers have the same width and height.
    pub fn sizes_equal(&self, other: &PixelBuffer) -> bool {
        self.inner.width == other.inner.width && self.inner.height == other.inner.height
    }

    /// Create a new zeroed buffer with the same dimensions as this one.
    pub fn create_template(&self) -> Self {
        PixelBuffer {
            inner: Arc::new(BufferData {
                width: self.inner.width,
                height: self.inner.height,
                data: vec![0u32; self.inner.data.len()],
            }),
        }
    }

    /// Try to get mutable access to the pixel data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    pub fn try_into_mut(self) -> std::result::Result<PixelBufferMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(PixelBufferMut { inner: data }),
            Err(arc) => Err(PixelBuffer { inner: arc }),
        }
    }

    /// Create a mutable copy of this buffer.
    ///
    /// Always creates a new copy that can be modified.
    pub fn to_mut(&self) -> PixelBufferMut {
        PixelBufferMut {
            inner: BufferData {
                width: self.inner.width,
                height: self.inner.height,
                data: self.inner.data.clone(),
            },
        }
    }
}

impl PartialEq for PixelBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.inner.width == other.inner.width
            && self.inner.height == other.inner.height
            && self.inner.data == other.inner.data
    }
}

impl Eq for PixelBuffer {}

/// Mutable pixel buffer
///
/// Allows modification of pixel data. Convert back to an immutable
/// [`PixelBuffer`] using `Into<PixelBuffer>`. Exclusive access is
/// enforced at compile time; there is no interior mutability.
#[derive(Debug)]
pub struct PixelBufferMut {
    inner: BufferData,
}

impl PixelBufferMut {
    /// Create a new mutable buffer with all pixels black.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(PixelBuffer::new(width, height)?
            .try_into_mut()
            .expect("fresh buffer has a single owner"))
    }

    /// Get the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get raw access to the packed pixel words.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get mutable raw access to the packed pixel words.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.inner.data
    }

    /// Get the RGB triple at (x, y) without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_rgb_unchecked(&self, x: u32, y: u32) -> (u8, u8, u8) {
        let idx = (y as usize) * (self.inner.width as usize) + (x as usize);
        color::extract_rgb(self.inner.data[idx])
    }

    /// Set the RGB triple at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the coordinates are out of bounds.
    pub fn set_rgb(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) -> Result<()> {
        if x >= self.inner.width || y >= self.inner.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.inner.width,
                height: self.inner.height,
            });
        }
        self.set_rgb_unchecked(x, y, r, g, b);
        Ok(())
    }

    /// Set the RGB triple at (x, y) without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_rgb_unchecked(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) {
        let idx = (y as usize) * (self.inner.width as usize) + (x as usize);
        self.inner.data[idx] = color::compose_rgb(r, g, b);
    }

    /// Set every pixel to the given color.
    pub fn fill_rgb(&mut self, r: u8, g: u8, b: u8) {
        self.inner.data.fill(color::compose_rgb(r, g, b));
    }
}

impl From<PixelBufferMut> for PixelBuffer {
    fn from(buf: PixelBufferMut) -> Self {
        PixelBuffer {
            inner: Arc::new(buf.inner),
        }
    }
}
