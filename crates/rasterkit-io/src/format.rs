//! Format identification and unified decode/encode entry points

use crate::{IoError, IoResult, bmp, jpeg, png, ppm};
use rasterkit_core::PixelBuffer;
use std::io::Cursor;
use std::path::Path;

/// Supported image file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    /// ASCII PPM (P3)
    Ppm,
    /// PNG
    Png,
    /// JFIF JPEG
    Jpeg,
    /// Windows Bitmap
    Bmp,
}

impl ImageFormat {
    /// Get the canonical file extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Ppm => "ppm",
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Bmp => "bmp",
        }
    }

    /// Identify a format from a file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "ppm" => Some(Self::Ppm),
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "bmp" => Some(Self::Bmp),
            _ => None,
        }
    }
}

/// Identify a format from the leading bytes of an encoded image.
pub fn sniff_format(bytes: &[u8]) -> IoResult<ImageFormat> {
    if bytes.starts_with(b"P3") {
        Ok(ImageFormat::Ppm)
    } else if bytes.starts_with(&[0x89, b'P', b'N', b'G']) {
        Ok(ImageFormat::Png)
    } else if bytes.starts_with(&[0xFF, 0xD8]) {
        Ok(ImageFormat::Jpeg)
    } else if bytes.starts_with(b"BM") {
        Ok(ImageFormat::Bmp)
    } else {
        Err(IoError::UnsupportedFormat(
            "unrecognized image signature".to_string(),
        ))
    }
}

/// Decode encoded image bytes in the given format.
pub fn decode(bytes: &[u8], format: ImageFormat) -> IoResult<PixelBuffer> {
    let cursor = Cursor::new(bytes);
    match format {
        ImageFormat::Ppm => ppm::read_ppm(cursor),
        ImageFormat::Png => png::read_png(cursor),
        ImageFormat::Jpeg => jpeg::read_jpeg(cursor),
        ImageFormat::Bmp => bmp::read_bmp(cursor),
    }
}

/// Encode a buffer into the given format.
pub fn encode(buffer: &PixelBuffer, format: ImageFormat) -> IoResult<Vec<u8>> {
    let mut bytes = Vec::new();
    match format {
        ImageFormat::Ppm => ppm::write_ppm(buffer, &mut bytes)?,
        ImageFormat::Png => png::write_png(buffer, &mut bytes)?,
        ImageFormat::Jpeg => jpeg::write_jpeg(buffer, &mut bytes)?,
        ImageFormat::Bmp => bmp::write_bmp(buffer, &mut bytes)?,
    }
    Ok(bytes)
}

/// Read an image from a file, sniffing the format from its contents.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<PixelBuffer> {
    let bytes = std::fs::read(path)?;
    let format = sniff_format(&bytes)?;
    decode(&bytes, format)
}

/// Write an image to a file, inferring the format from the extension.
pub fn write_image<P: AsRef<Path>>(buffer: &PixelBuffer, path: P) -> IoResult<()> {
    let path = path.as_ref();
    let format = path
        .extension()
        .and_then(|e| e.to_str())
        .and_then(ImageFormat::from_extension)
        .ok_or_else(|| {
            IoError::UnsupportedFormat(format!("cannot infer format from path {path:?}"))
        })?;
    let bytes = encode(buffer, format)?;
    std::fs::write(path, bytes)?;
    Ok(())
}
