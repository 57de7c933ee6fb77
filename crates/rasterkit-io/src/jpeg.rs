//! JPEG image format support
//!
//! Reads via the `jpeg-decoder` crate (8-bit grayscale and RGB sources)
//! and writes via `jpeg-encoder`.

use crate::{IoError, IoResult};
use jpeg_decoder::PixelFormat;
use rasterkit_core::{PixelBuffer, PixelBufferMut};
use std::io::{Read, Write};

/// Default encoding quality (0-100).
pub const DEFAULT_QUALITY: u8 = 90;

/// Read a JPEG image into an RGB buffer.
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<PixelBuffer> {
    let mut decoder = jpeg_decoder::Decoder::new(reader);
    let pixels = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {e}")))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("JPEG header missing after decode".to_string()))?;

    let width = info.width as u32;
    let height = info.height as u32;
    let mut out = PixelBufferMut::new(width, height)?;

    match info.pixel_format {
        PixelFormat::L8 => {
            for y in 0..height {
                for x in 0..width {
                    let v = pixels[(y * width + x) as usize];
                    out.set_rgb_unchecked(x, y, v, v, v);
                }
            }
        }
        PixelFormat::RGB24 => {
            for y in 0..height {
                for x in 0..width {
                    let i = ((y * width + x) * 3) as usize;
                    out.set_rgb_unchecked(x, y, pixels[i], pixels[i + 1], pixels[i + 2]);
                }
            }
        }
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported JPEG pixel format: {other:?}"
            )));
        }
    }

    Ok(out.into())
}

/// Write an image as RGB JPEG at the default quality.
pub fn write_jpeg<W: Write>(buffer: &PixelBuffer, writer: W) -> IoResult<()> {
    write_jpeg_quality(buffer, writer, DEFAULT_QUALITY)
}

/// Write an image as RGB JPEG at an explicit quality (0-100).
pub fn write_jpeg_quality<W: Write>(
    buffer: &PixelBuffer,
    mut writer: W,
    quality: u8,
) -> IoResult<()> {
    let width = u16::try_from(buffer.width())
        .map_err(|_| IoError::EncodeError(format!("width {} exceeds JPEG limit", buffer.width())))?;
    let height = u16::try_from(buffer.height()).map_err(|_| {
        IoError::EncodeError(format!("height {} exceeds JPEG limit", buffer.height()))
    })?;

    let mut data = Vec::with_capacity(buffer.pixel_count() * 3);
    for y in 0..buffer.height() {
        for x in 0..buffer.width() {
            let (r, g, b) = buffer.get_rgb_unchecked(x, y);
            data.extend_from_slice(&[r, g, b]);
        }
    }

    let mut encoded = Vec::new();
    let encoder = jpeg_encoder::Encoder::new(&mut encoded, quality);
    encoder
        .encode(&data, width, height, jpeg_encoder::ColorType::Rgb)
        .map_err(|e| IoError::EncodeError(format!("JPEG encode error: {e}")))?;
    writer.write_all(&encoded)?;
    Ok(())
}
