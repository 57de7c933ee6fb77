//! PNG image format support

use crate::{IoError, IoResult};
use png::{BitDepth, ColorType, Decoder, Encoder};
use rasterkit_core::{PixelBuffer, PixelBufferMut};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image into an RGB buffer.
///
/// Supports 8-bit grayscale, grayscale+alpha, RGB, RGBA and 8-bit
/// indexed images; the alpha channel is discarded (the data model has no
/// alpha).
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<PixelBuffer> {
    let decoder = Decoder::new(reader);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {e}")))?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;
    let color_type = info.color_type;
    let bit_depth = info.bit_depth;

    if bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNG bit depth: {bit_depth:?}"
        )));
    }

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0u8; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {e}")))?;

    let palette = reader.info().palette.as_ref().map(|p| p.to_vec());
    let line_size = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];

    let mut out = PixelBufferMut::new(width, height)?;

    for y in 0..height {
        let row = &data[y as usize * line_size..];
        for x in 0..width {
            let (r, g, b) = match color_type {
                ColorType::Grayscale => {
                    let v = row[x as usize];
                    (v, v, v)
                }
                ColorType::GrayscaleAlpha => {
                    let v = row[(x as usize) * 2];
                    (v, v, v)
                }
                ColorType::Rgb => {
                    let i = (x as usize) * 3;
                    (row[i], row[i + 1], row[i + 2])
                }
                ColorType::Rgba => {
                    let i = (x as usize) * 4;
                    (row[i], row[i + 1], row[i + 2])
                }
                ColorType::Indexed => {
                    let palette = palette.as_ref().ok_or_else(|| {
                        IoError::DecodeError("indexed PNG without palette".to_string())
                    })?;
                    let i = (row[x as usize] as usize) * 3;
                    if i + 2 >= palette.len() {
                        return Err(IoError::DecodeError(format!(
                            "palette index {} out of range",
                            row[x as usize]
                        )));
                    }
                    (palette[i], palette[i + 1], palette[i + 2])
                }
            };
            out.set_rgb_unchecked(x, y, r, g, b);
        }
    }

    Ok(out.into())
}

/// Write an image as 8-bit RGB PNG.
pub fn write_png<W: Write>(buffer: &PixelBuffer, writer: W) -> IoResult<()> {
    let mut encoder = Encoder::new(writer, buffer.width(), buffer.height());
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Eight);

    let mut header = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {e}")))?;

    let mut data = Vec::with_capacity(buffer.pixel_count() * 3);
    for y in 0..buffer.height() {
        for x in 0..buffer.width() {
            let (r, g, b) = buffer.get_rgb_unchecked(x, y);
            data.extend_from_slice(&[r, g, b]);
        }
    }

    header
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {e}")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_png_roundtrip_rgb() {
        let mut m = PixelBufferMut::new(4, 3).unwrap();
        for y in 0..3u32 {
            for x in 0..4u32 {
                m.set_rgb_unchecked(x, y, (x * 60) as u8, (y * 90) as u8, 123);
            }
        }
        let src: PixelBuffer = m.into();

        let mut bytes = Vec::new();
        write_png(&src, &mut bytes).unwrap();
        let back = read_png(Cursor::new(bytes)).unwrap();
        assert_eq!(back, src);
    }

    #[test]
    fn test_png_rejects_garbage() {
        let garbage = vec![0u8; 64];
        assert!(read_png(Cursor::new(garbage)).is_err());
    }
}
