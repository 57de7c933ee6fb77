//! ASCII PPM (P3) format support
//!
//! The plain-text Portable Pixmap variant: a "P3" magic token, width,
//! height, the maximum channel value, then R G B integers per pixel in
//! row-major order, all whitespace-separated. Lines starting with `#`
//! are comments and may appear anywhere.

use crate::{IoError, IoResult};
use rasterkit_core::{PixelBuffer, PixelBufferMut};
use std::io::{BufRead, Write};

/// Read an ASCII PPM (P3) image from a reader.
pub fn read_ppm<R: BufRead>(reader: R) -> IoResult<PixelBuffer> {
    // Strip comment lines first, then tokenize the remainder.
    let mut text = String::new();
    for line in reader.lines() {
        let line = line?;
        if !line.starts_with('#') {
            text.push_str(&line);
            text.push('\n');
        }
    }
    let mut tokens = text.split_whitespace();

    let magic = tokens
        .next()
        .ok_or_else(|| IoError::InvalidData("empty PPM stream".to_string()))?;
    if magic != "P3" {
        return Err(IoError::InvalidData(format!(
            "plain PPM must begin with P3, got {magic:?}"
        )));
    }

    let width = next_int(&mut tokens, "width")?;
    let height = next_int(&mut tokens, "height")?;
    let max_value = next_int(&mut tokens, "max value")?;
    if max_value == 0 || max_value > 255 {
        return Err(IoError::InvalidData(format!(
            "unsupported PPM max value: {max_value}"
        )));
    }

    let mut out = PixelBufferMut::new(width, height)?;
    for y in 0..height {
        for x in 0..width {
            let r = next_channel(&mut tokens, max_value)?;
            let g = next_channel(&mut tokens, max_value)?;
            let b = next_channel(&mut tokens, max_value)?;
            out.set_rgb_unchecked(x, y, r, g, b);
        }
    }

    Ok(out.into())
}

/// Write an image as ASCII PPM (P3).
///
/// The header's max value is the actual maximum channel value present
/// in the buffer (never below 1), followed by one channel integer per
/// line with a blank line between rows.
pub fn write_ppm<W: Write>(buffer: &PixelBuffer, mut writer: W) -> IoResult<()> {
    let max = max_channel_value(buffer).max(1);
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", buffer.width(), buffer.height())?;
    writeln!(writer, "{max}")?;

    for y in 0..buffer.height() {
        for x in 0..buffer.width() {
            let (r, g, b) = buffer.get_rgb_unchecked(x, y);
            writeln!(writer, "{r}")?;
            writeln!(writer, "{g}")?;
            writeln!(writer, "{b}")?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// The largest channel value in the buffer, scanning with early exit at
/// the 8-bit ceiling.
fn max_channel_value(buffer: &PixelBuffer) -> u8 {
    let mut max = 0u8;
    for y in 0..buffer.height() {
        for x in 0..buffer.width() {
            let (r, g, b) = buffer.get_rgb_unchecked(x, y);
            max = max.max(r).max(g).max(b);
            if max == 255 {
                return max;
            }
        }
    }
    max
}

fn next_int<'a>(tokens: &mut impl Iterator<Item = &'a str>, what: &str) -> IoResult<u32> {
    let token = tokens
        .next()
        .ok_or_else(|| IoError::InvalidData(format!("missing {what}")))?;
    token
        .parse::<u32>()
        .map_err(|_| IoError::InvalidData(format!("invalid {what}: {token:?}")))
}

fn next_channel<'a>(tokens: &mut impl Iterator<Item = &'a str>, max_value: u32) -> IoResult<u8> {
    let value = next_int(tokens, "channel value")?;
    if value > max_value {
        return Err(IoError::InvalidData(format!(
            "channel value {value} exceeds max value {max_value}"
        )));
    }
    Ok(value as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_simple() {
        let text = "P3\n2 1\n255\n10 20 30 40 50 60\n";
        let buf = read_ppm(Cursor::new(text)).unwrap();
        assert_eq!(buf.width(), 2);
        assert_eq!(buf.height(), 1);
        assert_eq!(buf.get_rgb_unchecked(0, 0), (10, 20, 30));
        assert_eq!(buf.get_rgb_unchecked(1, 0), (40, 50, 60));
    }

    #[test]
    fn test_read_with_comments() {
        let text = "# created by rasterkit\nP3\n# dimensions\n1 1\n255\n7 8 9\n";
        let buf = read_ppm(Cursor::new(text)).unwrap();
        assert_eq!(buf.get_rgb_unchecked(0, 0), (7, 8, 9));
    }

    #[test]
    fn test_read_rejects_bad_magic() {
        assert!(matches!(
            read_ppm(Cursor::new("P6\n1 1\n255\n1 2 3\n")),
            Err(IoError::InvalidData(_))
        ));
    }

    #[test]
    fn test_read_rejects_truncated_pixels() {
        assert!(read_ppm(Cursor::new("P3\n2 1\n255\n1 2 3\n")).is_err());
    }

    #[test]
    fn test_read_rejects_out_of_range_value() {
        assert!(read_ppm(Cursor::new("P3\n1 1\n100\n1 2 101\n")).is_err());
        assert!(read_ppm(Cursor::new("P3\n1 1\n999\n1 2 3\n")).is_err());
    }

    #[test]
    fn test_roundtrip() {
        let mut m = PixelBufferMut::new(3, 2).unwrap();
        for y in 0..2u32 {
            for x in 0..3u32 {
                m.set_rgb_unchecked(x, y, (x * 80) as u8, (y * 120) as u8, 200);
            }
        }
        let src: PixelBuffer = m.into();
        let mut bytes = Vec::new();
        write_ppm(&src, &mut bytes).unwrap();
        let back = read_ppm(Cursor::new(bytes)).unwrap();
        assert_eq!(back, src);
    }

    #[test]
    fn test_write_header_max_value() {
        let mut m = PixelBufferMut::new(1, 1).unwrap();
        m.set_rgb_unchecked(0, 0, 12, 90, 34);
        let buf: PixelBuffer = m.into();
        let mut bytes = Vec::new();
        write_ppm(&buf, &mut bytes).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("P3"));
        assert_eq!(lines.next(), Some("1 1"));
        assert_eq!(lines.next(), Some("90"));
    }

    #[test]
    fn test_write_black_image_keeps_valid_max() {
        let buf = PixelBuffer::new(2, 2).unwrap();
        let mut bytes = Vec::new();
        write_ppm(&buf, &mut bytes).unwrap();
        // A max value of 0 would be malformed; the writer floors it at 1.
        let back = read_ppm(Cursor::new(bytes)).unwrap();
        assert_eq!(back, buf);
    }
}
