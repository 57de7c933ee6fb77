//! BMP image format support
//!
//! Reads and writes uncompressed Windows Bitmap (BMP) files. Only the
//! true-color depths the RGB data model can hold are handled: 24- and
//! 32-bit reads, 24-bit writes.

use crate::{IoError, IoResult};
use rasterkit_core::{PixelBuffer, PixelBufferMut};
use std::io::{Read, Write};

/// BMP file header size
const BMP_FILE_HEADER_SIZE: usize = 14;

/// BMP info header size (BITMAPINFOHEADER)
const BMP_INFO_HEADER_SIZE: u32 = 40;

/// Read a BMP image
pub fn read_bmp<R: Read>(mut reader: R) -> IoResult<PixelBuffer> {
    // Read file header (14 bytes)
    let mut file_header = [0u8; BMP_FILE_HEADER_SIZE];
    reader.read_exact(&mut file_header)?;

    if &file_header[0..2] != b"BM" {
        return Err(IoError::InvalidData("not a BMP file".to_string()));
    }

    let pixel_offset = u32::from_le_bytes([
        file_header[10],
        file_header[11],
        file_header[12],
        file_header[13],
    ]) as usize;

    // Read info header (minimum 40 bytes)
    let mut info_header = [0u8; 40];
    reader.read_exact(&mut info_header)?;

    let header_size = u32::from_le_bytes([
        info_header[0],
        info_header[1],
        info_header[2],
        info_header[3],
    ]);
    if header_size < BMP_INFO_HEADER_SIZE {
        return Err(IoError::InvalidData(format!(
            "unsupported BMP header size: {header_size}"
        )));
    }

    let width = i32::from_le_bytes([
        info_header[4],
        info_header[5],
        info_header[6],
        info_header[7],
    ]);
    let height = i32::from_le_bytes([
        info_header[8],
        info_header[9],
        info_header[10],
        info_header[11],
    ]);

    let planes = u16::from_le_bytes([info_header[12], info_header[13]]);
    if planes != 1 {
        return Err(IoError::InvalidData(format!(
            "unsupported number of planes: {planes}"
        )));
    }

    let bits_per_pixel = u16::from_le_bytes([info_header[14], info_header[15]]);
    if bits_per_pixel != 24 && bits_per_pixel != 32 {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported BMP bit depth: {bits_per_pixel}"
        )));
    }

    let compression = u32::from_le_bytes([
        info_header[16],
        info_header[17],
        info_header[18],
        info_header[19],
    ]);
    // 0 = BI_RGB, 3 = BI_BITFIELDS with the default masks
    if compression != 0 && compression != 3 {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported BMP compression: {compression}"
        )));
    }

    let width_px = width.unsigned_abs();
    let top_down = height < 0;
    let height_px = height.unsigned_abs();

    // Skip any header extension up to the pixel data offset
    let current_pos = BMP_FILE_HEADER_SIZE + header_size as usize;
    if pixel_offset > current_pos {
        let mut skip = vec![0u8; pixel_offset - current_pos];
        reader.read_exact(&mut skip)?;
    }

    let mut out = PixelBufferMut::new(width_px, height_px)?;

    // BMP rows are padded to 4-byte boundaries
    let row_stride = ((width_px as usize * bits_per_pixel as usize).div_ceil(32)) * 4;
    let mut row_buffer = vec![0u8; row_stride];

    for row in 0..height_px {
        reader.read_exact(&mut row_buffer)?;
        let y = if top_down { row } else { height_px - 1 - row };

        let bytes_per_pixel = (bits_per_pixel / 8) as usize;
        for x in 0..width_px {
            let idx = (x as usize) * bytes_per_pixel;
            let b = row_buffer[idx];
            let g = row_buffer[idx + 1];
            let r = row_buffer[idx + 2];
            out.set_rgb_unchecked(x, y, r, g, b);
        }
    }

    Ok(out.into())
}

/// Write a BMP image as 24-bit bottom-up rows.
pub fn write_bmp<W: Write>(buffer: &PixelBuffer, mut writer: W) -> IoResult<()> {
    let width = buffer.width();
    let height = buffer.height();

    let row_stride = ((width as usize * 24).div_ceil(32)) * 4;
    let pixel_data_size = row_stride * height as usize;
    let pixel_offset = BMP_FILE_HEADER_SIZE + BMP_INFO_HEADER_SIZE as usize;
    let file_size = pixel_offset + pixel_data_size;

    // File header
    writer.write_all(b"BM")?;
    writer.write_all(&(file_size as u32).to_le_bytes())?;
    writer.write_all(&[0u8; 4])?; // Reserved
    writer.write_all(&(pixel_offset as u32).to_le_bytes())?;

    // Info header
    writer.write_all(&BMP_INFO_HEADER_SIZE.to_le_bytes())?;
    writer.write_all(&(width as i32).to_le_bytes())?;
    writer.write_all(&(height as i32).to_le_bytes())?; // Bottom-up
    writer.write_all(&1u16.to_le_bytes())?; // Planes
    writer.write_all(&24u16.to_le_bytes())?;
    writer.write_all(&0u32.to_le_bytes())?; // Compression
    writer.write_all(&(pixel_data_size as u32).to_le_bytes())?;
    writer.write_all(&0i32.to_le_bytes())?; // X pixels per meter
    writer.write_all(&0i32.to_le_bytes())?; // Y pixels per meter
    writer.write_all(&0u32.to_le_bytes())?; // Colors used
    writer.write_all(&0u32.to_le_bytes())?; // Important colors

    // Pixel data (bottom-up, BGR)
    let mut row_buffer = vec![0u8; row_stride];
    for row in 0..height {
        let y = height - 1 - row;
        for x in 0..width {
            let (r, g, b) = buffer.get_rgb_unchecked(x, y);
            let idx = (x as usize) * 3;
            row_buffer[idx] = b;
            row_buffer[idx + 1] = g;
            row_buffer[idx + 2] = r;
        }
        writer.write_all(&row_buffer)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_bmp_roundtrip() {
        // Odd width exercises the 4-byte row padding
        let mut m = PixelBufferMut::new(5, 3).unwrap();
        for y in 0..3u32 {
            for x in 0..5u32 {
                m.set_rgb_unchecked(x, y, (x * 50) as u8, (y * 80) as u8, 33);
            }
        }
        let src: PixelBuffer = m.into();

        let mut bytes = Vec::new();
        write_bmp(&src, &mut bytes).unwrap();
        let back = read_bmp(Cursor::new(bytes)).unwrap();
        assert_eq!(back, src);
    }

    #[test]
    fn test_bmp_rejects_bad_magic() {
        let mut bytes = Vec::new();
        write_bmp(&PixelBuffer::new(2, 2).unwrap(), &mut bytes).unwrap();
        bytes[0] = b'X';
        assert!(matches!(
            read_bmp(Cursor::new(bytes)),
            Err(IoError::InvalidData(_))
        ));
    }

    #[test]
    fn test_bmp_rejects_unsupported_depth() {
        let mut bytes = Vec::new();
        write_bmp(&PixelBuffer::new(2, 2).unwrap(), &mut bytes).unwrap();
        // Patch bits-per-pixel (offset 14 + 14) to 8
        bytes[28] = 8;
        bytes[29] = 0;
        assert!(matches!(
            read_bmp(Cursor::new(bytes)),
            Err(IoError::UnsupportedFormat(_))
        ));
    }
}
