// File: crates/chart-animate/src/decode.rs
// Summary: PNG bytes in the frame buffer -> dense RGBA pixel array.

use image::{ImageFormat, ImageReader, RgbaImage};

use crate::buffer::FrameBuffer;
use crate::error::Result;

/// Channels per pixel in a decoded frame.
pub const CHANNELS: usize = 4;

/// Rewind `buffer` and decode its PNG contents to RGBA8.
pub fn decode_frame(buffer: &mut FrameBuffer) -> Result<RgbaImage> {
    buffer.rewind();
    let img = ImageReader::with_format(buffer.reader(), ImageFormat::Png).decode()?;
    Ok(img.to_rgba8())
}

/// `(rows, columns, channels)` of a decoded frame.
pub fn shape(frame: &RgbaImage) -> (usize, usize, usize) {
    (frame.height() as usize, frame.width() as usize, CHANNELS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnimateError;
    use image::{Rgba, RgbaImage};
    use std::io::Write;

    fn png_bytes(w: u32, h: u32, px: [u8; 4]) -> Vec<u8> {
        let img = RgbaImage::from_pixel(w, h, Rgba(px));
        let mut out = std::io::Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn decodes_after_write_without_manual_rewind() {
        let mut buf = FrameBuffer::new();
        buf.write_all(&png_bytes(3, 2, [1, 2, 3, 255])).unwrap();
        // Cursor sits at the end after the write; decode must rewind itself.
        let frame = decode_frame(&mut buf).unwrap();
        assert_eq!(shape(&frame), (2, 3, 4));
        assert_eq!(frame.get_pixel(2, 1), &Rgba([1, 2, 3, 255]));
    }

    #[test]
    fn smaller_frame_after_larger_decodes_cleanly() {
        let mut buf = FrameBuffer::new();
        buf.write_all(&png_bytes(40, 40, [9, 9, 9, 255])).unwrap();
        decode_frame(&mut buf).unwrap();

        buf.reset();
        buf.write_all(&png_bytes(2, 2, [5, 6, 7, 255])).unwrap();
        let frame = decode_frame(&mut buf).unwrap();
        assert_eq!(frame.dimensions(), (2, 2));
    }

    #[test]
    fn garbage_is_an_image_error() {
        let mut buf = FrameBuffer::new();
        buf.write_all(b"definitely not a png").unwrap();
        let err = decode_frame(&mut buf).unwrap_err();
        assert!(matches!(err, AnimateError::Image(_)), "got {err:?}");
    }
}
