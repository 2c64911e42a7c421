// File: crates/chart-animate/src/buffer.rs
// Summary: Reusable in-memory frame buffer, truncated and rewound around every frame.

use std::io::{self, Cursor, Seek, SeekFrom, Write};

/// One byte buffer shared by every frame of a run.
///
/// Contract: [`FrameBuffer::reset`] runs before each write so a smaller frame
/// never inherits trailing bytes from a larger predecessor, and
/// [`FrameBuffer::rewind`] runs before each read. The backing allocation is
/// kept across frames.
#[derive(Debug, Default)]
pub struct FrameBuffer {
    cursor: Cursor<Vec<u8>>,
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { cursor: Cursor::new(Vec::with_capacity(capacity)) }
    }

    /// Cursor to 0 and contents discarded; capacity retained.
    pub fn reset(&mut self) {
        self.cursor.get_mut().clear();
        self.cursor.set_position(0);
    }

    /// Cursor back to 0 without touching contents.
    pub fn rewind(&mut self) {
        self.cursor.set_position(0);
    }

    /// Readable view positioned wherever the cursor currently is.
    pub fn reader(&mut self) -> &mut Cursor<Vec<u8>> {
        &mut self.cursor
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.cursor.get_ref()
    }

    pub fn len(&self) -> usize {
        self.cursor.get_ref().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cursor.get_ref().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.cursor.get_ref().capacity()
    }

    pub fn position(&self) -> u64 {
        self.cursor.position()
    }
}

impl Write for FrameBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.cursor.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.cursor.flush()
    }
}

impl Seek for FrameBuffer {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.cursor.seek(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_drops_stale_tail() {
        let mut buf = FrameBuffer::new();
        buf.write_all(b"a much longer first frame").unwrap();
        buf.reset();
        buf.write_all(b"short").unwrap();
        assert_eq!(buf.as_bytes(), b"short");
    }

    #[test]
    fn overwrite_without_reset_would_leave_tail() {
        // Rewinding alone is not enough; this is what reset guards against.
        let mut buf = FrameBuffer::new();
        buf.write_all(b"0123456789").unwrap();
        buf.rewind();
        buf.write_all(b"abc").unwrap();
        assert_eq!(buf.as_bytes(), b"abc3456789");
    }

    #[test]
    fn reset_keeps_allocation() {
        let mut buf = FrameBuffer::with_capacity(1024);
        buf.write_all(&[7u8; 600]).unwrap();
        let cap = buf.capacity();
        buf.reset();
        assert!(buf.is_empty());
        assert_eq!(buf.position(), 0);
        assert_eq!(buf.capacity(), cap);
    }

    #[test]
    fn rewind_keeps_contents() {
        let mut buf = FrameBuffer::new();
        buf.write_all(b"png").unwrap();
        assert_eq!(buf.position(), 3);
        buf.rewind();
        assert_eq!(buf.position(), 0);
        assert_eq!(buf.len(), 3);
    }
}
