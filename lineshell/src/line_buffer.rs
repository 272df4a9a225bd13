//! Fixed capacity buffer for the line being edited.
//!
//! A buffer of capacity `N` holds at most `N - 1` bytes; the last slot
//! is reserved so a committed line always fits the same storage with
//! its terminator. Only printable ASCII is ever stored, so the contents
//! are always valid UTF-8.

use core::fmt;
use core::str::from_utf8;

pub struct LineBuffer<const N: usize> {
    buf: [u8; N],
    len: usize,
}

impl<const N: usize> LineBuffer<N> {
    pub const fn new() -> Self {
        Self {
            buf: [0; N],
            len: 0,
        }
    }

    /// Maximum number of bytes the buffer will hold
    pub const fn max_len() -> usize {
        N.saturating_sub(1)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len >= Self::max_len()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    pub fn as_str(&self) -> &str {
        from_utf8(self.as_slice()).unwrap_or("")
    }

    /// Append a byte at the end of the line. Gives the byte back if the
    /// buffer is full.
    pub fn push(&mut self, byte: u8) -> Result<(), u8> {
        if self.is_full() {
            return Err(byte);
        }

        self.buf[self.len] = byte;
        self.len += 1;

        Ok(())
    }

    /// Remove the last byte, clearing its slot
    pub fn pop(&mut self) -> Option<u8> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;
        let byte = self.buf[self.len];
        self.buf[self.len] = 0;

        Some(byte)
    }

    /// Copy of the current contents
    pub fn to_line(&self) -> Line<N> {
        Line {
            buf: self.buf,
            len: self.len,
        }
    }

    /// Copy out the current contents and reset the buffer to empty
    pub fn take_line(&mut self) -> Line<N> {
        let line = self.to_line();
        self.truncate();
        line
    }

    pub fn truncate(&mut self) {
        self.buf[..self.len].fill(0);
        self.len = 0;
    }
}

impl<const N: usize> Default for LineBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable copy of a submitted line
#[derive(Clone)]
pub struct Line<const N: usize> {
    buf: [u8; N],
    len: usize,
}

impl<const N: usize> Line<N> {
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    pub fn as_str(&self) -> &str {
        from_utf8(self.as_bytes()).unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<const N: usize> PartialEq for Line<N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<const N: usize> Eq for Line<N> {}

impl<const N: usize> fmt::Debug for Line<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Line").field(&self.as_str()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push_str<const N: usize>(buf: &mut LineBuffer<N>, s: &str) {
        for b in s.bytes() {
            assert!(buf.push(b).is_ok());
        }
    }

    #[test]
    fn test_line_buffer() {
        let mut buf = LineBuffer::<80>::new();

        assert!(buf.is_empty());
        assert_eq!(buf.pop(), None);

        push_str(&mut buf, "Hello, World!");
        assert_eq!(buf.as_str(), "Hello, World!");
        assert_eq!(buf.len(), 13);

        assert_eq!(buf.pop(), Some(b'!'));
        assert_eq!(buf.as_str(), "Hello, World");

        let snapshot = buf.to_line();
        let line = buf.take_line();
        assert_eq!(line, snapshot);
        assert_eq!(line.as_str(), "Hello, World");
        assert_eq!(line.as_bytes(), b"Hello, World");
        assert!(buf.is_empty());
        assert_eq!(buf.as_str(), "");

        push_str(&mut buf, "Hi");
        assert_eq!(line.as_str(), "Hello, World");
        assert_ne!(buf.to_line(), line);
    }

    #[test]
    fn erase_is_left_inverse_of_push() {
        let mut buf = LineBuffer::<16>::new();
        push_str(&mut buf, "abc");

        for c in 0x20..=0x7e {
            buf.push(c).unwrap();
            assert_eq!(buf.pop(), Some(c));
            assert_eq!(buf.as_str(), "abc");
        }
    }

    #[test]
    fn capacity_reserves_one_slot() {
        let mut buf = LineBuffer::<8>::new();

        for _ in 0..7 {
            assert!(buf.push(b'a').is_ok());
        }

        assert!(buf.is_full());
        assert_eq!(buf.push(b'b'), Err(b'b'));
        assert_eq!(buf.as_str(), "aaaaaaa");

        buf.pop();
        assert!(buf.push(b'b').is_ok());
        assert_eq!(buf.as_str(), "aaaaaab");
    }

    #[test]
    fn zero_capacity() {
        let mut buf = LineBuffer::<0>::new();

        assert_eq!(buf.push(b'a'), Err(b'a'));
        assert!(buf.take_line().is_empty());
    }
}
