//! Outbound writes and the preserve-line framing.

use core::fmt::{self, Write as _};

use crate::error::ShellError;

/// Size of the stack buffer used by [`Output::print_fmt`]
pub const FORMAT_BUFFER_SIZE: usize = 256;

/// Sink for shell output. Every write goes through the preserve-line
/// interceptor of the shell it belongs to.
pub trait Output {
    /// Write the slices as one uninterrupted unit
    fn write_slices(&self, slices: &[&[u8]]) -> Result<(), ShellError>;

    /// Newline sequence used for echo and framing
    fn newline(&self) -> &[u8];

    fn write(&self, bytes: &[u8]) -> Result<(), ShellError> {
        self.write_slices(&[bytes])
    }

    fn print(&self, s: &str) -> Result<(), ShellError> {
        self.write(s.as_bytes())
    }

    fn println(&self, s: &str) -> Result<(), ShellError> {
        self.write_slices(&[s.as_bytes(), self.newline()])
    }

    /// Format into a [`FORMAT_BUFFER_SIZE`] byte buffer and write the
    /// result. Nothing is written if the output does not fit.
    fn print_fmt(&self, args: fmt::Arguments<'_>) -> Result<(), ShellError> {
        let mut s = heapless::String::<FORMAT_BUFFER_SIZE>::new();
        s.write_fmt(args).or(Err(ShellError::FormatOverflow))?;
        self.write(s.as_bytes())
    }
}

#[cfg_attr(test, derive(Debug))]
#[derive(Copy, Clone, PartialEq, Eq)]
enum FrameState {
    Open,
    Body(usize),
    Close,
    Replay,
    Done,
}

/// Iterator over the byte slices of one intercepted write.
///
/// With a non-empty line the caller's slices are bracketed by newlines
/// and followed by the line, so the line ends up at the bottom of the
/// terminal again. Otherwise only the caller's slices are yielded.
pub struct Frame<'b> {
    state: FrameState,
    slices: &'b [&'b [u8]],
    newline: &'b [u8],
    line: &'b [u8],
}

impl<'b> Frame<'b> {
    pub fn new(
        slices: &'b [&'b [u8]],
        newline: &'b [u8],
        line: &'b [u8],
        preserve: bool,
    ) -> Self {
        let framed = preserve && !line.is_empty();

        Self {
            state: if framed {
                FrameState::Open
            } else {
                FrameState::Body(0)
            },
            slices,
            newline,
            line: if framed { line } else { &[] },
        }
    }

    pub fn is_framed(&self) -> bool {
        !self.line.is_empty()
    }
}

impl<'b> Iterator for Frame<'b> {
    type Item = &'b [u8];

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.state {
                FrameState::Open => {
                    self.state = FrameState::Body(0);
                    break Some(self.newline);
                }
                FrameState::Body(index) => {
                    if let Some(&slice) = self.slices.get(index) {
                        self.state = FrameState::Body(index + 1);
                        break Some(slice);
                    }

                    self.state = if self.is_framed() {
                        FrameState::Close
                    } else {
                        FrameState::Done
                    };
                }
                FrameState::Close => {
                    self.state = FrameState::Replay;
                    break Some(self.newline);
                }
                FrameState::Replay => {
                    self.state = FrameState::Done;
                    break Some(self.line);
                }
                FrameState::Done => break None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testlib::RecordingOutput;
    use std::vec::Vec;

    fn collect(frame: Frame<'_>) -> Vec<u8> {
        frame.flat_map(|s| s.iter().copied()).collect()
    }

    #[test]
    fn framed_when_line_pending() {
        let frame = Frame::new(&[b"status"], b"\n", b"he", true);
        assert!(frame.is_framed());

        let items: Vec<&[u8]> = frame.collect();
        assert_eq!(items, [&b"\n"[..], b"status", b"\n", b"he"]);
    }

    #[test]
    fn passthrough() {
        assert_eq!(collect(Frame::new(&[b"status"], b"\n", b"he", false)), b"status");
        assert_eq!(collect(Frame::new(&[b"status"], b"\n", b"", true)), b"status");
        assert_eq!(
            collect(Frame::new(&[b"a", b"b", b"c"], b"\r\n", b"", true)),
            b"abc"
        );
    }

    #[test]
    fn multiple_slices_framed_once() {
        assert_eq!(
            collect(Frame::new(&[b"tick", b"\r\n"], b"\r\n", b"led o", true)),
            b"\r\ntick\r\n\r\nled o"
        );
    }

    #[test]
    fn provided_methods() {
        let output = RecordingOutput::new("\r\n");

        output.print("a").unwrap();
        output.println("b").unwrap();
        output.print_fmt(format_args!("{}={}", "x", 42)).unwrap();

        assert_eq!(output.units(), ["a", "b\r\n", "x=42"]);
    }

    #[test]
    fn format_overflow_writes_nothing() {
        let output = RecordingOutput::new("\n");
        let long = [b'x'; FORMAT_BUFFER_SIZE + 1];
        let long = core::str::from_utf8(&long).unwrap();

        assert_eq!(
            output.print_fmt(format_args!("{}", long)),
            Err(ShellError::FormatOverflow)
        );
        assert!(output.units().is_empty());
    }
}
