//! Core line editing state machine.
//!
//! [`Editor`] is IO-free: it applies an [`Action`] to the line buffer
//! and returns the [`Echo`] to send back to the terminal. [`Console`]
//! pairs an editor with the transport writer, so that an edit and its
//! echo, or an intercepted write and its replay, are always performed
//! together under one lock.

use embedded_io::Write;

use crate::error::ShellError;
use crate::input::{Action, ControlCharacter};
use crate::line_buffer::{Line, LineBuffer};
use crate::output::Frame;

const ERASE: &[u8] = b"\x08 \x08";

/// Bytes to echo after an edit
#[cfg_attr(test, derive(Debug))]
#[derive(Copy, Clone, PartialEq, Eq)]
pub enum Echo {
    Nothing,
    Byte(u8),
    Erase,
    LineEnd,
    RingBell,
}

pub struct Editor<const N: usize> {
    buffer: LineBuffer<N>,
}

impl<const N: usize> Editor<N> {
    pub const fn new() -> Self {
        Self {
            buffer: LineBuffer::new(),
        }
    }

    pub fn buffer(&self) -> &LineBuffer<N> {
        &self.buffer
    }

    // Advance the state machine by one action. A line end hands back
    // the committed line, leaving the buffer empty.
    pub fn advance(&mut self, action: Action) -> (Echo, Option<Line<N>>) {
        match action {
            Action::Print(byte) => match self.buffer.push(byte) {
                Ok(()) => (Echo::Byte(byte), None),
                Err(_) => (Echo::RingBell, None),
            },
            Action::Erase => match self.buffer.pop() {
                Some(_) => (Echo::Erase, None),
                None => (Echo::Nothing, None),
            },
            Action::LineEnd => (Echo::LineEnd, Some(self.buffer.take_line())),
            Action::Ignore => (Echo::Nothing, None),
        }
    }
}

impl<const N: usize> Default for Editor<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Transport writer together with the line being edited
pub struct Console<W, const N: usize> {
    output: W,
    editor: Editor<N>,
    newline: &'static [u8],
}

impl<W: Write, const N: usize> Console<W, N> {
    pub fn new(output: W, newline: &'static [u8]) -> Self {
        Self {
            output,
            editor: Editor::new(),
            newline,
        }
    }

    pub fn editor(&self) -> &Editor<N> {
        &self.editor
    }

    fn write_raw(&mut self, bytes: &[u8]) -> Result<(), ShellError> {
        self.output
            .write_all(bytes)
            .map_err(|e| ShellError::WriteError(embedded_io::Error::kind(&e)))
    }

    fn flush(&mut self) -> Result<(), ShellError> {
        self.output
            .flush()
            .map_err(|e| ShellError::WriteError(embedded_io::Error::kind(&e)))
    }

    /// Apply an action and echo the result
    pub fn advance(&mut self, action: Action) -> Result<Option<Line<N>>, ShellError> {
        let (echo, line) = self.editor.advance(action);

        let byte;
        let bytes: &[u8] = match echo {
            Echo::Nothing => return Ok(line),
            Echo::Byte(b) => {
                byte = [b];
                &byte
            }
            Echo::Erase => ERASE,
            Echo::LineEnd => self.newline,
            Echo::RingBell => &[ControlCharacter::Bell as u8],
        };

        self.write_raw(bytes)?;
        self.flush()?;

        Ok(line)
    }

    /// Write through the preserve-line interceptor. The line buffer is
    /// left untouched.
    pub fn intercept(&mut self, slices: &[&[u8]], preserve: bool) -> Result<(), ShellError> {
        let frame = Frame::new(slices, self.newline, self.editor.buffer.as_slice(), preserve);

        for bytes in frame {
            if !bytes.is_empty() {
                self.output
                    .write_all(bytes)
                    .map_err(|e| ShellError::WriteError(embedded_io::Error::kind(&e)))?;
            }
        }

        self.flush()
    }
}
