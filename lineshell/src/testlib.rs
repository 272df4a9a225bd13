use std::string::String;
use std::vec::Vec;

use crossbeam::channel::{unbounded, Receiver, Sender, TryRecvError};

use crate::error::ShellError;
use crate::input::ControlCharacter;
use crate::output::Output;

pub trait AsByteVec {
    fn as_byte_vec(self) -> Vec<u8>;
}

impl AsByteVec for &str {
    fn as_byte_vec(self) -> Vec<u8> {
        self.bytes().collect()
    }
}

impl AsByteVec for ControlCharacter {
    fn as_byte_vec(self) -> Vec<u8> {
        vec![self.into()]
    }
}

impl<const N: usize> AsByteVec for [ControlCharacter; N] {
    fn as_byte_vec(self) -> Vec<u8> {
        self.into_iter().map(|c| c.into()).collect()
    }
}

impl<const N: usize> AsByteVec for [&str; N] {
    fn as_byte_vec(self) -> Vec<u8> {
        self.into_iter().flat_map(|s| s.bytes()).collect()
    }
}

/// Serial receive side fed in chunks through a channel. Empty channel
/// reads as no data, a dropped sender as a broken pipe.
pub struct MockReader {
    rx: Receiver<Vec<u8>>,
    pending: Vec<u8>,
}

impl MockReader {
    pub fn new() -> (Self, Sender<Vec<u8>>) {
        let (tx, rx) = unbounded();

        (
            Self {
                rx,
                pending: Vec::new(),
            },
            tx,
        )
    }
}

impl embedded_io::ErrorType for MockReader {
    type Error = embedded_io::ErrorKind;
}

impl embedded_io::Read for MockReader {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        if self.pending.is_empty() {
            match self.rx.try_recv() {
                Ok(chunk) => self.pending = chunk,
                Err(TryRecvError::Empty) => return Ok(0),
                Err(TryRecvError::Disconnected) => {
                    return Err(embedded_io::ErrorKind::BrokenPipe)
                }
            }
        }

        let len = buf.len().min(self.pending.len());
        buf[..len].copy_from_slice(&self.pending[..len]);
        self.pending.drain(..len);

        Ok(len)
    }
}

/// Serial transmit side. Bytes reach the shared channel on flush.
#[derive(Clone)]
pub struct MockWriter {
    buffer: Vec<u8>,
    tx: Sender<u8>,
    rx: Receiver<u8>,
}

impl MockWriter {
    pub fn new() -> Self {
        let (tx, rx) = unbounded();

        Self {
            buffer: Vec::new(),
            tx,
            rx,
        }
    }

    /// Everything flushed so far, by any clone
    pub fn take_string(&self) -> String {
        String::from_utf8(self.rx.try_iter().collect()).unwrap()
    }
}

impl embedded_io::ErrorType for MockWriter {
    type Error = embedded_io::ErrorKind;
}

impl embedded_io::Write for MockWriter {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        for byte in self.buffer.drain(..) {
            self.tx.send(byte).unwrap();
        }

        Ok(())
    }
}

/// Writer whose transport has gone away
pub struct BrokenWriter;

impl embedded_io::ErrorType for BrokenWriter {
    type Error = embedded_io::ErrorKind;
}

impl embedded_io::Write for BrokenWriter {
    fn write(&mut self, _buf: &[u8]) -> Result<usize, Self::Error> {
        Err(embedded_io::ErrorKind::NotConnected)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Err(embedded_io::ErrorKind::NotConnected)
    }
}

pub struct NullOutput;

impl Output for NullOutput {
    fn write_slices(&self, _slices: &[&[u8]]) -> Result<(), ShellError> {
        Ok(())
    }

    fn newline(&self) -> &[u8] {
        b"\n"
    }
}

/// Output keeping every write as one string
pub struct RecordingOutput {
    newline: &'static str,
    units: spin::Mutex<Vec<String>>,
}

impl RecordingOutput {
    pub fn new(newline: &'static str) -> Self {
        Self {
            newline,
            units: spin::Mutex::new(Vec::new()),
        }
    }

    pub fn units(&self) -> Vec<String> {
        self.units.lock().clone()
    }
}

impl Output for RecordingOutput {
    fn write_slices(&self, slices: &[&[u8]]) -> Result<(), ShellError> {
        let unit = slices
            .iter()
            .map(|s| String::from_utf8_lossy(s))
            .collect::<String>();

        self.units.lock().push(unit);
        Ok(())
    }

    fn newline(&self) -> &[u8] {
        self.newline.as_bytes()
    }
}
