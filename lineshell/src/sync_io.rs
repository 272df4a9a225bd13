//! Transport wrapper for [`embedded_io`] readers and writers.
use embedded_io::Error;

use crate::error::ShellError;

/// Input and output halves of a transport.
///
/// The halves are kept apart so the shell can block on a read while
/// other threads keep writing.
pub struct IO<R, W>
where
    R: embedded_io::Read,
    W: embedded_io::Write,
{
    input: R,
    output: W,
}

impl<R, W> IO<R, W>
where
    R: embedded_io::Read,
    W: embedded_io::Write,
{
    /// Create IO wrapper from input and output
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume wrapper and return input and output as tuple
    pub fn take(self) -> (R, W) {
        (self.input, self.output)
    }
}

/// Read one chunk. Zero means no data was available.
pub(crate) fn read_chunk<R: embedded_io::Read>(
    input: &mut R,
    buf: &mut [u8],
) -> Result<usize, ShellError> {
    input
        .read(buf)
        .map_err(|e| ShellError::ReadError(e.kind()))
}

#[cfg(any(test, feature = "std"))]
pub mod std_io {
    //! Wrappers for `std::io::stdin` and `std::io::stdout`. Requires
    //! feature `std`.
    use super::*;
    use std::io::{Read, Stdin, Stdout, Write};

    impl Default for IO<StdinWrapper, StdoutWrapper> {
        fn default() -> Self {
            Self::new(StdinWrapper::new(), StdoutWrapper::new())
        }
    }

    // Wrapper for std::io::stdin
    pub struct StdinWrapper(Stdin);
    impl StdinWrapper {
        pub fn new() -> Self {
            Self(std::io::stdin())
        }
        pub fn new_with(val: Stdin) -> Self {
            Self(val)
        }
    }
    impl Default for StdinWrapper {
        fn default() -> Self {
            Self::new()
        }
    }
    impl embedded_io::ErrorType for StdinWrapper {
        type Error = embedded_io::ErrorKind;
    }
    impl embedded_io::Read for StdinWrapper {
        fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
            if buf.is_empty() {
                return Ok(0);
            }

            // Zero bytes from a non-empty read is end of input
            match self.0.lock().read(buf) {
                Ok(0) => Err(Self::Error::from(std::io::ErrorKind::UnexpectedEof)),
                Ok(n) => Ok(n),
                Err(e) => Err(e.kind().into()),
            }
        }
    }

    // Wrapper for std::io::stdout
    pub struct StdoutWrapper(Stdout);
    impl StdoutWrapper {
        pub fn new() -> Self {
            Self(std::io::stdout())
        }
        pub fn new_with(val: Stdout) -> Self {
            Self(val)
        }
    }
    impl Default for StdoutWrapper {
        fn default() -> Self {
            Self::new()
        }
    }
    impl embedded_io::ErrorType for StdoutWrapper {
        type Error = embedded_io::ErrorKind;
    }
    impl embedded_io::Write for StdoutWrapper {
        fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
            self.0.write(buf).map_err(|e| e.kind().into())
        }
        fn flush(&mut self) -> Result<(), Self::Error> {
            self.0.flush().map_err(|e| e.kind().into())
        }
    }
}
