//! Error types

use core::fmt;

/// Enum to hold various error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellError {
    /// Registration attempted while every registry slot is taken
    RegistryFull,
    /// Line split into more tokens than the argument vector holds
    TooManyArguments,
    /// Formatted output did not fit the format buffer
    FormatOverflow,
    ReadError(embedded_io::ErrorKind),
    WriteError(embedded_io::ErrorKind),
}

impl embedded_io::Error for ShellError {
    fn kind(&self) -> embedded_io::ErrorKind {
        match *self {
            ShellError::RegistryFull => embedded_io::ErrorKind::OutOfMemory,
            ShellError::TooManyArguments => embedded_io::ErrorKind::InvalidInput,
            ShellError::FormatOverflow => embedded_io::ErrorKind::OutOfMemory,
            ShellError::ReadError(kind) => kind,
            ShellError::WriteError(kind) => kind,
        }
    }
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellError::RegistryFull => f.write_str("command registry full"),
            ShellError::TooManyArguments => f.write_str("too many arguments"),
            ShellError::FormatOverflow => f.write_str("formatted output exceeds buffer"),
            ShellError::ReadError(kind) => write!(f, "transport read failed: {:?}", kind),
            ShellError::WriteError(kind) => write!(f, "transport write failed: {:?}", kind),
        }
    }
}
