//! Lineshell is an IO-agnostic `#[no_std]` command shell for raw byte
//! transports such as a UART or a USB serial port. Bytes read from the
//! transport are edited into a line, echoed back, and on line end split
//! into an argument vector that is dispatched to a registered command.
//!
//! Features:
//! - No allocation, all capacities are const generics
//! - Works on any [`embedded_io::Read`] and [`embedded_io::Write`] pair
//! - CR, LF, CR LF and LF CR line endings
//! - Backspace editing with terminal echo
//! - Preserve-line: output written while a line is being typed is
//!   printed above it and the partial line is replayed
//! - Safe to write from any thread while the shell consumes input
//!
//! The editing core is a state machine taking bytes as input and
//! yielding echo bytes, with no IO of its own. [`shell::Shell`] wires
//! it to a transport, a command registry and a lock shared with every
//! writer.
//!
//! Shells are built using [`builder::ShellBuilder`].
//!
//! # Example
//!
//! ```no_run
//! # use embedded_io::{ErrorType, Read, Write};
//! # use core::convert::Infallible;
//! # struct MySerial {}
//! # impl ErrorType for MySerial {
//! #     type Error = Infallible;
//! # }
//! # impl Write for MySerial {
//! #     fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> { unimplemented!() }
//! #     fn flush(&mut self) -> Result<(), Self::Error> { unimplemented!() }
//! # }
//! # impl Read for MySerial {
//! #     fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> { unimplemented!() }
//! # }
//! use lineshell::{builder::ShellBuilder, sync_io::IO, Output, ShellError};
//!
//! fn echo(out: &dyn Output, argv: &[&str]) -> Result<(), ShellError> {
//!     for arg in &argv[1..] {
//!         out.print(arg)?;
//!         out.print(" ")?;
//!     }
//!     out.println("")
//! }
//!
//! let shell = ShellBuilder::new().build(IO::new(MySerial {}, MySerial {}));
//!
//! shell.register_command("echo", &echo).unwrap();
//!
//! std::thread::scope(|s| {
//!     s.spawn(|| shell.run(|| std::thread::yield_now()));
//!     shell.println("status: ok").unwrap();
//! });
//! ```

#![no_std]

#[cfg(any(test, doc, feature = "std"))]
#[macro_use]
extern crate std;

pub mod builder;
mod core;
pub mod error;
mod input;
pub mod line_buffer;
pub mod output;
pub mod registry;
pub mod shell;
pub mod sync_io;
pub mod tokenizer;

#[cfg(test)]
pub(crate) mod testlib;

pub use error::ShellError;
pub use output::Output;
pub use registry::Callback;
pub use shell::{Dispatch, Shell};

/// Default line buffer capacity
pub const LINE_BUFFER_SIZE: usize = 256;

/// Default number of commands a shell can hold
pub const MAX_COMMANDS: usize = 32;

/// Default maximum number of tokens in a line, command name included
pub const MAX_ARGS: usize = 8;
