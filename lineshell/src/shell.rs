//! Command shell for a byte stream transport.
//!
//! The shell owns the transport, the line being edited and the command
//! registry. One consumer calls [`Shell::poll`] or [`Shell::run`] to
//! process input; any thread, and any command callback, may write
//! through [`Output`] at the same time. Writes made while a line is
//! being typed are framed so the partial line is replayed below them.
//!
//! Use the [`crate::builder::ShellBuilder`] to build a shell.

use core::convert::Infallible;
use core::fmt;
use core::sync::atomic::{AtomicBool, Ordering};
use core::time::Duration;

use embedded_io::{Read, Write};
use spin::Mutex;

use crate::core::Console;
use crate::error::ShellError;
use crate::input::Normalizer;
use crate::line_buffer::Line;
use crate::output::Output;
use crate::registry::{Callback, CommandRegistry};
use crate::tokenizer::tokenize;
use crate::{LINE_BUFFER_SIZE, MAX_ARGS, MAX_COMMANDS};

/// Result of submitting one line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Line held no tokens
    Empty,
    /// A registered command ran
    Invoked,
    /// A registered command ran and returned an error, which was
    /// reported on the output
    Failed,
    UnknownCommand,
    TooManyArguments,
}

/// Runtime settings, see [`crate::builder::ShellBuilder`]
#[derive(Debug, Clone, Copy)]
pub struct Config<'a> {
    pub preserve_line: bool,
    pub newline: &'static str,
    pub banner: Option<&'a str>,
    pub announce_registrations: bool,
    pub poll_interval: Duration,
}

impl Default for Config<'_> {
    fn default() -> Self {
        Self {
            preserve_line: true,
            newline: "\n",
            banner: None,
            announce_registrations: false,
            poll_interval: Duration::from_millis(10),
        }
    }
}

/// Command shell
///
/// `N` is the line buffer capacity, `M` the number of commands that can
/// be registered and `A` the maximum number of arguments per line,
/// command name included.
pub struct Shell<
    'a,
    R,
    W,
    const N: usize = LINE_BUFFER_SIZE,
    const M: usize = MAX_COMMANDS,
    const A: usize = MAX_ARGS,
> {
    input: Mutex<R>,
    console: Mutex<Console<W, N>>,
    registry: Mutex<CommandRegistry<'a, M>>,
    preserve_line: AtomicBool,
    newline: &'static str,
    banner: Option<&'a str>,
    announce_registrations: bool,
    #[cfg_attr(not(any(test, feature = "std")), allow(dead_code))]
    poll_interval: Duration,
}

impl<'a, R, W, const N: usize, const M: usize, const A: usize> Shell<'a, R, W, N, M, A>
where
    R: Read,
    W: Write,
{
    pub fn new(input: R, output: W, config: Config<'a>) -> Self {
        Self {
            input: Mutex::new(input),
            console: Mutex::new(Console::new(output, config.newline.as_bytes())),
            registry: Mutex::new(CommandRegistry::new()),
            preserve_line: AtomicBool::new(config.preserve_line),
            newline: config.newline,
            banner: config.banner,
            announce_registrations: config.announce_registrations,
            poll_interval: config.poll_interval,
        }
    }

    /// Register a command. A full registry is reported on the output
    /// and returned as [`ShellError::RegistryFull`]. The result reflects
    /// the registry only; a failed report write is logged.
    pub fn register_command(
        &self,
        name: &'a str,
        callback: Callback<'a>,
    ) -> Result<(), ShellError> {
        let result = self.registry.lock().register(name, callback);

        let report = match result {
            Ok(()) => {
                log::debug!("registered command {:?}", name);

                if self.announce_registrations {
                    self.print_fmt(format_args!(
                        "Registering command: {}{}",
                        name, self.newline
                    ))
                } else {
                    Ok(())
                }
            }
            Err(err) => {
                log::warn!("rejected command {:?}: {}", name, err);

                self.println("E: Max number of registered commands reached")
            }
        };

        if let Err(err) = report {
            log::warn!("registration report for {:?} not written: {}", name, err);
        }

        result
    }

    /// Number of registered commands
    pub fn command_count(&self) -> usize {
        self.registry.lock().len()
    }

    pub fn set_preserve_line(&self, preserve: bool) {
        self.preserve_line.store(preserve, Ordering::Relaxed);
    }

    pub fn preserve_line(&self) -> bool {
        self.preserve_line.load(Ordering::Relaxed)
    }

    /// Copy of the line currently being typed
    pub fn pending_line(&self) -> Line<N> {
        self.console.lock().editor().buffer().to_line()
    }

    /// Process one chunk of raw input. Commands completed by the chunk
    /// are dispatched before this returns.
    pub fn feed(&self, chunk: &[u8]) -> Result<(), ShellError> {
        for action in Normalizer::new(chunk) {
            // The console lock is held for the edit and its echo only,
            // never across dispatch.
            let line = self.console.lock().advance(action)?;

            if let Some(line) = line {
                self.submit(line.as_str())?;
            }
        }

        Ok(())
    }

    /// Read one chunk from the transport and process it. Returns the
    /// number of bytes read.
    pub fn poll(&self) -> Result<usize, ShellError> {
        let mut buf = [0u8; N];

        let len = crate::sync_io::read_chunk(&mut *self.input.lock(), &mut buf)?;

        self.feed(&buf[..len])?;

        Ok(len)
    }

    /// Print the banner, then poll forever. `idle` is called whenever a
    /// read returned no data. Returns only on error.
    pub fn run(&self, mut idle: impl FnMut()) -> Result<Infallible, ShellError> {
        if let Some(banner) = self.banner {
            self.print(banner)?;
        }

        loop {
            if self.poll()? == 0 {
                idle();
            }
        }
    }

    /// Tokenize and dispatch a committed line. Command errors are
    /// reported on the output; only failed writes are returned.
    pub fn submit(&self, line: &str) -> Result<Dispatch, ShellError> {
        if line.is_empty() {
            return Ok(Dispatch::Empty);
        }

        let argv = match tokenize::<A>(line) {
            Ok(argv) => argv,
            Err(ShellError::TooManyArguments) => {
                log::warn!("dropped line with more than {} arguments", A);

                self.print_fmt(format_args!(
                    "E: Too many arguments (max {}){}",
                    A, self.newline
                ))?;

                return Ok(Dispatch::TooManyArguments);
            }
            Err(err) => return Err(err),
        };

        let Some(&name) = argv.first() else {
            return Ok(Dispatch::Empty);
        };

        // Copy the callback out so the registry is unlocked while it
        // runs; callbacks may register commands.
        let callback = self.registry.lock().find(name).map(|c| c.callback());

        match callback {
            Some(callback) => {
                log::debug!("dispatching {:?} with {} arguments", name, argv.len());

                if let Err(err) = callback(self, argv.as_slice()) {
                    log::error!("command {:?} failed: {}", name, err);

                    self.print_fmt(format_args!(
                        "E: {}: {}{}",
                        name, err, self.newline
                    ))?;

                    return Ok(Dispatch::Failed);
                }

                Ok(Dispatch::Invoked)
            }
            None => {
                log::warn!("unknown command {:?}", name);

                self.print_fmt(format_args!(
                    "E: Unknown command: {}{}",
                    name, self.newline
                ))?;

                Ok(Dispatch::UnknownCommand)
            }
        }
    }
}

#[cfg(any(test, feature = "std"))]
impl<'a, R, W, const N: usize, const M: usize, const A: usize> Shell<'a, R, W, N, M, A>
where
    R: Read,
    W: Write,
{
    /// Run with a thread sleep of the configured poll interval as idle
    /// hook. Requires feature `std`.
    pub fn run_blocking(&self) -> Result<Infallible, ShellError> {
        let interval = self.poll_interval;

        self.run(|| std::thread::sleep(interval))
    }
}

impl<'a, R, W, const N: usize, const M: usize, const A: usize> Output for Shell<'a, R, W, N, M, A>
where
    R: Read,
    W: Write,
{
    fn write_slices(&self, slices: &[&[u8]]) -> Result<(), ShellError> {
        let preserve = self.preserve_line();

        self.console.lock().intercept(slices, preserve)
    }

    fn newline(&self) -> &[u8] {
        self.newline.as_bytes()
    }
}

impl<'a, R, W, const N: usize, const M: usize, const A: usize> fmt::Debug
    for Shell<'a, R, W, N, M, A>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shell")
            .field("line_capacity", &N)
            .field("command_capacity", &M)
            .field("max_args", &A)
            .field("preserve_line", &self.preserve_line.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}
