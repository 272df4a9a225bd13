//! Builder for shells

use core::time::Duration;

use crate::shell::{Config, Shell};
use crate::sync_io::IO;
use crate::{LINE_BUFFER_SIZE, MAX_ARGS, MAX_COMMANDS};

/// Builder for [`Shell`].
///
/// Capacities are const generics, so a shell never allocates.
///
/// # Example
/// ```no_run
/// # use embedded_io::{ErrorType, Read, Write};
/// # use core::convert::Infallible;
/// # struct MySerial {}
/// # impl ErrorType for MySerial {
/// #     type Error = Infallible;
/// # }
/// # impl Write for MySerial {
/// #     fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> { unimplemented!() }
/// #     fn flush(&mut self) -> Result<(), Self::Error> { unimplemented!() }
/// # }
/// # impl Read for MySerial {
/// #     fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> { unimplemented!() }
/// # }
/// use lineshell::{builder::ShellBuilder, sync_io::IO, Output, ShellError};
///
/// fn led(out: &dyn Output, argv: &[&str]) -> Result<(), ShellError> {
///     out.print_fmt(format_args!("led {}\n", argv.get(1).unwrap_or(&"?")))
/// }
///
/// let shell = ShellBuilder::new()
///     .with_line_capacity::<128>()
///     .with_newline("\r\n")
///     .with_banner("ready\r\n")
///     .build(IO::new(MySerial {}, MySerial {}));
///
/// shell.register_command("led", &led).unwrap();
/// shell.run(|| ()).unwrap();
/// ```
pub struct ShellBuilder<
    'a,
    const N: usize = LINE_BUFFER_SIZE,
    const M: usize = MAX_COMMANDS,
    const A: usize = MAX_ARGS,
> {
    config: Config<'a>,
}

impl<'a> ShellBuilder<'a, LINE_BUFFER_SIZE, MAX_COMMANDS, MAX_ARGS> {
    /// Create builder with default capacities and settings
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }
}

impl<'a> Default for ShellBuilder<'a, LINE_BUFFER_SIZE, MAX_COMMANDS, MAX_ARGS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, const N: usize, const M: usize, const A: usize> ShellBuilder<'a, N, M, A> {
    /// Set line buffer capacity. A line holds at most `C - 1` bytes.
    pub fn with_line_capacity<const C: usize>(self) -> ShellBuilder<'a, C, M, A> {
        ShellBuilder {
            config: self.config,
        }
    }

    /// Set the number of commands that can be registered
    pub fn with_command_capacity<const C: usize>(self) -> ShellBuilder<'a, N, C, A> {
        ShellBuilder {
            config: self.config,
        }
    }

    /// Set the maximum number of tokens per line, command name included
    pub fn with_max_args<const C: usize>(self) -> ShellBuilder<'a, N, M, C> {
        ShellBuilder {
            config: self.config,
        }
    }

    /// Replay the line being typed below asynchronous output. On by
    /// default.
    pub fn with_preserve_line(mut self, preserve: bool) -> Self {
        self.config.preserve_line = preserve;
        self
    }

    /// Newline echoed on line end and used to frame output. `"\n"` by
    /// default; raw terminals want `"\r\n"`.
    pub fn with_newline(mut self, newline: &'static str) -> Self {
        self.config.newline = newline;
        self
    }

    /// Text printed once when [`Shell::run`] starts
    pub fn with_banner(mut self, banner: &'a str) -> Self {
        self.config.banner = Some(banner);
        self
    }

    /// Print a line for every successful registration
    pub fn with_registration_announcements(mut self, announce: bool) -> Self {
        self.config.announce_registrations = announce;
        self
    }

    /// Sleep between empty reads in [`Shell::run_blocking`]
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.config.poll_interval = interval;
        self
    }

    pub fn config(&self) -> &Config<'a> {
        &self.config
    }

    /// Build [`Shell`]. Is equivalent of calling [`Shell::new()`].
    pub fn build<R: embedded_io::Read, W: embedded_io::Write>(
        self,
        io: IO<R, W>,
    ) -> Shell<'a, R, W, N, M, A> {
        let (input, output) = io.take();

        Shell::new(input, output, self.config)
    }
}
