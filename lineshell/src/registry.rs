//! Fixed capacity command registry.

use core::fmt;

use crate::error::ShellError;
use crate::output::Output;

/// Command callback. Receives the shell output and the argument vector,
/// where `argv[0]` is the name the command was registered under.
pub type Callback<'a> = &'a (dyn Fn(&dyn Output, &[&str]) -> Result<(), ShellError> + Sync);

#[derive(Clone, Copy)]
pub struct Command<'a> {
    name: &'a str,
    callback: Callback<'a>,
}

impl<'a> Command<'a> {
    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn callback(&self) -> Callback<'a> {
        self.callback
    }
}

impl fmt::Debug for Command<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command").field("name", &self.name).finish()
    }
}

/// Ordered list of at most `M` commands. Lookup is a linear scan and
/// the earliest registration of a name wins.
pub struct CommandRegistry<'a, const M: usize> {
    commands: heapless::Vec<Command<'a>, M>,
}

impl<'a, const M: usize> CommandRegistry<'a, M> {
    pub const fn new() -> Self {
        Self {
            commands: heapless::Vec::new(),
        }
    }

    pub fn register(&mut self, name: &'a str, callback: Callback<'a>) -> Result<(), ShellError> {
        self.commands
            .push(Command { name, callback })
            .or(Err(ShellError::RegistryFull))
    }

    pub fn find(&self, name: &str) -> Option<&Command<'a>> {
        self.commands.iter().find(|command| command.name == name)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub const fn capacity(&self) -> usize {
        M
    }

    pub fn names(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.commands.iter().map(|command| command.name)
    }
}

impl<'a, const M: usize> Default for CommandRegistry<'a, M> {
    fn default() -> Self {
        Self::new()
    }
}
