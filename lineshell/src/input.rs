//! Byte classification for raw transport input.
//!
//! Bytes are turned into [`Action`]s one chunk at a time. A CR LF or
//! LF CR pair inside the same chunk is folded into a single
//! [`Action::LineEnd`]; pairing never looks across chunk boundaries.

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Control bytes with a meaning on the wire.
#[derive(Debug, Eq, PartialEq, Copy, Clone, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum ControlCharacter {
    Bell = 0x7,
    Backspace = 0x8,
    LineFeed = 0xA,
    CarriageReturn = 0xD,
}

impl ControlCharacter {
    fn new(byte: u8) -> Option<Self> {
        Self::try_from(byte).ok()
    }

    fn is_line_end(self) -> bool {
        matches!(self, Self::CarriageReturn | Self::LineFeed)
    }

    // The byte that completes a two-byte line ending started by self
    fn line_end_partner(self) -> Option<u8> {
        match self {
            Self::CarriageReturn => Some(Self::LineFeed.into()),
            Self::LineFeed => Some(Self::CarriageReturn.into()),
            _ => None,
        }
    }
}

#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum Action {
    /// Printable byte in `0x20..=0x7e`
    Print(u8),
    /// Backspace, erase the last byte of the line
    Erase,
    /// CR, LF, or a CR LF / LF CR pair
    LineEnd,
    Ignore,
}

impl Action {
    fn classify(byte: u8) -> Self {
        match ControlCharacter::new(byte) {
            Some(c) if c.is_line_end() => Action::LineEnd,
            Some(ControlCharacter::Backspace) => Action::Erase,
            _ => match byte {
                0x20..=0x7e => Action::Print(byte),
                _ => Action::Ignore,
            },
        }
    }
}

/// Iterator over the actions of one input chunk.
pub struct Normalizer<'c> {
    chunk: &'c [u8],
    pos: usize,
}

impl<'c> Normalizer<'c> {
    pub fn new(chunk: &'c [u8]) -> Self {
        Self { chunk, pos: 0 }
    }
}

impl<'c> Iterator for Normalizer<'c> {
    type Item = Action;

    fn next(&mut self) -> Option<Self::Item> {
        let byte = *self.chunk.get(self.pos)?;
        self.pos += 1;

        let action = Action::classify(byte);

        if action == Action::LineEnd {
            let partner = ControlCharacter::new(byte).and_then(|c| c.line_end_partner());

            if partner.is_some() && self.chunk.get(self.pos).copied() == partner {
                self.pos += 1;
            }
        }

        Some(action)
    }
}
