//! 6502 processor status register (P).
//!
//! ```text
//!   Bit No.   7   6   5   4   3   2   1   0
//!             S   V   -   B   D   I   Z   C
//! ```
//!
//! The register is kept as a 16-bit word. The flags live in the low byte;
//! the high byte holds the `0xFF` pattern written by [`StatusRegister::init`].
//! Flag positions are checked against the 8-bit flag width.

use std::fmt;

use tracing::trace;

use crate::bits::{self, BitField};
use crate::{Error, Result};

/// Width of the flag byte.
pub const FLAG_WIDTH: u32 = u8::BITS;

/// Word written by [`StatusRegister::init`]: flags clear, high byte all ones.
pub const INIT_WORD: u16 = 0xFF00;

/// A processor condition flag, by bit position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Flag {
    /// Carry out of bit 7, or no-borrow after subtraction.
    Carry = 0,
    /// Result was zero.
    Zero = 1,
    /// IRQ is ignored while set.
    InterruptDisable = 2,
    /// ADC/SBC operate on BCD values.
    Decimal = 3,
    /// A BRK instruction was executed.
    Break = 4,
    /// Not used. Conventionally reads as 1.
    Unused = 5,
    /// Signed arithmetic overflowed.
    Overflow = 6,
    /// Result had bit 7 set.
    Sign = 7,
}

impl Flag {
    /// All flags, lowest bit first.
    pub const ALL: [Flag; 8] = [
        Flag::Carry,
        Flag::Zero,
        Flag::InterruptDisable,
        Flag::Decimal,
        Flag::Break,
        Flag::Unused,
        Flag::Overflow,
        Flag::Sign,
    ];

    /// Bit position within the status word.
    #[must_use]
    pub const fn bit(self) -> u32 {
        self as u32
    }

    /// Look up the flag stored at `bit`.
    pub fn from_bit(bit: u32) -> Result<Self> {
        bits::check_position::<u8>(bit)?;
        Ok(Self::ALL[bit as usize])
    }
}

/// Processor status word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusRegister(u16);

impl Default for StatusRegister {
    fn default() -> Self {
        Self::init()
    }
}

impl StatusRegister {
    /// Create the register in its power-on state, [`INIT_WORD`].
    ///
    /// The unused bit (5) is left clear. Hardware reads it as 1, but this
    /// register reports exactly what was written; see
    /// [`Config::force_unused_flag`](crate::Config::force_unused_flag).
    #[must_use]
    pub const fn init() -> Self {
        Self(INIT_WORD)
    }

    /// Create a register holding an arbitrary word.
    #[must_use]
    pub const fn from_word(word: u16) -> Self {
        Self(word)
    }

    /// The full 16-bit word.
    #[must_use]
    pub const fn word(self) -> u16 {
        self.0
    }

    /// The flag byte.
    #[must_use]
    pub const fn flags(self) -> u8 {
        self.0 as u8
    }

    /// Set the flag at `flag_bit`.
    pub fn set_bit(&mut self, flag_bit: u32) -> Result<()> {
        bits::check_position::<u8>(flag_bit)?;
        self.0 = bits::set_bit(self.0, flag_bit)?;
        trace!(bit = flag_bit, word = self.0, "status flag set");
        Ok(())
    }

    /// Clear the flag at `flag_bit`.
    pub fn clear_bit(&mut self, flag_bit: u32) -> Result<()> {
        bits::check_position::<u8>(flag_bit)?;
        self.0 = bits::clear_bit(self.0, flag_bit)?;
        trace!(bit = flag_bit, word = self.0, "status flag cleared");
        Ok(())
    }

    /// Whether the flag at `flag_bit` is set.
    pub fn is_set(&self, flag_bit: u32) -> Result<bool> {
        bits::check_position::<u8>(flag_bit)?;
        bits::is_bit_set(self.0, flag_bit)
    }

    /// Set a flag.
    pub fn set(&mut self, flag: Flag) {
        self.0 |= u16::bit_mask(flag.bit());
        trace!(?flag, word = self.0, "status flag set");
    }

    /// Clear a flag.
    pub fn clear(&mut self, flag: Flag) {
        self.0 &= !u16::bit_mask(flag.bit());
        trace!(?flag, word = self.0, "status flag cleared");
    }

    /// Set or clear a flag based on condition.
    pub fn set_if(&mut self, flag: Flag, condition: bool) {
        if condition {
            self.set(flag);
        } else {
            self.clear(flag);
        }
    }

    /// Check if a flag is set.
    #[must_use]
    pub fn is(self, flag: Flag) -> bool {
        self.0 & u16::bit_mask(flag.bit()) != 0
    }
}

/// Renders the word in binary, most significant bit first.
impl fmt::Display for StatusRegister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016b}", self.0)
    }
}

impl TryFrom<u32> for Flag {
    type Error = Error;

    fn try_from(bit: u32) -> Result<Self> {
        Self::from_bit(bit)
    }
}
