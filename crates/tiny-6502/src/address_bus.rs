//! The sixteen address lines A0-A15.
//!
//! Line `An` maps to bit `n` of the bus value. Alongside the 16-bit value
//! the bus keeps a two-byte latch, indexed by [`LOW`] and [`HIGH`], which
//! models the byte pair an address occupies when the 6502 stores it in
//! memory (low byte first).
//!
//! `LDA $1000` assembles to `AD 00 10`: the operand is stored little-endian.

use std::fmt;

use tracing::trace;

use crate::Result;
use crate::bits;

/// Number of address lines.
pub const LINES: u32 = u16::BITS;

/// Bus value written by [`AddressBus::init`].
pub const INIT_ADDRESS: u16 = 0x1000;

/// Latch index of the low byte.
pub const LOW: usize = 0;

/// Latch index of the high byte.
pub const HIGH: usize = 1;

/// How an address is split into the `[LOW, HIGH]` latch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SplitOrder {
    /// `latch[LOW]` holds bits 0-7, `latch[HIGH]` holds bits 8-15.
    #[default]
    Aligned,
    /// `latch[LOW]` holds bits 8-15, `latch[HIGH]` holds bits 0-7.
    ///
    /// Matches older bus-latch code that stored the bytes swapped. Read back
    /// HIGH-then-LOW, the latch shows the little-endian form of the address.
    Legacy,
}

/// Swap the two bytes of `address`.
///
/// `0x1000` becomes `0x0010`. Applying it twice gives back the input.
#[must_use]
pub const fn to_little_endian(address: u16) -> u16 {
    ((address & 0xFF) << 8) | ((address >> 8) & 0xFF)
}

/// Split `address` into a `[LOW, HIGH]` latch pair.
#[must_use]
pub const fn split_bytes(address: u16, order: SplitOrder) -> [u8; 2] {
    let lo = (address & 0xFF) as u8;
    let hi = (address >> 8) as u8;
    match order {
        SplitOrder::Aligned => [lo, hi],
        SplitOrder::Legacy => [hi, lo],
    }
}

/// Rebuild the address a latch pair was split from.
#[must_use]
pub const fn join_bytes(bytes: [u8; 2], order: SplitOrder) -> u16 {
    let (lo, hi) = match order {
        SplitOrder::Aligned => (bytes[LOW], bytes[HIGH]),
        SplitOrder::Legacy => (bytes[HIGH], bytes[LOW]),
    };
    ((hi as u16) << 8) | lo as u16
}

/// Virtual address bus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressBus {
    value: u16,
    latch: [u8; 2],
    order: SplitOrder,
}

impl Default for AddressBus {
    fn default() -> Self {
        Self::init()
    }
}

impl AddressBus {
    /// Create the bus in its power-on state: value [`INIT_ADDRESS`], latch
    /// zeroed, aligned byte split.
    #[must_use]
    pub const fn init() -> Self {
        Self::with_order(SplitOrder::Aligned)
    }

    /// Create the bus with a specific latch split order.
    #[must_use]
    pub const fn with_order(order: SplitOrder) -> Self {
        Self {
            value: INIT_ADDRESS,
            latch: [0; 2],
            order,
        }
    }

    /// Current 16-bit bus value.
    #[must_use]
    pub const fn value(&self) -> u16 {
        self.value
    }

    /// The `[LOW, HIGH]` latch.
    #[must_use]
    pub const fn latch(&self) -> [u8; 2] {
        self.latch
    }

    /// Latch slot labelled low.
    #[must_use]
    pub const fn low(&self) -> u8 {
        self.latch[LOW]
    }

    /// Latch slot labelled high.
    #[must_use]
    pub const fn high(&self) -> u8 {
        self.latch[HIGH]
    }

    /// Split order used by [`AddressBus::latch_bytes`].
    #[must_use]
    pub const fn order(&self) -> SplitOrder {
        self.order
    }

    /// Drive all sixteen lines at once.
    pub fn set_address(&mut self, address: u16) {
        self.value = address;
        trace!(address, "address bus driven");
    }

    /// Raise address line `line`.
    pub fn set_bit(&mut self, line: u32) -> Result<()> {
        self.value = bits::set_bit(self.value, line)?;
        trace!(line, value = self.value, "address line set");
        Ok(())
    }

    /// Lower address line `line`.
    pub fn clear_bit(&mut self, line: u32) -> Result<()> {
        self.value = bits::clear_bit(self.value, line)?;
        trace!(line, value = self.value, "address line cleared");
        Ok(())
    }

    /// Whether address line `line` is high.
    pub fn is_set(&self, line: u32) -> Result<bool> {
        bits::is_bit_set(self.value, line)
    }

    /// Drive the bus with the byte-swapped form of `address`.
    pub fn latch_little_endian(&mut self, address: u16) {
        self.value = to_little_endian(address);
        trace!(address, value = self.value, "address bus repacked little-endian");
    }

    /// Split `address` into the latch using this bus's split order.
    pub fn latch_bytes(&mut self, address: u16) {
        self.latch = split_bytes(address, self.order);
        trace!(
            address,
            low = self.latch[LOW],
            high = self.latch[HIGH],
            "address latched"
        );
    }

    /// The address the latch currently holds.
    #[must_use]
    pub const fn latched_address(&self) -> u16 {
        join_bytes(self.latch, self.order)
    }

    /// One-line description of the latch, HIGH slot first.
    ///
    /// With [`SplitOrder::Legacy`] the byte pair reads as the little-endian
    /// form of the address: `Little endian memAddr(1000): 0010`.
    #[must_use]
    pub fn describe_latch(&self) -> String {
        format!(
            "Little endian memAddr({:x}): {:02x}{:02x}",
            self.latched_address(),
            self.latch[HIGH],
            self.latch[LOW]
        )
    }
}

impl fmt::Display for AddressBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "${:04X} latch lo=${:02X} hi=${:02X}",
            self.value, self.latch[LOW], self.latch[HIGH]
        )
    }
}
