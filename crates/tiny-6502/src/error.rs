//! Error taxonomy for processor state operations.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Caller errors detected at the boundary of each operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A bit position outside the field's declared width.
    #[error("bit position {position} is outside a {width}-bit field")]
    InvalidBitPosition { position: u32, width: u32 },

    /// An address outside `0x0000..=0xFFFF`.
    #[error("address {address:#06X} is outside the 64KB address space")]
    InvalidAddress { address: u32 },
}
