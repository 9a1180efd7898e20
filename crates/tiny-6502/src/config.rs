//! Construction-time options for a [`CpuContext`](crate::CpuContext).

use crate::SplitOrder;

/// Options applied when a context is created or reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Byte order used when the address bus latches an address.
    pub split_order: SplitOrder,

    /// Set the unused status bit (5) after init.
    ///
    /// Off by default: [`StatusRegister::init`](crate::StatusRegister::init)
    /// yields exactly `0xFF00`, unlike hardware where bit 5 always reads 1.
    pub force_unused_flag: bool,

    /// Load [`SAMPLE_PROGRAM`](crate::memory::SAMPLE_PROGRAM) after memory
    /// is cleared.
    pub load_sample_on_reset: bool,
}
