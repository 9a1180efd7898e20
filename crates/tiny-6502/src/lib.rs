//! MOS 6502 processor state.
//!
//! Models the state an instruction loop would drive: the processor status
//! word, the sixteen address lines with their latched byte pair, and a flat
//! 64KB memory. All three are owned by a [`CpuContext`]; there is no global
//! state. Decoding and executing instructions is left to the caller.

pub mod address_bus;
pub mod bits;
mod config;
mod context;
mod error;
pub mod memory;
pub mod status;

pub use address_bus::{AddressBus, SplitOrder};
pub use config::Config;
pub use context::CpuContext;
pub use error::{Error, Result};
pub use memory::Memory;
pub use status::{Flag, StatusRegister};
