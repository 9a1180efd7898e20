//! Processor context owning the status register, address bus and memory.

use emu_core::{Observable, Value};
use tracing::debug;

use crate::status::Flag;
use crate::{AddressBus, Config, Memory, StatusRegister};

/// All processor state, owned in one place.
///
/// An instruction loop borrows the context mutably for each step; nothing
/// here is shared or global.
#[derive(Debug, Clone)]
pub struct CpuContext {
    config: Config,
    status: StatusRegister,
    bus: AddressBus,
    memory: Memory,
}

impl Default for CpuContext {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuContext {
    /// Create a context with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create a context with the given options.
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        let mut ctx = Self {
            config,
            status: StatusRegister::init(),
            bus: AddressBus::with_order(config.split_order),
            memory: Memory::new(),
        };
        ctx.apply_config();
        ctx
    }

    /// Return every component to its power-on state.
    pub fn reset(&mut self) {
        self.status = StatusRegister::init();
        self.bus = AddressBus::with_order(self.config.split_order);
        self.memory.clear();
        self.apply_config();
        debug!(config = ?self.config, "context reset");
    }

    fn apply_config(&mut self) {
        if self.config.force_unused_flag {
            self.status.set(Flag::Unused);
        }
        if self.config.load_sample_on_reset {
            self.memory.load_sample();
        }
    }

    /// Options this context was created with.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The status register.
    #[must_use]
    pub fn status(&self) -> &StatusRegister {
        &self.status
    }

    /// Mutable access to the status register.
    pub fn status_mut(&mut self) -> &mut StatusRegister {
        &mut self.status
    }

    /// The address bus.
    #[must_use]
    pub fn bus(&self) -> &AddressBus {
        &self.bus
    }

    /// Mutable access to the address bus.
    pub fn bus_mut(&mut self) -> &mut AddressBus {
        &mut self.bus
    }

    /// The 64KB memory.
    #[must_use]
    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    /// Mutable access to memory.
    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    /// Read the byte at the address currently on the bus.
    #[must_use]
    pub fn read_latched(&self) -> u8 {
        self.memory.read(self.bus.value())
    }

    /// Write `value` at the address currently on the bus.
    pub fn write_latched(&mut self, value: u8) {
        self.memory.write(self.bus.value(), value);
    }
}

impl Observable for CpuContext {
    fn query(&self, path: &str) -> Option<Value> {
        let p = self.status;
        match path {
            "status" | "p" => Some(p.word().into()),
            "flags" => Some(p.flags().into()),
            "flags.c" | "c" => Some(p.is(Flag::Carry).into()),
            "flags.z" | "z" => Some(p.is(Flag::Zero).into()),
            "flags.i" | "i" => Some(p.is(Flag::InterruptDisable).into()),
            "flags.d" | "d" => Some(p.is(Flag::Decimal).into()),
            "flags.b" | "b" => Some(p.is(Flag::Break).into()),
            "flags.u" | "u" => Some(p.is(Flag::Unused).into()),
            "flags.v" | "v" => Some(p.is(Flag::Overflow).into()),
            "flags.s" | "s" => Some(p.is(Flag::Sign).into()),
            "bus" => Some(self.bus.value().into()),
            "bus.low" => Some(self.bus.low().into()),
            "bus.high" => Some(self.bus.high().into()),
            "bus.latch" => Some(self.bus.latch().to_vec().into()),
            _ => None,
        }
    }

    fn query_paths(&self) -> &'static [&'static str] {
        &[
            "status", "flags", "flags.c", "flags.z", "flags.i", "flags.d", "flags.b", "flags.u",
            "flags.v", "flags.s", "bus", "bus.low", "bus.high", "bus.latch",
        ]
    }
}
