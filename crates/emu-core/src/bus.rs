//! Memory bus interface.

/// Memory bus interface.
///
/// The 6502 drives sixteen address lines and eight data lines, so every
/// access is a byte at a 16-bit address. There is no bus error: any address
/// in `0x0000..=0xFFFF` is valid.
pub trait Bus {
    /// Read a byte from the given address.
    fn read(&mut self, address: u16) -> u8;

    /// Write a byte to the given address.
    fn write(&mut self, address: u16, value: u8);

    /// Read a byte without side effects.
    ///
    /// Debuggers and memory dumps use this; it must never change state.
    fn peek(&self, address: u16) -> u8;
}
