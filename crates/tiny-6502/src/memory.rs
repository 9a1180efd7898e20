//! Flat 64KB memory.

use emu_core::Bus;
use tracing::debug;

use crate::{Error, Result};

/// Number of addressable bytes.
pub const MEMORY_SIZE: usize = 0x1_0000;

/// Two short routines used to bring up and inspect the memory map.
///
/// ```text
/// 0000: LDA #$00      JSR $0010   JMP $0002   ...   RTI
/// 0010: INX   BRK     JSR $0010   JMP $0002   ...   RTI
/// ```
pub const SAMPLE_PROGRAM: [u8; 32] = [
    0xA9, 0x00, 0x20, 0x10, 0x00, 0x4C, 0x02, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x40, //
    0xE8, 0x00, 0x20, 0x10, 0x00, 0x4C, 0x02, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x40, //
];

/// Flat RAM covering the whole address space.
#[derive(Clone, PartialEq, Eq)]
pub struct Memory {
    cells: Box<[u8]>,
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Memory")
            .field("size", &self.cells.len())
            .finish_non_exhaustive()
    }
}

/// Resolve a wide address to a cell index.
fn index(address: u32) -> Result<usize> {
    let index = address as usize;
    if index < MEMORY_SIZE {
        Ok(index)
    } else {
        Err(Error::InvalidAddress { address })
    }
}

/// Resolve `start..start + len` to a cell range, reporting the first
/// address past the end of memory.
fn range(start: u32, len: usize) -> Result<std::ops::Range<usize>> {
    let first = start as usize;
    let end = first.saturating_add(len);
    if end > MEMORY_SIZE {
        let address = u32::try_from(first.max(MEMORY_SIZE)).unwrap_or(u32::MAX);
        return Err(Error::InvalidAddress { address });
    }
    Ok(first..end)
}

impl Memory {
    /// Create zero-filled memory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: vec![0; MEMORY_SIZE].into_boxed_slice(),
        }
    }

    /// Read the byte at `address`.
    #[must_use]
    pub fn read(&self, address: u16) -> u8 {
        self.cells[address as usize]
    }

    /// Write `value` at `address`.
    pub fn write(&mut self, address: u16, value: u8) {
        self.cells[address as usize] = value;
    }

    /// Read at an address that may lie outside the 64KB space.
    pub fn try_read(&self, address: u32) -> Result<u8> {
        Ok(self.cells[index(address)?])
    }

    /// Write at an address that may lie outside the 64KB space.
    pub fn try_write(&mut self, address: u32, value: u8) -> Result<()> {
        self.cells[index(address)?] = value;
        Ok(())
    }

    /// Copy `data` into memory starting at `start`.
    ///
    /// Fails without writing anything if the block would run past `0xFFFF`.
    pub fn load(&mut self, start: u32, data: &[u8]) -> Result<()> {
        let range = range(start, data.len())?;
        self.cells[range].copy_from_slice(data);
        debug!(start, len = data.len(), "memory loaded");
        Ok(())
    }

    /// Write [`SAMPLE_PROGRAM`] at `0x0000`.
    pub fn load_sample(&mut self) {
        self.cells[..SAMPLE_PROGRAM.len()].copy_from_slice(&SAMPLE_PROGRAM);
        debug!(len = SAMPLE_PROGRAM.len(), "sample program loaded");
    }

    /// Zero every cell.
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// The whole address space as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.cells
    }

    /// Hex dump of the first `count` bytes.
    pub fn dump(&self, count: usize) -> Result<String> {
        self.dump_range(0, count)
    }

    /// Hex dump of `count` bytes from `start`.
    ///
    /// One address label, then lowercase two-digit bytes separated by
    /// spaces: `0000: a9 00 20 10`.
    pub fn dump_range(&self, start: u32, count: usize) -> Result<String> {
        let range = range(start, count)?;
        let bytes: String = self.cells[range]
            .iter()
            .map(|byte| format!(" {byte:02x}"))
            .collect();
        Ok(format!("{start:04x}:{bytes}"))
    }
}

impl Bus for Memory {
    fn read(&mut self, address: u16) -> u8 {
        Memory::read(self, address)
    }

    fn write(&mut self, address: u16, value: u8) {
        Memory::write(self, address, value);
    }

    fn peek(&self, address: u16) -> u8 {
        Memory::read(self, address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_zeroed() {
        let mem = Memory::new();
        assert_eq!(mem.as_slice().len(), MEMORY_SIZE);
        assert!(mem.as_slice().iter().all(|&b| b == 0));
    }

    #[test]
    fn read_write_at_both_ends() {
        let mut mem = Memory::new();
        mem.write(0x0000, 0x11);
        mem.write(0xFFFF, 0x22);
        assert_eq!(mem.read(0x0000), 0x11);
        assert_eq!(mem.read(0xFFFF), 0x22);
    }

    #[test]
    fn wide_address_past_end_is_rejected() {
        let mut mem = Memory::new();
        assert_eq!(mem.try_read(0xFFFF), Ok(0));
        assert_eq!(
            mem.try_read(0x1_0000),
            Err(Error::InvalidAddress { address: 0x1_0000 })
        );
        assert_eq!(
            mem.try_write(0x12_3456, 1),
            Err(Error::InvalidAddress { address: 0x12_3456 })
        );
    }

    #[test]
    fn load_past_end_writes_nothing() {
        let mut mem = Memory::new();
        assert_eq!(
            mem.load(0xFFFE, &[1, 2, 3]),
            Err(Error::InvalidAddress { address: 0x1_0000 })
        );
        assert_eq!(mem.read(0xFFFE), 0);
        assert_eq!(mem.read(0xFFFF), 0);

        mem.load(0xFFFE, &[1, 2]).expect("fits");
        assert_eq!(mem.read(0xFFFF), 2);
    }

    #[test]
    fn sample_program_layout() {
        let mut mem = Memory::new();
        mem.load_sample();
        assert_eq!(
            &mem.as_slice()[0x00..0x10],
            &[
                0xa9, 0x00, 0x20, 0x10, 0x00, 0x4c, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
                0x00, 0x00, 0x40
            ]
        );
        assert_eq!(
            &mem.as_slice()[0x10..0x20],
            &[
                0xe8, 0x00, 0x20, 0x10, 0x00, 0x4c, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
                0x00, 0x00, 0x40
            ]
        );
        assert_eq!(mem.read(0x20), 0);
    }

    #[test]
    fn dump_pads_every_byte() {
        let mut mem = Memory::new();
        mem.load_sample();
        let dump = mem.dump(32).expect("in range");
        assert!(dump.starts_with("0000: a9 00 20 10 00 4c 02 00 "));
        assert!(dump.ends_with(" e8 00 20 10 00 4c 02 00 00 00 00 00 00 00 00 40"));
        assert_eq!(dump.len(), "0000:".len() + 32 * 3);
    }

    #[test]
    fn dump_range_labels_start_address() {
        let mut mem = Memory::new();
        mem.load(0xC000, &[0x0A, 0xFF]).expect("fits");
        assert_eq!(mem.dump_range(0xC000, 2), Ok("c000: 0a ff".to_string()));
        assert_eq!(mem.dump(0), Ok("0000:".to_string()));
        assert!(mem.dump(MEMORY_SIZE + 1).is_err());
    }

    #[test]
    fn bus_access_goes_to_cells() {
        let mut mem = Memory::new();
        Bus::write(&mut mem, 0x0200, 0x42);
        assert_eq!(Bus::read(&mut mem, 0x0200), 0x42);
        assert_eq!(mem.peek(0x0200), 0x42);
    }
}
