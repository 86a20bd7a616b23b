//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the instruction
//! semantics from a specific memory implementation, and `FlatMemory`, a
//! fixed-size byte store with wrap-around addressing.
//!
//! ## Design Principles
//!
//! The MemoryBus trait follows 6502 hardware behavior:
//! - No bus errors - reads/writes always succeed
//! - Addresses wrap instead of faulting
//! - Words are little-endian (low byte at the lower address)

use log::debug;

use crate::{Error, Result};

/// Size of the reference 6502 address space.
pub const ADDRESS_SPACE_SIZE: usize = 0x10000;

/// Memory bus trait for reading and writing bytes and little-endian words.
///
/// Only `read` and `write` are required. The word accessors are provided and
/// wrap the second byte at the 16-bit boundary (`0xFFFF` pairs with `0x0000`).
///
/// # Examples
///
/// ```
/// use mos6502_core::{MemoryBus, FlatMemory};
///
/// let mut mem = FlatMemory::new();
///
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
///
/// mem.write_word(0x2000, 0xBEEF);
/// assert_eq!(mem.read(0x2000), 0xEF);
/// assert_eq!(mem.read(0x2001), 0xBE);
/// ```
///
/// ## Implementing Custom Memory
///
/// ```
/// use mos6502_core::MemoryBus;
///
/// struct RomRamMemory {
///     ram: [u8; 0x8000],
///     rom: [u8; 0x8000],
/// }
///
/// impl MemoryBus for RomRamMemory {
///     fn read(&self, addr: u16) -> u8 {
///         if addr < 0x8000 {
///             self.ram[addr as usize]
///         } else {
///             self.rom[(addr - 0x8000) as usize]
///         }
///     }
///
///     fn write(&mut self, addr: u16, value: u8) -> u8 {
///         if addr < 0x8000 {
///             self.ram[addr as usize] = value;
///         }
///         value
///     }
/// }
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified address.
    ///
    /// This method must never panic.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified address and returns the value written.
    ///
    /// This method must never panic. Read-only regions may drop the write.
    fn write(&mut self, addr: u16, value: u8) -> u8;

    /// Reads a little-endian word starting at `addr`.
    fn read_word(&self, addr: u16) -> u16 {
        u16::from_le_bytes([self.read(addr), self.read(addr.wrapping_add(1))])
    }

    /// Writes a little-endian word starting at `addr` and returns it.
    fn write_word(&mut self, addr: u16, value: u16) -> u16 {
        let [lo, hi] = value.to_le_bytes();
        self.write(addr, lo);
        self.write(addr.wrapping_add(1), hi);
        value
    }
}

/// Flat, zero-initialized memory store.
///
/// Every address is reduced modulo the store size before access, so a store
/// smaller than 64KB mirrors itself across the address space. The default
/// size is the full 64KB 6502 address space.
///
/// # Examples
///
/// ```
/// use mos6502_core::{FlatMemory, MemoryBus};
///
/// let mut mem = FlatMemory::with_size(0x100).unwrap();
/// mem.write(0x0105, 0x7F);
/// assert_eq!(mem.read(0x0005), 0x7F);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct FlatMemory {
    data: Box<[u8]>,
}

impl FlatMemory {
    /// Creates a 64KB store with all bytes set to zero.
    pub fn new() -> Self {
        Self {
            data: vec![0; ADDRESS_SPACE_SIZE].into_boxed_slice(),
        }
    }

    /// Creates a zeroed store of `size` bytes.
    ///
    /// Returns `Error::InvalidMemorySize` for a zero size and
    /// `Error::MemoryAllocation` when the allocator cannot provide the
    /// backing buffer.
    pub fn with_size(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidMemorySize);
        }

        let mut data = Vec::new();
        data.try_reserve_exact(size).map_err(|err| {
            debug!("memory allocation of {size} bytes failed: {err}");
            Error::MemoryAllocation { size }
        })?;
        data.resize(size, 0);

        debug!("allocated {size} byte memory store");
        Ok(Self {
            data: data.into_boxed_slice(),
        })
    }

    /// Returns the number of bytes in the store.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Returns the raw contents of the store.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Copies `bytes` into the store starting at `start`, wrapping at the end.
    pub fn load(&mut self, start: u16, bytes: &[u8]) {
        for (offset, &byte) in bytes.iter().enumerate() {
            let index = self.index(start as usize + offset);
            self.data[index] = byte;
        }
    }

    fn index(&self, addr: usize) -> usize {
        addr % self.data.len()
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FlatMemory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlatMemory")
            .field("size", &self.data.len())
            .finish_non_exhaustive()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[self.index(addr as usize)]
    }

    fn write(&mut self, addr: u16, value: u8) -> u8 {
        let index = self.index(addr as usize);
        self.data[index] = value;
        value
    }

    // The high byte lives at (addr + 1) mod size, which differs from the
    // 16-bit wrap when the store is smaller than the address space.
    fn read_word(&self, addr: u16) -> u16 {
        let lo = self.data[self.index(addr as usize)];
        let hi = self.data[self.index(addr as usize + 1)];
        u16::from_le_bytes([lo, hi])
    }

    fn write_word(&mut self, addr: u16, value: u16) -> u16 {
        let [lo, hi] = value.to_le_bytes();
        let lo_index = self.index(addr as usize);
        let hi_index = self.index(addr as usize + 1);
        self.data[lo_index] = lo;
        self.data[hi_index] = hi;
        value
    }
}
