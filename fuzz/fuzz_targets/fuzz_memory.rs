//! Fuzz target for sized memory stores.
//!
//! Reads and writes at any address must land at `addr % size`.

#![no_main]

use arbitrary::Arbitrary;
use mos6502_core::{FlatMemory, MemoryBus};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    size: u16,
    writes: Vec<(u16, u8)>,
}

fuzz_target!(|input: FuzzInput| {
    let Ok(mut memory) = FlatMemory::with_size(input.size as usize) else {
        assert_eq!(input.size, 0);
        return;
    };

    for (addr, value) in input.writes {
        memory.write(addr, value);
        assert_eq!(memory.read(addr), value);
        assert_eq!(memory.as_slice()[addr as usize % memory.size()], value);
    }
});
