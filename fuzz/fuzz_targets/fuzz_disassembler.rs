//! Fuzz target for the disassembler.
//!
//! This target feeds arbitrary byte sequences and options to the disassembler
//! to find edge cases and crashes in instruction decoding and rendering.

#![no_main]

use arbitrary::Arbitrary;
use dasm6502::{disassemble, DisassemblyError, DisassemblyOptions};
use libfuzzer_sys::fuzz_target;

/// Disassembly options for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzOptions {
    origin: u16,
    hex_dump: bool,
    cycle_counting: bool,
    platform_annotations: bool,
    alt_hex_style: bool,
    assembly_only: bool,
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    bytes: Vec<u8>,
    options: FuzzOptions,
}

fuzz_target!(|input: FuzzInput| {
    let options = DisassemblyOptions {
        origin: input.options.origin,
        hex_dump: input.options.hex_dump,
        cycle_counting: input.options.cycle_counting,
        platform_annotations: input.options.platform_annotations,
        alt_hex_style: input.options.alt_hex_style,
        assembly_only: input.options.assembly_only,
    };

    let lines = match disassemble(&input.bytes, &options) {
        Ok(lines) => lines,
        Err(DisassemblyError::ImageTooLarge { .. }) => {
            // Only possible when the bytes run past $FFFF
            assert!(options.origin as usize + input.bytes.len() > 0x10000);
            return;
        }
        Err(err) => panic!("unexpected error: {err}"),
    };

    // Verify invariants
    let mut total_size: usize = 0;
    let mut expected_address = options.origin;

    for line in &lines {
        // Each instruction should have correct address
        assert_eq!(line.instruction.address, expected_address);

        // Size should be 1-3 bytes
        assert!(line.consumed >= 1 && line.consumed <= 3);
        assert_eq!(line.instruction.operand_bytes.len() + 1, line.consumed);

        assert!(line.text.contains(';'));

        total_size += line.consumed;
        expected_address = line.next_pc;
    }

    // Total size should equal input size
    assert_eq!(total_size, input.bytes.len());
});
