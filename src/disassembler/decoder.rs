//! Instruction decoder for the 6502 disassembler

use log::trace;

use crate::addressing::AddressingMode;
use crate::disassembler::Instruction;
use crate::opcodes::lookup;

/// Resolve a relative branch displacement.
///
/// The displacement is counted from the byte after the two-byte branch
/// instruction at `address`. Offsets of 0x80 and above are negative.
pub fn resolve_branch_target(address: u16, offset: u8) -> u16 {
    let next = address.wrapping_add(2);

    if offset > 0x7F {
        next.wrapping_sub((!offset & 0x7F) as u16 + 1)
    } else {
        next.wrapping_add((offset & 0x7F) as u16)
    }
}

/// Decode a single instruction from a byte slice
///
/// # Arguments
///
/// * `bytes` - The byte slice starting at the instruction to decode
/// * `address` - The memory address of this instruction
///
/// # Returns
///
/// None only if `bytes` is empty. Illegal opcodes decode to a one-byte
/// `.byte` instruction with `valid == false`; a slice that ends inside the
/// operand decodes to an instruction with `truncated == true` that consumes
/// only the bytes present.
pub fn decode_instruction(bytes: &[u8], address: u16) -> Option<Instruction> {
    let (&opcode, rest) = bytes.split_first()?;
    let metadata = lookup(opcode);

    if !metadata.valid {
        trace!("illegal opcode ${:02X} at ${:04X}", opcode, address);
        return Some(Instruction {
            address,
            opcode,
            mnemonic: ".byte",
            addressing_mode: AddressingMode::Implicit,
            operand_bytes: Vec::new(),
            size_bytes: 1,
            base_cycles: 0,
            valid: false,
            truncated: false,
        });
    }

    let wanted = metadata.addressing_mode.operand_len();
    let operand_bytes: Vec<u8> = rest.iter().take(wanted).copied().collect();
    let truncated = operand_bytes.len() < wanted;

    if truncated {
        trace!(
            "{} at ${:04X} needs {} operand bytes, only {} available",
            metadata.mnemonic,
            address,
            wanted,
            operand_bytes.len()
        );
    }

    Some(Instruction {
        address,
        opcode,
        mnemonic: metadata.mnemonic,
        addressing_mode: metadata.addressing_mode,
        size_bytes: 1 + operand_bytes.len() as u8,
        operand_bytes,
        base_cycles: metadata.base_cycles,
        valid: true,
        truncated,
    })
}
