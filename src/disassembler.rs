//! 6502 Disassembler Module
//!
//! Converts binary machine code into formatted assembly lines.

pub mod decoder;
pub mod formatter;

use crate::addressing::AddressingMode;
use crate::opcodes::{lookup, OpcodeMetadata};
use crate::{DisassemblyError, ADDRESS_SPACE};

/// A single disassembled instruction with full metadata
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    /// Memory address where this instruction starts
    pub address: u16,

    /// The opcode byte value (0x00-0xFF)
    pub opcode: u8,

    /// Instruction mnemonic (e.g., "LDA", "STA", ".byte" for illegal opcodes)
    pub mnemonic: &'static str,

    /// Addressing mode used by this instruction
    pub addressing_mode: AddressingMode,

    /// Operand bytes actually read (0-2 bytes)
    pub operand_bytes: Vec<u8>,

    /// Bytes consumed from the input (1-3 bytes: opcode + operands present)
    pub size_bytes: u8,

    /// Base cycle cost (excluding page-crossing and branch penalties)
    pub base_cycles: u8,

    /// False when the opcode byte is illegal on the NMOS 6502
    pub valid: bool,

    /// True when the input ended before all operand bytes could be read
    pub truncated: bool,
}

impl Instruction {
    /// Table entry for this instruction's opcode.
    pub fn metadata(&self) -> &'static OpcodeMetadata {
        lookup(self.opcode)
    }

    /// Address of the byte following this instruction.
    pub fn next_address(&self) -> u16 {
        self.address.wrapping_add(self.size_bytes as u16)
    }

    /// The one-byte operand, if the mode takes one and it was read.
    pub fn operand_byte(&self) -> Option<u8> {
        if self.addressing_mode.operand_len() == 1 {
            self.operand_bytes.first().copied()
        } else {
            None
        }
    }

    /// The little-endian 16-bit operand, if the mode takes one and both bytes were read.
    pub fn operand_word(&self) -> Option<u16> {
        match self.operand_bytes.as_slice() {
            [lo, hi] if self.addressing_mode.operand_len() == 2 => {
                Some(u16::from_le_bytes([*lo, *hi]))
            }
            _ => None,
        }
    }

    /// Resolved destination of a relative branch.
    pub fn branch_target(&self) -> Option<u16> {
        if self.addressing_mode != AddressingMode::Relative {
            return None;
        }
        self.operand_byte()
            .map(|offset| decoder::resolve_branch_target(self.address, offset))
    }
}

/// Options controlling disassembly output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisassemblyOptions {
    /// Address the first input byte is mapped to
    pub origin: u16,

    /// Include the raw instruction bytes in the address field
    pub hex_dump: bool,

    /// Append cycle-count comments
    pub cycle_counting: bool,

    /// Append NES register comments
    pub platform_annotations: bool,

    /// Apple II / Atari style address field (`8000:A9 42`)
    pub alt_hex_style: bool,

    /// Leave the address field blank
    pub assembly_only: bool,
}

/// One decoded instruction and its rendered line.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedLine {
    /// The decoded instruction
    pub instruction: Instruction,

    /// Number of input bytes consumed (1-3)
    pub consumed: usize,

    /// Program counter of the next instruction
    pub next_pc: u16,

    /// The formatted output line
    pub text: String,
}

/// Decode the instruction at `pc` and render it.
///
/// `bytes[0]` lives at `options.origin`. Fails only when `pc` is outside the
/// loaded range or the bytes do not fit in the address space.
pub fn decode_one(
    bytes: &[u8],
    pc: u16,
    options: &DisassemblyOptions,
) -> Result<DecodedLine, DisassemblyError> {
    let start = options.origin as usize;
    let end = start + bytes.len();

    if end > ADDRESS_SPACE {
        return Err(DisassemblyError::ImageTooLarge {
            origin: options.origin,
            len: bytes.len(),
        });
    }

    let out_of_range = DisassemblyError::PcOutOfRange {
        pc,
        start: options.origin,
        end: end as u32,
    };

    let index = pc as usize;
    if index < start || index >= end {
        return Err(out_of_range);
    }

    let instruction =
        decoder::decode_instruction(&bytes[index - start..], pc).ok_or(out_of_range)?;
    let text = formatter::format_line(&instruction, options);

    Ok(DecodedLine {
        consumed: instruction.size_bytes as usize,
        next_pc: instruction.next_address(),
        text,
        instruction,
    })
}

/// Disassemble a byte slice into decoded lines, in address order.
pub fn disassemble(
    bytes: &[u8],
    options: &DisassemblyOptions,
) -> Result<Vec<DecodedLine>, DisassemblyError> {
    let mut lines = Vec::new();
    let mut offset = 0;

    while offset < bytes.len() {
        let pc = options.origin.wrapping_add(offset as u16);
        let line = decode_one(bytes, pc, options)?;
        offset += line.consumed;
        lines.push(line);
    }

    Ok(lines)
}

/// Disassemble a byte slice and keep only the rendered text.
pub fn render_lines(
    bytes: &[u8],
    options: &DisassemblyOptions,
) -> Result<Vec<String>, DisassemblyError> {
    Ok(disassemble(bytes, options)?
        .into_iter()
        .map(|line| line.text)
        .collect())
}
