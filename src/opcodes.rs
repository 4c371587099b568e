//! # Opcode Metadata Table
//!
//! This module contains the complete 256-entry opcode table that the decoder
//! consults for every byte it reads.
//!
//! The table covers:
//! - **151 documented instructions** - Official NMOS 6502 opcodes
//! - **105 illegal/undocumented opcodes** - Marked invalid with a "???" mnemonic
//!
//! Each opcode entry includes:
//! - Mnemonic (instruction name)
//! - Addressing mode
//! - Base cycle cost
//! - Cycle-counting exceptions (page crossing, branch taken)
//! - Validity flag

use bitflags::bitflags;

use crate::addressing::AddressingMode;

bitflags! {
    /// Conditions under which an instruction may take longer than its base cost.
    ///
    /// Branches carry both flags. Indexed reads that can cross a page carry
    /// only `PAGE_CROSS`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CycleExceptions: u8 {
        /// +1 cycle when the effective address lands on another page.
        const PAGE_CROSS = 1 << 0;
        /// +1 cycle when the branch is taken.
        const BRANCH_TAKEN = 1 << 1;
    }
}

/// Metadata for a single 6502 opcode.
///
/// # Examples
///
/// ```
/// use dasm6502::{lookup, AddressingMode, CycleExceptions};
///
/// let lda_abs_x = lookup(0xBD);
/// assert_eq!(lda_abs_x.mnemonic, "LDA");
/// assert_eq!(lda_abs_x.addressing_mode, AddressingMode::AbsoluteX);
/// assert_eq!(lda_abs_x.base_cycles, 4);
/// assert_eq!(lda_abs_x.cycle_exceptions, CycleExceptions::PAGE_CROSS);
/// assert!(lda_abs_x.valid);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction mnemonic (e.g., "LDA", "STA", "???" for illegal opcodes).
    pub mnemonic: &'static str,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// Base cycle cost (before page crossing or branch penalties).
    ///
    /// Illegal opcodes are marked with 0 cycles.
    pub base_cycles: u8,

    /// Cycle-counting exceptions that apply to this opcode.
    pub cycle_exceptions: CycleExceptions,

    /// False for opcodes with no documented behavior on the NMOS 6502.
    pub valid: bool,
}

impl OpcodeMetadata {
    /// Total instruction size in bytes (opcode + operands).
    ///
    /// Invalid opcodes are always a single byte.
    pub const fn size_bytes(&self) -> u8 {
        1 + self.addressing_mode.operand_len() as u8
    }
}

const NONE: CycleExceptions = CycleExceptions::empty();
const PAGE: CycleExceptions = CycleExceptions::PAGE_CROSS;
const BRANCH: CycleExceptions = CycleExceptions::PAGE_CROSS.union(CycleExceptions::BRANCH_TAKEN);

const fn op(
    mnemonic: &'static str,
    addressing_mode: AddressingMode,
    base_cycles: u8,
    cycle_exceptions: CycleExceptions,
) -> OpcodeMetadata {
    OpcodeMetadata {
        mnemonic,
        addressing_mode,
        base_cycles,
        cycle_exceptions,
        valid: true,
    }
}

const fn illegal() -> OpcodeMetadata {
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        cycle_exceptions: NONE,
        valid: false,
    }
}

/// Look up the metadata for an opcode byte. Total over all 256 values.
#[inline]
pub fn lookup(opcode: u8) -> &'static OpcodeMetadata {
    &OPCODE_TABLE[opcode as usize]
}

/// Complete 256-entry opcode table indexed by opcode byte value.
///
/// Cycle counts follow the NMOS 6502 data sheet. Store instructions never
/// take the page-crossing penalty; their indexed forms always pay the extra
/// cycle, so it is folded into the base cost.
pub static OPCODE_TABLE: [OpcodeMetadata; 256] = {
    use AddressingMode::*;

    [
        op("BRK", Implicit, 7, NONE), // 0x00
        op("ORA", IndirectX, 6, NONE), // 0x01
        illegal(), // 0x02
        illegal(), // 0x03
        illegal(), // 0x04
        op("ORA", ZeroPage, 3, NONE), // 0x05
        op("ASL", ZeroPage, 5, NONE), // 0x06
        illegal(), // 0x07
        op("PHP", Implicit, 3, NONE), // 0x08
        op("ORA", Immediate, 2, NONE), // 0x09
        op("ASL", Accumulator, 2, NONE), // 0x0A
        illegal(), // 0x0B
        illegal(), // 0x0C
        op("ORA", Absolute, 4, NONE), // 0x0D
        op("ASL", Absolute, 6, NONE), // 0x0E
        illegal(), // 0x0F
        op("BPL", Relative, 2, BRANCH), // 0x10
        op("ORA", IndirectY, 5, PAGE), // 0x11
        illegal(), // 0x12
        illegal(), // 0x13
        illegal(), // 0x14
        op("ORA", ZeroPageX, 4, NONE), // 0x15
        op("ASL", ZeroPageX, 6, NONE), // 0x16
        illegal(), // 0x17
        op("CLC", Implicit, 2, NONE), // 0x18
        op("ORA", AbsoluteY, 4, PAGE), // 0x19
        illegal(), // 0x1A
        illegal(), // 0x1B
        illegal(), // 0x1C
        op("ORA", AbsoluteX, 4, PAGE), // 0x1D
        op("ASL", AbsoluteX, 7, NONE), // 0x1E
        illegal(), // 0x1F
        op("JSR", Absolute, 6, NONE), // 0x20
        op("AND", IndirectX, 6, NONE), // 0x21
        illegal(), // 0x22
        illegal(), // 0x23
        op("BIT", ZeroPage, 3, NONE), // 0x24
        op("AND", ZeroPage, 3, NONE), // 0x25
        op("ROL", ZeroPage, 5, NONE), // 0x26
        illegal(), // 0x27
        op("PLP", Implicit, 4, NONE), // 0x28
        op("AND", Immediate, 2, NONE), // 0x29
        op("ROL", Accumulator, 2, NONE), // 0x2A
        illegal(), // 0x2B
        op("BIT", Absolute, 4, NONE), // 0x2C
        op("AND", Absolute, 4, NONE), // 0x2D
        op("ROL", Absolute, 6, NONE), // 0x2E
        illegal(), // 0x2F
        op("BMI", Relative, 2, BRANCH), // 0x30
        op("AND", IndirectY, 5, PAGE), // 0x31
        illegal(), // 0x32
        illegal(), // 0x33
        illegal(), // 0x34
        op("AND", ZeroPageX, 4, NONE), // 0x35
        op("ROL", ZeroPageX, 6, NONE), // 0x36
        illegal(), // 0x37
        op("SEC", Implicit, 2, NONE), // 0x38
        op("AND", AbsoluteY, 4, PAGE), // 0x39
        illegal(), // 0x3A
        illegal(), // 0x3B
        illegal(), // 0x3C
        op("AND", AbsoluteX, 4, PAGE), // 0x3D
        op("ROL", AbsoluteX, 7, NONE), // 0x3E
        illegal(), // 0x3F
        op("RTI", Implicit, 6, NONE), // 0x40
        op("EOR", IndirectX, 6, NONE), // 0x41
        illegal(), // 0x42
        illegal(), // 0x43
        illegal(), // 0x44
        op("EOR", ZeroPage, 3, NONE), // 0x45
        op("LSR", ZeroPage, 5, NONE), // 0x46
        illegal(), // 0x47
        op("PHA", Implicit, 3, NONE), // 0x48
        op("EOR", Immediate, 2, NONE), // 0x49
        op("LSR", Accumulator, 2, NONE), // 0x4A
        illegal(), // 0x4B
        op("JMP", Absolute, 3, NONE), // 0x4C
        op("EOR", Absolute, 4, NONE), // 0x4D
        op("LSR", Absolute, 6, NONE), // 0x4E
        illegal(), // 0x4F
        op("BVC", Relative, 2, BRANCH), // 0x50
        op("EOR", IndirectY, 5, PAGE), // 0x51
        illegal(), // 0x52
        illegal(), // 0x53
        illegal(), // 0x54
        op("EOR", ZeroPageX, 4, NONE), // 0x55
        op("LSR", ZeroPageX, 6, NONE), // 0x56
        illegal(), // 0x57
        op("CLI", Implicit, 2, NONE), // 0x58
        op("EOR", AbsoluteY, 4, PAGE), // 0x59
        illegal(), // 0x5A
        illegal(), // 0x5B
        illegal(), // 0x5C
        op("EOR", AbsoluteX, 4, PAGE), // 0x5D
        op("LSR", AbsoluteX, 7, NONE), // 0x5E
        illegal(), // 0x5F
        op("RTS", Implicit, 6, NONE), // 0x60
        op("ADC", IndirectX, 6, NONE), // 0x61
        illegal(), // 0x62
        illegal(), // 0x63
        illegal(), // 0x64
        op("ADC", ZeroPage, 3, NONE), // 0x65
        op("ROR", ZeroPage, 5, NONE), // 0x66
        illegal(), // 0x67
        op("PLA", Implicit, 4, NONE), // 0x68
        op("ADC", Immediate, 2, NONE), // 0x69
        op("ROR", Accumulator, 2, NONE), // 0x6A
        illegal(), // 0x6B
        op("JMP", Indirect, 5, NONE), // 0x6C
        op("ADC", Absolute, 4, NONE), // 0x6D
        op("ROR", Absolute, 6, NONE), // 0x6E
        illegal(), // 0x6F
        op("BVS", Relative, 2, BRANCH), // 0x70
        op("ADC", IndirectY, 5, PAGE), // 0x71
        illegal(), // 0x72
        illegal(), // 0x73
        illegal(), // 0x74
        op("ADC", ZeroPageX, 4, NONE), // 0x75
        op("ROR", ZeroPageX, 6, NONE), // 0x76
        illegal(), // 0x77
        op("SEI", Implicit, 2, NONE), // 0x78
        op("ADC", AbsoluteY, 4, PAGE), // 0x79
        illegal(), // 0x7A
        illegal(), // 0x7B
        illegal(), // 0x7C
        op("ADC", AbsoluteX, 4, PAGE), // 0x7D
        op("ROR", AbsoluteX, 7, NONE), // 0x7E
        illegal(), // 0x7F
        illegal(), // 0x80
        op("STA", IndirectX, 6, NONE), // 0x81
        illegal(), // 0x82
        illegal(), // 0x83
        op("STY", ZeroPage, 3, NONE), // 0x84
        op("STA", ZeroPage, 3, NONE), // 0x85
        op("STX", ZeroPage, 3, NONE), // 0x86
        illegal(), // 0x87
        op("DEY", Implicit, 2, NONE), // 0x88
        illegal(), // 0x89
        op("TXA", Implicit, 2, NONE), // 0x8A
        illegal(), // 0x8B
        op("STY", Absolute, 4, NONE), // 0x8C
        op("STA", Absolute, 4, NONE), // 0x8D
        op("STX", Absolute, 4, NONE), // 0x8E
        illegal(), // 0x8F
        op("BCC", Relative, 2, BRANCH), // 0x90
        op("STA", IndirectY, 6, NONE), // 0x91
        illegal(), // 0x92
        illegal(), // 0x93
        op("STY", ZeroPageX, 4, NONE), // 0x94
        op("STA", ZeroPageX, 4, NONE), // 0x95
        op("STX", ZeroPageY, 4, NONE), // 0x96
        illegal(), // 0x97
        op("TYA", Implicit, 2, NONE), // 0x98
        op("STA", AbsoluteY, 5, NONE), // 0x99
        op("TXS", Implicit, 2, NONE), // 0x9A
        illegal(), // 0x9B
        illegal(), // 0x9C
        op("STA", AbsoluteX, 5, NONE), // 0x9D
        illegal(), // 0x9E
        illegal(), // 0x9F
        op("LDY", Immediate, 2, NONE), // 0xA0
        op("LDA", IndirectX, 6, NONE), // 0xA1
        op("LDX", Immediate, 2, NONE), // 0xA2
        illegal(), // 0xA3
        op("LDY", ZeroPage, 3, NONE), // 0xA4
        op("LDA", ZeroPage, 3, NONE), // 0xA5
        op("LDX", ZeroPage, 3, NONE), // 0xA6
        illegal(), // 0xA7
        op("TAY", Implicit, 2, NONE), // 0xA8
        op("LDA", Immediate, 2, NONE), // 0xA9
        op("TAX", Implicit, 2, NONE), // 0xAA
        illegal(), // 0xAB
        op("LDY", Absolute, 4, NONE), // 0xAC
        op("LDA", Absolute, 4, NONE), // 0xAD
        op("LDX", Absolute, 4, NONE), // 0xAE
        illegal(), // 0xAF
        op("BCS", Relative, 2, BRANCH), // 0xB0
        op("LDA", IndirectY, 5, PAGE), // 0xB1
        illegal(), // 0xB2
        illegal(), // 0xB3
        op("LDY", ZeroPageX, 4, NONE), // 0xB4
        op("LDA", ZeroPageX, 4, NONE), // 0xB5
        op("LDX", ZeroPageY, 4, NONE), // 0xB6
        illegal(), // 0xB7
        op("CLV", Implicit, 2, NONE), // 0xB8
        op("LDA", AbsoluteY, 4, PAGE), // 0xB9
        op("TSX", Implicit, 2, NONE), // 0xBA
        illegal(), // 0xBB
        op("LDY", AbsoluteX, 4, PAGE), // 0xBC
        op("LDA", AbsoluteX, 4, PAGE), // 0xBD
        op("LDX", AbsoluteY, 4, PAGE), // 0xBE
        illegal(), // 0xBF
        op("CPY", Immediate, 2, NONE), // 0xC0
        op("CMP", IndirectX, 6, NONE), // 0xC1
        illegal(), // 0xC2
        illegal(), // 0xC3
        op("CPY", ZeroPage, 3, NONE), // 0xC4
        op("CMP", ZeroPage, 3, NONE), // 0xC5
        op("DEC", ZeroPage, 5, NONE), // 0xC6
        illegal(), // 0xC7
        op("INY", Implicit, 2, NONE), // 0xC8
        op("CMP", Immediate, 2, NONE), // 0xC9
        op("DEX", Implicit, 2, NONE), // 0xCA
        illegal(), // 0xCB
        op("CPY", Absolute, 4, NONE), // 0xCC
        op("CMP", Absolute, 4, NONE), // 0xCD
        op("DEC", Absolute, 6, NONE), // 0xCE
        illegal(), // 0xCF
        op("BNE", Relative, 2, BRANCH), // 0xD0
        op("CMP", IndirectY, 5, PAGE), // 0xD1
        illegal(), // 0xD2
        illegal(), // 0xD3
        illegal(), // 0xD4
        op("CMP", ZeroPageX, 4, NONE), // 0xD5
        op("DEC", ZeroPageX, 6, NONE), // 0xD6
        illegal(), // 0xD7
        op("CLD", Implicit, 2, NONE), // 0xD8
        op("CMP", AbsoluteY, 4, PAGE), // 0xD9
        illegal(), // 0xDA
        illegal(), // 0xDB
        illegal(), // 0xDC
        op("CMP", AbsoluteX, 4, PAGE), // 0xDD
        op("DEC", AbsoluteX, 7, NONE), // 0xDE
        illegal(), // 0xDF
        op("CPX", Immediate, 2, NONE), // 0xE0
        op("SBC", IndirectX, 6, NONE), // 0xE1
        illegal(), // 0xE2
        illegal(), // 0xE3
        op("CPX", ZeroPage, 3, NONE), // 0xE4
        op("SBC", ZeroPage, 3, NONE), // 0xE5
        op("INC", ZeroPage, 5, NONE), // 0xE6
        illegal(), // 0xE7
        op("INX", Implicit, 2, NONE), // 0xE8
        op("SBC", Immediate, 2, NONE), // 0xE9
        op("NOP", Implicit, 2, NONE), // 0xEA
        illegal(), // 0xEB
        op("CPX", Absolute, 4, NONE), // 0xEC
        op("SBC", Absolute, 4, NONE), // 0xED
        op("INC", Absolute, 6, NONE), // 0xEE
        illegal(), // 0xEF
        op("BEQ", Relative, 2, BRANCH), // 0xF0
        op("SBC", IndirectY, 5, PAGE), // 0xF1
        illegal(), // 0xF2
        illegal(), // 0xF3
        illegal(), // 0xF4
        op("SBC", ZeroPageX, 4, NONE), // 0xF5
        op("INC", ZeroPageX, 6, NONE), // 0xF6
        illegal(), // 0xF7
        op("SED", Implicit, 2, NONE), // 0xF8
        op("SBC", AbsoluteY, 4, PAGE), // 0xF9
        illegal(), // 0xFA
        illegal(), // 0xFB
        illegal(), // 0xFC
        op("SBC", AbsoluteX, 4, PAGE), // 0xFD
        op("INC", AbsoluteX, 7, NONE), // 0xFE
        illegal(), // 0xFF
    ]
};
