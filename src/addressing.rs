//! # Addressing Modes
//!
//! This module defines the 13 addressing modes of the NMOS 6502. For the
//! disassembler a mode decides two things: how many operand bytes follow the
//! opcode, and which textual template the operand is rendered with.

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Rendered as the bare mnemonic: `CLC`, `RTS`, `NOP`.
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Rendered as `LSR A`.
    Accumulator,

    /// 8-bit constant operand.
    ///
    /// Rendered as `LDA #$10`.
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Rendered as `LDA $80`.
    ZeroPage,

    /// Zero page address indexed by X register.
    ///
    /// Rendered as `LDA $80,X`.
    ZeroPageX,

    /// Zero page address indexed by Y register.
    ///
    /// Rendered as `LDX $80,Y`.
    ZeroPageY,

    /// Signed 8-bit displacement for branch instructions.
    ///
    /// Rendered with the resolved target, not the raw offset: `BNE $8012`.
    Relative,

    /// Full 16-bit address.
    ///
    /// Rendered as `JMP $1234`.
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// Rendered as `LDA $1234,X`.
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// Rendered as `LDA $1234,Y`.
    AbsoluteY,

    /// Indirect jump through 16-bit pointer. Only used by JMP.
    ///
    /// Rendered as `JMP ($FFFC)`.
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Rendered as `LDA ($40,X)`.
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Rendered as `LDA ($40),Y`.
    IndirectY,
}

impl AddressingMode {
    /// Every addressing mode, in declaration order.
    pub const ALL: [AddressingMode; 13] = [
        AddressingMode::Implicit,
        AddressingMode::Accumulator,
        AddressingMode::Immediate,
        AddressingMode::ZeroPage,
        AddressingMode::ZeroPageX,
        AddressingMode::ZeroPageY,
        AddressingMode::Relative,
        AddressingMode::Absolute,
        AddressingMode::AbsoluteX,
        AddressingMode::AbsoluteY,
        AddressingMode::Indirect,
        AddressingMode::IndirectX,
        AddressingMode::IndirectY,
    ];

    /// Number of operand bytes that follow the opcode (0, 1 or 2).
    pub const fn operand_len(self) -> usize {
        use AddressingMode::*;

        match self {
            Implicit | Accumulator => 0,
            Immediate | ZeroPage | ZeroPageX | ZeroPageY | Relative | IndirectX | IndirectY => 1,
            Absolute | AbsoluteX | AbsoluteY | Indirect => 2,
        }
    }

    /// Whether the operand is a 16-bit address that can be resolved without
    /// knowing any register value. Only these modes get platform annotations.
    pub const fn has_absolute_address(self) -> bool {
        matches!(
            self,
            AddressingMode::Absolute | AddressingMode::AbsoluteX | AddressingMode::AbsoluteY
        )
    }
}
