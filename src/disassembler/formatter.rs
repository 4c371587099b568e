//! Formatting functions for disassembled instructions
//!
//! A line is laid out as `[address field][instruction field];[comments]`. The
//! address field is 16 columns wide with a hex dump and 8 columns without;
//! the instruction field is always 16.

use crate::addressing::AddressingMode;
use crate::cycles::cycles_for;
use crate::disassembler::{DisassemblyOptions, Instruction};
use crate::platform::nes_register_comment;

/// Marker appended to lines for illegal opcodes.
pub const INVALID_OPCODE_MARKER: &str = " INVALID OPCODE !!!";

/// Marker appended to lines whose operand ran past the end of the input.
pub const PARTIAL_INSTRUCTION_MARKER: &str = " PARTIAL INSTRUCTION";

/// Format a single instruction as assembly text
///
/// # Arguments
///
/// * `instr` - The instruction to format
///
/// # Returns
///
/// A string containing the formatted assembly instruction
pub fn format_instruction(instr: &Instruction) -> String {
    if !instr.valid {
        return format!(".byte ${:02X}", instr.opcode);
    }

    let operand = format_operand(instr);

    if operand.is_empty() {
        instr.mnemonic.to_string()
    } else {
        format!("{} {}", instr.mnemonic, operand)
    }
}

/// Format the operand based on addressing mode
fn format_operand(instr: &Instruction) -> String {
    use AddressingMode::*;

    let byte = instr.operand_byte();
    let word = instr.operand_word();

    match instr.addressing_mode {
        Implicit => String::new(),
        Accumulator => "A".to_string(),
        Immediate => match byte {
            Some(value) => format!("#${:02X}", value),
            None => "#$??".to_string(),
        },
        ZeroPage => match byte {
            Some(zp) => format!("${:02X}", zp),
            None => "$??".to_string(),
        },
        ZeroPageX => match byte {
            Some(zp) => format!("${:02X},X", zp),
            None => "$??,X".to_string(),
        },
        ZeroPageY => match byte {
            Some(zp) => format!("${:02X},Y", zp),
            None => "$??,Y".to_string(),
        },
        Relative => match instr.branch_target() {
            Some(target) => format!("${:04X}", target),
            None => "$????".to_string(),
        },
        Absolute => match word {
            Some(addr) => format!("${:04X}", addr),
            None => "$????".to_string(),
        },
        AbsoluteX => match word {
            Some(addr) => format!("${:04X},X", addr),
            None => "$????,X".to_string(),
        },
        AbsoluteY => match word {
            Some(addr) => format!("${:04X},Y", addr),
            None => "$????,Y".to_string(),
        },
        Indirect => match word {
            Some(addr) => format!("(${:04X})", addr),
            None => "($????)".to_string(),
        },
        IndirectX => match byte {
            Some(zp) => format!("(${:02X},X)", zp),
            None => "($??,X)".to_string(),
        },
        IndirectY => match byte {
            Some(zp) => format!("(${:02X}),Y", zp),
            None => "($??),Y".to_string(),
        },
    }
}

/// Raw instruction bytes as hex pairs, with `??` for bytes past the input.
fn byte_pairs(instr: &Instruction) -> Vec<String> {
    let expected = if instr.valid {
        instr.addressing_mode.operand_len()
    } else {
        0
    };

    std::iter::once(Some(instr.opcode))
        .chain((0..expected).map(|i| instr.operand_bytes.get(i).copied()))
        .map(|byte| match byte {
            Some(value) => format!("{:02X}", value),
            None => "??".to_string(),
        })
        .collect()
}

/// Format the address field that precedes the instruction text.
pub fn format_address_field(instr: &Instruction, options: &DisassemblyOptions) -> String {
    if options.assembly_only {
        return String::new();
    }

    let address = instr.address;

    if !options.hex_dump {
        return if options.alt_hex_style {
            format!("{:04X}:", address)
        } else {
            format!("${:04X}", address)
        };
    }

    let pairs = byte_pairs(instr);

    if options.alt_hex_style {
        // 8000:20 00 80
        format!("{:04X}:{}", address, pairs.join(" "))
    } else {
        // $8000> 20 0080:
        match pairs.as_slice() {
            [op] => format!("${:04X}> {}:", address, op),
            [op, operand] => format!("${:04X}> {} {}:", address, op, operand),
            [op, lo, hi] => format!("${:04X}> {} {}{}:", address, op, lo, hi),
            _ => format!("${:04X}>:", address),
        }
    }
}

/// Format a complete output line, including any enabled annotations.
pub fn format_line(instr: &Instruction, options: &DisassemblyOptions) -> String {
    let field = format_address_field(instr, options);
    let text = format_instruction(instr);

    let mut line = if options.hex_dump {
        format!("{:<16}{:<16};", field, text)
    } else {
        format!("{:<8}{:<16};", field, text)
    };

    if !instr.valid {
        line.push_str(INVALID_OPCODE_MARKER);
        return line;
    }

    if instr.truncated {
        line.push_str(PARTIAL_INSTRUCTION_MARKER);
        return line;
    }

    if options.cycle_counting {
        let next_pc = instr.next_address();
        let target = instr.branch_target().unwrap_or(next_pc);
        let cycles = cycles_for(instr.metadata(), next_pc, target);
        line.push_str(&format!(" Cycles: {}", cycles));
    }

    if options.platform_annotations && instr.addressing_mode.has_absolute_address() {
        if let Some(description) = instr.operand_word().and_then(nes_register_comment) {
            line.push_str(&format!(" [NES] {}", description));
        }
    }

    line
}
