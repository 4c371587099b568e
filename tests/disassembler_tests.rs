//! Integration tests for the 6502 disassembler

use dasm6502::addressing::AddressingMode;
use dasm6502::disassembler::formatter::format_instruction;
use dasm6502::{decode_one, disassemble, render_lines, DisassemblyError, DisassemblyOptions};

fn at(origin: u16) -> DisassemblyOptions {
    DisassemblyOptions {
        origin,
        ..DisassemblyOptions::default()
    }
}

#[test]
fn test_jmp_end_to_end() {
    let bytes = &[0x4C, 0x00, 0x80]; // JMP $8000

    let decoded = decode_one(bytes, 0x8000, &at(0x8000)).unwrap();

    assert_eq!(decoded.consumed, 3);
    assert_eq!(decoded.next_pc, 0x8003);
    assert_eq!(format_instruction(&decoded.instruction), "JMP $8000");
    assert_eq!(decoded.text, "$8000   JMP $8000       ;");
}

#[test]
fn test_multi_instruction_disassembly() {
    let bytes = &[
        0xA9, 0x42, // LDA #$42
        0x8D, 0x00, 0x80, // STA $8000
        0x4C, 0x00, 0x80, // JMP $8000
    ];

    let lines = disassemble(bytes, &at(0x8000)).unwrap();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0].instruction.address, 0x8000);
    assert_eq!(format_instruction(&lines[0].instruction), "LDA #$42");
    assert_eq!(lines[1].instruction.address, 0x8002);
    assert_eq!(format_instruction(&lines[1].instruction), "STA $8000");
    assert_eq!(lines[2].instruction.address, 0x8005);
    assert_eq!(format_instruction(&lines[2].instruction), "JMP $8000");
}

#[test]
fn test_illegal_opcode_handling() {
    let bytes = &[
        0xA9, 0x42, // LDA #$42 (valid)
        0x02, // Illegal opcode
        0xEA, // NOP (valid)
    ];

    let lines = disassemble(bytes, &at(0x0000)).unwrap();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1].consumed, 1);
    assert_eq!(lines[1].instruction.address, 0x0002);
    assert!(!lines[1].instruction.valid);
    assert_eq!(lines[1].text, "$0002   .byte $02       ; INVALID OPCODE !!!");
    assert_eq!(lines[2].instruction.mnemonic, "NOP");
}

#[test]
fn test_every_illegal_opcode_consumes_one_byte() {
    for opcode in (0..=255u8).filter(|&op| !dasm6502::lookup(op).valid) {
        let decoded = decode_one(&[opcode, 0xFF, 0xFF], 0x1000, &at(0x1000)).unwrap();
        assert_eq!(decoded.consumed, 1);
        assert_eq!(decoded.next_pc, 0x1001);
        assert!(decoded.text.contains("INVALID OPCODE"));
    }
}

#[test]
fn test_one_fixture_per_addressing_mode() {
    let fixtures: [(&[u8], AddressingMode, &str); 13] = [
        (&[0xEA], AddressingMode::Implicit, "NOP"),
        (&[0x0A], AddressingMode::Accumulator, "ASL A"),
        (&[0xA9, 0x7F], AddressingMode::Immediate, "LDA #$7F"),
        (&[0xA5, 0x10], AddressingMode::ZeroPage, "LDA $10"),
        (&[0xB5, 0x10], AddressingMode::ZeroPageX, "LDA $10,X"),
        (&[0xB6, 0x10], AddressingMode::ZeroPageY, "LDX $10,Y"),
        (&[0xD0, 0x02], AddressingMode::Relative, "BNE $C004"),
        (&[0xAD, 0x34, 0x12], AddressingMode::Absolute, "LDA $1234"),
        (&[0xBD, 0x34, 0x12], AddressingMode::AbsoluteX, "LDA $1234,X"),
        (&[0xB9, 0x34, 0x12], AddressingMode::AbsoluteY, "LDA $1234,Y"),
        (&[0x6C, 0xFC, 0xFF], AddressingMode::Indirect, "JMP ($FFFC)"),
        (&[0xA1, 0x40], AddressingMode::IndirectX, "LDA ($40,X)"),
        (&[0xB1, 0x40], AddressingMode::IndirectY, "LDA ($40),Y"),
    ];

    for (bytes, mode, text) in fixtures {
        let decoded = decode_one(bytes, 0xC000, &at(0xC000)).unwrap();
        assert_eq!(decoded.instruction.addressing_mode, mode);
        assert_eq!(decoded.consumed, bytes.len());
        assert_eq!(format_instruction(&decoded.instruction), text);
    }
}

#[test]
fn test_relative_branch_boundaries() {
    let cases = [
        (0x00u8, "BNE $8012"),
        (0xFD, "BNE $800F"),
        (0x7F, "BNE $8091"),
        (0x80, "BNE $7F92"),
    ];

    for (offset, text) in cases {
        let bytes = [0xD0, offset];
        let decoded = decode_one(&bytes, 0x8010, &at(0x8010)).unwrap();
        assert_eq!(format_instruction(&decoded.instruction), text);
    }
}

#[test]
fn test_cycle_annotations() {
    let options = DisassemblyOptions {
        origin: 0x8000,
        cycle_counting: true,
        ..DisassemblyOptions::default()
    };

    // BCC to $8010: same page
    let same_page = decode_one(&[0x90, 0x0E], 0x8000, &options).unwrap();
    assert!(same_page.text.ends_with("; Cycles: 2/3"), "{}", same_page.text);

    // BCC to $8105: crosses into the next page
    let options_far = DisassemblyOptions {
        origin: 0x80F0,
        ..options
    };
    let far = decode_one(&[0x90, 0x13], 0x80F0, &options_far).unwrap();
    assert_eq!(far.instruction.branch_target(), Some(0x8105));
    assert!(far.text.ends_with("; Cycles: 3/4"), "{}", far.text);

    let lda_abs_x = decode_one(&[0xBD, 0xFF, 0x80], 0x8000, &options).unwrap();
    assert!(lda_abs_x.text.ends_with("; Cycles: 4/5"));

    let lda_imm = decode_one(&[0xA9, 0x01], 0x8000, &options).unwrap();
    assert!(lda_imm.text.ends_with("; Cycles: 2"));
}

#[test]
fn test_branch_ending_on_page_edge() {
    let options = DisassemblyOptions {
        origin: 0x80FD,
        cycle_counting: true,
        ..DisassemblyOptions::default()
    };

    // BEQ +0 at $80FD: last byte at $80FE, target $80FF
    let beq = decode_one(&[0xF0, 0x00], 0x80FD, &options).unwrap();
    assert_eq!(beq.text, "$80FD   BEQ $80FF       ; Cycles: 3/4");

    // Same branch one byte lower stays on the page
    let options = DisassemblyOptions {
        origin: 0x80FC,
        ..options
    };
    let beq = decode_one(&[0xF0, 0x00], 0x80FC, &options).unwrap();
    assert_eq!(beq.text, "$80FC   BEQ $80FE       ; Cycles: 2/3");
}

#[test]
fn test_hex_dump_listing() {
    let bytes = &[0x78, 0xAD, 0x02, 0x20, 0x10, 0xFB];
    let options = DisassemblyOptions {
        origin: 0xC000,
        hex_dump: true,
        cycle_counting: true,
        platform_annotations: true,
        ..DisassemblyOptions::default()
    };

    let lines = render_lines(bytes, &options).unwrap();

    assert_eq!(
        lines,
        vec![
            "$C000> 78:      SEI             ; Cycles: 2",
            "$C001> AD 0220: LDA $2002       ; Cycles: 4 [NES] PPU status",
            "$C004> 10 FB:   BPL $C001       ; Cycles: 2/3",
        ]
    );
}

#[test]
fn test_apple_listing() {
    let bytes = &[0x20, 0xED, 0xFD, 0x60];
    let options = DisassemblyOptions {
        origin: 0x0300,
        hex_dump: true,
        alt_hex_style: true,
        ..DisassemblyOptions::default()
    };

    let lines = render_lines(bytes, &options).unwrap();

    assert_eq!(
        lines,
        vec![
            "0300:20 ED FD   JSR $FDED       ;",
            "0303:60         RTS             ;",
        ]
    );
}

#[test]
fn test_truncated_trailing_instruction() {
    let bytes = &[0xEA, 0xAD, 0x00]; // NOP, then LDA abs missing its high byte

    let lines = disassemble(bytes, &at(0x8000)).unwrap();

    assert_eq!(lines.len(), 2);
    assert!(lines[1].instruction.truncated);
    assert_eq!(lines[1].consumed, 2);
    assert_eq!(lines[1].text, "$8001   LDA $????       ; PARTIAL INSTRUCTION");
}

#[test]
fn test_operand_fetch_stops_at_top_of_memory() {
    let bytes = &[0x20, 0x00]; // JSR at $FFFE, operand would run past $FFFF

    let lines = disassemble(bytes, &at(0xFFFE)).unwrap();

    assert_eq!(lines.len(), 1);
    assert!(lines[0].instruction.truncated);
    assert_eq!(lines[0].consumed, 2);
    assert_eq!(lines[0].next_pc, 0x0000);
}

#[test]
fn test_pc_outside_range_is_an_error() {
    let bytes = &[0xEA];
    assert!(matches!(
        decode_one(bytes, 0x0001, &at(0x0000)),
        Err(DisassemblyError::PcOutOfRange { pc: 0x0001, .. })
    ));
}

#[test]
fn test_output_is_idempotent() {
    let bytes: Vec<u8> = (0..=255u8).rev().collect();
    let options = DisassemblyOptions {
        origin: 0x4000,
        hex_dump: true,
        cycle_counting: true,
        platform_annotations: true,
        ..DisassemblyOptions::default()
    };

    let first = render_lines(&bytes, &options).unwrap();
    let second = render_lines(&bytes, &options).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_empty_disassembly() {
    let lines = disassemble(&[], &DisassemblyOptions::default()).unwrap();
    assert_eq!(lines.len(), 0);
}
