//! Basic disassembler usage example

use dasm6502::{decode_one, DisassemblyOptions};

fn main() {
    // Example machine code bytes
    let code = &[
        0xA2, 0x00, // LDX #$00
        0xBD, 0x10, 0x80, // LDA $8010,X
        0x8D, 0x07, 0x20, // STA $2007
        0xE8, // INX
        0xD0, 0xF7, // BNE $8002
        0x60, // RTS
    ];

    let options = DisassemblyOptions {
        origin: 0x8000,
        hex_dump: true,
        cycle_counting: true,
        platform_annotations: true,
        ..DisassemblyOptions::default()
    };

    // Drive the decoder by hand, one instruction per call
    println!("Disassembled code:");
    let mut pc = options.origin;
    let end = options.origin as usize + code.len();
    while (pc as usize) < end {
        match decode_one(code, pc, &options) {
            Ok(decoded) => {
                println!("{}", decoded.text);
                pc = decoded.next_pc;
            }
            Err(err) => {
                eprintln!("error: {}", err);
                break;
            }
        }
    }
}
