//! # 6502 Disassembler and Cycle Counter
//!
//! A table-driven NMOS 6502 disassembler. Bytes go in, one formatted text line
//! per instruction comes out, optionally annotated with cycle counts and NES
//! register names.
//!
//! ## Quick Start
//!
//! ```rust
//! use dasm6502::{decode_one, DisassemblyOptions};
//!
//! let code = [0x4C, 0x00, 0x80]; // JMP $8000
//! let options = DisassemblyOptions {
//!     origin: 0x8000,
//!     ..DisassemblyOptions::default()
//! };
//!
//! let decoded = decode_one(&code, 0x8000, &options).unwrap();
//! assert_eq!(decoded.consumed, 3);
//! assert!(decoded.text.contains("JMP $8000"));
//! ```
//!
//! ## Architecture
//!
//! - **Table-Driven Design**: every opcode's mnemonic, addressing mode and
//!   timing live in a single 256-entry table
//! - **Stateless decoding**: each call decodes one instruction from a cursor
//!   and hands back the next cursor
//! - **Bounded reads**: operands are never fetched past the loaded bytes
//!
//! ## Modules
//!
//! - `addressing` - Addressing mode enumeration
//! - `opcodes` - Opcode metadata table
//! - `cycles` - Cycle-count annotation rules
//! - `platform` - NES register names
//! - `disassembler` - Decoding and line rendering
//! - `loader` - Reading binaries into a clamped address range
//! - `listing` - Header and line output

pub mod addressing;
pub mod cycles;
pub mod disassembler;
pub mod listing;
pub mod loader;
pub mod opcodes;
pub mod platform;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use addressing::AddressingMode;
pub use cycles::{cycles_for, CycleCount};
pub use disassembler::{
    decode_one, disassemble, render_lines, DecodedLine, DisassemblyOptions, Instruction,
};
pub use listing::{write_listing, ListingError, ListingHeader};
pub use loader::{load_file, load_image, LoadError, LoadOptions, LoadedImage};
pub use opcodes::{lookup, CycleExceptions, OpcodeMetadata, OPCODE_TABLE};
pub use platform::nes_register_comment;

use thiserror::Error;

/// Size of the 6502 address space in bytes.
pub const ADDRESS_SPACE: usize = 0x10000;

/// Errors returned at the decoding boundary.
///
/// Illegal opcodes and truncated trailing instructions are not errors; they
/// decode to lines carrying a marker.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DisassemblyError {
    /// The requested program counter is outside the loaded bytes.
    #[error("program counter ${pc:04X} is outside the loaded range ${start:04X}..${end:05X}")]
    PcOutOfRange { pc: u16, start: u16, end: u32 },

    /// The loaded bytes would extend past address 0xFFFF.
    #[error("{len} bytes at origin ${origin:04X} do not fit in the 64KiB address space")]
    ImageTooLarge { origin: u16, len: usize },
}
