//! WebAssembly bindings for the disassembler.
//!
//! This module provides JavaScript-callable entry points so a browser page
//! can disassemble a `Uint8Array` without a server round trip.

pub mod api;

pub use api::{disassemble_lines, DisassemblyLine, Disassembler6502};
