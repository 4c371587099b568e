//! WASM API for the disassembler.
//!
//! Provides JavaScript-callable interfaces for configuring output options and
//! disassembling byte buffers into rendered lines or structured records.

use wasm_bindgen::prelude::*;

use crate::disassembler::formatter::format_instruction;
use crate::{disassemble, render_lines, DisassemblyOptions};

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

/// One decoded instruction as a structured record
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct DisassemblyLine {
    address: u16,
    bytes: Vec<u8>,
    text: String,
    line: String,
    valid: bool,
}

#[wasm_bindgen]
impl DisassemblyLine {
    #[wasm_bindgen(getter)]
    pub fn address(&self) -> u16 {
        self.address
    }

    #[wasm_bindgen(getter)]
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    /// Mnemonic and operand only, e.g. `LDA #$42`
    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.text.clone()
    }

    /// The full rendered line, including address field and comments
    #[wasm_bindgen(getter)]
    pub fn line(&self) -> String {
        self.line.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn valid(&self) -> bool {
        self.valid
    }
}

/// Stateful disassembler holding output options between calls
#[wasm_bindgen]
#[derive(Debug, Default)]
pub struct Disassembler6502 {
    options: DisassemblyOptions,
}

#[wasm_bindgen]
impl Disassembler6502 {
    #[wasm_bindgen(constructor)]
    pub fn new(origin: u16) -> Self {
        Disassembler6502 {
            options: DisassemblyOptions {
                origin,
                ..DisassemblyOptions::default()
            },
        }
    }

    #[wasm_bindgen(setter)]
    pub fn set_origin(&mut self, origin: u16) {
        self.options.origin = origin;
    }

    #[wasm_bindgen(setter)]
    pub fn set_hex_dump(&mut self, enabled: bool) {
        self.options.hex_dump = enabled;
    }

    #[wasm_bindgen(setter)]
    pub fn set_cycle_counting(&mut self, enabled: bool) {
        self.options.cycle_counting = enabled;
    }

    #[wasm_bindgen(setter)]
    pub fn set_platform_annotations(&mut self, enabled: bool) {
        self.options.platform_annotations = enabled;
    }

    #[wasm_bindgen(setter)]
    pub fn set_alt_hex_style(&mut self, enabled: bool) {
        self.options.alt_hex_style = enabled;
    }

    #[wasm_bindgen(setter)]
    pub fn set_assembly_only(&mut self, enabled: bool) {
        self.options.assembly_only = enabled;
    }

    /// Disassemble `bytes` into structured records.
    pub fn disassemble(&self, bytes: &[u8]) -> Result<Vec<JsValue>, JsError> {
        let decoded =
            disassemble(bytes, &self.options).map_err(|e| JsError::new(&e.to_string()))?;

        Ok(decoded
            .into_iter()
            .map(|decoded| {
                let instr = &decoded.instruction;
                let mut raw = vec![instr.opcode];
                raw.extend_from_slice(&instr.operand_bytes);

                JsValue::from(DisassemblyLine {
                    address: instr.address,
                    bytes: raw,
                    text: format_instruction(instr),
                    valid: instr.valid,
                    line: decoded.text,
                })
            })
            .collect())
    }

    /// Disassemble `bytes` into rendered lines.
    pub fn lines(&self, bytes: &[u8]) -> Result<js_sys::Array, JsError> {
        disassemble_lines_with(bytes, &self.options)
    }
}

/// Disassemble `bytes` at `origin` into an array of rendered lines.
#[wasm_bindgen]
pub fn disassemble_lines(
    bytes: &[u8],
    origin: u16,
    hex_dump: bool,
    cycle_counting: bool,
    platform_annotations: bool,
) -> Result<js_sys::Array, JsError> {
    let options = DisassemblyOptions {
        origin,
        hex_dump,
        cycle_counting,
        platform_annotations,
        ..DisassemblyOptions::default()
    };
    disassemble_lines_with(bytes, &options)
}

fn disassemble_lines_with(
    bytes: &[u8],
    options: &DisassemblyOptions,
) -> Result<js_sys::Array, JsError> {
    let lines = render_lines(bytes, options).map_err(|e| JsError::new(&e.to_string()))?;
    Ok(lines.iter().map(|line| JsValue::from_str(line)).collect())
}
