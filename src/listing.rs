//! Listing output: an optional comment header followed by one line per
//! decoded instruction, streamed to any `io::Write`.

use std::io::{self, Write};

use thiserror::Error;

use crate::disassembler::{decode_one, DisassemblyOptions};
use crate::DisassemblyError;

/// Errors that can occur while writing a listing.
#[derive(Debug, Error)]
pub enum ListingError {
    #[error("write error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Disassembly(#[from] DisassemblyError),
}

/// Information shown in the listing header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingHeader {
    /// Name of the disassembled file, as given by the user
    pub filename: String,

    /// Number of bytes being disassembled, after skipping and clamping
    pub byte_count: usize,
}

const SEPARATOR: &str =
    ";---------------------------------------------------------------------------";

impl ListingHeader {
    /// Render the header comment block, ending with the `ORG` line.
    pub fn render(&self, options: &DisassemblyOptions) -> Vec<String> {
        let mut lines = vec![
            format!(
                "; Source generated by {} version {}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION")
            ),
            format!("; For more info, see {}", env!("CARGO_PKG_REPOSITORY")),
            format!(
                "; FILENAME: {}, File Size: ${:04X} ({})",
                self.filename, self.byte_count, self.byte_count
            ),
        ];

        let enabled = [
            (options.hex_dump, "Hex output"),
            (options.cycle_counting, "Cycle counting"),
            (options.platform_annotations, "NES mode"),
            (options.alt_hex_style, "Apple II output"),
            (options.assembly_only, "Assembly-only output"),
        ];
        for (_, name) in enabled.iter().filter(|(on, _)| *on) {
            lines.push(format!(";     -> {} enabled", name));
        }

        lines.push(SEPARATOR.to_string());

        let org = format!("ORG ${:04X}", options.origin);
        if options.hex_dump {
            lines.push(format!("{:<16}{:<16};", "", org));
        } else {
            lines.push(format!("{:<8}{:<16};", "", org));
        }

        lines
    }
}

/// Disassemble `bytes` and write every line to `out`.
///
/// Returns the number of instruction lines written.
pub fn write_listing<W: Write>(
    out: &mut W,
    bytes: &[u8],
    options: &DisassemblyOptions,
    header: Option<&ListingHeader>,
) -> Result<usize, ListingError> {
    if let Some(header) = header {
        for line in header.render(options) {
            writeln!(out, "{}", line)?;
        }
    }

    let mut offset = 0;
    let mut count = 0;

    while offset < bytes.len() {
        let pc = options.origin.wrapping_add(offset as u16);
        let decoded = decode_one(bytes, pc, options)?;
        writeln!(out, "{}", decoded.text)?;
        offset += decoded.consumed;
        count += 1;
    }

    out.flush()?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_lists_enabled_options() {
        let header = ListingHeader {
            filename: "game.nes".to_string(),
            byte_count: 0x10,
        };
        let options = DisassemblyOptions {
            origin: 0xC000,
            cycle_counting: true,
            platform_annotations: true,
            ..DisassemblyOptions::default()
        };

        let lines = header.render(&options);
        assert!(lines[0].starts_with("; Source generated by dasm6502"));
        assert_eq!(lines[2], "; FILENAME: game.nes, File Size: $0010 (16)");
        assert_eq!(lines[3], ";     -> Cycle counting enabled");
        assert_eq!(lines[4], ";     -> NES mode enabled");
        assert_eq!(lines[5], SEPARATOR);
        assert_eq!(lines[6], "        ORG $C000       ;");
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn test_write_listing_without_header() {
        let options = DisassemblyOptions {
            origin: 0x8000,
            ..DisassemblyOptions::default()
        };
        let mut out = Vec::new();

        let count = write_listing(&mut out, &[0xA9, 0x00, 0x02, 0x60], &options, None).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(count, 3);
        assert_eq!(
            text,
            "$8000   LDA #$00        ;\n\
             $8002   .byte $02       ; INVALID OPCODE !!!\n\
             $8003   RTS             ;\n"
        );
    }

    #[test]
    fn test_write_listing_propagates_range_errors() {
        let options = DisassemblyOptions {
            origin: 0xFFFF,
            ..DisassemblyOptions::default()
        };
        let mut out = Vec::new();

        let err = write_listing(&mut out, &[0xEA, 0xEA], &options, None).unwrap_err();
        assert!(matches!(
            err,
            ListingError::Disassembly(DisassemblyError::ImageTooLarge { .. })
        ));
    }
}
