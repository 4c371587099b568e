//! Command-line driver: `dasm6502 [options] FILE`.

use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{debug, error};

use dasm6502::{
    load_file, write_listing, DisassemblyOptions, ListingHeader, LoadError, LoadOptions,
    LoadedImage, ADDRESS_SPACE,
};

#[derive(Parser, Debug)]
#[command(
    name = "dasm6502",
    version,
    about = "Disassembler and cycle counter for the 6502 microprocessor."
)]
struct Args {
    /// Binary file to disassemble.
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Base address of the disassembly (decimal, 0x or $ hex).
    #[arg(
        short,
        long,
        value_name = "ORIGIN",
        default_value = "0x8000",
        value_parser = parse_origin
    )]
    origin: u16,

    /// Only disassemble the first NUM_BYTES bytes.
    #[arg(short, long = "max-bytes", value_name = "NUM_BYTES", value_parser = parse_count)]
    max_bytes: Option<usize>,

    /// Skip this many bytes at the start of the file.
    #[arg(short, long, value_name = "NUM_BYTES", default_value = "0", value_parser = parse_count)]
    skip: usize,

    /// Include the raw instruction bytes on every line.
    #[arg(short = 'd', long = "hex-dump")]
    hex_dump: bool,

    /// Enable cycle counting annotations.
    #[arg(short = 'c', long = "cycles")]
    cycles: bool,

    /// Enable NES register annotations.
    #[arg(short = 'n', long = "nes")]
    nes: bool,

    /// Apple II/Atari style address field.
    #[arg(short = 'a', long = "apple")]
    apple: bool,

    /// Leave the address field blank.
    #[arg(short = 'A', long = "asm-only")]
    asm_only: bool,

    /// Do not print the comment header.
    #[arg(long = "no-header")]
    no_header: bool,
}

fn parse_number(raw: &str) -> Result<u32, Box<dyn Error + Send + Sync>> {
    let trimmed = raw.trim();
    if let Some(hex) = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .or_else(|| trimmed.strip_prefix('$'))
    {
        return Ok(u32::from_str_radix(hex, 16)?);
    }
    Ok(trimmed.parse::<u32>()?)
}

fn parse_origin(raw: &str) -> Result<u16, Box<dyn Error + Send + Sync>> {
    Ok((parse_number(raw)? & 0xFFFF) as u16)
}

fn parse_count(raw: &str) -> Result<usize, Box<dyn Error + Send + Sync>> {
    Ok(parse_number(raw)? as usize)
}

/// Header for the listing, or `None` with `--no-header`.
///
/// `File Size` reports the bytes actually disassembled.
fn listing_header(args: &Args, image: &LoadedImage) -> Option<ListingHeader> {
    (!args.no_header).then(|| ListingHeader {
        filename: args.file.display().to_string(),
        byte_count: image.bytes.len(),
    })
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let load_options = LoadOptions {
        origin: args.origin,
        skip: args.skip,
        max_bytes: args.max_bytes.unwrap_or(ADDRESS_SPACE),
    };
    let image = load_file(&args.file, load_options)?;

    let options = DisassemblyOptions {
        origin: image.origin,
        hex_dump: args.hex_dump,
        cycle_counting: args.cycles,
        platform_annotations: args.nes,
        alt_hex_style: args.apple,
        assembly_only: args.asm_only,
    };

    let header = listing_header(&args, &image);
    let header = header.as_ref();

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let count = write_listing(&mut out, &image.bytes, &options, header)?;
    out.flush()?;

    debug!("wrote {} lines for ${:04X}-${:04X}", count, image.origin, image.end() - 1);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .format_timestamp(None)
        .init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            match err.downcast_ref::<LoadError>() {
                Some(LoadError::Open { .. }) => ExitCode::from(2),
                _ => ExitCode::from(1),
            }
        }
    }
}
