//! # Image Loader
//!
//! Reads a raw binary and places it in the 64KiB address space at a chosen
//! origin. The loaded range is clamped so that `origin + len <= 0x10000`;
//! clamping is reported as a warning, never as an error.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use log::{debug, warn};
use thiserror::Error;

use crate::ADDRESS_SPACE;

/// Errors that can occur while loading an image.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The input file could not be opened.
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading the input failed part-way.
    #[error("read error: {0}")]
    Io(#[from] io::Error),

    /// Nothing is left to disassemble after skipping and clamping.
    #[error("no bytes to disassemble (input is {file_size} bytes, skipping {skip})")]
    Empty { skip: usize, file_size: usize },
}

/// Where to place the input and how much of it to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Address of the first kept byte
    pub origin: u16,

    /// Bytes to drop from the start of the input
    pub skip: usize,

    /// Upper bound on the number of kept bytes
    pub max_bytes: usize,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            origin: 0x8000,
            skip: 0,
            max_bytes: ADDRESS_SPACE,
        }
    }
}

/// A binary placed in the address space, ready to disassemble.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedImage {
    /// Address of `bytes[0]`
    pub origin: u16,

    /// The kept bytes; `origin + bytes.len() <= 0x10000`
    pub bytes: Vec<u8>,

    /// Size of the whole input before skipping and clamping
    pub file_size: usize,

    /// True when bytes were dropped to honour `max_bytes` or the address space
    pub clamped: bool,
}

impl LoadedImage {
    /// One past the last loaded address.
    pub fn end(&self) -> u32 {
        self.origin as u32 + self.bytes.len() as u32
    }
}

/// Load an image from any reader.
///
/// Only the kept bytes are buffered. The skipped prefix and anything past the
/// clamp are read and counted, so `file_size` still reports the whole input.
pub fn load_image<R: Read>(mut reader: R, options: LoadOptions) -> Result<LoadedImage, LoadError> {
    let skipped = io::copy(&mut reader.by_ref().take(options.skip as u64), &mut io::sink())?;

    let room = ADDRESS_SPACE - options.origin as usize;
    let limit = options.max_bytes.min(room);

    let mut bytes = Vec::with_capacity(limit);
    reader.by_ref().take(limit as u64).read_to_end(&mut bytes)?;

    let rest = io::copy(&mut reader, &mut io::sink())?;
    let file_size = (skipped + rest) as usize + bytes.len();

    if options.skip >= file_size {
        return Err(LoadError::Empty {
            skip: options.skip,
            file_size,
        });
    }

    let available = file_size - options.skip;
    let clamped = rest > 0;

    if clamped {
        if room < options.max_bytes {
            warn!(
                "input clamped to {} bytes to end at $FFFF (origin ${:04X})",
                limit, options.origin
            );
        } else {
            warn!("input clamped to {} of {} bytes", limit, available);
        }
    }

    if bytes.is_empty() {
        return Err(LoadError::Empty {
            skip: options.skip,
            file_size,
        });
    }

    debug!(
        "loaded {} bytes at ${:04X} (file size {}, skipped {})",
        bytes.len(),
        options.origin,
        file_size,
        options.skip
    );

    Ok(LoadedImage {
        origin: options.origin,
        bytes,
        file_size,
        clamped,
    })
}

/// Load an image from a file on disk.
pub fn load_file(path: impl AsRef<Path>, options: LoadOptions) -> Result<LoadedImage, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    load_image(io::BufReader::new(file), options)
}
