//! End-to-end tests: file on disk -> loader -> listing output

use std::fs;
use std::path::PathBuf;

use dasm6502::{
    load_file, write_listing, DisassemblyOptions, ListingHeader, LoadError, LoadOptions,
};

/// Write `bytes` to a per-test file in the system temp directory.
fn fixture(name: &str, bytes: &[u8]) -> PathBuf {
    let path = std::env::temp_dir().join(format!("dasm6502-{}-{}.bin", name, std::process::id()));
    fs::write(&path, bytes).unwrap();
    path
}

#[test]
fn test_listing_from_file() {
    let path = fixture("listing", &[0xA2, 0xFF, 0x9A, 0x4C, 0x00, 0x80]);

    let image = load_file(&path, LoadOptions::default()).unwrap();
    let options = DisassemblyOptions {
        origin: image.origin,
        ..DisassemblyOptions::default()
    };
    let header = ListingHeader {
        filename: "reset.bin".to_string(),
        byte_count: image.bytes.len(),
    };

    let mut out = Vec::new();
    let count = write_listing(&mut out, &image.bytes, &options, Some(&header)).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(count, 3);
    assert_eq!(lines[2], "; FILENAME: reset.bin, File Size: $0006 (6)");
    assert!(lines[3].starts_with(";-----"));
    assert_eq!(lines[4], "        ORG $8000       ;");
    assert_eq!(lines[5], "$8000   LDX #$FF        ;");
    assert_eq!(lines[6], "$8002   TXS             ;");
    assert_eq!(lines[7], "$8003   JMP $8000       ;");

    fs::remove_file(path).unwrap();
}

#[test]
fn test_skip_and_max_bytes() {
    // 16-byte header, then code
    let mut bytes = vec![0u8; 16];
    bytes.extend_from_slice(&[0x78, 0xD8, 0xEA, 0xEA]);
    let path = fixture("skip", &bytes);

    let load_options = LoadOptions {
        origin: 0xC000,
        skip: 16,
        max_bytes: 2,
    };
    let image = load_file(&path, load_options).unwrap();
    assert!(image.clamped);
    assert_eq!(image.file_size, 20);

    let options = DisassemblyOptions {
        origin: image.origin,
        assembly_only: true,
        ..DisassemblyOptions::default()
    };
    let mut out = Vec::new();
    write_listing(&mut out, &image.bytes, &options, None).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "        SEI             ;\n        CLD             ;\n"
    );

    fs::remove_file(path).unwrap();
}

#[test]
fn test_clamped_to_top_of_memory() {
    let path = fixture("top", &[0xEA, 0xEA, 0xEA, 0xEA]);

    let image = load_file(
        &path,
        LoadOptions {
            origin: 0xFFFD,
            ..LoadOptions::default()
        },
    )
    .unwrap();

    assert_eq!(image.bytes.len(), 3);
    assert_eq!(image.end(), 0x10000);

    let options = DisassemblyOptions {
        origin: image.origin,
        ..DisassemblyOptions::default()
    };
    let mut out = Vec::new();
    assert_eq!(write_listing(&mut out, &image.bytes, &options, None).unwrap(), 3);

    fs::remove_file(path).unwrap();
}

#[test]
fn test_empty_file() {
    let path = fixture("empty", &[]);

    let err = load_file(&path, LoadOptions::default()).unwrap_err();
    assert!(matches!(err, LoadError::Empty { file_size: 0, .. }));

    fs::remove_file(path).unwrap();
}
