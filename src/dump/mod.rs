//! Dump input: decoding, schema walking and the resulting data model
//!
//! - [`source`]: UTF-16LE / UTF-8 detection and decoding of the raw file bytes
//! - [`parse`]: walks the fixed `DetailedMap` JSON schema
//! - [`model`]: [`Dump`], [`HeapTypeSection`], [`Block`] and [`Allocation`]

pub mod model;
pub mod parse;
pub mod source;

pub use model::{Allocation, Block, Dump, HeapTypeSection, PoolKind, FREE_TYPE};
pub use parse::{parse_dump, parse_dump_value};
pub use source::{decode_dump, detect_encoding, DumpEncoding};

use crate::errors::{VisError, VisResult};
use log::info;
use std::path::Path;

/// Read, decode and parse a dump file
pub fn load_dump(path: &Path) -> VisResult<Dump> {
    let bytes = std::fs::read(path).map_err(|source| VisError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let text = decode_dump(&bytes)?;
    let dump = parse_dump(&text)?;

    info!(
        "Parsed {}: {} heap types, {} committed allocations, {} blocks",
        path.display(),
        dump.sections().len(),
        dump.committed_count(),
        dump.block_count()
    );

    Ok(dump)
}
