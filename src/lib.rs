//! sjcheck
//!
//! A static checker for a small, line-oriented Java-like teaching language.
//! It decides whether a source text is well formed and semantically
//! consistent without running it, and reports the first problem found.
//!
//! ## Architecture
//!
//! - **types**: value classification and the assignability lattice
//! - **parser**: per-line classification and the shared line cursor
//! - **review**: symbol table, global declaration pass and the recursive
//!   scope validator
//! - **common**: configuration, errors and driver constants
//! - **bin**: command-line interface
//!
//! ## Checking Flow
//!
//! ```text
//! Source → Cursor → Global pass (globals + method signatures)
//!                 → rewind
//!                 → Scope pass (each method body, nested blocks recursively)
//! ```

pub mod common;
pub mod parser;
pub mod review;
pub mod types;

pub use common::{Config, Error, Result};

use std::path::Path;

/// Check a source text. Each call starts from an empty symbol table.
pub fn verify(source: &str) -> Result<()> {
    let mut cursor = parser::Cursor::new(source);
    match review::review(&mut cursor) {
        Ok(table) => {
            log::info!(
                "source is valid: {} global(s), {} method(s)",
                table.global_count(),
                table.method_count()
            );
            Ok(())
        }
        Err(e) => {
            let line = cursor.line_number();
            log::info!("source is invalid at line {}: {}", line, e);
            Err(Error::invalid(line, e))
        }
    }
}

/// Read and check a source file
pub fn verify_file(path: impl AsRef<Path>, config: &Config) -> Result<()> {
    let path = path.as_ref();
    log::debug!("reading {}", path.display());
    if let Some(limit) = config.max_source_bytes {
        let size = std::fs::metadata(path)?.len();
        if size > limit {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("{} is {} bytes; limit is {}", path.display(), size, limit),
            )));
        }
    }
    let source = std::fs::read_to_string(path)?;
    verify(&source)
}

/// The three things a run can conclude
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Valid,
    Invalid,
    IoError,
}

impl Outcome {
    pub fn from_result(result: &Result<()>) -> Self {
        match result {
            Ok(()) => Outcome::Valid,
            Err(Error::Invalid { .. }) => Outcome::Invalid,
            Err(Error::Io(_)) => Outcome::IoError,
        }
    }

    /// Code printed and returned by the command-line driver
    pub fn code(self) -> i32 {
        match self {
            Outcome::Valid => common::LEGAL_CODE,
            Outcome::Invalid => common::ILLEGAL_CODE,
            Outcome::IoError => common::IO_ERROR_CODE,
        }
    }
}
