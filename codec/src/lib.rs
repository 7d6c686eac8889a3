//! CSV codec for [`TypeChart`].
//!
//! The format is a square-ish matrix: the first record holds an empty cell
//! followed by the defending type names, and every later record holds an
//! attacking type name followed by one multiplier per defending column.
//!
//! ```text
//! ,FIRE,WATER
//! FIRE,0.5,0.5
//! WATER,2.0,0.5
//! ```
//!
//! Output is deterministic: columns and rows are sorted by type name.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

mod read;
mod write;

pub use pokecore_chart::TypeChart;
pub use read::{deserialize, deserialize_file, deserialize_with};
pub use write::{serialize, serialize_to_file, serialize_with};

/// Errors raised by the codec.
///
/// Public functions return `anyhow::Result`; recover the variant with
/// `err.downcast_ref::<CodecError>()`.
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("File already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("Empty input")]
    EmptyInput,

    #[error("Malformed CSV: {0}")]
    Csv(#[source] csv::Error),

    #[error("Invalid multiplier {value:?} for {attacking} -> {defending}")]
    InvalidMultiplier {
        attacking: String,
        defending: String,
        value: String,
    },

    #[error("Write failed: {0}")]
    Write(#[source] io::Error),
}

impl CodecError {
    /// True for errors caused by the input text rather than the filesystem
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyInput | Self::Csv(_) | Self::InvalidMultiplier { .. }
        )
    }
}

/// Options for reading and writing charts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecConfig {
    /// Field delimiter
    pub delimiter: u8,
    /// Digits after the decimal point when writing multipliers
    pub precision: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            precision: 1,
        }
    }
}
