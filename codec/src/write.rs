use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use csv::WriterBuilder;
use pokecore_chart::TypeChart;

use crate::{CodecConfig, CodecError};

/// Write a chart as CSV using the default config
pub fn serialize(chart: &TypeChart) -> Result<String> {
    serialize_with(chart, &CodecConfig::default())
}

/// Write a chart as CSV.
///
/// Columns are every defending type that appears anywhere in the chart;
/// rows are the attacking types. Pairs missing from the chart are written
/// as zero.
pub fn serialize_with(chart: &TypeChart, config: &CodecConfig) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .delimiter(config.delimiter)
        .from_writer(Vec::new());

    let defending_types = chart.defending_types();

    let header = std::iter::once("").chain(defending_types.iter().map(String::as_str));
    writer.write_record(header).map_err(write_error)?;

    for attacking in chart.attacking_types() {
        let mut row = Vec::with_capacity(defending_types.len() + 1);
        row.push(attacking.clone());
        for defending in &defending_types {
            let effectiveness = chart.effectiveness(&attacking, defending).unwrap_or_default();
            row.push(format!("{:.*}", config.precision, effectiveness));
        }
        writer.write_record(&row).map_err(write_error)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| CodecError::Write(io::Error::new(e.error().kind(), e.error().to_string())))?;
    let text = String::from_utf8(bytes)
        .map_err(|e| CodecError::Write(io::Error::new(io::ErrorKind::InvalidData, e)))?;

    Ok(text)
}

/// Write a chart to a new CSV file.
///
/// Fails with [`CodecError::AlreadyExists`] instead of overwriting.
pub fn serialize_to_file(chart: &TypeChart, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let data = serialize(chart)?;

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            tracing::warn!(path = %path.display(), "Refusing to overwrite existing file");
            return Err(CodecError::AlreadyExists(path.to_path_buf()).into());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to create {}", path.display()));
        }
    };

    file.write_all(data.as_bytes()).map_err(CodecError::Write)?;
    tracing::debug!(
        path = %path.display(),
        interactions = chart.len(),
        "Saved type chart"
    );
    Ok(())
}

fn write_error(err: csv::Error) -> CodecError {
    CodecError::Write(err.into())
}
