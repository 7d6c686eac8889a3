use std::fs::File;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord};
use pokecore_chart::TypeChart;

use crate::{CodecConfig, CodecError};

/// Read a chart from CSV using the default config
pub fn deserialize<R: io::Read>(reader: R) -> Result<TypeChart> {
    deserialize_with(reader, &CodecConfig::default())
}

/// Read a chart from CSV.
///
/// Every data record must have as many fields as the header; the attacking
/// and defending type sets do not have to match.
pub fn deserialize_with<R: io::Read>(reader: R, config: &CodecConfig) -> Result<TypeChart> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .delimiter(config.delimiter)
        .from_reader(reader);

    let records = reader
        .records()
        .collect::<Result<Vec<StringRecord>, csv::Error>>()
        .map_err(CodecError::Csv)?;

    let Some((header, rows)) = records.split_first() else {
        return Err(CodecError::EmptyInput.into());
    };

    // header[0] is the empty corner cell
    let defending_types: Vec<&str> = header.iter().skip(1).collect();

    let mut chart = TypeChart::new();
    for record in rows {
        let mut fields = record.iter();
        let attacking = fields.next().unwrap_or_default();

        for (defending, field) in defending_types.iter().zip(fields) {
            let effectiveness = field.parse::<f64>().map_err(|_| CodecError::InvalidMultiplier {
                attacking: attacking.to_string(),
                defending: defending.to_string(),
                value: field.to_string(),
            })?;
            chart.add_interaction(attacking, defending, effectiveness);
        }
    }

    Ok(chart)
}

/// Read a chart from a CSV file. Fails with [`CodecError::NotFound`] if the
/// path does not exist.
pub fn deserialize_file(path: impl AsRef<Path>) -> Result<TypeChart> {
    let path = path.as_ref();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(CodecError::NotFound(path.to_path_buf()).into());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to open {}", path.display()));
        }
    };

    let chart = deserialize(file)?;
    tracing::debug!(
        path = %path.display(),
        attacking = chart.attacking_types().len(),
        interactions = chart.len(),
        "Loaded type chart"
    );
    Ok(chart)
}
