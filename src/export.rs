//! Writing an aggregated table out as CSV, JSON, or a single-locale `.resx` file.
//!
//! Only the columns present in the table are written. Keys missing a
//! translation get an empty cell in CSV and are omitted from `.resx` output.

use std::{io::Write, str::FromStr};

use crate::{error::Error, parser::ResxDocument, traits::Parser, types::LocalizationTable};

/// Column name used for the culture-neutral value.
pub const DEFAULT_COLUMN: &str = "default";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
    Resx,
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            "resx" => Ok(ExportFormat::Resx),
            _ => Err(format!("Unknown export format: {}", s)),
        }
    }
}

/// Writes `key,default,<locale>...` rows, locales sorted.
pub fn write_csv<W: Write>(table: &LocalizationTable, writer: W) -> Result<(), Error> {
    let locales = table.locales();
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    let mut header = vec!["key", DEFAULT_COLUMN];
    header.extend(locales.iter().map(String::as_str));
    wtr.write_record(&header)?;

    for value in table {
        let mut row = vec![
            value.key.as_str(),
            value.default.as_deref().unwrap_or_default(),
        ];
        row.extend(
            locales
                .iter()
                .map(|locale| value.get(Some(locale.as_str())).unwrap_or_default()),
        );
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Writes the records as a pretty-printed JSON array.
pub fn write_json<W: Write>(table: &LocalizationTable, mut writer: W) -> Result<(), Error> {
    let values: Vec<_> = table.iter().collect();
    serde_json::to_writer_pretty(&mut writer, &values)?;
    writeln!(writer)?;
    Ok(())
}

/// Writes one column (`None` for the default values) as a `.resx` document.
pub fn write_resx<W: Write>(
    table: &LocalizationTable,
    locale: Option<&str>,
    writer: W,
) -> Result<(), Error> {
    let pairs = table
        .iter()
        .filter_map(|value| {
            value
                .get(locale)
                .map(|text| (value.key.clone(), text.to_string()))
        })
        .collect();
    ResxDocument::new(pairs).to_writer(writer)
}
