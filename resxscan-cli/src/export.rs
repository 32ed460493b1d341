use resxscan::{
    ExportFormat, LocalizationTable, Session,
    export::{write_csv, write_json, write_resx},
    locales::{canonical_locale, normalize_dynamic_locale},
};
use std::{
    fs::File,
    io::{self, BufWriter, Write},
};
use tracing::info;

/// Parse the `--format` argument of the export command.
pub fn parse_export_format(s: &str) -> Result<ExportFormat, String> {
    s.parse::<ExportFormat>()
}

/// Run the export command: write the selected table to a file or stdout.
pub fn run_export_command(
    session: &Session,
    format: ExportFormat,
    lang: Option<String>,
    output: Option<String>,
) -> Result<(), String> {
    if lang.is_some() && format != ExportFormat::Resx {
        return Err("--lang is only supported for resx export".to_string());
    }
    let table = session.table();
    let lang = match lang {
        Some(lang) => Some(resolve_lang(table, &lang).ok_or_else(|| {
            format!(
                "locale `{}` not found in resource set `{}`",
                lang,
                session.selected().unwrap_or_default()
            )
        })?),
        None => None,
    };

    let mut writer: Box<dyn Write> = match &output {
        Some(path) => {
            let file = File::create(path).map_err(|e| format!("Error creating {}: {}", path, e))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let result = match format {
        ExportFormat::Csv => write_csv(table, &mut writer),
        ExportFormat::Json => write_json(table, &mut writer),
        ExportFormat::Resx => write_resx(table, lang.as_deref(), &mut writer),
    };
    result.map_err(|e| format!("Error writing output: {}", e))?;
    writer
        .flush()
        .map_err(|e| format!("Error writing output: {}", e))?;

    if let Some(path) = output {
        info!(path = %path, keys = table.len(), "exported table");
    }
    Ok(())
}

/// Maps a user-typed locale to the column it is stored under, if the table has it.
fn resolve_lang(table: &LocalizationTable, lang: &str) -> Option<String> {
    let lang = canonical_locale(lang)
        .map(str::to_string)
        .or_else(|| normalize_dynamic_locale(lang))?;
    table.locales().contains(&lang).then_some(lang)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_lang() {
        let mut table = LocalizationTable::new();
        table.upsert("A", Some("de-DE"), "a-de".to_string());
        table.upsert("A", Some("xx-XX"), "a-xx".to_string());

        assert_eq!(resolve_lang(&table, "de-de"), Some("de-DE".to_string()));
        assert_eq!(resolve_lang(&table, "XX-xx"), Some("xx-XX".to_string()));
        assert_eq!(resolve_lang(&table, "fr-FR"), None);
        assert_eq!(resolve_lang(&table, "nonsense!"), None);
    }

    #[test]
    fn test_parse_export_format() {
        assert!(matches!(parse_export_format("csv"), Ok(ExportFormat::Csv)));
        assert!(matches!(parse_export_format("JSON"), Ok(ExportFormat::Json)));
        let err = parse_export_format("yaml").unwrap_err();
        assert!(err.contains("Unknown export format"));
    }

    #[test]
    fn test_lang_requires_resx() {
        let session = Session::default();
        let result = run_export_command(
            &session,
            ExportFormat::Csv,
            Some("de-DE".to_string()),
            None,
        );
        assert!(result.unwrap_err().contains("--lang"));
    }
}
