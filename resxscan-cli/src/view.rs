use resxscan::{LocalizationTable, Session};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Values wider than this many columns are cut unless `--full` is given.
const MAX_VALUE_WIDTH: usize = 50;

/// Print the resource sets of the session's project, marking the selection.
pub fn print_sets(session: &Session) {
    if session.resource_sets().is_empty() {
        println!("No resource sets found");
        return;
    }
    for name in session.resource_sets() {
        let marker = if session.selected() == Some(name.as_str()) {
            '*'
        } else {
            ' '
        };
        println!("{} {}", marker, name);
    }
}

/// Print the aggregated table of the selected resource set.
pub fn print_table(session: &Session, full: bool) {
    let Some(name) = session.selected() else {
        println!("No resource set selected");
        return;
    };
    let table = session.table();
    let locales = table.locales();

    println!("=== Resource set: {} ===", name);
    println!("Keys: {}", table.len());
    if locales.is_empty() {
        println!("Locales: (none)");
    } else {
        println!("Locales: {}", locales.join(", "));
    }

    print_values(table, &locales, full);
}

fn print_values(table: &LocalizationTable, locales: &[String], full: bool) {
    let label_width = locales
        .iter()
        .map(|locale| locale.width())
        .chain(std::iter::once("default".width()))
        .max()
        .unwrap_or_default();

    for value in table {
        println!("\n  {}", value.key);
        let columns = std::iter::once(("default", value.default.as_deref())).chain(
            locales
                .iter()
                .map(|locale| (locale.as_str(), value.get(Some(locale.as_str())))),
        );
        for (label, text) in columns {
            let Some(text) = text else {
                continue;
            };
            let shown = if full {
                text.to_string()
            } else {
                truncate(text, MAX_VALUE_WIDTH)
            };
            println!("    {:<width$}  {}", label, shown, width = label_width);
        }
    }
}

/// Cuts `text` to at most `max_width` display columns, appending `...` when cut.
fn truncate(text: &str, max_width: usize) -> String {
    let single_line = text.replace(['\r', '\n'], " ");
    if single_line.width() <= max_width {
        return single_line;
    }

    let mut result = String::new();
    let mut width = 0;
    for c in single_line.chars() {
        let char_width = c.width().unwrap_or(0);
        if width + char_width > max_width {
            break;
        }
        width += char_width;
        result.push(c);
    }
    result.push_str("...");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_is_unchanged() {
        assert_eq!(truncate("Hello", 50), "Hello");
    }

    #[test]
    fn test_truncate_counts_display_columns() {
        assert_eq!(truncate("abcdef", 3), "abc...");
        // Each of these takes two columns.
        assert_eq!(truncate("こんにちは", 5), "こん...");
    }

    #[test]
    fn test_truncate_flattens_newlines() {
        assert_eq!(truncate("line one\r\nline two", 50), "line one  line two");
    }
}
