//! Conversion between a single line of text and a [`Row`].
//!
//! The codec is intentionally naive: splitting is not quote-aware and quote
//! characters inside a field are never escaped on output. A field written as
//! `"a,b"` therefore reads back as the two fields `a` and `b`.

use crate::core::{dialect::Dialect, table::Row};

/// Cleans up one raw field: trim whitespace, trim every leading and trailing
/// `quote`, trim whitespace again.
///
/// Quotes inside the field are kept.
///
/// ```
/// use csv_handler::item::delimited::codec::strip_field;
///
/// assert_eq!(strip_field(r#"  "abc"  "#, '"'), "abc");
/// assert_eq!(strip_field(r#"a"b"#, '"'), r#"a"b"#);
/// ```
pub fn strip_field(raw: &str, quote: char) -> String {
    raw.trim().trim_matches(quote).trim().to_string()
}

/// Splits `line` on the dialect separator and cleans each field.
///
/// An empty line gives a row with one empty field.
pub fn parse_line(line: &str, dialect: &Dialect) -> Row {
    line.split(dialect.separator)
        .map(|raw| strip_field(raw, dialect.quote))
        .collect()
}

/// Whether `field` contains the separator, the quote character or any
/// whitespace character.
pub fn needs_quoting(field: &str, dialect: &Dialect) -> bool {
    field
        .chars()
        .any(|c| c == dialect.separator || c == dialect.quote || c.is_whitespace())
}

/// Renders `row` as one line, without the terminator.
///
/// Every field is followed by the separator and wrapped in quotes when
/// [`needs_quoting`] says so. The single trailing separator is then removed
/// and the line trimmed.
pub fn format_row<S: AsRef<str>>(row: &[S], dialect: &Dialect) -> String {
    let mut line = String::new();

    for field in row {
        let field = field.as_ref();
        if needs_quoting(field, dialect) {
            line.push(dialect.quote);
            line.push_str(field);
            line.push(dialect.quote);
        } else {
            line.push_str(field);
        }
        line.push(dialect.separator);
    }

    let line = line.strip_suffix(dialect.separator).unwrap_or(&line);

    line.trim().to_string()
}
