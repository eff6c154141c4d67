/// Line-oriented delimited text support.
///
/// One line is one row. Lines are split on the separator without regard to
/// quoting, and each field is stripped of surrounding whitespace and quote
/// characters. On output, fields containing the separator, the quote
/// character or whitespace are wrapped in quotes, without escaping.
///
/// # Round-trip
///
/// Writing then reading restores the table only when no field contains the
/// separator, the quote character or whitespace at its ends. For example the
/// field `a,b` is written as `"a,b"` and read back as the two fields `a` and
/// `b`. Use [`csv`](crate::item::csv) (feature `quote-aware`) when quoted
/// separators must survive.
///
/// # Examples
///
/// ```
/// use csv_handler::item::delimited::{
///     delimited_reader::DelimitedReaderBuilder, delimited_writer::DelimitedWriterBuilder,
/// };
/// use csv_handler::core::{dialect::LineTerminator, table::{read_all, RowWriter}};
///
/// let rows = vec![
///     vec!["a".to_string(), "b".to_string()],
///     vec!["c".to_string(), "d".to_string()],
/// ];
///
/// let mut buffer = Vec::new();
/// {
///     let writer = DelimitedWriterBuilder::new()
///         .terminator(LineTerminator::Lf)
///         .from_writer(&mut buffer)
///         .unwrap();
///     writer.write(&rows).unwrap();
///     writer.flush().unwrap();
/// }
///
/// assert_eq!(buffer, b"a,b\nc,d\n");
///
/// let reader = DelimitedReaderBuilder::new().from_reader(&buffer[..]);
/// assert_eq!(read_all(&reader).unwrap(), rows);
/// ```
pub mod codec;

/// A module providing facilities for reading delimited lines as rows.
pub mod delimited_reader;

/// A module providing facilities for writing rows as delimited lines.
pub mod delimited_writer;
