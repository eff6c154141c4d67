/// Quote-aware reading backed by the `csv` crate.
///
/// The default [`DelimitedReader`](crate::item::delimited::delimited_reader::DelimitedReader)
/// splits on every separator, even inside quotes. This module offers the
/// stricter alternative:
///
/// - separators inside a quoted field are part of the field
/// - a doubled quote inside a quoted field reads as one quote
/// - blank lines are skipped instead of producing a row with one empty field
///
/// The separator and quote must be ASCII characters.
///
/// # Examples
///
/// ```
/// use csv_handler::item::csv::csv_reader::CsvRowReaderBuilder;
/// use csv_handler::core::table::read_all;
///
/// let data = "name;motto\nAda;'count, then compute'\n";
///
/// let reader = CsvRowReaderBuilder::new()
///     .separator(';')
///     .quote('\'')
///     .from_reader(data.as_bytes())
///     .unwrap();
///
/// let table = read_all(&reader).unwrap();
/// assert_eq!(table[1], vec!["Ada", "count, then compute"]);
/// ```
pub mod csv_reader;
