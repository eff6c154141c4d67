use log::debug;

use crate::error::DelimitedError;

/// One record of a delimited file: its fields in column order.
pub type Row = Vec<String>;

/// An ordered sequence of rows. Rows may have differing field counts.
pub type Table = Vec<Row>;

/// Represents the result of reading a row from the reader.
///
/// This type is a specialized `Result` that can be:
/// - `Ok(Some(row))` when a row is successfully read
/// - `Ok(None)` when there are no more rows to read (end of input)
/// - `Err(DelimitedError)` when an error occurs during reading
pub type RowReaderResult = Result<Option<Row>, DelimitedError>;

/// Represents the result of writing rows to the writer.
pub type RowWriterResult = Result<(), DelimitedError>;

/// A source of rows, read one at a time.
pub trait RowReader {
    /// Reads the next row.
    ///
    /// Returns `Ok(None)` once the underlying input is exhausted.
    fn read(&self) -> RowReaderResult;
}

/// A sink of rows.
pub trait RowWriter {
    /// Writes the given rows, in order.
    fn write(&self, rows: &[Row]) -> RowWriterResult;

    /// Flushes any buffered output to the underlying sink.
    fn flush(&self) -> RowWriterResult;
}

/// Drains `reader` into a table, keeping input order.
///
/// Stops at the first error; rows read before it are discarded.
pub fn read_all<R: RowReader + ?Sized>(reader: &R) -> Result<Table, DelimitedError> {
    let mut table = Table::new();

    while let Some(row) = reader.read()? {
        table.push(row);
    }

    debug!("Read {} rows", table.len());

    Ok(table)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::{read_all, Row, RowReader, RowReaderResult};
    use crate::error::DelimitedError;

    struct VecReader {
        rows: RefCell<Vec<Result<Row, DelimitedError>>>,
    }

    impl VecReader {
        fn new(mut rows: Vec<Result<Row, DelimitedError>>) -> Self {
            rows.reverse();
            Self {
                rows: RefCell::new(rows),
            }
        }
    }

    impl RowReader for VecReader {
        fn read(&self) -> RowReaderResult {
            self.rows.borrow_mut().pop().transpose()
        }
    }

    #[test]
    fn read_all_should_keep_input_order() {
        let reader = VecReader::new(vec![
            Ok(vec!["b".to_string()]),
            Ok(vec!["a".to_string(), "c".to_string()]),
        ]);

        let table = read_all(&reader).unwrap();

        assert_eq!(table, vec![vec!["b"], vec!["a", "c"]]);
    }

    #[test]
    fn read_all_should_stop_at_first_error() {
        let reader = VecReader::new(vec![
            Ok(vec!["a".to_string()]),
            Err(DelimitedError::Parse("boom".to_string())),
            Ok(vec!["b".to_string()]),
        ]);

        let result = read_all(&reader);

        assert!(matches!(result, Err(DelimitedError::Parse(msg)) if msg == "boom"));
    }

    #[test]
    fn read_all_on_empty_input_should_return_empty_table() {
        let reader = VecReader::new(vec![]);

        assert!(read_all(&reader).unwrap().is_empty());
    }
}
