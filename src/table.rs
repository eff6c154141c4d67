use std::path::Path;

use log::debug;

use crate::{
    core::{
        dialect::Dialect,
        table::{read_all, Row, RowWriter, Table},
    },
    error::DelimitedError,
    item::delimited::{
        delimited_reader::DelimitedReaderBuilder, delimited_writer::DelimitedWriterBuilder,
    },
};

/// Whole-file operations on delimited text tables.
///
/// Each call opens its own handle and releases it before returning, on
/// success as well as on error. Nothing is cached between calls and the file
/// is not locked.
pub struct DelimitedTable;

impl DelimitedTable {
    /// Reads every line of `path` as a row.
    ///
    /// See [`DelimitedReader`](crate::item::delimited::delimited_reader::DelimitedReader)
    /// for how lines are split.
    ///
    /// # Errors
    ///
    /// - `DelimitedError::FileNotFound` if `path` is not an existing regular file
    /// - `DelimitedError::Io` on any other I/O failure
    pub fn read<P: AsRef<Path>>(path: P, dialect: &Dialect) -> Result<Table, DelimitedError> {
        let reader = DelimitedReaderBuilder::new()
            .dialect(*dialect)
            .from_path(path.as_ref())?;

        let table = read_all(&reader)?;

        debug!("Read {} rows from {}", table.len(), path.as_ref().display());

        Ok(table)
    }

    /// Reads `path` with quote-aware splitting.
    ///
    /// Blank lines yield no row in this mode.
    ///
    /// # Errors
    ///
    /// As [`read`](Self::read), plus `DelimitedError::InvalidDialect` for a
    /// non-ASCII separator or quote and `DelimitedError::Parse` for records
    /// the parser rejects.
    #[cfg(feature = "quote-aware")]
    #[cfg_attr(docsrs, doc(cfg(feature = "quote-aware")))]
    pub fn read_quoted<P: AsRef<Path>>(
        path: P,
        dialect: &Dialect,
    ) -> Result<Table, DelimitedError> {
        let reader = crate::item::csv::csv_reader::CsvRowReaderBuilder::new()
            .dialect(*dialect)
            .from_path(path.as_ref())?;

        read_all(&reader)
    }

    /// Appends `rows` to `path`, creating the file if needed.
    ///
    /// `header` is written first only when `path` does not exist when the
    /// call starts; otherwise it is ignored. `rows` is left untouched.
    ///
    /// A failure part way through leaves the lines written so far in place.
    ///
    /// # Errors
    ///
    /// `DelimitedError::Io` on any I/O failure.
    pub fn write<P: AsRef<Path>>(
        path: P,
        rows: &[Row],
        header: Option<&[String]>,
        dialect: &Dialect,
    ) -> Result<(), DelimitedError> {
        let mut builder = DelimitedWriterBuilder::new().dialect(*dialect);
        if let Some(header) = header {
            builder = builder.header(header.to_vec());
        }

        let writer = builder.from_path(path.as_ref())?;
        writer.write(rows)?;
        writer.flush()?;

        debug!("Wrote {} rows to {}", rows.len(), path.as_ref().display());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::{error::Error, fs};

    use tempfile::tempdir;

    use super::DelimitedTable;
    use crate::{
        core::dialect::{Dialect, LineTerminator},
        error::DelimitedError,
    };

    fn row(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|f| f.to_string()).collect()
    }

    #[test]
    fn read_missing_file_should_fail_with_not_found() {
        let dir = tempdir().unwrap();

        let result = DelimitedTable::read(dir.path().join("missing.csv"), &Dialect::default());

        assert!(matches!(result, Err(DelimitedError::FileNotFound(_))));
    }

    #[test]
    fn written_rows_should_be_plain_lines() -> Result<(), Box<dyn Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("plain.csv");
        let dialect = Dialect::default().with_terminator(LineTerminator::Lf);

        let rows = vec![row(&["a", "b"]), row(&["c", "d"])];
        DelimitedTable::write(&path, &rows, None, &dialect)?;

        assert_eq!(fs::read_to_string(&path)?, "a,b\nc,d\n");
        assert_eq!(DelimitedTable::read(&path, &dialect)?, rows);

        Ok(())
    }

    #[test]
    fn header_should_only_be_written_on_creation() -> Result<(), Box<dyn Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("header.csv");
        let dialect = Dialect::default().with_terminator(LineTerminator::Lf);
        let header = row(&["id", "name"]);

        DelimitedTable::write(&path, &[row(&["1", "x"])], Some(header.as_slice()), &dialect)?;
        DelimitedTable::write(&path, &[row(&["2", "y"])], Some(header.as_slice()), &dialect)?;

        assert_eq!(fs::read_to_string(&path)?, "id,name\n1,x\n2,y\n");

        Ok(())
    }

    #[test]
    fn write_should_not_touch_caller_rows() -> Result<(), Box<dyn Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("untouched.csv");
        let rows = vec![row(&["a"])];
        let header = row(&["h"]);

        DelimitedTable::write(&path, &rows, Some(header.as_slice()), &Dialect::default())?;

        assert_eq!(rows, vec![row(&["a"])]);

        Ok(())
    }
}
