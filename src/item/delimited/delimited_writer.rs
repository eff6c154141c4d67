use std::{
    cell::RefCell,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use log::{debug, error};

use crate::{
    core::{
        dialect::{Dialect, LineTerminator},
        table::{Row, RowWriter, RowWriterResult},
    },
    error::DelimitedError,
};

use super::codec::format_row;

/// A line-oriented writer that implements the `RowWriter` trait.
///
/// Each row becomes one line rendered by [`format_row`] and followed by the
/// dialect terminator. Quote characters inside fields are not escaped.
pub struct DelimitedWriter<W: Write> {
    stream: RefCell<BufWriter<W>>,
    dialect: Dialect,
}

impl<W: Write> DelimitedWriter<W> {
    fn new(wtr: W, dialect: Dialect) -> Self {
        Self {
            stream: RefCell::new(BufWriter::new(wtr)),
            dialect,
        }
    }

    fn write_line<S: AsRef<str>>(&self, row: &[S]) -> RowWriterResult {
        let line = format_row(row, &self.dialect);
        let mut stream = self.stream.borrow_mut();
        stream.write_all(line.as_bytes())?;
        stream.write_all(self.dialect.terminator.as_str().as_bytes())?;
        Ok(())
    }

    /// Flushes buffered output and returns the underlying sink.
    pub fn into_inner(self) -> Result<W, DelimitedError> {
        self.stream
            .into_inner()
            .into_inner()
            .map_err(|error| DelimitedError::Io(error.into_error()))
    }
}

impl<W: Write> RowWriter for DelimitedWriter<W> {
    fn write(&self, rows: &[Row]) -> RowWriterResult {
        for row in rows {
            self.write_line(row)?;
        }
        Ok(())
    }

    fn flush(&self) -> RowWriterResult {
        self.stream.borrow_mut().flush()?;
        Ok(())
    }
}

/// A builder for configuring line-oriented writing.
///
/// # Default Configuration
///
/// - Separator: comma (,)
/// - Quote: double quote (")
/// - Terminator: platform native
/// - Header: none
///
/// # Examples
///
/// ```
/// use csv_handler::item::delimited::delimited_writer::DelimitedWriterBuilder;
/// use csv_handler::core::dialect::LineTerminator;
/// use csv_handler::core::table::RowWriter;
///
/// let wtr = DelimitedWriterBuilder::new()
///     .terminator(LineTerminator::Lf)
///     .header(vec!["city".to_string(), "state".to_string()])
///     .from_writer(vec![])
///     .unwrap();
///
/// wtr.write(&[vec!["New York".to_string(), "NY".to_string()]]).unwrap();
///
/// let data = String::from_utf8(wtr.into_inner().unwrap()).unwrap();
/// assert_eq!(data, "city,state\n\"New York\",NY\n");
/// ```
#[derive(Default)]
pub struct DelimitedWriterBuilder {
    dialect: Dialect,
    header: Option<Row>,
}

impl DelimitedWriterBuilder {
    pub fn new() -> DelimitedWriterBuilder {
        DelimitedWriterBuilder {
            dialect: Dialect::default(),
            header: None,
        }
    }

    pub fn separator(mut self, separator: char) -> DelimitedWriterBuilder {
        self.dialect.separator = separator;
        self
    }

    pub fn quote(mut self, quote: char) -> DelimitedWriterBuilder {
        self.dialect.quote = quote;
        self
    }

    pub fn terminator(mut self, terminator: LineTerminator) -> DelimitedWriterBuilder {
        self.dialect.terminator = terminator;
        self
    }

    pub fn dialect(mut self, dialect: Dialect) -> DelimitedWriterBuilder {
        self.dialect = dialect;
        self
    }

    /// Column names written as the first line of a new file.
    pub fn header(mut self, header: Row) -> DelimitedWriterBuilder {
        self.header = Some(header);
        self
    }

    /// Opens `path` for appending, creating it if needed.
    ///
    /// The header, if any, is written only when the file did not exist
    /// before this call.
    pub fn from_path<P: AsRef<Path>>(
        self,
        path: P,
    ) -> Result<DelimitedWriter<File>, DelimitedError> {
        let file_path = path.as_ref();
        let is_new = !file_path.exists();

        let file = File::options()
            .append(true)
            .create(true)
            .open(file_path)
            .map_err(|e| {
                error!("Failed to open file {}: {}", file_path.display(), e);
                DelimitedError::Io(e)
            })?;

        debug!(
            "Appending to {} (new file: {})",
            file_path.display(),
            is_new
        );

        self.build(file, is_new)
    }

    /// Wraps any sink. The sink is treated as empty, so a configured header
    /// is always written.
    pub fn from_writer<W: Write>(self, wtr: W) -> Result<DelimitedWriter<W>, DelimitedError> {
        self.build(wtr, true)
    }

    fn build<W: Write>(self, wtr: W, is_new: bool) -> Result<DelimitedWriter<W>, DelimitedError> {
        let writer = DelimitedWriter::new(wtr, self.dialect);

        match self.header {
            Some(header) if is_new => {
                debug!("Writing header: {:?}", header);
                writer.write_line(&header)?;
            }
            Some(_) => debug!("Target already exists, header skipped"),
            None => {}
        }

        Ok(writer)
    }
}
