use std::{
    cell::{Cell, RefCell},
    fs::File,
    io::{BufRead, BufReader, Lines},
    path::Path,
};

use log::{debug, error};

use crate::{
    core::{
        dialect::Dialect,
        table::{RowReader, RowReaderResult},
    },
    error::DelimitedError,
};

use super::codec::parse_line;

const BOM: char = '\u{feff}';

/// A line-oriented reader that implements the `RowReader` trait.
///
/// Every line of the input becomes one row: the line is split on the dialect
/// separator (quotes do not protect separators) and each field is cleaned
/// with [`strip_field`](super::codec::strip_field). LF and CRLF line endings
/// are both accepted.
///
/// # Examples
///
/// ```
/// use csv_handler::item::delimited::delimited_reader::DelimitedReaderBuilder;
/// use csv_handler::core::table::RowReader;
///
/// let data = "name, age\n\"Alice\",30\n";
///
/// let reader = DelimitedReaderBuilder::new().from_reader(data.as_bytes());
///
/// assert_eq!(reader.read().unwrap().unwrap(), vec!["name", "age"]);
/// assert_eq!(reader.read().unwrap().unwrap(), vec!["Alice", "30"]);
/// assert!(reader.read().unwrap().is_none());
/// ```
pub struct DelimitedReader<R> {
    /// Iterator over the input lines
    ///
    /// Uses `RefCell` so `read` can advance it behind `&self`.
    lines: RefCell<Lines<R>>,
    dialect: Dialect,
    first_line: Cell<bool>,
}

impl<R: BufRead> RowReader for DelimitedReader<R> {
    fn read(&self) -> RowReaderResult {
        match self.lines.borrow_mut().next() {
            Some(Ok(line)) => {
                let line = if self.first_line.replace(false) {
                    line.strip_prefix(BOM).unwrap_or(&line).to_string()
                } else {
                    line
                };
                Ok(Some(parse_line(&line, &self.dialect)))
            }
            Some(Err(error)) => Err(DelimitedError::Io(error)),
            None => Ok(None),
        }
    }
}

/// A builder for configuring line-oriented reading.
///
/// # Default Configuration
///
/// - Separator: comma (,)
/// - Quote: double quote (")
#[derive(Default)]
pub struct DelimitedReaderBuilder {
    dialect: Dialect,
}

impl DelimitedReaderBuilder {
    pub fn new() -> Self {
        Self {
            dialect: Dialect::default(),
        }
    }

    /// Sets the field separator.
    pub fn separator(mut self, separator: char) -> Self {
        self.dialect.separator = separator;
        self
    }

    /// Sets the quote character stripped from field ends.
    pub fn quote(mut self, quote: char) -> Self {
        self.dialect.quote = quote;
        self
    }

    /// Replaces the whole dialect. The terminator is ignored when reading.
    pub fn dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Creates a `DelimitedReader` over any buffered source.
    pub fn from_reader<R: BufRead>(self, rdr: R) -> DelimitedReader<R> {
        DelimitedReader {
            lines: RefCell::new(rdr.lines()),
            dialect: self.dialect,
            first_line: Cell::new(true),
        }
    }

    /// Creates a `DelimitedReader` over the file at `path`.
    ///
    /// # Errors
    ///
    /// - `DelimitedError::FileNotFound` if `path` is not an existing regular file
    /// - `DelimitedError::Io` if the file exists but cannot be opened
    pub fn from_path<P: AsRef<Path>>(
        self,
        path: P,
    ) -> Result<DelimitedReader<BufReader<File>>, DelimitedError> {
        let file_path = path.as_ref();

        if !file_path.is_file() {
            error!("File not found: {}", file_path.display());
            return Err(DelimitedError::FileNotFound(file_path.to_path_buf()));
        }

        let file = File::open(file_path).map_err(|e| {
            error!("Failed to open file {}: {}", file_path.display(), e);
            DelimitedError::Io(e)
        })?;

        debug!("Reading delimited file {}", file_path.display());

        Ok(self.from_reader(BufReader::new(file)))
    }
}
