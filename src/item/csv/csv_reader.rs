use csv::{ReaderBuilder, StringRecordsIntoIter, Trim};
use std::{cell::RefCell, fs::File, io::Read, path::Path};

use log::{debug, error};

use crate::{
    core::{
        dialect::Dialect,
        table::{RowReader, RowReaderResult},
    },
    error::DelimitedError,
};

/// A quote-aware reader that implements the `RowReader` trait.
///
/// Unlike [`DelimitedReader`](crate::item::delimited::delimited_reader::DelimitedReader),
/// separators inside quoted fields are kept and doubled quotes unescape to a
/// single quote. Parsing is delegated to the `csv` crate.
///
/// # Implementation Details
///
/// - Rows may have differing field counts
/// - Every field is trimmed of surrounding whitespace
/// - Blank lines are skipped and produce no row
///
/// # Examples
///
/// ```
/// use csv_handler::item::csv::csv_reader::CsvRowReaderBuilder;
/// use csv_handler::core::table::RowReader;
///
/// let data = "\"a,b\",c\n\"say \"\"hi\"\"\"\n";
///
/// let reader = CsvRowReaderBuilder::new().from_reader(data.as_bytes()).unwrap();
///
/// assert_eq!(reader.read().unwrap().unwrap(), vec!["a,b", "c"]);
/// assert_eq!(reader.read().unwrap().unwrap(), vec!["say \"hi\""]);
/// assert!(reader.read().unwrap().is_none());
/// ```
pub struct CsvRowReader<R> {
    /// Iterator over the CSV records
    ///
    /// Uses `RefCell` to provide interior mutability so we can iterate
    /// through records behind `&self`.
    records: RefCell<StringRecordsIntoIter<R>>,
}

impl<R: Read> RowReader for CsvRowReader<R> {
    fn read(&self) -> RowReaderResult {
        match self.records.borrow_mut().next() {
            Some(Ok(record)) => Ok(Some(record.iter().map(str::to_string).collect())),
            Some(Err(error)) => Err(DelimitedError::Parse(error.to_string())),
            None => Ok(None),
        }
    }
}

/// A builder for configuring quote-aware reading.
///
/// # Default Configuration
///
/// - Separator: comma (,)
/// - Quote: double quote (")
/// - Headers: none, every record is returned as a row
#[derive(Default)]
pub struct CsvRowReaderBuilder {
    dialect: Dialect,
}

impl CsvRowReaderBuilder {
    pub fn new() -> Self {
        Self {
            dialect: Dialect::default(),
        }
    }

    pub fn separator(mut self, separator: char) -> Self {
        self.dialect.separator = separator;
        self
    }

    pub fn quote(mut self, quote: char) -> Self {
        self.dialect.quote = quote;
        self
    }

    pub fn dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    fn reader_builder(&self) -> Result<ReaderBuilder, DelimitedError> {
        let delimiter = ascii_byte("separator", self.dialect.separator)?;
        let quote = ascii_byte("quote", self.dialect.quote)?;

        let mut builder = ReaderBuilder::new();
        builder
            .trim(Trim::All)
            .delimiter(delimiter)
            .quote(quote)
            .has_headers(false)
            .flexible(true);

        Ok(builder)
    }

    /// Creates a `CsvRowReader` from any source.
    ///
    /// # Errors
    ///
    /// `DelimitedError::InvalidDialect` if the separator or quote is not ASCII.
    pub fn from_reader<R: Read>(self, rdr: R) -> Result<CsvRowReader<R>, DelimitedError> {
        let records = self.reader_builder()?.from_reader(rdr).into_records();

        Ok(CsvRowReader {
            records: RefCell::new(records),
        })
    }

    /// Creates a `CsvRowReader` over the file at `path`.
    ///
    /// # Errors
    ///
    /// - `DelimitedError::InvalidDialect` if the separator or quote is not ASCII
    /// - `DelimitedError::FileNotFound` if `path` is not an existing regular file
    /// - `DelimitedError::Io` if the file cannot be opened
    pub fn from_path<P: AsRef<Path>>(self, path: P) -> Result<CsvRowReader<File>, DelimitedError> {
        let file_path = path.as_ref();

        if !file_path.is_file() {
            error!("File not found: {}", file_path.display());
            return Err(DelimitedError::FileNotFound(file_path.to_path_buf()));
        }

        let file = File::open(file_path).map_err(|e| {
            error!("Failed to open file {}: {}", file_path.display(), e);
            DelimitedError::Io(e)
        })?;

        debug!("Reading quoted CSV file {}", file_path.display());

        self.from_reader(file)
    }
}

fn ascii_byte(name: &str, c: char) -> Result<u8, DelimitedError> {
    if c.is_ascii() {
        Ok(c as u8)
    } else {
        Err(DelimitedError::InvalidDialect(format!(
            "{} {:?} is not an ASCII character",
            name, c
        )))
    }
}
