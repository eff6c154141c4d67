#![cfg_attr(docsrs, feature(doc_cfg))]

/*!
 # CSV Handler

 A small toolkit for reading delimited text files into rows of strings and
 appending rows of strings back to delimited text files.

 ## Core Concepts

- **Dialect:** the separator (default `,`), the quote character (default `"`)
  and the line terminator used when writing.
- **Row / Table:** a row is a `Vec<String>`, a table is a `Vec<Row>`. Rows may
  have differing field counts.
- **RowReader / RowWriter:** the traits implemented by every reader and writer.
- **DelimitedTable:** the whole-file `read` and `write` operations.

 ## File Format

 One record per line. On read, each line is split on the separator (quotes do
 not protect separators) and every field is trimmed of whitespace, then of any
 leading or trailing quote characters, then of whitespace again. On write, a
 field containing the separator, the quote character or any whitespace is
 wrapped in quote characters; quotes inside a field are not escaped. The
 format is therefore not RFC 4180, and round-trips only hold for fields
 without those characters.

 ## Features

| **Feature**   | **Description**                                               |
|---------------|---------------------------------------------------------------|
| quote-aware   | Enables a quote-aware `RowReader` backed by the `csv` crate   |
| full          | Enables all available features                                |

 ## Getting Started

```rust
# use csv_handler::{core::dialect::{Dialect, LineTerminator}, table::DelimitedTable, DelimitedError};
# fn main() -> Result<(), Box<dyn std::error::Error>> {
let dir = tempfile::tempdir()?;
let path = dir.path().join("cities.csv");
let dialect = Dialect::default().with_terminator(LineTerminator::Lf);

let header = vec!["city".to_string(), "state".to_string()];
let rows = vec![
    vec!["New York".to_string(), "NY".to_string()],
    vec!["Boston".to_string(), "MA".to_string()],
];

// The header is written because the file does not exist yet.
DelimitedTable::write(&path, &rows, Some(header.as_slice()), &dialect)?;
assert_eq!(
    std::fs::read_to_string(&path)?,
    "city,state\n\"New York\",NY\nBoston,MA\n"
);

let table = DelimitedTable::read(&path, &dialect)?;
assert_eq!(table[1], vec!["New York", "NY"]);

let missing = DelimitedTable::read(dir.path().join("nope.csv"), &dialect);
assert!(matches!(missing, Err(DelimitedError::FileNotFound(_))));
# Ok(())
# }
```

 ## License
 Licensed under either of

 -   Apache License, Version 2.0
     ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
 -   MIT license
     ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)

 at your option.
 */

/// Core types: dialect, rows and the reader / writer traits
pub mod core;

/// Error types for table operations
pub mod error;

#[doc(inline)]
pub use error::*;

/// Set of row readers / writers
pub mod item;

/// Whole-file read and write operations
pub mod table;
