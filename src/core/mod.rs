/// Field layout configuration: separator, quote character and line terminator.
pub mod dialect;

/// Row and table types, plus the reader / writer traits.
pub mod table;
