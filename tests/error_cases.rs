mod common;

use std::{
    fs,
    io::{self, ErrorKind},
};

use common::{mocks::MockSink, row};
use csv_handler::{
    core::{dialect::Dialect, table::RowWriter},
    item::delimited::delimited_writer::DelimitedWriterBuilder,
    table::DelimitedTable,
    DelimitedError,
};
use tempfile::tempdir;

#[test]
fn failing_sink_should_surface_io_error() {
    let mut sink = MockSink::new();
    sink.expect_write()
        .returning(|_| Err(io::Error::new(ErrorKind::Other, "disk full")));
    sink.expect_flush().returning(|| Ok(()));

    let writer = DelimitedWriterBuilder::new()
        .header(row(&["id"]))
        .from_writer(sink)
        .unwrap();

    writer.write(&[row(&["1"]), row(&["2"])]).unwrap();
    let result = writer.flush();

    match result {
        Err(DelimitedError::Io(error)) => {
            assert_eq!(error.kind(), ErrorKind::Other);
            assert_eq!(error.to_string(), "disk full");
        }
        other => panic!("expected Io error, got {:?}", other),
    }
}

#[test]
fn write_into_missing_directory_should_fail() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("no_such_dir").join("out.csv");

    let result = DelimitedTable::write(&path, &[row(&["a"])], None, &Dialect::default());

    match result {
        Err(DelimitedError::Io(error)) => assert_eq!(error.kind(), ErrorKind::NotFound),
        other => panic!("expected Io error, got {:?}", other),
    }
    assert!(!path.exists());
}

#[test]
fn write_onto_directory_should_fail() {
    let dir = tempdir().unwrap();

    let result = DelimitedTable::write(dir.path(), &[row(&["a"])], None, &Dialect::default());

    assert!(matches!(result, Err(DelimitedError::Io(_))));
}

#[test]
fn read_of_directory_should_be_not_found() {
    let dir = tempdir().unwrap();

    let result = DelimitedTable::read(dir.path(), &Dialect::default());

    assert!(matches!(result, Err(DelimitedError::FileNotFound(_))));
}

#[test]
fn invalid_utf8_content_should_be_io_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("binary.csv");
    fs::write(&path, [b'a', b',', 0xff, b'\n']).unwrap();

    let result = DelimitedTable::read(&path, &Dialect::default());

    match result {
        Err(DelimitedError::Io(error)) => assert_eq!(error.kind(), ErrorKind::InvalidData),
        other => panic!("expected Io error, got {:?}", other),
    }
}

#[test]
fn error_messages_should_name_the_problem() {
    let not_found = DelimitedError::FileNotFound("data/missing.csv".into());
    assert_eq!(not_found.to_string(), "File not found: data/missing.csv");

    let invalid = DelimitedError::InvalidDialect("separator '§' is not an ASCII character".into());
    assert_eq!(
        invalid.to_string(),
        "Invalid dialect: separator '§' is not an ASCII character"
    );
}
