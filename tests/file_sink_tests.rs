use std::fs;

use rstest::rstest;
use tempfile::tempdir;
use vitalsink::{FileSink, OutputSink, SinkError, VitalsRecord};

#[rstest]
fn file_sink_writes_lines_to_disk() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("vitals.csv");

    let sink = FileSink::create(&path).expect("create sink");
    sink.output(&VitalsRecord::new(1, 1000, "ECG", "0.5"));
    sink.output(&VitalsRecord::new(2, 2000, "BloodPressure", "120/80"));
    drop(sink); // join the worker so the file is complete

    let contents = fs::read_to_string(&path).expect("read output file");
    assert_eq!(contents, "1,1000,ECG,0.5\n2,2000,BloodPressure,120/80\n");
}

#[rstest]
fn append_mode_keeps_existing_lines() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("vitals.csv");

    let sink = FileSink::create(&path).expect("create sink");
    sink.output(&VitalsRecord::new(1, 1000, "ECG", "0.5"));
    drop(sink);

    let sink = FileSink::append(&path).expect("reopen sink");
    sink.output(&VitalsRecord::new(1, 1001, "ECG", "0.6"));
    drop(sink);

    let contents = fs::read_to_string(&path).expect("read output file");
    assert_eq!(contents, "1,1000,ECG,0.5\n1,1001,ECG,0.6\n");
}

#[rstest]
fn file_sink_debug_names_the_type() {
    let dir = tempdir().expect("create temp dir");
    let sink = FileSink::create(dir.path().join("vitals.csv")).expect("create sink");
    assert!(format!("{sink:?}").starts_with("FileSink"));
}

#[rstest]
fn create_surfaces_open_failures() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("missing").join("vitals.csv");

    let err = FileSink::create(&path).expect_err("parent directory does not exist");
    assert!(matches!(err, SinkError::Io(_)));
}
