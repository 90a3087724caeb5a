use std::fs;
use std::io::Cursor;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use uartled_core::{
    CaptureFileSource, CaptureSource, FrameProtocol, FrameSource, SourceError,
    analyze_capture_file,
};

fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
}

#[test]
fn capture_source_reads_frames_from_fixture() {
    let path = repo_root()
        .join("tests")
        .join("golden")
        .join("binary")
        .join("input.frames");
    let mut source = CaptureFileSource::open(&path).unwrap();

    let mut frames = 0;
    while let Some(event) = source.next_frame().unwrap() {
        assert_eq!(event.protocol, FrameProtocol::Binary);
        assert!(event.ts.is_some());
        frames += 1;
    }

    assert_eq!(frames, 8);
}

#[test]
fn capture_source_reports_line_numbers() {
    let capture = "# header\n\nbin 00 01\r\ntxt esp led1 on\n";
    let mut source = CaptureSource::new(Cursor::new(capture));

    let first = source.next_frame().unwrap().unwrap();
    assert_eq!(first.line, 3);
    assert_eq!(first.data, vec![0x00, 0x01]);

    let second = source.next_frame().unwrap().unwrap();
    assert_eq!(second.line, 4);
    assert_eq!(second.protocol, FrameProtocol::Text);

    assert!(source.next_frame().unwrap().is_none());
}

#[test]
fn capture_source_rejects_malformed_line() {
    let mut source = CaptureSource::new(Cursor::new("bin 00 01\nbin 0q\n"));
    assert!(source.next_frame().unwrap().is_some());

    let err = source.next_frame().unwrap_err();
    assert!(matches!(err, SourceError::Capture { line: 2, .. }));
    assert!(err.to_string().contains("invalid hex byte '0q'"));
}

fn temp_capture_path(prefix: &str) -> PathBuf {
    let unique = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("{prefix}_{unique}.frames"))
}

#[test]
fn capture_source_keeps_non_utf8_text_payload() {
    let capture: &[u8] = b"bin 00 00\ntxt esp led1 \xff\n\tbin 03 01\n";
    let mut source = CaptureSource::new(Cursor::new(capture));

    assert_eq!(source.next_frame().unwrap().unwrap().data, vec![0x00, 0x00]);

    let garbage = source.next_frame().unwrap().unwrap();
    assert_eq!(garbage.line, 2);
    assert_eq!(garbage.protocol, FrameProtocol::Text);
    assert_eq!(garbage.data, b"esp led1 \xff".to_vec());

    let last = source.next_frame().unwrap().unwrap();
    assert_eq!(last.line, 3);
    assert_eq!(last.data, vec![0x03, 0x01]);
    assert!(source.next_frame().unwrap().is_none());
}

#[test]
fn replay_survives_non_utf8_line() {
    let path = temp_capture_path("uartled_garbage");
    fs::write(&path, b"bin 00 00\ntxt esp led1 \xff\n1700000000\tbin 03 01\n").unwrap();

    let report = analyze_capture_file(&path);
    let _ = fs::remove_file(&path);
    let report = report.unwrap();

    let summary = report.capture_summary.unwrap();
    assert_eq!(summary.frames_total, 3);
    assert_eq!(summary.frames_decoded, 2);
    assert_eq!(summary.frames_rejected, 1);
    assert_eq!(report.rejections[0].id, "UL-TEXT-STATE");
    assert_eq!(report.rejections[0].examples.len(), 1);
    assert!(report.rejections[0].examples[0].starts_with("line 2: "));
}

#[test]
fn capture_source_rejects_missing_file() {
    let path = temp_capture_path("uartled_missing");
    let _ = fs::remove_file(&path);

    let err = match CaptureFileSource::open(&path) {
        Ok(_) => panic!("expected missing file to be rejected"),
        Err(err) => err,
    };
    assert!(matches!(err, SourceError::Io(_)));
}
