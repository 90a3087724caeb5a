use std::path::Path;

use log::{debug, info, trace};
use thiserror::Error;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use crate::report::{CaptureSummary, DEFAULT_GENERATED_AT, Report, make_stub_report};
use crate::source::{CaptureFileSource, FrameEvent, FrameSource, SourceError};

mod leds;
mod rejections;

use leds::LedBank;
use rejections::RejectionStore;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Source error: {0}")]
    Source(#[from] SourceError),
}

pub fn analyze_capture_file(path: &Path) -> Result<Report, AnalysisError> {
    let source = CaptureFileSource::open(path)?;
    analyze_source(path, source)
}

/// Replay every frame of `source` through its decoder.
///
/// Decoded commands drive a four-LED model; rejected frames change nothing
/// and are aggregated by protocol and error id.
pub fn analyze_source<S: FrameSource>(
    path: &Path,
    mut source: S,
) -> Result<Report, AnalysisError> {
    let mut frames_total = 0u64;
    let mut first_ts = None;
    let mut last_ts = None;
    let mut leds = LedBank::new();
    let mut rejections = RejectionStore::new();

    while let Some(FrameEvent {
        line,
        ts,
        protocol,
        data,
    }) = source.next_frame()?
    {
        frames_total += 1;
        update_ts_bounds(&mut first_ts, &mut last_ts, ts);
        match protocol.decode(&data) {
            Ok(command) => {
                trace!(
                    "line {line}: {protocol} frame -> {} {}",
                    command.led, command.state
                );
                leds.apply(command);
            }
            Err(err) => {
                debug!("line {line}: rejected {protocol} frame: {err}");
                rejections.add(protocol, &err, example_context(line, ts));
            }
        }
    }

    let frames_rejected = rejections.total();
    let frames_decoded = frames_total - frames_rejected;
    info!(
        "replayed {frames_total} frames from {}: {frames_decoded} decoded, {frames_rejected} rejected",
        path.display()
    );

    let mut report = make_stub_report(&path.display().to_string(), path.metadata()?.len());
    report.capture_summary = Some(CaptureSummary {
        frames_total,
        frames_decoded,
        frames_rejected,
        time_start: ts_to_rfc3339(first_ts),
        time_end: ts_to_rfc3339(last_ts),
    });
    report.generated_at = report
        .capture_summary
        .as_ref()
        .and_then(|summary| summary.time_end.clone().or(summary.time_start.clone()))
        .unwrap_or_else(|| DEFAULT_GENERATED_AT.to_string());
    report.leds = leds.summaries();
    report.rejections = rejections.into_summaries();
    Ok(report)
}

fn example_context(line: usize, ts: Option<f64>) -> String {
    match ts_to_rfc3339(ts) {
        Some(ts) => format!("line {line} @ {ts}"),
        None => format!("line {line}"),
    }
}

fn update_ts_bounds(first: &mut Option<f64>, last: &mut Option<f64>, ts: Option<f64>) {
    let Some(ts) = ts else {
        return;
    };
    if first.is_none_or(|existing| ts < existing) {
        *first = Some(ts);
    }
    if last.is_none_or(|existing| ts > existing) {
        *last = Some(ts);
    }
}

fn ts_to_rfc3339(ts: Option<f64>) -> Option<String> {
    let ts = ts?;
    let nanos = (ts * 1_000_000_000.0) as i128;
    OffsetDateTime::from_unix_timestamp_nanos(nanos)
        .ok()
        .and_then(|dt| dt.format(&Rfc3339).ok())
}
