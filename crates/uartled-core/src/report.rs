use serde::{Deserialize, Serialize};

use crate::command::{Led, LedState};
use crate::protocols::FrameProtocol;

/// Current report schema version.
pub const REPORT_VERSION: u32 = 1;
/// Default timestamp used when no capture time is available.
pub const DEFAULT_GENERATED_AT: &str = "1970-01-01T00:00:00Z";

/// Replay report with deterministic ordering.
///
/// # Examples
/// ```
/// use uartled_core::make_stub_report;
///
/// let report = make_stub_report("bench.frames", 123);
/// assert_eq!(report.report_version, uartled_core::REPORT_VERSION);
/// assert!(report.rejections.is_empty());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Report schema version (not the binary version).
    pub report_version: u32,
    /// Tool identification metadata.
    pub tool: ToolInfo,
    /// RFC3339 timestamp of the last recorded frame, or the epoch.
    pub generated_at: String,
    /// Input capture metadata.
    pub input: InputInfo,
    /// Frame totals (absent on a stub report).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture_summary: Option<CaptureSummary>,
    /// One entry per LED, in `Led1..Led4` order.
    pub leds: Vec<LedSummary>,
    /// Rejected frames grouped by protocol and error id.
    pub rejections: Vec<RejectionSummary>,
}

/// Tool metadata embedded in reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

/// Input capture metadata embedded in reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputInfo {
    /// Input path as provided to the analyzer.
    pub path: String,
    /// Input size in bytes.
    pub bytes: u64,
}

/// Frame totals and time bounds of a capture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureSummary {
    pub frames_total: u64,
    pub frames_decoded: u64,
    pub frames_rejected: u64,
    /// RFC3339 timestamp of the earliest frame (if recorded).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_start: Option<String>,
    /// RFC3339 timestamp of the latest frame (if recorded).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_end: Option<String>,
}

/// Commands applied to one LED during the replay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedSummary {
    pub led: Led,
    /// Number of decoded commands addressed to this LED.
    pub commands: u64,
    /// State after the last command; absent when never commanded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<LedState>,
}

/// Aggregated rejections sharing a protocol and error id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RejectionSummary {
    pub protocol: FrameProtocol,
    /// Stable error identifier (e.g., `UL-FRAME-LED`).
    pub id: String,
    /// Human-readable description of the error class.
    pub message: String,
    pub count: u64,
    /// At most three examples, formatted as `line N[ @ ts]: detail`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<String>,
}

/// Build a stub report with base fields filled and empty aggregates.
pub fn make_stub_report(input_path: &str, input_bytes: u64) -> Report {
    Report {
        report_version: REPORT_VERSION,
        tool: ToolInfo {
            name: "uartled".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        generated_at: DEFAULT_GENERATED_AT.to_string(),
        input: InputInfo {
            path: input_path.to_string(),
            bytes: input_bytes,
        },
        capture_summary: None,
        leds: vec![],
        rejections: vec![],
    }
}
