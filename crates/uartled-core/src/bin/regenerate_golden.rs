//! Rewrite `tests/golden/<case>/expected_report.json` from `input.frames`.
//!
//! Usage: `regenerate_golden [case...]`, run from the workspace root. Without
//! arguments every case directory is regenerated.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use uartled_core::{CaptureFileSource, analyze_source};

const GOLDEN_DIR: &str = "tests/golden";
const INPUT: &str = "input.frames";
const EXPECTED: &str = "expected_report.json";

fn main() -> ExitCode {
    let cases: Vec<String> = std::env::args().skip(1).collect();
    match run(&cases) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(1)
        }
    }
}

fn run(cases: &[String]) -> Result<(), String> {
    let root = PathBuf::from(GOLDEN_DIR);
    let dirs = if cases.is_empty() {
        let mut dirs = Vec::new();
        for entry in fs::read_dir(&root).map_err(|err| format!("{}: {err}", root.display()))? {
            let path = entry.map_err(|err| err.to_string())?.path();
            if path.join(INPUT).is_file() {
                dirs.push(path);
            }
        }
        dirs.sort();
        dirs
    } else {
        cases.iter().map(|case| root.join(case)).collect()
    };

    for dir in dirs {
        regenerate_case(&dir)?;
    }
    Ok(())
}

fn regenerate_case(dir: &Path) -> Result<(), String> {
    let input = dir.join(INPUT);
    let source =
        CaptureFileSource::open(&input).map_err(|err| format!("{}: {err}", input.display()))?;
    let report =
        analyze_source(&input, source).map_err(|err| format!("{}: {err}", input.display()))?;

    let mut json = serde_json::to_string_pretty(&report).map_err(|err| err.to_string())?;
    json.push('\n');
    let output = dir.join(EXPECTED);
    fs::write(&output, json).map_err(|err| format!("{}: {err}", output.display()))?;

    if let Some(summary) = report.capture_summary {
        println!(
            "{}: {} frames, {} decoded, {} rejected",
            dir.display(),
            summary.frames_total,
            summary.frames_decoded,
            summary.frames_rejected
        );
    }
    Ok(())
}
