//! Result formatting and log append
//!
//! Prints the selected metrics joined by `;` in fixed [lines, size] order
//! and, when a log file is given, appends one `YYYY-MM-DD;<metrics>` record.
//! A failed append is reported but never fails the run.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use chrono::Local;
use tracing::warn;

use crate::cli::args::Options;

#[cfg(windows)]
const LINE_TERMINATOR: &str = "\r\n";
#[cfg(not(windows))]
const LINE_TERMINATOR: &str = "\n";

/// Print the selected metrics and append the optional log record.
pub fn report(options: Options, lines: u64, size: u64, log_file: Option<&Path>) {
    let info = selected(options, lines, size);
    println!("{}", info.join(";"));

    if let Some(log_file) = log_file {
        if let Err(e) = append_log(log_file, &info) {
            warn!(path = %log_file.display(), error = %e, "log append failed");
            println!("Error saving to {}: {}", log_file.display(), e);
        }
    }
}

/// Metrics selected by `options`, in fixed [lines, size] order.
fn selected(options: Options, lines: u64, size: u64) -> Vec<String> {
    let mut info = Vec::new();
    if options.lines {
        info.push(lines.to_string());
    }
    if options.size {
        info.push(size.to_string());
    }
    info
}

/// Append one dated record, creating the file if absent.
fn append_log(path: &Path, info: &[String]) -> std::io::Result<()> {
    let mut record = vec![Local::now().format("%Y-%m-%d").to_string()];
    record.extend_from_slice(info);

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    write!(file, "{}{}", record.join(";"), LINE_TERMINATOR)
}
