//! Append-only run logs: per-call errors and the end-of-run summary.
//!
//! [`RunLog`] opens `error.log` and `app.log` in the log directory when a
//! run starts and keeps them until it is closed or dropped. Each record is
//! one line, flushed immediately:
//!
//! ```text
//! 2026-10-15T09:30:00+09:00: Daum 날씨: transport error: ... (File: src/pipeline.rs, Line: 88, IP: 192.168.0.12)
//! 2026-10-15T09:30:02+09:00: total suggestions: 42, IP: 192.168.0.12
//! ```
//!
//! Both logs are best-effort. A file that cannot be opened or written is
//! reported on the console through `tracing` and the run carries on.

use std::fs::{self, File};
use std::io::{self, Write};
use std::net::{IpAddr, Ipv4Addr, UdpSocket};
use std::panic::Location;
use std::path::Path;

use chrono::{DateTime, Local, SecondsFormat, TimeZone};

/// File name of the per-call error log.
pub const ERROR_LOG_FILE: &str = "error.log";

/// File name of the run summary log.
pub const SUMMARY_LOG_FILE: &str = "app.log";

/// Sink for run errors and the run summary.
///
/// Passed explicitly into the pipeline; implementations must not fail the
/// caller.
pub trait RunLogger {
    /// Record a failure that happened at `location`.
    fn error(&mut self, message: &str, location: &'static Location<'static>);

    /// Record the number of exported suggestions for the finished run.
    fn summary(&mut self, total: usize);
}

/// File-backed [`RunLogger`].
pub struct RunLog {
    errors: Option<File>,
    summaries: Option<File>,
    ip: String,
}

impl RunLog {
    /// Open (or create) both log files in `log_dir` for appending.
    ///
    /// Never fails: a log that cannot be opened is disabled with a console
    /// warning.
    pub fn open(log_dir: &Path) -> Self {
        if let Err(e) = fs::create_dir_all(log_dir) {
            tracing::warn!(dir = %log_dir.display(), error = %e, "cannot create log directory");
        }
        let ip = local_ipv4().map_or_else(|| "unknown".to_string(), |ip| ip.to_string());
        Self {
            errors: open_append(&log_dir.join(ERROR_LOG_FILE)),
            summaries: open_append(&log_dir.join(SUMMARY_LOG_FILE)),
            ip,
        }
    }

    /// Flush and close both logs.
    pub fn close(mut self) {
        for file in [self.errors.take(), self.summaries.take()].into_iter().flatten() {
            if let Err(e) = file.sync_all() {
                tracing::warn!(error = %e, "cannot sync run log");
            }
        }
    }
}

impl RunLogger for RunLog {
    fn error(&mut self, message: &str, location: &'static Location<'static>) {
        let line = format_error_line(&Local::now(), message, location, &self.ip);
        append_line(&mut self.errors, ERROR_LOG_FILE, &line);
    }

    fn summary(&mut self, total: usize) {
        let line = format_summary_line(&Local::now(), total, &self.ip);
        append_line(&mut self.summaries, SUMMARY_LOG_FILE, &line);
    }
}

fn open_append(path: &Path) -> Option<File> {
    match fs::OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => Some(file),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "cannot open run log");
            None
        }
    }
}

fn append_line(file: &mut Option<File>, name: &str, line: &str) {
    let Some(f) = file.as_mut() else {
        return;
    };
    let written = writeln!(f, "{line}").and_then(|()| f.flush());
    if let Err(e) = written {
        tracing::warn!(log = name, error = %e, "cannot write run log");
    }
}

/// Format an error record: `<RFC3339>: <message> (File: <file>, Line: <line>, IP: <ip>)`.
pub fn format_error_line<Tz: TimeZone>(
    at: &DateTime<Tz>,
    message: &str,
    location: &Location<'_>,
    ip: &str,
) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!(
        "{}: {message} (File: {}, Line: {}, IP: {ip})",
        at.to_rfc3339_opts(SecondsFormat::Secs, true),
        location.file(),
        location.line(),
    )
}

/// Format a summary record: `<RFC3339>: total suggestions: <n>, IP: <ip>`.
pub fn format_summary_line<Tz: TimeZone>(at: &DateTime<Tz>, total: usize, ip: &str) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!(
        "{}: total suggestions: {total}, IP: {ip}",
        at.to_rfc3339_opts(SecondsFormat::Secs, true)
    )
}

/// First non-loopback IPv4 address of this host.
///
/// Asks the OS which local address would route to a public host; a UDP
/// `connect` sends no packets.
pub fn local_ipv4() -> Option<Ipv4Addr> {
    probe_local_ipv4().ok().flatten()
}

fn probe_local_ipv4() -> io::Result<Option<Ipv4Addr>> {
    let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0))?;
    socket.connect((Ipv4Addr::new(8, 8, 8, 8), 80))?;
    Ok(match socket.local_addr()?.ip() {
        IpAddr::V4(ip) if !ip.is_loopback() && !ip.is_unspecified() => Some(ip),
        _ => None,
    })
}
