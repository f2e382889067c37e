//! Structured JSON logging.
//!
//! One event per line, written synchronously. Keys are emitted in a
//! deterministic order: `event` first, `severity` second, then the
//! remaining fields sorted alphabetically, so log lines diff cleanly
//! between runs.

use std::fmt;
use std::io::{self, Write};

/// Log severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Normal operations
    Info = 0,
    /// Recoverable issues
    Warn = 1,
    /// Request failures
    Error = 2,
    /// Unrecoverable faults
    Fatal = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Synchronous JSON line logger
pub struct Logger;

impl Logger {
    pub fn info(event: &str, fields: &[(&str, &str)]) {
        Self::write_line(Severity::Info, event, fields, &mut io::stdout());
    }

    pub fn warn(event: &str, fields: &[(&str, &str)]) {
        Self::write_line(Severity::Warn, event, fields, &mut io::stdout());
    }

    pub fn error(event: &str, fields: &[(&str, &str)]) {
        Self::write_line(Severity::Error, event, fields, &mut io::stderr());
    }

    pub fn fatal(event: &str, fields: &[(&str, &str)]) {
        Self::write_line(Severity::Fatal, event, fields, &mut io::stderr());
    }

    fn write_line<W: Write>(severity: Severity, event: &str, fields: &[(&str, &str)], out: &mut W) {
        let mut line = String::with_capacity(128);

        line.push_str("{\"event\":\"");
        escape_into(&mut line, event);
        line.push_str("\",\"severity\":\"");
        line.push_str(severity.as_str());
        line.push('"');

        let mut ordered: Vec<_> = fields.iter().collect();
        ordered.sort_by_key(|(key, _)| *key);
        for (key, value) in ordered {
            line.push_str(",\"");
            escape_into(&mut line, key);
            line.push_str("\":\"");
            escape_into(&mut line, value);
            line.push('"');
        }

        line.push_str("}\n");

        // One write_all call keeps concurrent lines intact
        let _ = out.write_all(line.as_bytes());
        let _ = out.flush();
    }
}

fn escape_into(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
}

#[cfg(test)]
pub fn capture_log(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
    let mut buffer = Vec::new();
    Logger::write_line(severity, event, fields, &mut buffer);
    String::from_utf8(buffer).unwrap()
}
