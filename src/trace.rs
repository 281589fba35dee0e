//! Tracing infrastructure for step-by-step run comparison.
//!
//! When the `trace` feature is enabled, the driver writes one tagged line per
//! algorithm event to a `TraceWriter`. Two runs with the same objective, domain
//! and round count must produce identical traces, which makes the trace a
//! convenient regression artifact.
//!
//! The trace output format is a series of tagged lines:
//! ```text
//! TRACE INIT dim=<n> radius=<r> f=<val>
//! TRACE ITER t=<n> pool=<size> selected=<count> minf=<val> nfev=<n>
//! TRACE SELECT j=<n> rect=<idx> radius=<r> f=<val>
//! TRACE DIVIDE rect=<idx> axis=<d> left=<idx> right=<idx>
//! TRACE ENDITER t=<n> minf=<val> minpos=<idx> nfev=<n>
//! ```

use std::fmt::Write as FmtWrite;
use std::io::Write;
use std::sync::{Mutex, MutexGuard};

/// A thread-safe buffer that collects trace lines.
pub struct TraceWriter {
    buffer: Mutex<String>,
}

impl TraceWriter {
    pub fn new() -> Self {
        Self {
            buffer: Mutex::new(String::with_capacity(64 * 1024)),
        }
    }

    // Lines are pushed whole, so a poisoned buffer is still consistent.
    fn lock(&self) -> MutexGuard<'_, String> {
        self.buffer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Write a trace line.
    pub fn write_line(&self, line: &str) {
        let mut buf = self.lock();
        buf.push_str(line);
        buf.push('\n');
    }

    /// Write a trace line using format args.
    pub fn write_fmt(&self, args: std::fmt::Arguments<'_>) {
        let mut buf = self.lock();
        let _ = buf.write_fmt(args);
        buf.push('\n');
    }

    /// Get all collected trace output.
    pub fn get_output(&self) -> String {
        self.lock().clone()
    }

    /// Get trace output as a vector of lines.
    pub fn get_lines(&self) -> Vec<String> {
        self.lock().lines().map(|s| s.to_string()).collect()
    }

    /// Also write trace output to stderr for debugging.
    pub fn dump_to_stderr(&self) {
        let buf = self.lock();
        let _ = std::io::stderr().write_all(buf.as_bytes());
    }
}

impl Default for TraceWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Macro for conditional trace output (only active with `trace` feature).
#[cfg(feature = "trace")]
#[macro_export]
macro_rules! trace_write {
    ($tracer:expr, $($arg:tt)*) => {
        if let Some(ref tw) = $tracer {
            tw.write_fmt(format_args!($($arg)*));
        }
    };
}

/// No-op when trace feature is disabled. Arguments are still type-checked.
#[cfg(not(feature = "trace"))]
#[macro_export]
macro_rules! trace_write {
    ($tracer:expr, $($arg:tt)*) => {
        if false {
            let _ = &$tracer;
            let _ = format_args!($($arg)*);
        }
    };
}
