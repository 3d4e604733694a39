//! Console Logger
//!
//! A `tracing-subscriber` fmt layer for the browser build. Each event is
//! written to the browser console (stderr natively) and into a circular
//! buffer of recent lines. `log` records are bridged through `tracing-log`,
//! so crates using the `log` macros end up here too.

use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex, OnceLock};

use thiserror::Error;
use tracing::Subscriber;
use tracing_log::{AsTrace, LogTracer};
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;

/// Lines kept in the circular buffer by [`init_logger`]
pub const DEFAULT_CAPACITY: usize = 200;

const TIME_FORMAT: &str = "%H:%M:%S%.3f";

static RECENT: OnceLock<RecentLines> = OnceLock::new();

#[derive(Debug, Error)]
pub enum InitError {
    #[error("log bridge already installed: {0}")]
    LogBridge(#[from] log::SetLoggerError),
    #[error("global subscriber already set: {0}")]
    Subscriber(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Bounded history of formatted lines, shared between clones
#[derive(Debug, Clone)]
pub struct RecentLines {
    lines: Arc<Mutex<VecDeque<String>>>,
    capacity: usize,
}

impl RecentLines {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            lines: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    /// Oldest first
    pub fn snapshot(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.iter().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    fn push(&self, line: String) {
        if let Ok(mut lines) = self.lines.lock() {
            if lines.len() == self.capacity {
                lines.pop_front();
            }
            lines.push_back(line);
        }
    }
}

/// Collects one formatted event and hands it to the buffer when dropped
pub struct LineWriter {
    sink: RecentLines,
    pending: Vec<u8>,
}

impl io::Write for LineWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.pending.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for LineWriter {
    fn drop(&mut self) {
        let text = String::from_utf8_lossy(&self.pending);
        for line in text.lines().filter(|l| !l.trim().is_empty()) {
            self.sink.push(line.to_string());
        }
    }
}

impl<'a> MakeWriter<'a> for RecentLines {
    type Writer = LineWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LineWriter {
            sink: self.clone(),
            pending: Vec::new(),
        }
    }
}

/// fmt layer teeing into `console` and `recent`, filtered at `level`
pub fn build_subscriber<W>(
    level: log::LevelFilter,
    recent: RecentLines,
    console: W,
) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let layer = fmt::layer()
        .with_ansi(false)
        .with_timer(ChronoLocal::new(TIME_FORMAT.to_string()))
        .with_writer(console.and(recent));
    tracing_subscriber::registry()
        .with(layer)
        .with(level.as_trace())
}

#[cfg(target_arch = "wasm32")]
fn console_writer() -> tracing_web::MakeWebConsoleWriter {
    tracing_web::MakeWebConsoleWriter::new()
}

#[cfg(not(target_arch = "wasm32"))]
fn console_writer() -> fn() -> io::Stderr {
    io::stderr
}

/// Install the global subscriber and the `log` bridge. A second call fails.
pub fn init_logger(app_name: &str, level: log::LevelFilter) -> Result<(), InitError> {
    let recent = RECENT
        .get_or_init(|| RecentLines::new(DEFAULT_CAPACITY))
        .clone();
    LogTracer::init_with_filter(level)?;
    tracing::subscriber::set_global_default(build_subscriber(level, recent, console_writer()))?;
    tracing::info!(app = app_name, %level, "logger ready");
    Ok(())
}

/// Lines buffered by the global subscriber (empty before [`init_logger`])
pub fn recent_lines() -> Vec<String> {
    RECENT.get().map(RecentLines::snapshot).unwrap_or_default()
}
