//! Rolling Logger
//!
//! `tracing` subscriber for browser apps. Every formatted line goes to the
//! devtools console (stderr when not on wasm) and into a circular buffer
//! of recent lines that the app can read back.

use std::collections::VecDeque;
use std::io;
use std::sync::{Mutex, OnceLock};

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

/// Logger settings
#[derive(Debug, Clone, Copy)]
pub struct LoggerConfig {
    /// Most verbose level that gets recorded
    pub max_level: Level,
    /// Number of lines kept in the circular buffer
    pub capacity: usize,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            max_level: if cfg!(debug_assertions) { Level::DEBUG } else { Level::INFO },
            capacity: 200,
        }
    }
}

/// Logger initialization failure
#[derive(Debug, Clone)]
pub enum LoggerError {
    /// A global subscriber was already installed
    AlreadyInitialized(String),
}

impl std::fmt::Display for LoggerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoggerError::AlreadyInitialized(msg) => write!(f, "Logger already initialized: {}", msg),
        }
    }
}

impl std::error::Error for LoggerError {}

// ========================
// Circular buffer
// ========================

/// Fixed-capacity line buffer; the oldest line is evicted first
#[derive(Debug, Clone)]
pub struct RingBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl RingBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, line: String) {
        if self.capacity == 0 {
            return;
        }
        while self.lines.len() >= self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    /// Resize, evicting the oldest lines if the buffer shrinks
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
        while self.lines.len() > capacity {
            self.lines.pop_front();
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Lines oldest first
    pub fn lines(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

static BUFFER: OnceLock<Mutex<RingBuffer>> = OnceLock::new();

fn buffer() -> &'static Mutex<RingBuffer> {
    BUFFER.get_or_init(|| Mutex::new(RingBuffer::new(LoggerConfig::default().capacity)))
}

/// Recent log lines, oldest first
pub fn recent_lines() -> Vec<String> {
    buffer().lock().map(|b| b.lines()).unwrap_or_default()
}

// ========================
// Writer
// ========================

/// Collects one formatted event and emits it on drop
pub struct LineWriter {
    level: Level,
    buf: Vec<u8>,
}

impl io::Write for LineWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for LineWriter {
    fn drop(&mut self) {
        let text = String::from_utf8_lossy(&self.buf);
        let line = text.trim_end();
        if line.is_empty() {
            return;
        }
        emit(self.level, line);
        if let Ok(mut buffer) = buffer().lock() {
            buffer.push(line.to_string());
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    match level {
        Level::ERROR => web_sys::console::error_1(&line.into()),
        Level::WARN => web_sys::console::warn_1(&line.into()),
        _ => web_sys::console::log_1(&line.into()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// `MakeWriter` that picks the console method from the event level
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = LineWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LineWriter { level: Level::INFO, buf: Vec::new() }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        LineWriter { level: *meta.level(), buf: Vec::new() }
    }
}

/// Install the global subscriber
pub fn init(config: LoggerConfig) -> Result<(), LoggerError> {
    // The buffer may already exist if something logged before init
    if let Ok(mut buffer) = buffer().lock() {
        buffer.set_capacity(config.capacity);
    }

    tracing_subscriber::fmt()
        .with_max_level(config.max_level)
        .with_writer(ConsoleMakeWriter)
        .with_ansi(false)
        .without_time()
        .with_target(true)
        .try_init()
        .map_err(|e| LoggerError::AlreadyInitialized(e.to_string()))
}
