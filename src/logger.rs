//! SwapLens logger with file persistence.
//!
//! Dual output: colored console lines and clean text lines appended to a
//! per-start file under `logs/`. Console and file lines are rendered from
//! the same components but independently, so color codes never reach the
//! file and nothing has to be stripped back out. Stale log files are
//! pruned once at startup, keyed on the timestamp embedded in their file
//! name rather than filesystem metadata.
//!
//! ## Usage:
//! ```rust
//! use swaplens::logger::{log, LogTag, init_file_logging};
//!
//! init_file_logging();
//! log(LogTag::Parser, "INFO", "Parsed transaction");
//! ```

use chrono::{ Duration, Local, NaiveDateTime };
use colored::*;
use once_cell::sync::Lazy;
use std::fs::{ self, File, OpenOptions };
use std::io::{ BufWriter, Write };
use std::path::{ Path, PathBuf };
use std::sync::Mutex;

/// Set to false to disable the log file entirely
const ENABLE_FILE_LOGGING: bool = true;

/// Log files older than this are pruned at startup
const LOG_RETENTION_HOURS: i64 = 24;

/// Timestamp format embedded in log file names
const LOG_NAME_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Fixed console column widths
const TAG_WIDTH: usize = 8;
const TYPE_WIDTH: usize = 8;

/// Append-only sink for the current run's log file
struct LogSink {
    writer: BufWriter<File>,
}

impl LogSink {
    fn open() -> Option<LogSink> {
        let dir = log_directory()?;
        prune_stale_logs(&dir);

        let name = format!("swaplens_{}.log", Local::now().format(LOG_NAME_FORMAT));
        match OpenOptions::new().create(true).append(true).open(dir.join(&name)) {
            Ok(file) => Some(LogSink { writer: BufWriter::new(file) }),
            Err(e) => {
                eprintln!("Failed to open log file {}: {}", name, e);
                None
            }
        }
    }

    fn append(&mut self, line: &str) {
        let _ = writeln!(self.writer, "{}", line);
        let _ = self.writer.flush();
    }
}

/// Global file sink; `None` when file logging is disabled or unavailable
static LOG_SINK: Lazy<Mutex<Option<LogSink>>> = Lazy::new(|| {
    Mutex::new(if ENABLE_FILE_LOGGING { LogSink::open() } else { None })
});

/// Picks `logs/` under the working directory, with the system temp
/// directory as fallback
fn log_directory() -> Option<PathBuf> {
    if let Ok(current) = std::env::current_dir() {
        let dir = current.join("logs");
        if fs::create_dir_all(&dir).is_ok() {
            return Some(dir);
        }
    }

    let fallback = std::env::temp_dir().join("swaplens_logs");
    fs::create_dir_all(&fallback).ok()?;
    Some(fallback)
}

/// The start timestamp baked into a log file name, if the name is ours
fn parse_log_stamp(name: &str) -> Option<NaiveDateTime> {
    let stamp = name.strip_prefix("swaplens_")?.strip_suffix(".log")?;
    NaiveDateTime::parse_from_str(stamp, LOG_NAME_FORMAT).ok()
}

/// Removes log files whose embedded start time is past retention. Files
/// this logger did not name are left alone.
fn prune_stale_logs(dir: &Path) {
    let cutoff = Local::now().naive_local() - Duration::hours(LOG_RETENTION_HOURS);

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => {
            return;
        }
    };

    for entry in entries.flatten() {
        let file_name = entry.file_name();
        if let Some(stamp) = parse_log_stamp(&file_name.to_string_lossy()) {
            if stamp < cutoff {
                if let Err(e) = fs::remove_file(entry.path()) {
                    eprintln!("Failed to remove stale log file {:?}: {}", entry.path(), e);
                }
            }
        }
    }
}

/// Initialize the file logging system
pub fn init_file_logging() {
    Lazy::force(&LOG_SINK);
}

fn append_to_file(line: &str) {
    if let Ok(mut guard) = LOG_SINK.lock() {
        if let Some(sink) = guard.as_mut() {
            sink.append(line);
        }
    }
}

/// Log tags for categorizing log messages.
#[derive(Debug)]
pub enum LogTag {
    Parser,
    Batch,
    Config,
    System,
    Other(String),
}

impl LogTag {
    fn as_str(&self) -> &str {
        match self {
            LogTag::Parser => "PARSER",
            LogTag::Batch => "BATCH",
            LogTag::Config => "CONFIG",
            LogTag::System => "SYSTEM",
            LogTag::Other(s) => s,
        }
    }
}

fn paint_tag(tag: &LogTag, label: &str) -> ColoredString {
    match tag {
        LogTag::Parser => label.bright_magenta().bold(),
        LogTag::Batch => label.bright_cyan().bold(),
        LogTag::Config => label.bright_white().bold(),
        LogTag::System => label.bright_yellow().bold(),
        LogTag::Other(_) => label.white().bold(),
    }
}

fn paint_type(log_type: &str, label: &str) -> ColoredString {
    match log_type.to_uppercase().as_str() {
        "ERROR" | "FAILED" => label.bright_red().bold(),
        "WARN" | "WARNING" => label.bright_yellow().bold(),
        "SUCCESS" => label.bright_green().bold(),
        "INFO" => label.bright_blue().bold(),
        "DEBUG" => label.bright_black().bold(),
        "BUY" => label.bright_cyan().bold(),
        "SELL" => label.bright_magenta().bold(),
        "ERASE" => label.bright_yellow().bold(),
        _ => label.white().bold(),
    }
}

fn paint_message(log_type: &str, message: &str) -> ColoredString {
    match log_type.to_uppercase().as_str() {
        "ERROR" | "FAILED" => message.bright_red(),
        _ => message.bright_white(),
    }
}

/// Logs a message with tag, log type, and message.
pub fn log(tag: LogTag, log_type: &str, message: &str) {
    let tag_label = format!("{:<width$}", tag.as_str(), width = TAG_WIDTH);
    let type_label = format!("{:<width$}", log_type, width = TYPE_WIDTH);

    println!(
        "[{}] [{}] {}",
        paint_tag(&tag, &tag_label),
        paint_type(log_type, &type_label),
        paint_message(log_type, message)
    );

    let stamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    append_to_file(&format!("{} [{}] [{}] {}", stamp, tag.as_str(), log_type, message));
}

/// Logs an INFO message
pub fn info(tag: LogTag, message: &str) {
    log(tag, "INFO", message);
}

/// Logs a WARN message
pub fn warn(tag: LogTag, message: &str) {
    log(tag, "WARN", message);
}

/// Logs an ERROR message
pub fn error(tag: LogTag, message: &str) {
    log(tag, "ERROR", message);
}

/// Logs a SUCCESS message
pub fn success(tag: LogTag, message: &str) {
    log(tag, "SUCCESS", message);
}

// =============================================================================
// Tests
// =============================================================================
