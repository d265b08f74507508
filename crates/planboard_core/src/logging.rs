//! Logging bootstrap for planboard binaries.
//!
//! # Responsibility
//! - Start the `flexi_logger` backend once per process, writing either to
//!   stderr or to size-rotated files in a log directory.
//! - Record panics as one-line metadata events before the default hook runs.
//!
//! # Invariants
//! - Repeating `init_logging` with the same level and target is a no-op.
//! - A different level or target after startup is an error, never a switch.
//! - Nothing in here panics.
//! - Planning log lines carry ids and counts only, never names or URLs.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{error, info, LevelFilter};
use once_cell::sync::OnceCell;
use std::panic::PanicHookInfo;
use std::path::PathBuf;
use std::str::FromStr;

const LOG_FILE_BASENAME: &str = "planboard";
const ROTATE_AT_BYTES: u64 = 5 * 1024 * 1024;
const KEPT_LOG_FILES: usize = 5;
const PANIC_PAYLOAD_LIMIT: usize = 160;

static ACTIVE_LOGGER: OnceCell<ActiveLogger> = OnceCell::new();
static PANIC_HOOK: OnceCell<()> = OnceCell::new();

/// Where log records go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// Absolute directory for rotated `planboard*.log` files.
    Directory(PathBuf),
}

impl LogTarget {
    /// `None` selects stderr; `Some` must name an absolute directory.
    pub fn from_option(log_dir: Option<&str>) -> Result<Self, String> {
        let Some(raw) = log_dir else {
            return Ok(Self::Stderr);
        };
        let dir = PathBuf::from(raw.trim());
        if dir.as_os_str().is_empty() {
            Err("log directory must not be blank".to_string())
        } else if dir.is_relative() {
            Err(format!("log directory `{}` is not absolute", dir.display()))
        } else {
            Ok(Self::Directory(dir))
        }
    }

    fn label(&self) -> String {
        match self {
            Self::Stderr => "stderr".to_string(),
            Self::Directory(dir) => dir.display().to_string(),
        }
    }
}

struct ActiveLogger {
    level: LevelFilter,
    target: LogTarget,
    _handle: LoggerHandle,
}

/// Starts logging, or confirms the already running configuration.
///
/// # Errors
/// - Unknown `level` (accepted: `trace|debug|info|warn|error`, plus `warning`).
/// - The log directory cannot be created.
/// - Logging already runs with another level or target.
/// - `flexi_logger` refuses to start.
pub fn init_logging(level: &str, target: LogTarget) -> Result<(), String> {
    let level = parse_level(level)?;
    let active = ACTIVE_LOGGER.get_or_try_init(|| start(level, &target))?;

    match (active.level == level, active.target == target) {
        (true, true) => Ok(()),
        (_, false) => Err(format!(
            "logging already writes to `{}`; refusing to switch to `{}`",
            active.target.label(),
            target.label()
        )),
        (false, true) => Err(format!(
            "logging already runs at `{}`; refusing to switch to `{}`",
            level_name(active.level),
            level_name(level)
        )),
    }
}

/// Running `(level, target)`, or `None` before `init_logging` succeeded.
pub fn logging_status() -> Option<(&'static str, LogTarget)> {
    ACTIVE_LOGGER
        .get()
        .map(|active| (level_name(active.level), active.target.clone()))
}

/// `debug` in debug builds, `info` otherwise.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn start(level: LevelFilter, target: &LogTarget) -> Result<ActiveLogger, String> {
    let level_str = level_name(level);
    let logger = Logger::try_with_str(level_str).map_err(|err| format!("bad log level `{level_str}`: {err}"))?;

    let logger = match target {
        LogTarget::Stderr => logger
            .log_to_stderr()
            .format_for_stderr(flexi_logger::default_format),
        LogTarget::Directory(dir) => {
            std::fs::create_dir_all(dir)
                .map_err(|err| format!("cannot create log directory `{}`: {err}", dir.display()))?;
            logger
                .log_to_file(FileSpec::default().directory(dir).basename(LOG_FILE_BASENAME))
                .rotate(
                    Criterion::Size(ROTATE_AT_BYTES),
                    Naming::Numbers,
                    Cleanup::KeepLogFiles(KEPT_LOG_FILES),
                )
                .write_mode(WriteMode::BufferAndFlush)
                .append()
                .format_for_files(flexi_logger::detailed_format)
        }
    };

    let handle = logger
        .start()
        .map_err(|err| format!("logger did not start: {err}"))?;
    hook_panics();

    info!(
        "event=logging_started module=logging status=ok level={} target={} version={}",
        level_str,
        target.label(),
        env!("CARGO_PKG_VERSION")
    );

    Ok(ActiveLogger {
        level,
        target: target.clone(),
        _handle: handle,
    })
}

fn parse_level(raw: &str) -> Result<LevelFilter, String> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("warning") {
        return Ok(LevelFilter::Warn);
    }
    match LevelFilter::from_str(raw) {
        Ok(LevelFilter::Off) | Err(_) => Err(format!(
            "log level `{raw}` is not one of trace|debug|info|warn|error"
        )),
        Ok(level) => Ok(level),
    }
}

fn level_name(level: LevelFilter) -> &'static str {
    match level {
        LevelFilter::Off => "off",
        LevelFilter::Error => "error",
        LevelFilter::Warn => "warn",
        LevelFilter::Info => "info",
        LevelFilter::Debug => "debug",
        LevelFilter::Trace => "trace",
    }
}

fn hook_panics() {
    if PANIC_HOOK.set(()).is_err() {
        return;
    }
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let (location, payload) = describe_panic(info);
        error!(
            "event=panic module=core status=error location={} payload={}",
            location, payload
        );
        default_hook(info);
    }));
}

fn describe_panic(info: &PanicHookInfo<'_>) -> (String, String) {
    let location = match info.location() {
        Some(location) => format!("{}:{}", location.file(), location.line()),
        None => "unknown".to_string(),
    };
    let payload = info
        .payload()
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| info.payload().downcast_ref::<String>().map(String::as_str))
        .unwrap_or("<opaque payload>");
    (location, single_line(payload, PANIC_PAYLOAD_LIMIT))
}

/// Flattens control characters and caps the length.
fn single_line(text: &str, limit: usize) -> String {
    let mut line: String = text
        .chars()
        .map(|ch| if ch.is_control() { ' ' } else { ch })
        .take(limit)
        .collect();
    if text.chars().nth(limit).is_some() {
        line.push('…');
    }
    line
}
