//! Vault logging bootstrap and privacy policy.
//!
//! # Responsibility
//! - Start the rolling file logger once per process for the vault core.
//! - Capture panics as sanitized, metadata-only events.
//!
//! # Invariants
//! - Same level and directory: repeated init is a no-op.
//! - A different level or directory after init is refused, not applied.
//! - Item names, notes and serial numbers never reach log lines; events
//!   carry ids, counts and status keys only.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{error, info};
use once_cell::sync::OnceCell;
use std::any::Any;
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "proofvault";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
const MAX_LOG_FILES: usize = 5;
const MAX_PANIC_PAYLOAD_CHARS: usize = 160;
const BUILD_PROFILE: &str = if cfg!(debug_assertions) {
    "debug"
} else {
    "release"
};

/// Accepted spellings, matched after trimming and ASCII lowercasing.
const LEVEL_NAMES: [(&str, &str); 6] = [
    ("trace", "trace"),
    ("debug", "debug"),
    ("info", "info"),
    ("warn", "warn"),
    ("warning", "warn"),
    ("error", "error"),
];

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();
static PANIC_HOOK_INSTALLED: OnceCell<()> = OnceCell::new();

struct LoggingState {
    level: &'static str,
    log_dir: PathBuf,
    _logger: LoggerHandle,
}

impl LoggingState {
    /// Err when the active configuration differs from the requested one.
    fn ensure_same(&self, level: &'static str, log_dir: &Path) -> Result<(), String> {
        if self.log_dir != log_dir {
            return Err(format!(
                "logging already initialized at `{}`; refusing to switch to `{}`",
                self.log_dir.display(),
                log_dir.display()
            ));
        }
        if self.level != level {
            return Err(format!(
                "logging already initialized with level `{}`; refusing to switch to `{}`",
                self.level, level
            ));
        }
        Ok(())
    }
}

/// Starts vault logging with a level and an absolute log directory.
///
/// # Errors
/// - Unsupported `level`.
/// - `log_dir` blank, relative, or not creatable.
/// - Logging already active with a different level or directory.
/// - Logger backend fails to start.
pub fn init_logging(level: &str, log_dir: &str) -> Result<(), String> {
    let level = parse_level(level)?;
    let log_dir = absolute_log_dir(log_dir)?;

    if let Some(state) = LOGGING_STATE.get() {
        return state.ensure_same(level, &log_dir);
    }

    let state = LOGGING_STATE.get_or_try_init(|| start_logger(level, &log_dir))?;
    // Another thread may have won the init race with its own config.
    state.ensure_same(level, &log_dir)
}

fn start_logger(level: &'static str, log_dir: &Path) -> Result<LoggingState, String> {
    std::fs::create_dir_all(log_dir).map_err(|err| {
        format!(
            "failed to create log directory `{}`: {err}",
            log_dir.display()
        )
    })?;

    let logger = Logger::try_with_str(level)
        .map_err(|err| format!("invalid log level `{level}`: {err}"))?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir)
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        // [YYYY-MM-DD HH:MM:SS.ffffff TZ] LEVEL [module] file:line: message
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))?;

    install_panic_logging();

    info!(
        "event=vault_start module=logging status=ok platform={} build_mode={} version={}",
        std::env::consts::OS,
        BUILD_PROFILE,
        env!("CARGO_PKG_VERSION")
    );
    info!(
        "event=logging_init module=logging status=ok level={} log_dir={}",
        level,
        log_dir.display()
    );

    Ok(LoggingState {
        level,
        log_dir: log_dir.to_path_buf(),
        _logger: logger,
    })
}

/// Level and directory of the running vault logger.
///
/// `None` until `init_logging` has succeeded once.
pub fn logging_status() -> Option<(&'static str, PathBuf)> {
    let state = LOGGING_STATE.get()?;
    Some((state.level, state.log_dir.clone()))
}

/// Level to request when the app has no stored preference: `debug` for
/// development builds, `info` for shipped ones.
pub fn default_log_level() -> &'static str {
    match BUILD_PROFILE {
        "debug" => "debug",
        _ => "info",
    }
}

fn parse_level(raw: &str) -> Result<&'static str, String> {
    let wanted = raw.trim().to_ascii_lowercase();
    LEVEL_NAMES
        .iter()
        .find(|(name, _)| *name == wanted)
        .map(|(_, level)| *level)
        .ok_or_else(|| {
            format!("unknown vault log level `{wanted}`; use trace, debug, info, warn or error")
        })
}

fn absolute_log_dir(raw: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(raw.trim());
    if path.as_os_str().is_empty() {
        return Err("vault log directory is blank".to_string());
    }
    if path.is_relative() {
        return Err(format!(
            "vault log directory `{}` is not absolute",
            path.display()
        ));
    }
    Ok(path)
}

/// Chains a hook that records panics as one `panic_captured` event.
fn install_panic_logging() {
    PANIC_HOOK_INSTALLED.get_or_init(|| {
        let previous_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let location = panic_info.location().map_or_else(
                || "unknown".to_string(),
                |loc| format!("{}:{}", loc.file(), loc.line()),
            );
            error!(
                "event=panic_captured module=logging status=error location={} payload={}",
                location,
                panic_summary(panic_info.payload())
            );
            previous_hook(panic_info);
        }));
    });
}

/// Panic payloads may quote an item name or serial, so only a flattened,
/// capped excerpt is logged.
fn panic_summary(payload: &(dyn Any + Send)) -> String {
    let text = payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("non-string panic payload");
    one_line_capped(text, MAX_PANIC_PAYLOAD_CHARS)
}

fn one_line_capped(text: &str, max_chars: usize) -> String {
    let flat = text.replace(['\n', '\r'], " ");
    match flat.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &flat[..cut]),
        None => flat,
    }
}
