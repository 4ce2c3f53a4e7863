use dms_config::Environment;
use std::io::Error;
use std::io::Write;
use std::sync::OnceLock;
use std::{
    backtrace::{Backtrace, BacktraceStatus},
    panic::PanicHookInfo,
    sync::Once,
};
use thiserror::Error;
use tracing::field::display;
use tracing::subscriber::{SetGlobalDefaultError, set_global_default};
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{self, InitError},
};
use tracing_log::{LogTracer, log_tracer::SetLoggerError};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, FmtSubscriber, Registry, fmt, layer::SubscriberExt};

/// JSON field name identifying the validator run a log line belongs to.
const RUN_ID_KEY_IN_LOG: &str = "run_id";

/// Directory production log files are written to.
const LOG_DIR: &str = "logs";

/// Number of daily log files kept before the oldest is removed.
const MAX_LOG_FILES: usize = 5;

/// Errors that can occur during tracing initialization.
#[derive(Debug, Error)]
pub enum TracingError {
    #[error("failed to build rolling file appender: {0}")]
    InitAppender(#[from] InitError),

    #[error("failed to init log tracer: {0}")]
    InitLogTracer(#[from] SetLoggerError),

    #[error("failed to set global default subscriber: {0}")]
    SetGlobalDefault(#[from] SetGlobalDefaultError),

    #[error("an io error occurred: {0}")]
    Io(#[from] Error),
}

/// Log flusher handle for ensuring logs are written before shutdown.
///
/// Production mode returns a [`WorkerGuard`] that must be kept alive until the
/// process exits, otherwise buffered lines are lost.
#[must_use]
pub enum LogFlusher {
    /// Flushes the non-blocking file appender on drop.
    Flusher(WorkerGuard),
    /// Console logging needs no flushing.
    NullFlusher,
}

static INIT_TEST_TRACING: Once = Once::new();

/// Initializes tracing for tests.
///
/// Call once at the beginning of a test. Set `ENABLE_TRACING=1` to view tracing output:
/// ```bash
/// ENABLE_TRACING=1 cargo test test_name
/// ```
pub fn init_test_tracing() {
    INIT_TEST_TRACING.call_once(|| {
        if std::env::var("ENABLE_TRACING").is_ok() {
            // Without an explicit environment we would default to prod and log to files.
            Environment::Dev.set();
            let _log_flusher =
                init_tracing("test").expect("Failed to initialize tracing for tests");
        }
    });
}

static RUN_ID: OnceLock<String> = OnceLock::new();

/// Sets the run id injected into every JSON log line.
pub fn set_global_run_id(run_id: String) {
    let _ = RUN_ID.set(run_id);
}

/// Returns the run id, if one has been set.
pub fn get_global_run_id() -> Option<&'static str> {
    RUN_ID.get().map(|s| s.as_str())
}

/// Writer wrapper that adds a top-level `run_id` field to JSON log entries.
///
/// Entries that are not JSON objects, or that already carry the field, are
/// written unchanged.
struct RunIdInjectingWriter<W> {
    inner: W,
    run_id: Option<&'static str>,
}

impl<W> RunIdInjectingWriter<W> {
    fn new(inner: W, run_id: Option<&'static str>) -> Self {
        Self { inner, run_id }
    }
}

impl<W> Write for RunIdInjectingWriter<W>
where
    W: Write,
{
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        if let Some(run_id) = self.run_id
            && let Ok(json_str) = std::str::from_utf8(buf)
            && let Ok(serde_json::Value::Object(mut map)) =
                serde_json::from_str::<serde_json::Value>(json_str)
            && !map.contains_key(RUN_ID_KEY_IN_LOG)
        {
            map.insert(
                RUN_ID_KEY_IN_LOG.to_owned(),
                serde_json::Value::String(run_id.to_owned()),
            );

            if let Ok(modified) = serde_json::to_string(&map) {
                let output = if json_str.ends_with('\n') {
                    format!("{modified}\n")
                } else {
                    modified
                };

                // Callers account for the bytes they handed us, not the rewritten line.
                self.inner.write_all(output.as_bytes())?;
                return Ok(buf.len());
            }
        }

        self.inner.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}

/// Initializes tracing for the application.
///
/// Production environments log JSON to rotating files, development to the console.
pub fn init_tracing(app_name: &str) -> Result<LogFlusher, TracingError> {
    init_tracing_with_run_id(app_name, None)
}

/// Like [`init_tracing`], additionally tagging every production log line with `run_id`.
pub fn init_tracing_with_run_id(
    app_name: &str,
    run_id: Option<String>,
) -> Result<LogFlusher, TracingError> {
    if let Some(run_id) = run_id {
        set_global_run_id(run_id);
    }

    // Captures records emitted through the `log` crate, e.g. by HTTP and AWS
    // client dependencies.
    LogTracer::init()?;

    let is_prod = Environment::load()?.is_prod();

    // Defaults to `info` if `RUST_LOG` is not set.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());

    let log_flusher = if is_prod {
        configure_prod_tracing(filter, app_name)?
    } else {
        configure_dev_tracing(filter)?
    };

    set_tracing_panic_hook();

    Ok(log_flusher)
}

fn configure_prod_tracing(filter: EnvFilter, app_name: &str) -> Result<LogFlusher, TracingError> {
    let file_appender = rolling::Builder::new()
        .filename_prefix(app_name)
        .filename_suffix("log")
        .rotation(rolling::Rotation::DAILY)
        .max_log_files(MAX_LOG_FILES)
        .build(LOG_DIR)?;

    let (file_appender, guard) = tracing_appender::non_blocking(file_appender);

    let format = fmt::format()
        .with_level(true)
        .with_ansi(false)
        .with_target(false);

    let run_id = get_global_run_id();
    let subscriber = Registry::default().with(filter).with(
        fmt::layer()
            .event_format(format)
            .with_writer(move || RunIdInjectingWriter::new(file_appender.make_writer(), run_id))
            .json()
            .with_current_span(true)
            .with_span_list(true),
    );

    set_global_default(subscriber)?;

    Ok(LogFlusher::Flusher(guard))
}

fn configure_dev_tracing(filter: EnvFilter) -> Result<LogFlusher, TracingError> {
    let format = fmt::format()
        .with_level(true)
        .with_ansi(true)
        .pretty()
        .with_line_number(false)
        .with_file(false)
        .with_target(true);

    let subscriber = FmtSubscriber::builder()
        .event_format(format)
        .with_env_filter(filter)
        .finish();

    set_global_default(subscriber)?;

    Ok(LogFlusher::NullFlusher)
}

/// Replaces the panic hook so that panics end up in the log files too.
///
/// The previous hook still runs afterwards.
fn set_tracing_panic_hook() {
    let prev_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        panic_hook(info);
        prev_hook(info);
    }));
}

fn panic_hook(panic_info: &PanicHookInfo) {
    let backtrace = Backtrace::capture();
    let (backtrace, note) = match backtrace.status() {
        BacktraceStatus::Captured => (Some(backtrace), None),
        BacktraceStatus::Disabled => (
            None,
            Some("run with RUST_BACKTRACE=1 to display backtraces"),
        ),
        BacktraceStatus::Unsupported => {
            (None, Some("backtraces are not supported on this platform"))
        }
        _ => (None, Some("backtrace status is unknown")),
    };

    let payload = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
        s
    } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
        s
    } else {
        "unknown panic payload"
    };

    let location = panic_info.location().map(|location| location.to_string());

    tracing::error!(
        panic.payload = payload,
        payload.location = location,
        panic.backtrace = backtrace.map(display),
        panic.note = note,
        "a panic occurred",
    );
}
