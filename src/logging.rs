//! Logging infrastructure: message-only console output over [`tracing`].
//!
//! Every message is written to standard output as plain text, one line per
//! message, with no timestamp or level prefix. Debug messages are
//! suppressed unless verbose mode is enabled via the `--verbose` flag or
//! the `VERBOSE` environment variable.

/// Implement the display methods of [`Log`] by delegating to inherent
/// methods of the same name on the implementing type.
macro_rules! forward_log_methods {
    ($($method:ident),+ $(,)?) => {
        $(
            fn $method(&self, msg: &str) {
                self.$method(msg);
            }
        )+
    };
}

/// Abstraction over logging backends.
///
/// Production code uses [`Logger`] (tracing-backed console output); tests
/// inject an in-memory implementation so the exact message sequence can be
/// asserted without capturing stdout.
pub trait Log: Send + Sync {
    /// Log an informational message.
    fn info(&self, msg: &str);
    /// Log a warning message.
    fn warn(&self, msg: &str);
    /// Log a debug message (suppressed unless verbose).
    fn debug(&self, msg: &str);
}

/// Console logger backed by the global tracing subscriber.
///
/// Constructed once at startup and passed into the installer at
/// construction time; there is no process-global logger state beyond the
/// tracing subscriber itself.
#[derive(Debug)]
pub struct Logger {
    verbose: bool,
}

impl Logger {
    /// Create a new logger.
    ///
    /// The verbosity level itself is enforced by the subscriber installed
    /// via [`init_subscriber`]; the flag is kept here for introspection.
    #[must_use]
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Whether debug messages are emitted.
    #[must_use]
    pub const fn verbose(&self) -> bool {
        self.verbose
    }

    /// Log an informational message.
    pub fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    /// Log a warning message.
    pub fn warn(&self, msg: &str) {
        tracing::warn!("{msg}");
    }

    /// Log a debug message.
    pub fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }
}

impl Log for Logger {
    forward_log_methods!(info, warn, debug);
}

/// Whether the `VERBOSE` environment variable requests debug output.
///
/// Any set value counts, matching the "any truthy value" contract of the
/// original environment flag.
#[must_use]
pub fn env_verbose() -> bool {
    std::env::var_os("VERBOSE").is_some()
}

/// Extracts the `message` field from a [`tracing::Event`].
#[derive(Default)]
struct MessageExtractor {
    message: String,
}

impl tracing::field::Visit for MessageExtractor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        }
    }
}

/// A [`tracing_subscriber::fmt::FormatEvent`] that writes only the message
/// text followed by a newline — no timestamp, level, or target.
struct MessageOnlyFormatter;

impl<S, N> tracing_subscriber::fmt::FormatEvent<S, N> for MessageOnlyFormatter
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
    N: for<'a> tracing_subscriber::fmt::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: tracing_subscriber::fmt::format::Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let mut extractor = MessageExtractor::default();
        event.record(&mut extractor);
        writeln!(writer, "{}", extractor.message)
    }
}

/// Initialise the global [`tracing`] subscriber.
///
/// Installs a console subscriber writing message-only lines to standard
/// output, filtered at `DEBUG` when verbose and `INFO` otherwise. The
/// `RUST_LOG` environment variable may override the default level.
/// Must be called once at program startup, before any logging.
pub fn init_subscriber(verbose: bool) {
    use tracing_subscriber::{EnvFilter, filter::LevelFilter};

    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .event_format(MessageOnlyFormatter)
        .with_env_filter(filter)
        .with_writer(std::io::stdout)
        .init();
}
