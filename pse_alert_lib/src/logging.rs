//! Log setup: an append-only text file of `<timestamp> - <message>` lines, plus
//! regular `tracing` output on stderr.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use chrono::{Local, SecondsFormat};
use tracing::{Event, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_DIRECTIVE: &str = "pse_alert=info";

/// Event format for the log file: local ISO 8601 timestamp, `" - "`, then the
/// event fields. No level, target or span context.
pub struct LineFormat;

impl<S, N> FormatEvent<S, N> for LineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let now = Local::now().to_rfc3339_opts(SecondsFormat::Millis, false);
        write!(writer, "{} - ", now)?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Opens `path` for appending, creating it if needed.
pub fn open_log_file(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Layer writing INFO and above to `file` in [`LineFormat`].
pub fn file_layer<S>(file: File) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    tracing_subscriber::fmt::layer()
        .event_format(LineFormat)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_filter(LevelFilter::INFO)
}

fn stderr_layer<S>() -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
    tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_filter(filter)
}

/// Installs the global subscriber with the file and stderr layers.
///
/// Fails only when the log file cannot be opened; the caller may then fall
/// back to [`init_stderr_only`].
pub fn init(log_file: &Path) -> io::Result<()> {
    let file = open_log_file(log_file)?;
    tracing_subscriber::registry()
        .with(file_layer(file))
        .with(stderr_layer())
        .init();
    Ok(())
}

/// Installs the global subscriber with only the stderr layer.
pub fn init_stderr_only() {
    tracing_subscriber::registry().with(stderr_layer()).init();
}
