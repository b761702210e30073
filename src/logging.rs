// src/logging.rs
// =============================================================================
// Diagnostic logging for the CLI.
//
// Diagnostics (progress, retries, skipped files) go through `tracing` to
// stderr, so stdout stays clean for the report and --json output.
//
// The level comes from RUST_LOG when set, otherwise `info`, or `debug`
// with --verbose.
// =============================================================================

use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::fmt::{FmtContext, FormatEvent};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::EnvFilter;

// Prints each event as "<symbol> message key=value ..."
pub struct SweepFormatter;

impl<S, N> FormatEvent<S, N> for SweepFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let symbol = match *event.metadata().level() {
            Level::TRACE => "[ ]",
            Level::DEBUG => "[?]",
            Level::INFO => "[+]",
            Level::WARN => "[*]",
            Level::ERROR => "[-]",
        };

        write!(writer, "{} ", symbol)?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Fails only if a subscriber is already installed, which is harmless
    let _ = tracing_subscriber::fmt()
        .event_format(SweepFormatter)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
