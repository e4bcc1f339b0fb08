//! Logging infrastructure: tracing subscriber setup and the [`Logger`].
//!
//! Console output follows the build-tool vocabulary of the original Makefile
//! workflow: stage headers, plain info lines, dimmed debug lines, and an
//! explicit dry-run marker. Events are routed through [`tracing`] so the
//! verbosity filter and formatting live in one place.

use std::io::IsTerminal as _;

/// Structured logger with dry-run awareness.
///
/// Thin wrapper over [`tracing`] macros that fixes the event targets the
/// console formatter keys on (`docmake::stage`, `docmake::dry_run`).
#[derive(Debug, Clone, Copy, Default)]
pub struct Logger;

impl Logger {
    /// Log a stage header (major section).
    pub fn stage(self, msg: &str) {
        tracing::info!(target: "docmake::stage", "{msg}");
    }

    /// Log an informational message.
    pub fn info(self, msg: &str) {
        tracing::info!("{msg}");
    }

    /// Log a debug message (suppressed on console unless verbose).
    pub fn debug(self, msg: &str) {
        tracing::debug!("{msg}");
    }

    /// Log a warning message.
    pub fn warn(self, msg: &str) {
        tracing::warn!("{msg}");
    }

    /// Log an error message.
    pub fn error(self, msg: &str) {
        tracing::error!("{msg}");
    }

    /// Log a dry-run action message.
    pub fn dry_run(self, msg: &str) {
        tracing::info!(target: "docmake::dry_run", "{msg}");
    }
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

/// A [`tracing_subscriber::fmt::FormatEvent`] that emits docmake-style
/// console output.
struct DocmakeFormatter;

impl<S, N> tracing_subscriber::fmt::FormatEvent<S, N> for DocmakeFormatter
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
        let metadata = event.metadata();
        let level = *metadata.level();
        let target = metadata.target();

        let mut extractor = MessageExtractor::default();
        event.record(&mut extractor);
        let msg = &extractor.message;

        match level {
            tracing::Level::ERROR => writeln!(writer, "\x1b[31mERROR\x1b[0m {msg}"),
            tracing::Level::WARN => writeln!(writer, "\x1b[33mWARN\x1b[0m  {msg}"),
            tracing::Level::INFO if target == "docmake::stage" => {
                writeln!(writer, "\x1b[1;34m==>\x1b[0m \x1b[1m{msg}\x1b[0m")
            }
            tracing::Level::INFO if target == "docmake::dry_run" => {
                writeln!(writer, "  \x1b[33m[DRY RUN]\x1b[0m {msg}")
            }
            tracing::Level::INFO => writeln!(writer, "  {msg}"),
            _ => writeln!(writer, "  \x1b[2m{msg}\x1b[0m"),
        }
    }
}

/// Initialise the global [`tracing`] subscriber.
///
/// Errors and warnings go to stderr, everything else to stdout. `verbose`
/// raises the console level from INFO to DEBUG. Must be called once at
/// program startup, before any logging.
pub fn init_subscriber(verbose: bool) {
    use tracing_subscriber::fmt::writer::MakeWriterExt as _;
    use tracing_subscriber::{
        Layer as _, filter::LevelFilter, fmt, layer::SubscriberExt as _,
        util::SubscriberInitExt as _,
    };

    let console_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    let ansi = std::io::stdout().is_terminal();

    let make_writer = std::io::stderr
        .with_max_level(tracing::Level::WARN)
        .and(std::io::stdout.with_min_level(tracing::Level::INFO));

    let console_layer = fmt::layer()
        .event_format(DocmakeFormatter)
        .with_ansi(ansi)
        .with_writer(make_writer)
        .with_filter(console_level);

    tracing_subscriber::registry().with(console_layer).init();
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Capturing layer that records (level, target, message) triples.
    #[derive(Clone, Default)]
    struct CaptureLayer {
        events: Arc<Mutex<Vec<(tracing::Level, String, String)>>>,
    }

    impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for CaptureLayer {
        fn on_event(
            &self,
            event: &tracing::Event<'_>,
            _ctx: tracing_subscriber::layer::Context<'_, S>,
        ) {
            let mut extractor = MessageExtractor::default();
            event.record(&mut extractor);
            self.events.lock().unwrap().push((
                *event.metadata().level(),
                event.metadata().target().to_string(),
                extractor.message,
            ));
        }
    }

    fn capture(f: impl FnOnce(Logger)) -> Vec<(tracing::Level, String, String)> {
        use tracing_subscriber::layer::SubscriberExt as _;
        let layer = CaptureLayer::default();
        let events = Arc::clone(&layer.events);
        let subscriber = tracing_subscriber::registry().with(layer);
        tracing::subscriber::with_default(subscriber, || f(Logger));
        let guard = events.lock().unwrap();
        guard.clone()
    }

    #[test]
    fn stage_uses_dedicated_target() {
        let events = capture(|log| log.stage("Building HTML documentation"));
        assert_eq!(events.len(), 1);
        let (level, target, msg) = &events[0];
        assert_eq!(*level, tracing::Level::INFO);
        assert_eq!(target, "docmake::stage");
        assert_eq!(msg, "Building HTML documentation");
    }

    #[test]
    fn dry_run_uses_dedicated_target() {
        let events = capture(|log| log.dry_run("would remove doc/"));
        let (_, target, msg) = &events[0];
        assert_eq!(target, "docmake::dry_run");
        assert_eq!(msg, "would remove doc/");
    }

    #[test]
    fn levels_map_to_tracing_levels() {
        let events = capture(|log| {
            log.error("e");
            log.warn("w");
            log.info("i");
            log.debug("d");
        });
        let levels: Vec<tracing::Level> = events.iter().map(|(l, _, _)| *l).collect();
        assert_eq!(
            levels,
            vec![
                tracing::Level::ERROR,
                tracing::Level::WARN,
                tracing::Level::INFO,
                tracing::Level::DEBUG,
            ]
        );
    }
}
