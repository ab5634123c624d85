//! `log` facade backend that prints each record as one colored line.
//!
//! ```ignore
//! use hued::ColorLogger;
//!
//! ColorLogger::new_detailed_logger().init()?;
//! log::info!(user = "alice"; "login accepted");
//! ```

use crate::color_table::LevelColorTable;
use crate::error::Result;
use crate::event::LogEvent;
use crate::formatters::line::LineFormatter;
use crate::formatters::EventFormatter;
use crate::level::Level;
use log::kv::{self, Key, Source, Value, VisitSource};
use log::{LevelFilter, Log, Metadata, Record};
use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// Logger composed of a formatter and a console sink.
///
/// Every record is accepted; there is no level filtering.
pub struct ColorLogger<F = LineFormatter> {
    formatter: F,
    sink: Mutex<Box<dyn Write + Send>>,
}

impl ColorLogger<LineFormatter> {
    /// Logger printing `[class]` to stderr.
    pub fn new_logger() -> Self {
        Self::builder().build()
    }

    /// Logger printing `[class#method]` to stderr.
    pub fn new_detailed_logger() -> Self {
        Self::builder().detailed(true).build()
    }

    pub fn builder() -> ColorLoggerBuilder {
        ColorLoggerBuilder::new()
    }
}

impl<F: EventFormatter> ColorLogger<F> {
    pub fn with_formatter(formatter: F, sink: Box<dyn Write + Send>) -> Self {
        Self {
            formatter,
            sink: Mutex::new(sink),
        }
    }

    pub fn formatter(&self) -> &F {
        &self.formatter
    }

    /// Format and write an event directly, bypassing the `log` macros.
    ///
    /// This is the way to emit CONFIG, FINER or custom levels, which have no
    /// `log::Level` counterpart. Write errors are dropped like any console
    /// handler would.
    pub fn publish(&self, event: &LogEvent) {
        let line = self.formatter.format_event(event);
        let mut sink = self.sink.lock();
        let _ = sink.write_all(line.as_bytes());
    }
}

impl<F: EventFormatter + Send + Sync + 'static> ColorLogger<F> {
    /// Install as the global `log` backend with every level enabled.
    pub fn init(self) -> Result<()> {
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(LevelFilter::Trace);
        Ok(())
    }
}

impl<F: EventFormatter + Send + Sync> Log for ColorLogger<F> {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.publish(&record_to_event(record));
    }

    fn flush(&self) {
        let _ = self.sink.lock().flush();
    }
}

/// Convert a `log` record into an event stamped with the current time.
///
/// The target becomes the source class and `file:line`, when known, the
/// source method. Attached key/values become the parameters, in order; a
/// record without any has no parameters at all.
pub fn record_to_event(record: &Record) -> LogEvent {
    let mut event = LogEvent::new(Level::from(record.level()), record.args().to_string())
        .with_source_class(record.target());

    if let (Some(file), Some(line)) = (record.file(), record.line()) {
        event = event.with_source_method(format!("{}:{}", file, line));
    }

    let key_values = record.key_values();
    if key_values.count() > 0 {
        let mut collector = ParamCollector::default();
        // ParamCollector never fails; a failing source keeps the pairs visited so far
        key_values.visit(&mut collector).ok();
        event.params = Some(collector.values);
    }

    event
}

#[derive(Default)]
struct ParamCollector {
    values: Vec<String>,
}

impl<'kvs> VisitSource<'kvs> for ParamCollector {
    fn visit_pair(
        &mut self,
        _key: Key<'kvs>,
        value: Value<'kvs>,
    ) -> std::result::Result<(), kv::Error> {
        self.values.push(value.to_string());
        Ok(())
    }
}

/// Builder for [`ColorLogger`] around a [`LineFormatter`].
pub struct ColorLoggerBuilder {
    detailed: bool,
    colors: Option<Arc<LevelColorTable>>,
    sink: Option<Box<dyn Write + Send>>,
}

impl Default for ColorLoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorLoggerBuilder {
    pub fn new() -> Self {
        Self {
            detailed: false,
            colors: None,
            sink: None,
        }
    }

    pub fn detailed(mut self, detailed: bool) -> Self {
        self.detailed = detailed;
        self
    }

    /// Use a private color table instead of the process-wide one.
    pub fn colors(mut self, colors: Arc<LevelColorTable>) -> Self {
        self.colors = Some(colors);
        self
    }

    /// Write somewhere other than stderr.
    pub fn sink(mut self, sink: Box<dyn Write + Send>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn build(self) -> ColorLogger<LineFormatter> {
        let formatter = match self.colors {
            Some(colors) => LineFormatter::with_colors(self.detailed, colors),
            None => LineFormatter::new(self.detailed),
        };
        let sink = self.sink.unwrap_or_else(|| Box::new(io::stderr()));
        ColorLogger::with_formatter(formatter, sink)
    }

    pub fn init(self) -> Result<()> {
        self.build().init()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors;

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Capture {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().clone()).unwrap()
        }
    }

    fn capturing(detailed: bool) -> (ColorLogger, Capture) {
        let capture = Capture::default();
        let logger = ColorLogger::builder()
            .detailed(detailed)
            .colors(Arc::new(LevelColorTable::new()))
            .sink(Box::new(capture.clone()))
            .build();
        (logger, capture)
    }

    #[test]
    fn test_factories() {
        assert!(!ColorLogger::new_logger().formatter().is_detailed());
        assert!(ColorLogger::new_detailed_logger().formatter().is_detailed());
        // A detailed logger does not leak into loggers built afterwards
        assert!(!ColorLogger::new_logger().formatter().is_detailed());
    }

    #[test]
    fn test_every_level_enabled() {
        let (logger, _) = capturing(false);
        for level in [log::Level::Error, log::Level::Info, log::Level::Trace] {
            assert!(logger.enabled(&Metadata::builder().level(level).target("test").build()));
        }
    }

    #[test]
    fn test_log_record_is_written() {
        let (logger, capture) = capturing(true);

        logger.log(
            &Record::builder()
                .args(format_args!("listening"))
                .level(log::Level::Warn)
                .target("app::net")
                .file(Some("src/net.rs"))
                .line(Some(42))
                .build(),
        );

        let output = capture.contents();
        assert!(output.starts_with(colors::YELLOW_BRIGHT));
        assert!(output.contains("] [app::net#src/net.rs:42] [WARNING]"));
        assert!(output.contains(" - listening"));
        assert!(!output.contains('\t'));
        assert!(output.ends_with(&format!("{}\n", colors::RESET)));
    }

    #[test]
    fn test_key_values_become_params() {
        let kvs: &[(&str, &str)] = &[("user", "alice"), ("attempt", "3")];
        let event = record_to_event(
            &Record::builder()
                .args(format_args!("login"))
                .level(log::Level::Info)
                .target("auth")
                .key_values(&kvs)
                .build(),
        );

        assert_eq!(event.level, Level::Info);
        assert_eq!(event.source_class, "auth");
        assert_eq!(event.source_method, None);
        assert_eq!(event.params, Some(vec!["alice".to_string(), "3".to_string()]));
    }

    #[test]
    fn test_publish_levels_without_log_counterpart() {
        let (logger, capture) = capturing(false);
        logger.publish(
            &LogEvent::new(Level::Config, "loaded")
                .with_timestamp(0)
                .with_source_class("Main"),
        );
        logger.publish(
            &LogEvent::new(Level::custom("AUDIT", 950), "checked")
                .with_timestamp(0)
                .with_source_class("Main"),
        );

        let output = capture.contents();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with(colors::CYAN));
        assert!(lines[0].contains("[Main] [CONFIG]"));
        assert!(lines[1].starts_with(colors::WHITE));
        assert!(lines[1].contains("[Main] [AUDIT]"));
    }
}
