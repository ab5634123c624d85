use crate::color_table::LevelColorTable;
use crate::colors;
use crate::config::FormatterConfig;
use crate::error::Result;
use crate::event::LogEvent;
use crate::formatters::EventFormatter;
use chrono::{Local, TimeZone};
use std::sync::Arc;

/// Local-time layout used for the leading timestamp
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Fixed-layout colored line formatter:
///
/// `<level color>[<time>] [<class>(#<method>)] [<LEVEL>]<white> - <message>(\t<params>)<reset>\n`
#[derive(Debug, Clone)]
pub struct LineFormatter {
    detailed: bool,
    colors: Arc<LevelColorTable>,
}

impl Default for LineFormatter {
    fn default() -> Self {
        Self::plain()
    }
}

impl LineFormatter {
    /// Formatter reading the process-wide color table.
    pub fn new(detailed: bool) -> Self {
        Self::with_colors(detailed, LevelColorTable::shared())
    }

    /// Formatter reading its own color table instead of the shared one.
    pub fn with_colors(detailed: bool, colors: Arc<LevelColorTable>) -> Self {
        Self { detailed, colors }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Also prints the source method after the class.
    pub fn detailed() -> Self {
        Self::new(true)
    }

    /// Formatter for `config`. Color overrides go into a private copy of the
    /// shared table; without overrides the shared table itself is used.
    pub fn from_config(config: &FormatterConfig) -> Result<Self> {
        if config.colors.is_empty() {
            return Ok(Self::new(config.detailed));
        }
        let table = LevelColorTable::shared().as_ref().clone();
        config.apply_colors(&table)?;
        Ok(Self::with_colors(config.detailed, Arc::new(table)))
    }

    pub fn is_detailed(&self) -> bool {
        self.detailed
    }

    pub fn colors(&self) -> &Arc<LevelColorTable> {
        &self.colors
    }

    /// Format one event into a terminated line.
    pub fn format(&self, event: &LogEvent) -> String {
        let level_color = self.colors.get(&event.level);
        let mut line = String::with_capacity(64 + event.message.len());

        line.push_str(&level_color);
        line.push('[');
        line.push_str(&format_timestamp(event.timestamp_millis));
        line.push(']');

        line.push_str(" [");
        line.push_str(&event.source_class);
        if self.detailed {
            line.push('#');
            line.push_str(event.source_method.as_deref().unwrap_or_default());
        }
        line.push(']');

        line.push_str(" [");
        line.push_str(event.level.name());
        line.push(']');

        line.push_str(colors::WHITE);
        line.push_str(" - ");
        line.push_str(&event.message);

        // An empty list still emits the tab
        if let Some(params) = &event.params {
            line.push('\t');
            line.push_str(&params.join(", "));
        }

        line.push_str(colors::RESET);
        line.push('\n');
        line
    }
}

impl EventFormatter for LineFormatter {
    fn format_event(&self, event: &LogEvent) -> String {
        self.format(event)
    }
}

/// Render epoch milliseconds in the local timezone. Values chrono cannot
/// represent come back as the raw number.
pub fn format_timestamp(millis: i64) -> String {
    match Local.timestamp_millis_opt(millis).earliest() {
        Some(time) => time.format(TIMESTAMP_FORMAT).to_string(),
        None => millis.to_string(),
    }
}
