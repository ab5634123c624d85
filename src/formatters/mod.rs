use crate::event::LogEvent;

/// Trait for turning log events into output lines
pub trait EventFormatter {
    /// Render one event. The result includes its own line terminator.
    fn format_event(&self, event: &LogEvent) -> String;
}

pub mod line;
