use crate::level::Level;
use std::fmt::Display;

/// A single log event handed to the formatter.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEvent {
    /// Milliseconds since the Unix epoch
    pub timestamp_millis: i64,
    pub level: Level,
    pub source_class: String,
    pub source_method: Option<String>,
    pub message: String,
    /// `None` means no parameters; `Some(vec![])` is an explicitly empty list.
    pub params: Option<Vec<String>>,
}

impl LogEvent {
    /// Create an event stamped with the current wall-clock time.
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            timestamp_millis: chrono::Utc::now().timestamp_millis(),
            level,
            source_class: String::new(),
            source_method: None,
            message: message.into(),
            params: None,
        }
    }

    pub fn with_timestamp(mut self, timestamp_millis: i64) -> Self {
        self.timestamp_millis = timestamp_millis;
        self
    }

    pub fn with_source_class(mut self, class: impl Into<String>) -> Self {
        self.source_class = class.into();
        self
    }

    pub fn with_source_method(mut self, method: impl Into<String>) -> Self {
        self.source_method = Some(method.into());
        self
    }

    /// Append one parameter, rendered through its `Display` impl.
    pub fn with_param(mut self, param: impl Display) -> Self {
        self.params
            .get_or_insert_with(Vec::new)
            .push(param.to_string());
        self
    }

    /// Replace the parameter list. An empty iterator still marks the list as present.
    pub fn with_params<I, T>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Display,
    {
        self.params = Some(params.into_iter().map(|p| p.to_string()).collect());
        self
    }

    pub fn with_empty_params(mut self) -> Self {
        self.params = Some(Vec::new());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults() {
        let before = chrono::Utc::now().timestamp_millis();
        let event = LogEvent::new(Level::Info, "started");
        let after = chrono::Utc::now().timestamp_millis();

        assert!(event.timestamp_millis >= before && event.timestamp_millis <= after);
        assert_eq!(event.level, Level::Info);
        assert_eq!(event.source_class, "");
        assert_eq!(event.source_method, None);
        assert_eq!(event.message, "started");
        assert_eq!(event.params, None);
    }

    #[test]
    fn test_params_render_with_display() {
        let event = LogEvent::new(Level::Fine, "values")
            .with_param("x")
            .with_param(1)
            .with_param(2.5);
        assert_eq!(
            event.params,
            Some(vec!["x".to_string(), "1".to_string(), "2.5".to_string()])
        );

        let replaced = event.with_params([true, false]);
        assert_eq!(
            replaced.params,
            Some(vec!["true".to_string(), "false".to_string()])
        );
    }

    #[test]
    fn test_empty_params_are_present() {
        let event = LogEvent::new(Level::Info, "m").with_empty_params();
        assert_eq!(event.params, Some(vec![]));

        let event = LogEvent::new(Level::Info, "m").with_params(Vec::<String>::new());
        assert_eq!(event.params, Some(vec![]));
    }
}
