// src/lib.rs
pub mod color_table;
pub mod colors;
pub mod config;
pub mod error;
pub mod event;
pub mod formatters;
pub mod level;
pub mod logger;

pub use error::*;

pub use color_table::{LevelColorTable, FALLBACK_COLOR};
pub use config::FormatterConfig;
pub use event::LogEvent;
pub use formatters::line::{format_timestamp, LineFormatter};
pub use formatters::EventFormatter;
pub use level::Level;
pub use logger::{ColorLogger, ColorLoggerBuilder};
