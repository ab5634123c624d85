use crate::error::Error;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Severity of a log event, from most to least important.
///
/// The seven named levels carry the conventional integer weights
/// (SEVERE=1000 down to FINEST=300). `Custom` covers anything else a caller
/// invents; it prints under its own name and gets the default color.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Level {
    Severe,
    Warning,
    Info,
    Config,
    Fine,
    Finer,
    Finest,
    Custom { name: String, value: i32 },
}

impl Level {
    /// The seven named levels, most severe first.
    pub const KNOWN: [Level; 7] = [
        Level::Severe,
        Level::Warning,
        Level::Info,
        Level::Config,
        Level::Fine,
        Level::Finer,
        Level::Finest,
    ];

    pub fn custom(name: impl Into<String>, value: i32) -> Self {
        Level::Custom {
            name: name.into(),
            value,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Level::Severe => "SEVERE",
            Level::Warning => "WARNING",
            Level::Info => "INFO",
            Level::Config => "CONFIG",
            Level::Fine => "FINE",
            Level::Finer => "FINER",
            Level::Finest => "FINEST",
            Level::Custom { name, .. } => name,
        }
    }

    pub fn value(&self) -> i32 {
        match self {
            Level::Severe => 1000,
            Level::Warning => 900,
            Level::Info => 800,
            Level::Config => 700,
            Level::Fine => 500,
            Level::Finer => 400,
            Level::Finest => 300,
            Level::Custom { value, .. } => *value,
        }
    }

    /// Index into the seven color slots. Custom levels resolve by name, so a
    /// custom "INFO" shares the INFO slot; other names have none.
    pub(crate) fn slot(&self) -> Option<usize> {
        match self {
            Level::Severe => Some(0),
            Level::Warning => Some(1),
            Level::Info => Some(2),
            Level::Config => Some(3),
            Level::Fine => Some(4),
            Level::Finer => Some(5),
            Level::Finest => Some(6),
            Level::Custom { name, .. } => {
                name.parse::<Level>().ok().and_then(|known| known.slot())
            }
        }
    }
}

impl PartialOrd for Level {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Level {
    // Weight first; ties between custom levels broken by name to stay consistent with Eq.
    fn cmp(&self, other: &Self) -> Ordering {
        self.value()
            .cmp(&other.value())
            .then_with(|| self.name().cmp(other.name()))
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "SEVERE" => Ok(Level::Severe),
            "WARNING" => Ok(Level::Warning),
            "INFO" => Ok(Level::Info),
            "CONFIG" => Ok(Level::Config),
            "FINE" => Ok(Level::Fine),
            "FINER" => Ok(Level::Finer),
            "FINEST" => Ok(Level::Finest),
            _ => Err(Error::UnknownLevel(s.to_string())),
        }
    }
}

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Level::Severe,
            log::Level::Warn => Level::Warning,
            log::Level::Info => Level::Info,
            log::Level::Debug => Level::Fine,
            log::Level::Trace => Level::Finest,
        }
    }
}
