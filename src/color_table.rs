use crate::colors;
use crate::level::Level;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::sync::Arc;

/// Default color per slot, in `Level::KNOWN` order.
const DEFAULT_COLORS: [&str; 7] = [
    colors::RED_BOLD_BRIGHT,  // SEVERE
    colors::YELLOW_BRIGHT,    // WARNING
    colors::GREEN_BACKGROUND, // INFO
    colors::CYAN,             // CONFIG
    colors::BLUE,             // FINE
    colors::PURPLE,           // FINER
    colors::BLACK_BRIGHT,     // FINEST
];

/// Color used for levels without a slot.
pub const FALLBACK_COLOR: &str = colors::WHITE;

static SHARED: Lazy<Arc<LevelColorTable>> = Lazy::new(|| Arc::new(LevelColorTable::new()));

/// Mutable mapping from the seven named levels to ANSI color codes.
///
/// Formatters created without an explicit table read [`LevelColorTable::shared`],
/// so a `set_*` call on it changes the color of every subsequent line from
/// every such formatter.
#[derive(Debug)]
pub struct LevelColorTable {
    slots: RwLock<[String; 7]>,
}

impl Default for LevelColorTable {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LevelColorTable {
    fn clone(&self) -> Self {
        Self {
            slots: RwLock::new(self.slots.read().clone()),
        }
    }
}

impl LevelColorTable {
    /// A fresh table holding the default colors.
    pub fn new() -> Self {
        Self {
            slots: RwLock::new(DEFAULT_COLORS.map(String::from)),
        }
    }

    /// The process-wide table.
    pub fn shared() -> Arc<LevelColorTable> {
        Arc::clone(&*SHARED)
    }

    /// Color for `level`, or [`FALLBACK_COLOR`] for custom levels with an unknown name.
    pub fn get(&self, level: &Level) -> String {
        match level.slot() {
            Some(index) => self.slots.read()[index].clone(),
            None => FALLBACK_COLOR.to_string(),
        }
    }

    /// Set the color for `level`. Returns `false` for custom levels with an unknown name.
    pub fn set(&self, level: &Level, color: impl Into<String>) -> bool {
        match level.slot() {
            Some(index) => {
                self.slots.write()[index] = color.into();
                true
            }
            None => false,
        }
    }

    /// Restore every slot to its default color.
    pub fn reset(&self) {
        *self.slots.write() = DEFAULT_COLORS.map(String::from);
    }

    pub fn severe_color(&self) -> String {
        self.get(&Level::Severe)
    }

    pub fn set_severe_color(&self, color: impl Into<String>) {
        self.set(&Level::Severe, color);
    }

    pub fn warning_color(&self) -> String {
        self.get(&Level::Warning)
    }

    pub fn set_warning_color(&self, color: impl Into<String>) {
        self.set(&Level::Warning, color);
    }

    pub fn info_color(&self) -> String {
        self.get(&Level::Info)
    }

    pub fn set_info_color(&self, color: impl Into<String>) {
        self.set(&Level::Info, color);
    }

    pub fn config_color(&self) -> String {
        self.get(&Level::Config)
    }

    pub fn set_config_color(&self, color: impl Into<String>) {
        self.set(&Level::Config, color);
    }

    pub fn fine_color(&self) -> String {
        self.get(&Level::Fine)
    }

    pub fn set_fine_color(&self, color: impl Into<String>) {
        self.set(&Level::Fine, color);
    }

    pub fn finer_color(&self) -> String {
        self.get(&Level::Finer)
    }

    pub fn set_finer_color(&self, color: impl Into<String>) {
        self.set(&Level::Finer, color);
    }

    pub fn finest_color(&self) -> String {
        self.get(&Level::Finest)
    }

    pub fn set_finest_color(&self, color: impl Into<String>) {
        self.set(&Level::Finest, color);
    }
}
