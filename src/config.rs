use crate::color_table::LevelColorTable;
use crate::colors;
use crate::error::{Error, Result};
use crate::level::Level;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Formatter settings, loadable from YAML:
///
/// ```yaml
/// detailed: true
/// colors:
///   severe: RED_BOLD
///   info: "\e[0;32m"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatterConfig {
    /// Append the source method after the source class
    pub detailed: bool,
    /// Level name -> palette name or literal escape sequence
    pub colors: BTreeMap<String, String>,
}

impl FormatterConfig {
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Resolve every color override without touching any table.
    pub fn resolved_colors(&self) -> Result<Vec<(Level, String)>> {
        self.colors
            .iter()
            .map(|(level, color)| -> Result<(Level, String)> {
                Ok((level.parse()?, resolve_color(color)?))
            })
            .collect()
    }

    /// Write the overrides into `table`. Nothing is written if any entry is invalid.
    pub fn apply_colors(&self, table: &LevelColorTable) -> Result<()> {
        for (level, color) in self.resolved_colors()? {
            table.set(&level, color);
        }
        Ok(())
    }
}

/// Accept a palette name (`RED_BOLD`) or a raw escape sequence.
pub fn resolve_color(color: &str) -> Result<String> {
    if color.starts_with('\x1b') {
        return Ok(color.to_string());
    }
    colors::by_name(color)
        .map(str::to_string)
        .ok_or_else(|| Error::UnknownColor(color.to_string()))
}

/// Parse a `LEVEL=COLOR` override as given on the command line.
pub fn parse_override(spec: &str) -> Result<(Level, String)> {
    let (level, color) = spec
        .split_once('=')
        .ok_or_else(|| Error::UnknownColor(spec.to_string()))?;
    Ok((level.parse()?, resolve_color(color)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = FormatterConfig::default();
        assert!(!config.detailed);
        assert!(config.colors.is_empty());
        assert_eq!(FormatterConfig::from_yaml_str("{}").unwrap(), config);
    }

    #[test]
    fn test_yaml_with_palette_and_literal() {
        let config = FormatterConfig::from_yaml_str(
            "detailed: true\ncolors:\n  severe: RED_BOLD\n  Fine: \"\\e[38;5;33m\"\n",
        )
        .unwrap();
        assert!(config.detailed);

        let table = LevelColorTable::new();
        config.apply_colors(&table).unwrap();
        assert_eq!(table.severe_color(), colors::RED_BOLD);
        assert_eq!(table.fine_color(), "\x1b[38;5;33m");
        assert_eq!(table.info_color(), colors::GREEN_BACKGROUND);
    }

    #[test]
    fn test_invalid_entry_leaves_table_untouched() {
        let config =
            FormatterConfig::from_yaml_str("colors:\n  info: CYAN\n  loud: RED\n").unwrap();
        let table = LevelColorTable::new();
        assert!(matches!(
            config.apply_colors(&table),
            Err(Error::UnknownLevel(_))
        ));
        assert_eq!(table.info_color(), colors::GREEN_BACKGROUND);

        let config = FormatterConfig::from_yaml_str("colors:\n  info: MAGENTA\n").unwrap();
        assert!(matches!(
            config.apply_colors(&table),
            Err(Error::UnknownColor(name)) if name == "MAGENTA"
        ));
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(matches!(
            FormatterConfig::from_yaml_str("detail: true\n"),
            Err(Error::Yaml(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "detailed: true").unwrap();
        writeln!(file, "colors:").unwrap();
        writeln!(file, "  warning: PURPLE_BRIGHT").unwrap();

        let config = FormatterConfig::load(file.path()).unwrap();
        assert!(config.detailed);
        assert_eq!(
            config.resolved_colors().unwrap(),
            vec![(Level::Warning, colors::PURPLE_BRIGHT.to_string())]
        );
    }

    #[test]
    fn test_missing_file() {
        let result = FormatterConfig::load(Path::new("/nonexistent/hued.yaml"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_parse_override() {
        assert_eq!(
            parse_override("finer=blue_bold").unwrap(),
            (Level::Finer, colors::BLUE_BOLD.to_string())
        );
        assert!(matches!(
            parse_override("finer"),
            Err(Error::UnknownColor(_))
        ));
        assert!(matches!(
            parse_override("loud=RED"),
            Err(Error::UnknownLevel(_))
        ));
    }
}
