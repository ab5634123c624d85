use anyhow::Context;
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;

use hued::config::parse_override;
use hued::{colors, ColorLogger, FormatterConfig, Level, LevelColorTable, LogEvent};

#[derive(Parser)]
#[command(name = "hued")]
#[command(about = "Print one colored log line per level")]
#[command(version)]
struct Args {
    /// Include the source method after the source class
    #[arg(short = 'd', long)]
    detailed: bool,

    /// Print the plain demo followed by the detailed one
    #[arg(long, conflicts_with = "detailed")]
    both: bool,

    /// YAML file with `detailed` and per-level `colors`
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config_file: Option<PathBuf>,

    /// Override a level color, e.g. `severe=RED_BOLD` (repeatable)
    #[arg(long = "color", value_name = "LEVEL=COLOR")]
    colors: Vec<String>,

    /// Message to print instead of the generated one
    #[arg(short = 'm', long)]
    message: Option<String>,

    /// Parameter appended after the message (repeatable)
    #[arg(short = 'p', long = "param", value_name = "VALUE")]
    params: Vec<String>,

    /// List the palette and exit
    #[arg(long)]
    list_colors: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    if args.list_colors {
        return list_colors();
    }

    let config = match &args.config_file {
        Some(path) => FormatterConfig::load(path)
            .with_context(|| format!("Failed to load config '{}'", path.display()))?,
        None => FormatterConfig::default(),
    };

    let table = LevelColorTable::shared();
    config.apply_colors(&table)?;
    for spec in &args.colors {
        let (level, color) =
            parse_override(spec).with_context(|| format!("Invalid --color '{}'", spec))?;
        table.set(&level, color);
    }

    if args.both {
        demo(false, &args)?;
        demo(true, &args)?;
    } else {
        demo(args.detailed || config.detailed, &args)?;
    }

    Ok(())
}

fn demo(detailed: bool, args: &Args) -> anyhow::Result<()> {
    let logger = ColorLogger::builder()
        .detailed(detailed)
        .sink(Box::new(io::stdout()))
        .build();
    let mode = if detailed { "Detailed" } else { "Normal" };

    for level in Level::KNOWN.iter() {
        let message = match &args.message {
            Some(message) => message.clone(),
            None => format!("{} logger: {}", mode, title_case(level.name())),
        };
        let mut event = LogEvent::new(level.clone(), message)
            .with_source_class("hued::demo")
            .with_source_method("run");
        if !args.params.is_empty() {
            event = event.with_params(&args.params);
        }
        logger.publish(&event);
    }

    io::stdout().flush().context("Failed to flush stdout")?;
    Ok(())
}

fn list_colors() -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (name, code) in colors::ALL {
        writeln!(out, "{}{:<24}{} {:?}", code, name, colors::RESET, code)?;
    }
    Ok(())
}

fn title_case(name: &str) -> String {
    let lower = name.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("SEVERE"), "Severe");
        assert_eq!(title_case("FINEST"), "Finest");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_both_conflicts_with_detailed() {
        assert!(Args::try_parse_from(["hued", "--both", "--detailed"]).is_err());
        assert!(Args::try_parse_from(["hued", "--both"]).is_ok());
    }
}
