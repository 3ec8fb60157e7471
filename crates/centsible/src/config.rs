use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use engine::SplitOptions;
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config/centsible.toml";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub level: String,
    pub strict_kinds: bool,
    pub output: OutputFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            strict_kinds: false,
            output: OutputFormat::Text,
        }
    }
}

impl AppConfig {
    pub fn split_options(&self) -> SplitOptions {
        if self.strict_kinds {
            SplitOptions::strict()
        } else {
            SplitOptions::default()
        }
    }

    fn apply(&mut self, args: &Cli) {
        if let Some(level) = &args.level {
            self.level.clone_from(level);
        }
        if args.strict_kinds {
            self.strict_kinds = true;
        }
        if let Some(output) = args.output {
            self.output = output;
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "centsible")]
#[command(about = "Split shared expenses into exact cent allocations")]
pub struct Cli {
    /// Optional config file path (TOML).
    #[arg(long, global = true)]
    config: Option<String>,
    /// Override log level (e.g. debug).
    #[arg(long, global = true)]
    level: Option<String>,
    /// Reject members with an unknown contribution type.
    #[arg(long, global = true)]
    strict_kinds: bool,
    /// Output format.
    #[arg(long, global = true, value_enum)]
    output: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Split an expense described by a JSON request (`total_cents`, `members`).
    Split(InputArgs),
    /// Split an expense by shares (`total_cents`, `shares`).
    Shares(InputArgs),
    /// Run the built-in reference cases and print a text report for each.
    Demo,
}

#[derive(Debug, Args)]
pub struct InputArgs {
    /// Request file; stdin when omitted.
    #[arg(long, short)]
    pub input: Option<PathBuf>,
}

pub fn load() -> Result<(AppConfig, Command)> {
    let args = Cli::parse();

    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix("CENTSIBLE"));
    let mut settings: AppConfig = builder.build()?.try_deserialize()?;

    settings.apply(&args);
    Ok((settings, args.command))
}
