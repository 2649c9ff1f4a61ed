use crate::config::{ShowcaseSettings, TomlConfig};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "callable-demo")]
#[command(about = "Demonstrates single-operation callable contracts")]
pub struct CliConfig {
    /// Decimal text handed to the transformer
    #[arg(long)]
    pub input: Option<String>,

    /// Line printed by the printer demonstration
    #[arg(long)]
    pub greeting: Option<String>,

    /// First candidate for the chooser
    #[arg(long)]
    pub first: Option<String>,

    /// Second candidate for the chooser
    #[arg(long)]
    pub second: Option<String>,

    /// Seed for reproducible choices
    #[arg(long)]
    pub seed: Option<u64>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, help = "Print the run report as JSON")]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 合併設定檔與命令列參數，命令列優先
    pub fn resolve(&self) -> Result<ShowcaseSettings> {
        let mut settings = match &self.config {
            Some(path) => TomlConfig::from_file(path)?.into_settings(),
            None => ShowcaseSettings::default(),
        };

        if let Some(input) = &self.input {
            settings.input = input.clone();
        }
        if let Some(greeting) = &self.greeting {
            settings.greeting = greeting.clone();
        }
        if let Some(first) = &self.first {
            settings.first = first.clone();
        }
        if let Some(second) = &self.second {
            settings.second = second.clone();
        }
        if self.seed.is_some() {
            settings.seed = self.seed;
        }

        settings.validate()?;
        Ok(settings)
    }
}
