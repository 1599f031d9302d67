use crate::config::DEFAULT_SHEET_URL;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, validate_url, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "tallyboard")]
#[command(about = "Live election results from the published spreadsheet")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_SHEET_URL)]
    pub sheet_url: String,

    #[arg(long, default_value = "60", help = "Refresh interval for --watch, in seconds")]
    pub revalidate_secs: u64,

    #[arg(long, default_value = "10", help = "HTTP request timeout, in seconds")]
    pub timeout_secs: u64,

    #[arg(long, help = "Keep refreshing on the revalidation interval")]
    pub watch: bool,

    #[arg(long, help = "Print the full snapshot as JSON instead of a summary")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_name = "FILE", help = "Load source settings from a TOML file")]
    pub config: Option<String>,
}

impl ConfigProvider for CliConfig {
    fn sheet_url(&self) -> &str {
        &self.sheet_url
    }

    fn revalidate_secs(&self) -> u64 {
        self.revalidate_secs
    }

    fn request_timeout_secs(&self) -> u64 {
        self.timeout_secs
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("sheet_url", &self.sheet_url)?;
        validate_range("revalidate_secs", self.revalidate_secs, 5, 3600)?;
        validate_range("timeout_secs", self.timeout_secs, 1, 120)?;
        Ok(())
    }
}
