#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

/// Export URL of the published results sheet.
pub const DEFAULT_SHEET_URL: &str =
    "https://docs.google.com/spreadsheets/d/1XK-qeXw-JgKPkttwmugLr27MeHYeWQck/export?format=csv";

pub const DEFAULT_REVALIDATE_SECS: u64 = 60;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
