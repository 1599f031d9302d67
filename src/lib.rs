pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;
pub use config::toml_config::TomlConfig;

pub use core::{engine::DashboardEngine, pipeline::SheetPipeline, schema::ColumnSchema};
pub use domain::model::{Aggregate, DashboardData, ElectionRecord, Party, SourceStatus};
pub use domain::ports::{ConfigProvider, Pipeline};
pub use utils::error::{BoardError, Result};
