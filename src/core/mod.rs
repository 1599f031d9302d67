pub mod engine;
pub mod normalize;
pub mod pipeline;
pub mod query;
pub mod schema;
pub mod tally;

pub use crate::domain::model::{
    Aggregate, DashboardData, ElectionRecord, Party, RawRow, SourceStatus, Winner,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline};
pub use crate::utils::error::Result;
