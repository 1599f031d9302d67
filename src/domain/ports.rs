use crate::domain::model::{DashboardData, ElectionRecord, RawRow};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn sheet_url(&self) -> &str;
    fn revalidate_secs(&self) -> u64;
    fn request_timeout_secs(&self) -> u64;
}

/// One fetch cycle, split into its three stages. The engine is generic over
/// this seam so tests can drive it against a mock transport.
#[async_trait]
pub trait Pipeline: Send + Sync {
    /// Retrieve the source document and decode it into raw rows.
    async fn extract(&self) -> Result<Vec<RawRow>>;

    /// Turn raw rows into normalized election records.
    async fn normalize(&self, rows: Vec<RawRow>) -> Result<Vec<ElectionRecord>>;

    /// Derive the aggregate statistics and stamp the snapshot.
    async fn summarize(&self, records: Vec<ElectionRecord>) -> Result<DashboardData>;
}
