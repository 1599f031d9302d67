use crate::core::{DashboardData, Pipeline};
use crate::utils::error::Result;

/// Drives one extract → normalize → summarize cycle and owns the fail-open
/// boundary: a broken fetch degrades to an empty snapshot with the failure
/// recorded, never to an error the caller must handle.
pub struct DashboardEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> DashboardEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// The sole outbound contract of the core. Always returns a snapshot;
    /// callers distinguish "no results yet" from "fetch failed" through
    /// [`crate::domain::model::SourceStatus`].
    pub async fn dashboard_data(&self) -> DashboardData {
        match self.run_cycle().await {
            Ok(data) => data,
            Err(e) => {
                if e.is_fetch() {
                    tracing::warn!("Sheet fetch failed, serving empty snapshot: {}", e);
                } else {
                    tracing::error!("Dashboard refresh failed: {}", e);
                }
                DashboardData::unavailable(e.to_string())
            }
        }
    }

    async fn run_cycle(&self) -> Result<DashboardData> {
        let rows = self.pipeline.extract().await?;
        tracing::debug!("Decoded {} raw rows", rows.len());

        let records = self.pipeline.normalize(rows).await?;
        tracing::info!("Normalized {} constituency records", records.len());

        self.pipeline.summarize(records).await
    }
}
