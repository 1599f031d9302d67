use crate::core::normalize::{decode_rows, normalize};
use crate::core::schema::ColumnSchema;
use crate::core::tally::aggregate;
use crate::core::{ConfigProvider, DashboardData, ElectionRecord, Pipeline, RawRow, SourceStatus};
use crate::utils::error::{BoardError, Result};
use chrono::Utc;
use reqwest::Client;
use std::time::Duration;

/// Fetch-and-normalize cycle against the published results sheet.
pub struct SheetPipeline<C: ConfigProvider> {
    config: C,
    schema: ColumnSchema,
    client: Client,
}

impl<C: ConfigProvider> SheetPipeline<C> {
    pub fn new(config: C) -> Result<Self> {
        Self::with_schema(config, ColumnSchema::standard())
    }

    pub fn with_schema(config: C, schema: ColumnSchema) -> Result<Self> {
        schema.validate()?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs()))
            .build()?;
        Ok(Self {
            config,
            schema,
            client,
        })
    }
}

#[async_trait::async_trait]
impl<C: ConfigProvider> Pipeline for SheetPipeline<C> {
    async fn extract(&self) -> Result<Vec<RawRow>> {
        tracing::debug!("Requesting results sheet: {}", self.config.sheet_url());
        let response = self.client.get(self.config.sheet_url()).send().await?;

        let status = response.status();
        tracing::debug!("Sheet response status: {}", status);
        if !status.is_success() {
            return Err(BoardError::FetchStatus { status });
        }

        let body = response.text().await?;
        decode_rows(&body)
    }

    async fn normalize(&self, rows: Vec<RawRow>) -> Result<Vec<ElectionRecord>> {
        normalize(&self.schema, &rows)
    }

    async fn summarize(&self, records: Vec<ElectionRecord>) -> Result<DashboardData> {
        let aggregate = aggregate(&records);
        Ok(DashboardData {
            records,
            aggregate,
            status: SourceStatus::Fresh {
                fetched_at: Utc::now(),
            },
        })
    }
}
