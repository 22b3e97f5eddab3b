//! Loader stage: obtains the raw record array from a file or URL.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::app::ports::{GameSource, HttpClientPort};
use crate::error::LoadError;
use crate::infra::http_client::ReqwestHttp;
use crate::types::RawGameRecord;

/// True for `http://` and `https://` locations
pub fn is_remote(location: &str) -> bool {
    let lower = location.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Parse a JSON document whose top level is an array of raw game records
pub fn parse_records(bytes: &[u8]) -> Result<Vec<RawGameRecord>, LoadError> {
    let records: Vec<RawGameRecord> = serde_json::from_slice(bytes)?;
    Ok(records)
}

/// Loads the dataset from disk, or over HTTP when the location is a URL
pub struct JsonGameSource {
    http: Arc<dyn HttpClientPort>,
}

impl Default for JsonGameSource {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonGameSource {
    pub fn new() -> Self {
        Self {
            http: Arc::new(ReqwestHttp),
        }
    }

    pub fn with_http_client(http: Arc<dyn HttpClientPort>) -> Self {
        Self { http }
    }

    async fn read_bytes(&self, location: &str) -> Result<Vec<u8>, LoadError> {
        if is_remote(location) {
            let resp = self.http.get(location).await?;
            if !(200..300).contains(&resp.status) {
                warn!(url = location, status = resp.status, "Non-success response for dataset");
                return Err(LoadError::Status {
                    url: location.to_string(),
                    status: resp.status,
                });
            }
            debug!(content_type = %resp.content_type, bytes = resp.bytes.len(), "Fetched dataset");
            Ok(resp.bytes)
        } else {
            tokio::fs::read(location).await.map_err(|e| LoadError::Io {
                path: location.to_string(),
                source: e,
            })
        }
    }
}

#[async_trait]
impl GameSource for JsonGameSource {
    #[instrument(skip(self))]
    async fn load(&self, location: &str) -> Result<Vec<RawGameRecord>, LoadError> {
        let bytes = self.read_bytes(location).await?;
        let records = parse_records(&bytes)?;
        info!(records = records.len(), "Loaded raw game records");
        Ok(records)
    }
}
