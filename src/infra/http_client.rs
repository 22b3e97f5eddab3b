use crate::app::ports::{HttpClientPort, HttpGetResult};
use crate::error::LoadError;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

pub struct ReqwestHttp;

#[async_trait]
impl HttpClientPort for ReqwestHttp {
    async fn get(&self, url: &str) -> Result<HttpGetResult, LoadError> {
        let client = reqwest::Client::new();
        let resp = client.get(url).send().await?;
        let status = resp.status().as_u16();
        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = resp.bytes().await?.to_vec();
        Ok(HttpGetResult { status, bytes, content_type })
    }
}
