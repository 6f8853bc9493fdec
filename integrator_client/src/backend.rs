//! Cliente HTTP do gateway (backend).
//!
//! Única interface de rede do cliente: GET /tweets com timeout de 15s.

use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::error::{ClientError, ClientResult};

/// Timeout das chamadas ao gateway
const REQUEST_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Clone)]
pub struct BackendClient {
    http: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> ClientResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        let base_url: String = base_url.into();

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// URL de login no gateway (inicia a autorização no Twitter/X)
    pub fn login_url(&self) -> String {
        format!("{}/login", self.base_url)
    }

    /// GET /tweets?access_token=...
    ///
    /// # Retorno
    /// - `Ok(Value)`: corpo JSON cru do gateway (HTTP 200)
    /// - `Err(ClientError::Backend)`: status não-2xx com o corpo bruto
    /// - `Err(ClientError::NetworkError)`: falha de transporte ou timeout
    pub async fn fetch_timeline(&self, access_token: &str) -> ClientResult<Value> {
        let response = self
            .http
            .get(format!("{}/tweets", self.base_url))
            .query(&[("access_token", access_token)])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::backend(status.as_u16(), body));
        }

        Ok(response.json().await?)
    }
}
