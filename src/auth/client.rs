//! OAuth2 HTTP Client
//!
//! Cliente HTTP isolado para o token endpoint do Twitter/X.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::OAuth2Config;
use crate::utils::logging::*;
use crate::utils::{truncate_safe, AppError, AppResult};

/// Resposta do token endpoint
#[derive(Debug, Deserialize, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub scope: Option<String>,
}

/// Cliente OAuth2 para o Twitter/X
pub struct OAuth2Client {
    config: OAuth2Config,
    http_client: Client,
}

impl OAuth2Client {
    pub fn new(config: OAuth2Config) -> Self {
        Self {
            config,
            http_client: Client::new(),
        }
    }

    /// Trocar authorization code por access token
    ///
    /// POST form-encoded no token endpoint com grant_type=authorization_code.
    /// O code_verifier vem da configuração (PKCE método `plain`).
    ///
    /// # Retorno
    /// - `Ok(TokenResponse)`: Token obtido com sucesso
    /// - `Err(AppError)`: Resposta não-2xx ou falha de transporte
    pub async fn exchange_code_for_token(&self, code: &str) -> AppResult<TokenResponse> {
        log_info(&format!(
            "🔐 [OAuth2] Trocando authorization code por access token: {}...",
            truncate_safe(code, 10)
        ));

        let params = [
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", self.config.redirect_uri.as_str()),
            ("client_id", self.config.client_id.as_str()),
            ("code_verifier", self.config.code_verifier.as_str()),
        ];

        let response = self
            .http_client
            .post(&self.config.token_url)
            .form(&params)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            log_error(&format!(
                "❌ [OAuth2] Token exchange failed: {} - {}",
                status, error_text
            ));
            return Err(AppError::twitter_api(
                format!("Token request failed: {} - {}", status.as_u16(), error_text),
                None,
            ));
        }

        let token_response: TokenResponse = response.json().await.map_err(|e| {
            AppError::twitter_api(format!("Failed to parse token response: {}", e), None)
        })?;

        log_info(&format!(
            "✅ [OAuth2] Access token obtido: {}...",
            truncate_safe(&token_response.access_token, 20)
        ));

        Ok(token_response)
    }
}
