//! Cliente da API v2 do Twitter/X usado pelo proxy de timeline.
//!
//! Cada chamada recebe o bearer token do chamador; o serviço não guarda
//! token nenhum entre requisições.

use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::models::{TwitterUser, UserEnvelope};
use crate::utils::logging::*;
use crate::utils::{AppError, AppResult};

#[derive(Clone)]
pub struct TwitterService {
    client: Client,
    base_url: String,
}

impl TwitterService {
    pub fn new(base_url: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .connect_timeout(Duration::from_secs(3))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, base_url }
    }

    /// GET /users/me — identifica o dono do token
    ///
    /// # Retorno
    /// - `Ok(TwitterUser)`: usuário autenticado
    /// - `Err(AppError)`: resposta não-2xx (status e corpo repassados) ou
    ///   falha de transporte
    pub async fn get_authenticated_user(&self, access_token: &str) -> AppResult<TwitterUser> {
        let url = format!("{}/users/me", self.base_url);

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            log_twitter_api_error("/users/me", Some(status.as_u16()), &error_text);
            return Err(AppError::twitter_api(
                "Failed to fetch user",
                Some(error_text),
            ));
        }

        let envelope: UserEnvelope = response.json().await.map_err(|e| {
            AppError::twitter_api(
                "Failed to fetch user",
                Some(format!("invalid response body: {}", e)),
            )
        })?;

        Ok(envelope.data)
    }

    /// GET /users/{id}/tweets — tweets recentes do usuário
    ///
    /// O corpo JSON do provedor é devolvido sem reformatação para que o
    /// proxy possa repassá-lo verbatim.
    pub async fn get_user_tweets(&self, access_token: &str, user_id: &str) -> AppResult<Value> {
        let url = format!("{}/users/{}/tweets", self.base_url, user_id);

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            log_twitter_api_error("/users/{id}/tweets", Some(status.as_u16()), &error_text);
            return Err(AppError::twitter_api(
                "Failed to fetch tweets",
                Some(error_text),
            ));
        }

        let body: Value = response.json().await.map_err(|e| {
            AppError::twitter_api(
                "Failed to fetch tweets",
                Some(format!("invalid response body: {}", e)),
            )
        })?;

        Ok(body)
    }
}
