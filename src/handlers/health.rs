use axum::{extract::State, response::Json};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::utils::logging::*;
use crate::AppState;

pub async fn health_check() -> Json<Value> {
    log_health_check();

    Json(json!({
        "status": "healthy",
        "service": "social-media-integrator",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Resumo da configuração em uso (sem expor segredos)
pub async fn status_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    log_health_check();

    let oauth = &state.settings.oauth;
    let oauth_configured = !oauth.client_id.is_empty()
        && !oauth.code_challenge.is_empty()
        && !oauth.code_verifier.is_empty();

    Json(json!({
        "service": "social-media-integrator",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "environment": std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string()),
        "integrations": {
            "oauth": {
                "configured": oauth_configured,
                "redirect_uri": oauth.redirect_uri,
                "scope": oauth.scope,
                "authorize_url": oauth.authorize_url
            },
            "twitter": {
                "base_url": state.settings.twitter.base_url
            }
        }
    }))
}
