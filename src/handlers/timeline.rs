//! Proxy de timeline: GET /tweets
//!
//! Recebe o access token colado pelo operador, identifica o usuário dono
//! do token e repassa a lista de tweets do provedor sem reformatação.

use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

use crate::utils::logging::*;
use crate::utils::{AppError, AppResult};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct TimelineParams {
    access_token: Option<String>,
}

/// GET /tweets?access_token=...
///
/// # Falhas (400, JSON `{error, detail?}`)
/// - `access_token` ausente
/// - `/users/me` não-2xx (a busca de tweets nem chega a acontecer)
/// - `/users/{id}/tweets` não-2xx
pub async fn fetch_timeline(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TimelineParams>,
) -> AppResult<Json<Value>> {
    log_request_received("/tweets", "GET");

    let access_token = params
        .access_token
        .filter(|token| !token.is_empty())
        .ok_or_else(|| AppError::ValidationError("Missing access_token parameter".to_string()))?;

    // Primeiro: identificar o usuário autenticado
    let user = state.twitter.get_authenticated_user(&access_token).await?;

    log_info(&format!("👤 Usuário autenticado: {}", user.id));

    // Depois: buscar os tweets desse usuário com o mesmo token
    let tweets = state.twitter.get_user_tweets(&access_token, &user.id).await?;

    Ok(Json(tweets))
}

#[cfg(test)]
mod tests {
    use crate::auth::OAuth2Config;
    use crate::config::settings::{ServerSettings, Settings, TwitterSettings};
    use crate::services::TwitterService;
    use crate::{build_router, AppState};

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use httpmock::prelude::*;
    use std::sync::Arc;
    use tower::util::ServiceExt;

    fn test_state(api_base: &str) -> Arc<AppState> {
        let settings = Settings {
            server: ServerSettings {
                host: "127.0.0.1".to_string(),
                port: 5000,
            },
            oauth: OAuth2Config {
                client_id: "cid".to_string(),
                client_secret: "secret".to_string(),
                redirect_uri: "http://127.0.0.1:5000/callback".to_string(),
                scope: "tweet.read users.read".to_string(),
                code_challenge: "challenge".to_string(),
                code_verifier: "verifier".to_string(),
                authorize_url: "https://twitter.com/i/oauth2/authorize".to_string(),
                token_url: "http://unused.invalid/token".to_string(),
            },
            twitter: TwitterSettings {
                base_url: api_base.to_string(),
            },
        };

        Arc::new(AppState {
            twitter: TwitterService::new(settings.twitter.base_url.clone()),
            settings,
        })
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_sem_access_token_retorna_400_com_chave_error() {
        let app = build_router(test_state("http://unused.invalid"));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/tweets")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Missing access_token parameter");
    }

    #[tokio::test]
    async fn test_usuario_nao_2xx_nao_chama_endpoint_de_tweets() {
        let server = MockServer::start_async().await;

        server
            .mock_async(|when, then| {
                when.method(GET).path("/users/me");
                then.status(401).body("bad token");
            })
            .await;

        let tweets_mock = server
            .mock_async(|when, then| {
                when.method(GET).path_contains("/tweets");
                then.status(200).json_body(serde_json::json!({"data": []}));
            })
            .await;

        let app = build_router(test_state(&server.base_url()));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/tweets?access_token=qualquer")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Failed to fetch user");
        assert_eq!(body["detail"], "bad token");

        // A busca de tweets nunca deve acontecer
        tweets_mock.assert_hits_async(0).await;
    }

    #[tokio::test]
    async fn test_tweets_nao_2xx_retorna_400_com_detail() {
        let server = MockServer::start_async().await;

        server
            .mock_async(|when, then| {
                when.method(GET).path("/users/me");
                then.status(200)
                    .json_body(serde_json::json!({"data": {"id": "7"}}));
            })
            .await;

        server
            .mock_async(|when, then| {
                when.method(GET).path("/users/7/tweets");
                then.status(429).body("rate limited");
            })
            .await;

        let app = build_router(test_state(&server.base_url()));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/tweets?access_token=tok")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Failed to fetch tweets");
        assert_eq!(body["detail"], "rate limited");
    }

    #[tokio::test]
    async fn test_sucesso_repassa_corpo_do_provedor_sem_alteracao() {
        let upstream = serde_json::json!({
            "data": [
                {"id": "1", "text": "hello"},
                {"id": "2", "text": "segundo tweet"}
            ],
            "meta": {"result_count": 2, "newest_id": "2"}
        });

        let server = MockServer::start_async().await;

        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/users/me")
                    .header("authorization", "Bearer tok");
                then.status(200)
                    .json_body(serde_json::json!({"data": {"id": "7"}}));
            })
            .await;

        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/users/7/tweets")
                    .header("authorization", "Bearer tok");
                then.status(200).json_body(upstream.clone());
            })
            .await;

        let app = build_router(test_state(&server.base_url()));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/tweets?access_token=tok")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body, upstream);
    }
}
