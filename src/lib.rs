// Biblioteca do gateway Social Media Integrator
// Expõe módulos e o router para uso em testes e no binário

pub mod auth;
pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Estado compartilhado entre handlers: configuração imutável construída
/// uma vez na inicialização + cliente da API do Twitter/X.
/// Nenhum token é retido aqui entre requisições.
#[derive(Clone)]
pub struct AppState {
    pub settings: config::Settings,
    pub twitter: services::TwitterService,
}

async fn banner() -> &'static str {
    "Social Media Integrator gateway is running. Go to /login from the client app."
}

/// Monta o router completo do gateway.
/// Fica na biblioteca para que os testes consigam dirigir os endpoints
/// in-process com configuração injetada.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(banner))
        .route("/health", get(handlers::health_check))
        .route("/status", get(handlers::status_check))
        .route("/login", get(auth::start_oauth_flow))
        .route("/callback", get(auth::handle_oauth_callback))
        .route("/tweets", get(handlers::fetch_timeline))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
