/// Social Media Integrator: Authorization Gateway
///
/// Fluxo:
/// - /login redireciona o usuário para a autorização do Twitter/X
/// - /callback troca o authorization code por access token e o exibe
///   para cópia manual (o operador cola o token no app cliente)
/// - /tweets recebe o token colado e repassa a timeline do provedor
///
/// O gateway não retém tokens entre requisições; cada chamada ao proxy
/// revalida o token contra o provedor.
use std::sync::Arc;
use tokio::net::TcpListener;

use social_media_integrator::{
    build_router,
    config::Settings,
    services::TwitterService,
    utils::{logging::*, AppError},
    AppState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Carregar variáveis de ambiente do arquivo .env (se existir);
    // em produção as variáveis vêm do ambiente
    let dotenv_loaded = dotenvy::dotenv().is_ok();

    // Inicializar tracing
    tracing_subscriber::fmt::init();

    if dotenv_loaded {
        log_info("✅ Arquivo .env carregado com sucesso");
    }

    // Carregar configuração imutável (falha aqui se faltar valor obrigatório)
    let settings = Settings::new()
        .map_err(|e| AppError::ConfigError(format!("Failed to load settings: {}", e)))?;

    log_config_loaded(&std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string()));

    // Cliente da API do Twitter/X (timeout próprio, independente do cliente interativo)
    let twitter = TwitterService::new(settings.twitter.base_url.clone());

    let state = Arc::new(AppState {
        twitter,
        settings: settings.clone(),
    });

    let app = build_router(state);

    // PORT do ambiente tem precedência (deploy em container)
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(settings.server.port);
    let listener = TcpListener::bind(format!("{}:{}", settings.server.host, port)).await?;

    log_server_startup(port);
    log_server_ready(&settings.server.host, port);

    // Graceful shutdown com signal handling
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log_info("🛑 Server shut down gracefully");
    Ok(())
}

/// Signal handler para graceful shutdown
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            log_info("🛑 Received Ctrl+C, shutting down gracefully...");
        },
        _ = terminate => {
            log_info("🛑 Received SIGTERM, shutting down gracefully...");
        }
    }
}
