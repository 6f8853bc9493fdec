//! OAuth2 HTTP Handlers
//!
//! Endpoints HTTP para iniciar e completar o fluxo OAuth2

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse},
};
use serde::Deserialize;
use std::sync::Arc;

use super::{OAuth2Client, OAuth2Config};
use crate::utils::logging::*;
use crate::AppState;

/// Parâmetros do callback OAuth2
#[derive(Debug, Deserialize)]
pub struct OAuthCallbackParams {
    /// Authorization code retornado pelo Twitter/X
    code: Option<String>,
    /// Erro retornado pelo Twitter/X (se houver)
    error: Option<String>,
}

/// GET /login
///
/// Inicia o fluxo OAuth2 redirecionando o usuário para a página de
/// autorização do Twitter/X. O state é gerado por tentativa.
pub async fn start_oauth_flow(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    log_info("🚀 [OAuth2] Iniciando fluxo de autorização...");

    let login_state = OAuth2Config::generate_state();
    let auth_url = state.settings.oauth.authorization_url(&login_state);

    log_info(&format!("↗️  [OAuth2] Redirecionando para: {}", auth_url));

    (StatusCode::FOUND, [(header::LOCATION, auth_url)])
}

/// GET /callback?code=XXX
///
/// Recebe o callback OAuth2 do Twitter/X e troca o code por access token.
/// Em caso de sucesso exibe o token em uma página HTML para cópia manual;
/// o operador cola o token no cliente (não há redirect de volta).
///
/// # Falhas (400, texto)
/// - `error` presente: texto do erro repassado
/// - `code` ausente: mensagem "No authorization code provided."
/// - Troca não-2xx: status e corpo do provedor repassados
pub async fn handle_oauth_callback(
    State(state): State<Arc<AppState>>,
    Query(params): Query<OAuthCallbackParams>,
) -> Result<Html<String>, (StatusCode, String)> {
    log_info("📥 [OAuth2] Callback recebido");

    // Verificar se houve erro na autorização
    if let Some(error) = params.error {
        log_error(&format!("❌ [OAuth2] Erro na autorização: {}", error));
        return Err((
            StatusCode::BAD_REQUEST,
            format!("Error from Twitter: {}", error),
        ));
    }

    // Obter authorization code
    let code = params.code.ok_or_else(|| {
        log_error("❌ [OAuth2] Code não recebido no callback");
        (
            StatusCode::BAD_REQUEST,
            "No authorization code provided.".to_string(),
        )
    })?;

    // Trocar code por access token
    let oauth_client = OAuth2Client::new(state.settings.oauth.clone());

    let token_response = oauth_client
        .exchange_code_for_token(&code)
        .await
        .map_err(|e| {
            log_error(&format!("❌ [OAuth2] Falha ao obter token: {}", e));
            (StatusCode::BAD_REQUEST, e.to_string())
        })?;

    Ok(render_token_page(&token_response.access_token))
}

/// Renderizar página com o token para cópia manual
fn render_token_page(token: &str) -> Html<String> {
    Html(format!(
        r#"
        <!DOCTYPE html>
        <html>
        <head>
            <title>Twitter Login - Sucesso</title>
            <meta charset="UTF-8">
            <style>
                body {{ font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Arial, sans-serif;
                       max-width: 900px; margin: 50px auto; padding: 20px; background: #f5f5f5; }}
                .container {{ background: white; padding: 30px; border-radius: 12px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }}
                .success {{ background: #d4edda; border: 2px solid #28a745; padding: 20px; border-radius: 8px; margin-bottom: 20px; }}
                .token-box {{ background: #fff3cd; padding: 20px; border: 2px solid #ffc107; border-radius: 8px; margin: 20px 0; }}
                textarea {{ width: 100%; padding: 12px; font-family: 'Courier New', monospace;
                           font-size: 11px; border: 1px solid #ddd; border-radius: 4px; resize: vertical; }}
                button {{ background: #28a745; color: white; padding: 12px 24px; border: none;
                         border-radius: 6px; cursor: pointer; font-size: 14px; font-weight: bold; }}
                button:hover {{ background: #218838; }}
                h1 {{ color: #28a745; margin-top: 0; }}
            </style>
            <script>
                function copyToken() {{
                    const textarea = document.getElementById('token');
                    textarea.select();
                    navigator.clipboard.writeText(textarea.value);
                    const btn = document.getElementById('copyBtn');
                    btn.textContent = '✅ Copiado!';
                    setTimeout(() => {{ btn.textContent = '📋 Copiar Token'; }}, 2000);
                }}
            </script>
        </head>
        <body>
            <div class="container">
                <div class="success">
                    <h1>✅ Login Twitter Concluído!</h1>
                    <p>Copie o access token abaixo e cole no app cliente.</p>
                </div>

                <div class="token-box">
                    <h3>🔑 Access Token:</h3>
                    <textarea id="token" rows="6" readonly>{}</textarea>
                    <button id="copyBtn" onclick="copyToken()">📋 Copiar Token</button>
                </div>
            </div>
        </body>
        </html>
        "#,
        token
    ))
}
