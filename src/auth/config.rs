//! OAuth2 Configuration
//!
//! Centraliza as configurações do fluxo OAuth2 com o Twitter/X.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OAuth2Config {
    /// Client ID do app registrado no portal de desenvolvedores
    pub client_id: String,

    /// Client Secret do app (não participa da troca com PKCE plain,
    /// mas faz parte da configuração do app registrado)
    pub client_secret: String,

    /// URL de callback registrada no app
    pub redirect_uri: String,

    /// Escopos solicitados (separados por espaço)
    pub scope: String,

    /// Code challenge PKCE enviado na autorização (método `plain`)
    pub code_challenge: String,

    /// Code verifier apresentado na troca do code por token
    pub code_verifier: String,

    /// Endpoint de autorização do provedor
    pub authorize_url: String,

    /// Endpoint de troca de token do provedor
    pub token_url: String,
}

impl OAuth2Config {
    /// Gera a URL de autorização para uma tentativa de login.
    ///
    /// O `state` é único por tentativa; sem sessão no gateway ele não é
    /// validado no retorno (o provedor apenas o ecoa de volta).
    pub fn authorization_url(&self, state: &str) -> String {
        format!(
            "{}?response_type=code&client_id={}&redirect_uri={}&scope={}&state={}&code_challenge={}&code_challenge_method=plain",
            self.authorize_url,
            urlencoding::encode(&self.client_id),
            urlencoding::encode(&self.redirect_uri),
            urlencoding::encode(&self.scope),
            urlencoding::encode(state),
            urlencoding::encode(&self.code_challenge),
        )
    }

    /// Gera um state novo para uma tentativa de login
    pub fn generate_state() -> String {
        format!("state_{}", uuid::Uuid::new_v4().simple())
    }
}
