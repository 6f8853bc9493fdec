use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

use crate::auth::OAuth2Config;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub oauth: OAuth2Config,
    pub twitter: TwitterSettings,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TwitterSettings {
    /// URL base da API do Twitter/X (configurável para testes)
    pub base_url: String,
}

impl Settings {
    /// Carrega a configuração imutável do gateway: arquivos base + ambiente,
    /// com overrides por variáveis TWITTER_*. Valores obrigatórios ausentes
    /// falham aqui, na inicialização, e não em tempo de requisição.
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let mut builder = Config::builder()
            // Arquivo de configuração base
            .add_source(File::with_name("config/default").required(false))
            // Arquivo específico do ambiente
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false));

        // Variáveis de ambiente do app OAuth registrado no Twitter/X
        if let Ok(client_id) = std::env::var("TWITTER_CLIENT_ID") {
            builder = builder.set_override("oauth.client_id", client_id)?;
        }
        if let Ok(client_secret) = std::env::var("TWITTER_CLIENT_SECRET") {
            builder = builder.set_override("oauth.client_secret", client_secret)?;
        }
        if let Ok(redirect_uri) = std::env::var("TWITTER_REDIRECT_URI") {
            builder = builder.set_override("oauth.redirect_uri", redirect_uri)?;
        }
        if let Ok(scope) = std::env::var("TWITTER_SCOPE") {
            builder = builder.set_override("oauth.scope", scope)?;
        }
        if let Ok(code_challenge) = std::env::var("TWITTER_CODE_CHALLENGE") {
            builder = builder.set_override("oauth.code_challenge", code_challenge)?;
        }
        if let Ok(code_verifier) = std::env::var("TWITTER_CODE_VERIFIER") {
            builder = builder.set_override("oauth.code_verifier", code_verifier)?;
        }
        if let Ok(base_url) = std::env::var("TWITTER_API_BASE_URL") {
            builder = builder.set_override("twitter.base_url", base_url)?;
        }

        // Prefixo genérico para os demais campos (ex: INTEGRATOR_SERVER__PORT)
        builder = builder.add_source(Environment::with_prefix("INTEGRATOR").separator("__"));

        let s = builder.build()?;

        s.try_deserialize()
    }
}
