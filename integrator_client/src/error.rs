use thiserror::Error;

/// Tipos de erro do cliente interativo
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Erro de rede: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Erro do backend [{status}]: {body}")]
    Backend { status: u16, body: String },

    #[error("Erro de serialização: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuração inválida: {0}")]
    ConfigError(String),
}

impl ClientError {
    pub fn backend(status: u16, body: impl Into<String>) -> Self {
        Self::Backend {
            status,
            body: body.into(),
        }
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}

/// Tipo de resultado padrão para operações do cliente
pub type ClientResult<T> = Result<T, ClientError>;
