use serde::{Deserialize, Serialize};

/// Usuário autenticado, conforme retornado por GET /users/me.
/// Somente leitura; nada é persistido.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TwitterUser {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

/// Envelope `{ "data": ... }` usado pela API v2 do Twitter/X
#[derive(Debug, Deserialize)]
pub struct UserEnvelope {
    pub data: TwitterUser,
}
