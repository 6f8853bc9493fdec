use serde::{Deserialize, Serialize};

/// Um tweet como retornado pelo provedor (repassado pelo gateway).
/// Somente leitura; buscado de novo a cada ação do usuário.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    /// Texto pode faltar no corpo; renderiza vazio nesse caso
    #[serde(default)]
    pub text: String,
}

/// Envelope `{"data": [...]}` repassado pelo gateway
#[derive(Debug, Default, Deserialize)]
pub struct TimelineEnvelope {
    #[serde(default)]
    pub data: Vec<Post>,
}
