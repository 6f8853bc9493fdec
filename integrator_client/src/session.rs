//! Máquina de estados da sessão interativa.
//!
//! Estados: Idle → Fetching → Loaded | Errored; uma nova ação de busca
//! sempre volta por Fetching (não há estado terminal). A lista de tweets
//! carregada fica retida na sessão e só é sobrescrita por uma nova
//! resposta bem-sucedida — inclusive uma resposta vazia.

use crate::backend::BackendClient;
use crate::error::ClientError;
use crate::models::{Post, TimelineEnvelope};

#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    Idle,
    Fetching,
    Loaded,
    Errored(String),
}

pub struct Session {
    backend: BackendClient,
    state: FetchState,
    posts: Vec<Post>,
}

impl Session {
    pub fn new(backend: BackendClient) -> Self {
        Self {
            backend,
            state: FetchState::Idle,
            posts: Vec::new(),
        }
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Ação "buscar" do usuário.
    ///
    /// Token em branco é rejeitado antes de qualquer chamada de rede.
    /// Em caso de falha (status não-2xx ou transporte) os tweets já
    /// carregados são mantidos para a próxima renderização.
    pub async fn fetch(&mut self, raw_token: &str) {
        let token = raw_token.trim();
        if token.is_empty() {
            self.state = FetchState::Errored("Cole o access token primeiro.".to_string());
            return;
        }

        self.state = FetchState::Fetching;

        match self.backend.fetch_timeline(token).await {
            Ok(body) => {
                // Campo "data" ausente (ou com formato inesperado) vira lista vazia
                let envelope: TimelineEnvelope = serde_json::from_value(body).unwrap_or_default();
                self.posts = envelope.data;
                self.state = FetchState::Loaded;
            }
            Err(ClientError::Backend { status, body }) => {
                log::warn!("Backend respondeu {}: {}", status, body);
                self.state = FetchState::Errored(format!("Erro do backend: {} - {}", status, body));
            }
            Err(e) => {
                log::warn!("Falha na requisição: {}", e);
                self.state = FetchState::Errored(format!("Falha na requisição: {}", e));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use pretty_assertions::assert_eq;

    fn session_para(server: &MockServer) -> Session {
        Session::new(BackendClient::new(server.base_url()).unwrap())
    }

    #[tokio::test]
    async fn test_token_em_branco_nao_faz_chamada_de_rede() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/tweets");
                then.status(200).json_body(serde_json::json!({"data": []}));
            })
            .await;

        let mut session = session_para(&server);
        session.fetch("   \n\t ").await;

        match session.state() {
            FetchState::Errored(msg) => assert!(msg.contains("Cole o access token")),
            other => panic!("estado inesperado: {:?}", other),
        }
        assert!(session.posts().is_empty());
        mock.assert_hits_async(0).await;
    }

    #[tokio::test]
    async fn test_busca_com_sucesso_carrega_tweets() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/tweets")
                    .query_param("access_token", "tok123");
                then.status(200).json_body(serde_json::json!({
                    "data": [{"id": "1", "text": "hello"}]
                }));
            })
            .await;

        let mut session = session_para(&server);
        // O token colado pode vir com espaços/quebras de linha em volta
        session.fetch("  tok123\n").await;

        assert_eq!(*session.state(), FetchState::Loaded);
        assert_eq!(
            session.posts(),
            &[Post {
                id: "1".to_string(),
                text: "hello".to_string()
            }]
        );
    }

    #[tokio::test]
    async fn test_falha_mantem_tweets_ja_carregados() {
        let server = MockServer::start_async().await;
        let ok = server
            .mock_async(|when, then| {
                when.method(GET).path("/tweets");
                then.status(200).json_body(serde_json::json!({
                    "data": [{"id": "1", "text": "hello"}]
                }));
            })
            .await;

        let mut session = session_para(&server);
        session.fetch("tok").await;
        assert_eq!(session.posts().len(), 1);

        // A próxima busca falha; a lista anterior continua renderizável
        ok.delete_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/tweets");
                then.status(400).body("{\"error\":\"Failed to fetch user\"}");
            })
            .await;

        session.fetch("tok").await;

        match session.state() {
            FetchState::Errored(msg) => {
                assert!(msg.contains("400"));
                assert!(msg.contains("Failed to fetch user"));
            }
            other => panic!("estado inesperado: {:?}", other),
        }
        assert_eq!(session.posts().len(), 1);
    }

    #[tokio::test]
    async fn test_resposta_vazia_sobrescreve_lista_anterior() {
        let server = MockServer::start_async().await;
        let ok = server
            .mock_async(|when, then| {
                when.method(GET).path("/tweets");
                then.status(200).json_body(serde_json::json!({
                    "data": [{"id": "1", "text": "hello"}]
                }));
            })
            .await;

        let mut session = session_para(&server);
        session.fetch("tok").await;
        assert_eq!(session.posts().len(), 1);

        ok.delete_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/tweets");
                then.status(200).json_body(serde_json::json!({"data": []}));
            })
            .await;

        session.fetch("tok").await;

        assert_eq!(*session.state(), FetchState::Loaded);
        assert!(session.posts().is_empty());
    }

    #[tokio::test]
    async fn test_corpo_sem_campo_data_vira_lista_vazia() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/tweets");
                then.status(200).json_body(serde_json::json!({"meta": {}}));
            })
            .await;

        let mut session = session_para(&server);
        session.fetch("tok").await;

        assert_eq!(*session.state(), FetchState::Loaded);
        assert!(session.posts().is_empty());
    }

    #[tokio::test]
    async fn test_falha_de_transporte_vira_errored_com_mensagem() {
        // Porta sem ninguém escutando: erro de conexão imediato
        let mut session = Session::new(BackendClient::new("http://127.0.0.1:1").unwrap());
        session.fetch("tok").await;

        match session.state() {
            FetchState::Errored(msg) => assert!(msg.contains("Falha na requisição")),
            other => panic!("estado inesperado: {:?}", other),
        }
        assert!(session.posts().is_empty());
    }
}
