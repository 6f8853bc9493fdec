//! # Twitter/X OAuth2 Authorization Module
//!
//! Módulo isolado para o fluxo OAuth2 authorization-code com o Twitter/X.
//!
//! ## Responsabilidades:
//! - Montar a URL de autorização e redirecionar o usuário (`/login`)
//! - Receber o callback e trocar o authorization code por access token (`/callback`)
//! - Exibir o token para cópia manual (o operador é o transporte até o cliente)
//!
//! ## Estrutura:
//! - `config.rs`: Configurações OAuth2 (client_id, redirect_uri, scope, PKCE)
//! - `client.rs`: Cliente HTTP para o token endpoint
//! - `handlers.rs`: Handlers HTTP (start_oauth_flow, handle_oauth_callback)

pub mod client;
pub mod config;
pub mod handlers;

pub use client::{OAuth2Client, TokenResponse};
pub use config::OAuth2Config;
pub use handlers::{handle_oauth_callback, start_oauth_flow};
