// Handlers HTTP do gateway
pub mod health;
pub mod timeline;

pub use health::*;
pub use timeline::*;

// Handlers OAuth2 ficam em src/auth/handlers.rs (módulo isolado)
