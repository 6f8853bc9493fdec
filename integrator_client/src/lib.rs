// Biblioteca do cliente interativo do Social Media Integrator
// Expõe a máquina de estados da sessão e o cliente HTTP do gateway
// para uso no binário e nos testes

pub mod backend;
pub mod error;
pub mod models;
pub mod render;
pub mod session;
