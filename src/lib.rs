// Biblioteca raíz del crate `monitoreo`.
// Carga el libro de monitoreo de candidatos y expone el dashboard + API JSON.
pub mod config;
pub mod models;
pub mod excel;
pub mod algorithm;
pub mod api_json;
pub mod server;

/// Ejecuta el servidor HTTP (reexport para facilitar uso desde `main`)
pub use server::run_server;
pub use config::Config;
