// --- Monitoreo de candidatos - Archivo principal ---

use monitoreo::{run_server, Config};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("=== Monitoreo de candidatos (dashboard + API) ===");
    let config = Config::desde_entorno();
    run_server(config).await
}
