use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use log::info;
use std::sync::Arc;

use crate::api_json::handlers::*;
use crate::config::Config;
use crate::excel::datos_cached;
use crate::models::Datos;

/// Estado compartido por todos los workers: datos inmutables + configuración.
pub struct AppState {
    pub datos: Arc<Datos>,
    pub config: Config,
}

impl AppState {
    /// Lee (o reutiliza del caché) el libro configurado.
    pub fn desde_config(config: Config) -> AppState {
        let datos = datos_cached(&config.excel_path, &config.hoja_resumen);
        AppState { datos, config }
    }
}

/// Registra todas las rutas; compartido entre `run_server` y los tests HTTP.
pub fn configurar(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(dashboard_handler))
        .route("/api/bootstrap", web::get().to(bootstrap_handler))
        .route("/api/estado", web::get().to(estado_handler))
        .route("/api/likes-por-candidato", web::get().to(likes_por_candidato_handler))
        .route("/api/comentarios-por-candidato", web::get().to(comentarios_por_candidato_handler))
        .route("/api/candidatos-todos", web::get().to(candidatos_todos_handler))
        .route("/api/ganador-semanal", web::get().to(ganador_semanal_handler))
        .route("/api/ganador-semanal-series", web::get().to(ganador_semanal_series_handler))
        .route("/api/heatmap", web::get().to(heatmap_handler))
        .route("/api/heatmap-semanal", web::get().to(heatmap_semanal_handler))
        .route("/api/variacion-semanal", web::get().to(variacion_semanal_handler))
        .route("/api/ganador-variacion", web::get().to(ganador_variacion_handler))
        .route("/api/ganador-variacion-series", web::get().to(ganador_variacion_series_handler))
        .route("/health", web::get().to(health_handler))
        .route("/healthz", web::get().to(health_handler))
        .route("/salud", web::get().to(health_handler));
}

pub async fn run_server(config: Config) -> std::io::Result<()> {
    let bind = config.bind();
    let workers = config.workers;
    // Carga anticipada: la primera request no paga la lectura del libro.
    let state = web::Data::new(AppState::desde_config(config));
    info!(
        "libro {:?}: {} filas, resumen: {}",
        state.datos.ruta,
        state.datos.tabla.len(),
        state.datos.resumen.as_ref().map(|r| r.len()).unwrap_or(0)
    );
    info!("Iniciando servidor en http://{} ({} workers)", bind, workers);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Cors::permissive())
            .wrap(middleware::Logger::default())
            .configure(configurar)
    })
    .workers(workers)
    .bind(bind)?
    .run()
    .await
}
