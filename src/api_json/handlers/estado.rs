use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::excel::estadisticas_cache;
use crate::server::AppState;

pub async fn health_handler() -> impl Responder {
    HttpResponse::Ok().content_type("text/plain; charset=utf-8").body("ok")
}

/// GET /api/estado
/// Diagnóstico: qué libro se cargó, cuántas filas y cómo va el caché.
pub async fn estado_handler(state: web::Data<AppState>) -> impl Responder {
    let (hits, misses, entradas) = estadisticas_cache();
    let datos = &state.datos;
    HttpResponse::Ok().json(json!({
        "archivo": datos.ruta.display().to_string(),
        "filas": datos.tabla.len(),
        "filas_resumen": datos.resumen.as_ref().map(|r| r.len()).unwrap_or(0),
        "usa_resumen": datos.resumen.is_some(),
        "cache": {"hits": hits, "misses": misses, "entradas": entradas},
    }))
}
