use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::algorithm::{colores, facetas};
use crate::server::AppState;

const DASHBOARD_HTML: &str = include_str!("../../../static/dashboard.html");

pub async fn dashboard_handler() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(DASHBOARD_HTML)
}

/// GET /api/bootstrap
/// Facetas y KPIs sobre la tabla sin filtrar, más colores y nombre del libro.
pub async fn bootstrap_handler(state: web::Data<AppState>) -> impl Responder {
    let f = facetas(&state.datos.tabla);
    HttpResponse::Ok().json(json!({
        "redes": f.redes,
        "semanas": f.semanas,
        "meses": f.meses,
        "espectros": f.espectros,
        "kpis": f.kpis,
        "colores": colores(),
        "archivo": state.config.nombre_archivo(),
    }))
}
