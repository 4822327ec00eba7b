use actix_web::{web, HttpResponse, Responder};
use std::collections::HashMap;

use crate::algorithm::{heatmap_redes, heatmap_semanal};
use crate::api_json::{filtros_desde_query, metrica_desde_query};
use crate::server::AppState;

pub async fn heatmap_handler(state: web::Data<AppState>, query: web::Query<HashMap<String, String>>) -> impl Responder {
    let filtros = filtros_desde_query(&query);
    HttpResponse::Ok().json(heatmap_redes(&state.datos.tabla, &filtros))
}

pub async fn heatmap_semanal_handler(state: web::Data<AppState>, query: web::Query<HashMap<String, String>>) -> impl Responder {
    let filtros = filtros_desde_query(&query);
    let metrica = metrica_desde_query(&query);
    HttpResponse::Ok().json(heatmap_semanal(&state.datos.tabla, &filtros, metrica))
}
