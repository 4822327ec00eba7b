use actix_web::{web, HttpResponse, Responder};
use std::collections::HashMap;

use crate::algorithm::{ganadores_semanales, serie_ganadores};
use crate::api_json::filtros_desde_query;
use crate::server::AppState;

pub async fn ganador_semanal_handler(state: web::Data<AppState>, query: web::Query<HashMap<String, String>>) -> impl Responder {
    let filtros = filtros_desde_query(&query);
    HttpResponse::Ok().json(ganadores_semanales(&state.datos.tabla, &filtros))
}

pub async fn ganador_semanal_series_handler(state: web::Data<AppState>, query: web::Query<HashMap<String, String>>) -> impl Responder {
    let filtros = filtros_desde_query(&query);
    HttpResponse::Ok().json(serie_ganadores(&state.datos.tabla, &filtros))
}
