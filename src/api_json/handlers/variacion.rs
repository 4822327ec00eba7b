use actix_web::{web, HttpResponse, Responder};
use std::collections::HashMap;

use crate::algorithm::{ganadores_variacion, serie_ganadores_variacion, variaciones};
use crate::api_json::{filtros_desde_query, metrica_desde_query};
use crate::server::AppState;

pub async fn variacion_semanal_handler(state: web::Data<AppState>, query: web::Query<HashMap<String, String>>) -> impl Responder {
    let filtros = filtros_desde_query(&query);
    HttpResponse::Ok().json(variaciones(&state.datos.tabla, &filtros, metrica_desde_query(&query)))
}

pub async fn ganador_variacion_handler(state: web::Data<AppState>, query: web::Query<HashMap<String, String>>) -> impl Responder {
    let filtros = filtros_desde_query(&query);
    HttpResponse::Ok().json(ganadores_variacion(&state.datos.tabla, &filtros, metrica_desde_query(&query)))
}

pub async fn ganador_variacion_series_handler(state: web::Data<AppState>, query: web::Query<HashMap<String, String>>) -> impl Responder {
    let filtros = filtros_desde_query(&query);
    HttpResponse::Ok().json(serie_ganadores_variacion(&state.datos.tabla, &filtros, metrica_desde_query(&query)))
}
