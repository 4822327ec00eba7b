use actix_web::{web, HttpResponse, Responder};
use std::collections::HashMap;

use crate::algorithm::ranking_por_metrica;
use crate::api_json::filtros_desde_query;
use crate::models::Metrica;
use crate::server::AppState;

fn responder_ranking(state: &AppState, query: &HashMap<String, String>, metrica: Metrica) -> HttpResponse {
    let filtros = filtros_desde_query(query);
    HttpResponse::Ok().json(ranking_por_metrica(&state.datos, &filtros, metrica))
}

pub async fn likes_por_candidato_handler(state: web::Data<AppState>, query: web::Query<HashMap<String, String>>) -> impl Responder {
    responder_ranking(&state, &query, Metrica::Likes)
}

pub async fn comentarios_por_candidato_handler(state: web::Data<AppState>, query: web::Query<HashMap<String, String>>) -> impl Responder {
    responder_ranking(&state, &query, Metrica::Comentarios)
}

/// Ranking compuesto: interacciones por semana.
pub async fn candidatos_todos_handler(state: web::Data<AppState>, query: web::Query<HashMap<String, String>>) -> impl Responder {
    responder_ranking(&state, &query, Metrica::Interacciones)
}
