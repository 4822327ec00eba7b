#![allow(dead_code)]

use calamine::Data;
use monitoreo::excel::{construir_datos, HojaCruda};
use monitoreo::models::Datos;

pub const HOJA_RESUMEN: &str = "Promedio candidato";

pub const ENCABEZADO: [&str; 7] = [
    "Espectro",
    "Candidato",
    "Red Social",
    "Promedio likes x semana",
    "Publicación con más likes",
    "Tema",
    "Promedio comentarios  por publicación",
];

pub fn s(v: &str) -> Data {
    Data::String(v.to_string())
}

pub fn n(v: f64) -> Data {
    Data::Float(v)
}

/// Fila semanal: espectro, candidato, red, likes, comentarios (texto libre).
pub fn fila(esp: &str, cand: &str, red: &str, likes: Data, com: Data) -> Vec<Data> {
    vec![s(esp), s(cand), s(red), likes, Data::Empty, s("General"), com]
}

pub fn hoja(nombre: &str, filas: Vec<Vec<Data>>) -> HojaCruda {
    let mut todas = vec![ENCABEZADO.iter().map(|h| s(h)).collect::<Vec<_>>()];
    todas.extend(filas);
    HojaCruda::new(nombre, todas)
}

/// Libro del ejemplo: Ana (Izquierda, Network1) y Luis (Derecha, Network2) en dos semanas.
pub fn libro_ana_luis() -> Vec<HojaCruda> {
    let semana = |nombre: &str| {
        hoja(
            nombre,
            vec![
                fila("Izquierda", "Ana", "Network1", n(10.0), n(5.0)),
                fila("Derecha", "Luis", "Network2", n(20.0), n(0.0)),
            ],
        )
    };
    vec![semana("Semana 1"), semana("Semana 2")]
}

pub fn datos_ana_luis() -> Datos {
    construir_datos(&libro_ana_luis(), HOJA_RESUMEN)
}
