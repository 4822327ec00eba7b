use serde::Serialize;
use std::collections::HashMap;

use crate::algorithm::estadistica::{media, media_opcional, unicos_ordenados};
use crate::algorithm::filters::{aplicar, Filtros};
use crate::excel::semanas::ordenar_semanas;
use crate::models::{Fila, Metrica, Tabla};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CeldaRed {
    pub candidato: String,
    pub red: String,
    pub valor: f64,
    pub nd: bool,
}

/// Grilla candidato × red (interacciones promedio).
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct HeatmapRedes {
    pub rows: Vec<String>,
    pub cols: Vec<String>,
    pub values: Vec<CeldaRed>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CeldaSemana {
    pub candidato: String,
    pub semana: String,
    pub valor: f64,
    pub nd: bool,
}

/// Grilla candidato × semana (columnas en orden cronológico).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapSemanas {
    pub metric: &'static str,
    pub rows: Vec<String>,
    pub cols: Vec<String>,
    pub values: Vec<CeldaSemana>,
}

/// Índice (candidato, columna) -> filas de la celda.
fn indexar<'a, F>(filas: &[&'a Fila], columna: F) -> HashMap<(&'a str, &'a str), Vec<&'a Fila>>
where
    F: Fn(&'a Fila) -> &'a str,
{
    let mut idx: HashMap<(&str, &str), Vec<&Fila>> = HashMap::new();
    for f in filas.iter().copied() {
        idx.entry((f.candidato.as_str(), columna(f))).or_default().push(f);
    }
    idx
}

/// Todas las combinaciones candidato × red presentes en la tabla filtrada; las
/// celdas sin filas salen con `nd = true` y valor 0.
pub fn heatmap_redes(tabla: &Tabla, filtros: &Filtros) -> HeatmapRedes {
    let filas = aplicar(&tabla.filas, filtros);
    let rows = unicos_ordenados(filas.iter().map(|f| f.candidato.as_str()));
    let cols = unicos_ordenados(filas.iter().map(|f| f.red.as_str()));
    let idx = indexar(&filas, |f| f.red.as_str());

    let mut values = Vec::with_capacity(rows.len() * cols.len());
    for r in &rows {
        for c in &cols {
            let v = idx
                .get(&(r.as_str(), c.as_str()))
                .and_then(|fs| media(fs.iter().map(|f| f.interacciones)));
            values.push(CeldaRed {
                candidato: r.clone(),
                red: c.clone(),
                valor: v.unwrap_or(0.0),
                nd: v.is_none(),
            });
        }
    }
    HeatmapRedes { rows, cols, values }
}

/// Candidato × semana con métrica elegible. `nd` exactamente cuando no hay filas
/// para la celda; si hay filas pero la métrica es nula en todas, valor 0.
pub fn heatmap_semanal(tabla: &Tabla, filtros: &Filtros, metrica: Metrica) -> HeatmapSemanas {
    let filas = aplicar(&tabla.filas, filtros);
    let rows = unicos_ordenados(filas.iter().map(|f| f.candidato.as_str()));
    let cols = ordenar_semanas(filas.iter().map(|f| f.semana.as_str()));
    let idx = indexar(&filas, |f| f.semana.as_str());

    let mut values = Vec::with_capacity(rows.len() * cols.len());
    for r in &rows {
        for c in &cols {
            let celda = idx.get(&(r.as_str(), c.as_str()));
            let valor = celda
                .and_then(|fs| media_opcional(fs.iter().map(|f| metrica.de_fila(f))))
                .unwrap_or(0.0);
            values.push(CeldaSemana { candidato: r.clone(), semana: c.clone(), valor, nd: celda.is_none() });
        }
    }
    HeatmapSemanas { metric: metrica.clave(), rows, cols, values }
}
