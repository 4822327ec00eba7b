use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

use crate::algorithm::estadistica::{ordenar_espectros, unicos_ordenados};
use crate::excel::semanas::{meses_presentes, ordenar_semanas};
use crate::models::Tabla;

/// Colores suaves por espectro, los mismos que pinta el dashboard.
pub const COLORES_ESPECTRO: [(&str, &str); 3] = [
    ("Centro", "rgba(16,185,129,0.35)"),
    ("Derecha", "rgba(59,130,246,0.35)"),
    ("Izquierda", "rgba(245,158,11,0.35)"),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Kpis {
    pub filas: usize,
    /// Suma entera de likes, nulos como 0
    pub likes: i64,
    pub coment: i64,
    pub candidatos: usize,
}

/// Listas de valores para los selectores del dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Facetas {
    pub redes: Vec<String>,
    pub semanas: Vec<String>,
    pub meses: Vec<String>,
    pub espectros: Vec<String>,
    pub kpis: Kpis,
}

pub fn kpis(tabla: &Tabla) -> Kpis {
    let suma = |v: fn(&crate::models::Fila) -> Option<f64>| -> i64 {
        tabla.filas.iter().map(|f| v(f).unwrap_or(0.0)).sum::<f64>().round() as i64
    };
    Kpis {
        filas: tabla.len(),
        likes: suma(|f| f.likes),
        coment: suma(|f| f.comentarios),
        candidatos: tabla.filas.iter().map(|f| f.candidato.as_str()).collect::<HashSet<_>>().len(),
    }
}

/// Siempre sobre la tabla sin filtrar.
pub fn facetas(tabla: &Tabla) -> Facetas {
    let semanas = ordenar_semanas(tabla.filas.iter().map(|f| f.semana.as_str()));
    Facetas {
        redes: unicos_ordenados(tabla.filas.iter().map(|f| f.red.as_str())),
        meses: meses_presentes(semanas.iter().map(|s| s.as_str())),
        semanas,
        espectros: ordenar_espectros(tabla.filas.iter().filter_map(|f| f.espectro.as_deref())),
        kpis: kpis(tabla),
    }
}

pub fn colores() -> BTreeMap<&'static str, &'static str> {
    COLORES_ESPECTRO.iter().copied().collect()
}
