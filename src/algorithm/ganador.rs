use serde::Serialize;
use std::collections::HashMap;

use crate::algorithm::estadistica::{agrupar, argmax_estable, media, ordenar_espectros};
use crate::algorithm::filters::{aplicar, Filtros};
use crate::excel::semanas::ordenar_semanas;
use crate::models::{Fila, Tabla};

/// Ganador(a) de una celda (semana, espectro). `nd` marca celdas sin filas:
/// en ese caso `candidato` es nulo e `interacciones` vale 0.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ganador {
    pub semana: String,
    pub espectro: String,
    pub candidato: Option<String>,
    pub interacciones: f64,
    pub nd: bool,
}

/// Misma información con forma de series para barras apiladas.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SerieGanadores {
    pub semanas: Vec<String>,
    pub espectros: Vec<String>,
    pub values: Vec<CeldaSerie>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CeldaSerie {
    pub semana: String,
    pub espectro: String,
    pub interacciones: f64,
    pub nd: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidato: Option<String>,
}

impl From<Ganador> for CeldaSerie {
    fn from(g: Ganador) -> Self {
        CeldaSerie { semana: g.semana, espectro: g.espectro, interacciones: g.interacciones, nd: g.nd, candidato: g.candidato }
    }
}

/// Semanas a enumerar: todas las del universo sin filtrar, salvo las que el
/// usuario haya excluido con `semana`/`mes`.
pub fn dominio_semanas(universo: &Tabla, filtros: &Filtros) -> Vec<String> {
    ordenar_semanas(
        universo
            .filas
            .iter()
            .map(|f| f.semana.as_str())
            .filter(|s| filtros.admite_semana(s)),
    )
}

/// Espectros a enumerar: los del universo, salvo los excluidos con `espectro`.
pub fn dominio_espectros(universo: &Tabla, filtros: &Filtros) -> Vec<String> {
    ordenar_espectros(
        universo
            .filas
            .iter()
            .filter_map(|f| f.espectro.as_deref())
            .filter(|e| filtros.admite_espectro(Some(e))),
    )
}

/// Candidato con mayor media de interacciones entre las filas de una celda.
fn ganador_de_celda(filas: &[&Fila]) -> Option<(String, f64)> {
    let medias = agrupar(filas.iter().copied(), |f| f.candidato.clone())
        .into_iter()
        .filter_map(|(c, fs)| media(fs.iter().map(|f| f.interacciones)).map(|m| (c, m)));
    argmax_estable(medias)
}

/// Ganador por (semana, espectro) sobre la grilla completa del dominio.
/// Aunque el filtro no deje filas, cada celda del dominio sale con `nd`; la
/// lista sólo es vacía cuando el dominio de semanas o de espectros lo es.
pub fn ganadores_semanales(tabla: &Tabla, filtros: &Filtros) -> Vec<Ganador> {
    let semanas = dominio_semanas(tabla, filtros);
    let espectros = dominio_espectros(tabla, filtros);
    if semanas.is_empty() || espectros.is_empty() {
        return Vec::new();
    }

    let filas = aplicar(&tabla.filas, filtros);
    let mut celdas: HashMap<(&str, &str), Vec<&Fila>> = HashMap::new();
    for f in &filas {
        if let Some(e) = f.espectro.as_deref() {
            celdas.entry((f.semana.as_str(), e)).or_default().push(*f);
        }
    }

    let mut out = Vec::with_capacity(semanas.len() * espectros.len());
    for semana in &semanas {
        for espectro in &espectros {
            let ganador = celdas
                .get(&(semana.as_str(), espectro.as_str()))
                .and_then(|fs| ganador_de_celda(fs));
            out.push(match ganador {
                Some((candidato, v)) => Ganador {
                    semana: semana.clone(),
                    espectro: espectro.clone(),
                    candidato: Some(candidato),
                    interacciones: v,
                    nd: false,
                },
                None => Ganador { semana: semana.clone(), espectro: espectro.clone(), candidato: None, interacciones: 0.0, nd: true },
            });
        }
    }
    out
}

pub fn serie_ganadores(tabla: &Tabla, filtros: &Filtros) -> SerieGanadores {
    let values: Vec<CeldaSerie> = ganadores_semanales(tabla, filtros).into_iter().map(CeldaSerie::from).collect();
    if values.is_empty() {
        return SerieGanadores { semanas: Vec::new(), espectros: Vec::new(), values };
    }
    SerieGanadores { semanas: dominio_semanas(tabla, filtros), espectros: dominio_espectros(tabla, filtros), values }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fila(c: &str, esp: &str, semana: &str, red: &str, inter: f64) -> Fila {
        Fila {
            espectro: Some(esp.into()),
            candidato: c.into(),
            red: red.into(),
            semana: semana.into(),
            likes: Some(inter),
            max_likes: None,
            tema: None,
            comentarios: None,
            interacciones: inter,
        }
    }

    #[test]
    fn test_celda_sin_filas_es_nd() {
        let tabla = Tabla {
            filas: vec![
                fila("Ana", "Izquierda", "1 Sep - 7 Sep", "X", 10.0),
                fila("Luis", "Derecha", "8 Sep - 14 Sep", "X", 20.0),
            ],
        };
        let g = ganadores_semanales(&tabla, &Filtros::default());
        assert_eq!(g.len(), 4);
        let nd: Vec<(&str, &str)> = g.iter().filter(|x| x.nd).map(|x| (x.semana.as_str(), x.espectro.as_str())).collect();
        assert_eq!(nd, vec![("1 Sep - 7 Sep", "Derecha"), ("8 Sep - 14 Sep", "Izquierda")]);
        assert!(g.iter().filter(|x| x.nd).all(|x| x.candidato.is_none() && x.interacciones == 0.0));
    }

    #[test]
    fn test_filtro_de_red_mantiene_grilla_del_universo() {
        let tabla = Tabla {
            filas: vec![
                fila("Ana", "Izquierda", "1 Sep - 7 Sep", "X", 10.0),
                fila("Luis", "Derecha", "8 Sep - 14 Sep", "Y", 20.0),
            ],
        };
        let f = Filtros::new(vec!["X".into()], vec![], vec![], vec![]);
        let g = ganadores_semanales(&tabla, &f);
        assert_eq!(g.len(), 4);
        assert_eq!(g.iter().filter(|x| !x.nd).count(), 1);
    }

    #[test]
    fn test_filtro_sin_filas_conserva_celdas_del_dominio() {
        // Z sólo existe en la semana 2: red=Z + semana 1 no deja filas
        let tabla = Tabla {
            filas: vec![
                fila("Ana", "Izquierda", "1 Sep - 7 Sep", "X", 10.0),
                fila("Luis", "Derecha", "1 Sep - 7 Sep", "Y", 20.0),
                fila("Ana", "Izquierda", "8 Sep - 14 Sep", "Z", 5.0),
            ],
        };
        let f = Filtros::new(vec!["Z".into()], vec!["Semana 1".into()], vec![], vec![]);
        let g = ganadores_semanales(&tabla, &f);
        assert_eq!(g.len(), 2);
        assert!(g.iter().all(|x| x.nd && x.semana == "1 Sep - 7 Sep" && x.candidato.is_none()));

        let s = serie_ganadores(&tabla, &f);
        assert_eq!(s.semanas, vec!["1 Sep - 7 Sep"]);
        assert_eq!(s.espectros, vec!["Izquierda", "Derecha"]);
        assert_eq!(s.values.len(), 2);

        // una semana que no existe deja el dominio vacío
        let vacio = Filtros::new(vec![], vec!["Semana 8".into()], vec![], vec![]);
        assert!(ganadores_semanales(&tabla, &vacio).is_empty());
    }

    #[test]
    fn test_empate_gana_el_primero() {
        let tabla = Tabla {
            filas: vec![
                fila("Beto", "Centro", "1 Sep - 7 Sep", "X", 30.0),
                fila("Ana", "Centro", "1 Sep - 7 Sep", "X", 30.0),
                fila("Caro", "Centro", "1 Sep - 7 Sep", "X", 10.0),
            ],
        };
        let g = ganadores_semanales(&tabla, &Filtros::default());
        assert_eq!(g[0].candidato.as_deref(), Some("Beto"));
    }

    #[test]
    fn test_serie_omite_candidato_en_nd() {
        let tabla = Tabla {
            filas: vec![fila("Ana", "Izquierda", "1 Sep - 7 Sep", "X", 10.0), fila("Luis", "Derecha", "8 Sep - 14 Sep", "X", 5.0)],
        };
        let s = serie_ganadores(&tabla, &Filtros::default());
        assert_eq!(s.semanas, vec!["1 Sep - 7 Sep", "8 Sep - 14 Sep"]);
        assert_eq!(s.espectros, vec!["Izquierda", "Derecha"]);
        let v = serde_json::to_value(&s).unwrap();
        let celdas = v["values"].as_array().unwrap();
        assert!(celdas.iter().filter(|c| c["nd"] == true).all(|c| c.get("candidato").is_none()));
    }
}
