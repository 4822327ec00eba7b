//! Variación semana a semana por candidato y mejor alza por espectro.
//!
//! Sólo se consideran las transiciones entre semanas consecutivas *presentes*
//! en el subconjunto filtrado, no el calendario completo.

use serde::Serialize;
use std::collections::HashMap;

use crate::algorithm::estadistica::{agrupar, argmax_estable, espectros_resueltos, media_opcional};
use crate::algorithm::filters::{aplicar, Filtros};
use crate::algorithm::ganador::dominio_espectros;
use crate::excel::semanas::ordenar_semanas;
use crate::models::{Fila, Metrica, Tabla};

/// Pivote candidato × semana de una métrica sobre la tabla filtrada.
#[derive(Debug, Clone, Default)]
pub struct Pivote {
    /// Orden de primera aparición (desempate por orden de filas)
    pub candidatos: Vec<String>,
    pub semanas: Vec<String>,
    pub espectros: HashMap<String, Option<String>>,
    valores: HashMap<(String, String), f64>,
}

impl Pivote {
    pub fn construir(filas: &[&Fila], metrica: Metrica) -> Pivote {
        let mut valores = HashMap::new();
        let grupos = agrupar(filas.iter().copied(), |f| (f.candidato.clone(), f.semana.clone()));
        for (clave, fs) in grupos {
            if let Some(v) = media_opcional(fs.iter().map(|f| metrica.de_fila(f))) {
                valores.insert(clave, v);
            }
        }
        Pivote {
            candidatos: agrupar(filas.iter().copied(), |f| f.candidato.clone()).into_iter().map(|(c, _)| c).collect(),
            semanas: ordenar_semanas(filas.iter().map(|f| f.semana.as_str())),
            espectros: espectros_resueltos(filas),
            valores,
        }
    }

    pub fn valor(&self, candidato: &str, semana: &str) -> Option<f64> {
        self.valores.get(&(candidato.to_string(), semana.to_string())).copied()
    }

    /// Pares (anterior, actual) de semanas consecutivas.
    pub fn transiciones(&self) -> Vec<(&str, &str)> {
        self.semanas.windows(2).map(|w| (w[0].as_str(), w[1].as_str())).collect()
    }

    pub fn espectro(&self, candidato: &str) -> Option<&str> {
        self.espectros.get(candidato).and_then(|e| e.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Variacion {
    pub candidato: String,
    pub espectro: Option<String>,
    pub desde: String,
    pub hasta: String,
    pub anterior: Option<f64>,
    pub actual: Option<f64>,
    /// `None` si falta alguno de los dos lados
    pub delta: Option<f64>,
    pub nd: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MejorAlza {
    pub desde: String,
    pub hasta: String,
    pub transicion: String,
    pub espectro: String,
    pub candidato: Option<String>,
    pub delta: f64,
    pub nd: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SerieVariacion {
    pub metric: &'static str,
    pub transiciones: Vec<String>,
    pub espectros: Vec<String>,
    pub values: Vec<CeldaVariacion>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CeldaVariacion {
    pub transicion: String,
    pub espectro: String,
    pub delta: f64,
    pub nd: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidato: Option<String>,
}

pub fn etiqueta_transicion(desde: &str, hasta: &str) -> String {
    format!("{} → {}", desde, hasta)
}

/// Lista plana: un registro por candidato y transición.
pub fn variaciones(tabla: &Tabla, filtros: &Filtros, metrica: Metrica) -> Vec<Variacion> {
    let filas = aplicar(&tabla.filas, filtros);
    let pivote = Pivote::construir(&filas, metrica);
    let mut out = Vec::new();
    for (desde, hasta) in pivote.transiciones() {
        for c in &pivote.candidatos {
            let anterior = pivote.valor(c, desde);
            let actual = pivote.valor(c, hasta);
            let delta = anterior.zip(actual).map(|(a, b)| b - a);
            out.push(Variacion {
                candidato: c.clone(),
                espectro: pivote.espectro(c).map(|e| e.to_string()),
                desde: desde.to_string(),
                hasta: hasta.to_string(),
                anterior,
                actual,
                delta,
                nd: delta.is_none(),
            });
        }
    }
    out
}

/// Mejor alza estrictamente positiva por espectro y transición. Empates: el
/// candidato que aparece primero en las filas; sin alza positiva -> `nd`.
pub fn ganadores_variacion(tabla: &Tabla, filtros: &Filtros, metrica: Metrica) -> Vec<MejorAlza> {
    let filas = aplicar(&tabla.filas, filtros);
    if filas.is_empty() {
        return Vec::new();
    }
    let pivote = Pivote::construir(&filas, metrica);
    let espectros = dominio_espectros(tabla, filtros);

    let mut out = Vec::new();
    for (desde, hasta) in pivote.transiciones() {
        for espectro in &espectros {
            let deltas = pivote
                .candidatos
                .iter()
                .filter(|c| pivote.espectro(c) == Some(espectro.as_str()))
                .filter_map(|c| {
                    let d = pivote.valor(c, hasta)? - pivote.valor(c, desde)?;
                    (d > 0.0).then_some((c, d))
                });
            let mejor = argmax_estable(deltas);
            out.push(MejorAlza {
                desde: desde.to_string(),
                hasta: hasta.to_string(),
                transicion: etiqueta_transicion(desde, hasta),
                espectro: espectro.clone(),
                candidato: mejor.map(|(c, _)| c.clone()),
                delta: mejor.map(|(_, d)| d).unwrap_or(0.0),
                nd: mejor.is_none(),
            });
        }
    }
    out
}

pub fn serie_ganadores_variacion(tabla: &Tabla, filtros: &Filtros, metrica: Metrica) -> SerieVariacion {
    let mejores = ganadores_variacion(tabla, filtros, metrica);
    let mut transiciones: Vec<String> = Vec::new();
    let mut espectros: Vec<String> = Vec::new();
    for m in &mejores {
        if !transiciones.contains(&m.transicion) {
            transiciones.push(m.transicion.clone());
        }
        if !espectros.contains(&m.espectro) {
            espectros.push(m.espectro.clone());
        }
    }
    let values = mejores
        .into_iter()
        .map(|m| CeldaVariacion { transicion: m.transicion, espectro: m.espectro, delta: m.delta, nd: m.nd, candidato: m.candidato })
        .collect();
    SerieVariacion { metric: metrica.clave(), transiciones, espectros, values }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fila(c: &str, esp: &str, semana: &str, likes: Option<f64>) -> Fila {
        Fila {
            espectro: Some(esp.into()),
            candidato: c.into(),
            red: "X".into(),
            semana: semana.into(),
            likes,
            max_likes: None,
            tema: None,
            comentarios: None,
            interacciones: likes.unwrap_or(0.0),
        }
    }

    const S1: &str = "1 Sep - 7 Sep";
    const S3: &str = "15 Sep - 21 Sep";
    const S4: &str = "22 Sep - 28 Sep";

    #[test]
    fn test_transiciones_solo_entre_semanas_presentes() {
        // S2 no aparece: la transición es S1 -> S3
        let tabla = Tabla { filas: vec![fila("Ana", "Centro", S3, Some(30.0)), fila("Ana", "Centro", S1, Some(10.0))] };
        let v = variaciones(&tabla, &Filtros::default(), Metrica::Likes);
        assert_eq!(v.len(), 1);
        assert_eq!((v[0].desde.as_str(), v[0].hasta.as_str()), (S1, S3));
        assert_eq!(v[0].delta, Some(20.0));
    }

    #[test]
    fn test_delta_nulo_si_falta_un_lado() {
        let tabla = Tabla {
            filas: vec![fila("Ana", "Centro", S1, Some(10.0)), fila("Ana", "Centro", S3, None), fila("Luis", "Centro", S3, Some(1.0))],
        };
        let v = variaciones(&tabla, &Filtros::default(), Metrica::Likes);
        assert!(v.iter().all(|x| x.nd && x.delta.is_none()));
    }

    #[test]
    fn test_mejor_alza_estricta_y_desempate() {
        let tabla = Tabla {
            filas: vec![
                fila("Ana", "Centro", S1, Some(10.0)),
                fila("Beto", "Centro", S1, Some(10.0)),
                fila("Caro", "Derecha", S1, Some(50.0)),
                fila("Ana", "Centro", S3, Some(25.0)),
                fila("Beto", "Centro", S3, Some(25.0)),
                fila("Caro", "Derecha", S3, Some(40.0)),
                fila("Ana", "Centro", S4, Some(25.0)),
                fila("Beto", "Centro", S4, Some(20.0)),
                fila("Caro", "Derecha", S4, Some(41.0)),
            ],
        };
        let g = ganadores_variacion(&tabla, &Filtros::default(), Metrica::Likes);
        // 2 transiciones × 2 espectros
        assert_eq!(g.len(), 4);
        let centro_1 = &g[0];
        assert_eq!(centro_1.espectro, "Centro");
        assert_eq!(centro_1.candidato.as_deref(), Some("Ana"));
        assert_eq!(centro_1.delta, 15.0);
        // Caro baja en la primera transición
        assert!(g[1].nd);
        assert_eq!(g[1].candidato, None);
        // Ana se mantiene (0) y Beto baja: sin alza positiva
        assert!(g[2].nd);
        assert_eq!(g[3].candidato.as_deref(), Some("Caro"));

        let s = serie_ganadores_variacion(&tabla, &Filtros::default(), Metrica::Likes);
        assert_eq!(s.transiciones, vec![etiqueta_transicion(S1, S3), etiqueta_transicion(S3, S4)]);
        assert_eq!(s.espectros, vec!["Centro", "Derecha"]);
    }
}
