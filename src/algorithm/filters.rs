//! Motor de filtros sobre la tabla unificada (y la tabla resumen).
//!
//! Cada criterio es una lista de valores aceptados; lista vacía = sin
//! restricción. Los criterios se combinan por conjunción y la pertenencia se
//! compara sin distinguir mayúsculas.

use crate::excel::semanas::{mes_desde_query, normalizar_semana, semana_en_mes};
use crate::models::Registro;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filtros {
    pub redes: Vec<String>,
    /// Ya normalizadas al mapa canónico
    pub semanas: Vec<String>,
    pub espectros: Vec<String>,
    /// Valores tal como llegaron ("Sep", "octubre", ...)
    pub meses: Vec<String>,
}

impl Filtros {
    pub fn new(redes: Vec<String>, semanas: Vec<String>, espectros: Vec<String>, meses: Vec<String>) -> Self {
        Filtros {
            redes: limpiar(redes),
            semanas: limpiar(semanas).iter().map(|s| normalizar_semana(s)).collect(),
            espectros: limpiar(espectros),
            meses: limpiar(meses),
        }
    }

    pub fn es_vacio(&self) -> bool {
        self.redes.is_empty() && self.semanas.is_empty() && self.espectros.is_empty() && self.meses.is_empty()
    }

    /// Semana admitida por los criterios `semana` y `mes`.
    pub fn admite_semana(&self, semana: &str) -> bool {
        miembro(semana, &self.semanas) && self.admite_mes(semana)
    }

    /// Heurística de subcadena: la etiqueta debe contener la abreviatura del mes.
    /// Un mes que no está en la tabla de meses no admite ninguna semana.
    fn admite_mes(&self, semana: &str) -> bool {
        if self.meses.is_empty() {
            return true;
        }
        self.meses
            .iter()
            .filter_map(|m| mes_desde_query(m))
            .any(|abbr| semana_en_mes(semana, abbr))
    }

    pub fn admite_espectro(&self, espectro: Option<&str>) -> bool {
        if self.espectros.is_empty() {
            return true;
        }
        espectro.is_some_and(|e| miembro(e, &self.espectros))
    }

    pub fn admite_red(&self, red: &str) -> bool {
        miembro(red, &self.redes)
    }

    pub fn admite<R: Registro>(&self, r: &R) -> bool {
        self.admite_red(r.red()) && self.admite_semana(r.semana()) && self.admite_espectro(r.espectro())
    }

    /// El usuario restringió explícitamente la faceta semana (por `semana` o `mes`).
    pub fn filtra_semanas(&self) -> bool {
        !self.semanas.is_empty() || !self.meses.is_empty()
    }
}

fn limpiar(v: Vec<String>) -> Vec<String> {
    v.into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Conjunto vacío = sin restricción.
fn miembro(valor: &str, conjunto: &[String]) -> bool {
    if conjunto.is_empty() {
        return true;
    }
    let v = valor.trim().to_lowercase();
    conjunto.iter().any(|c| c.to_lowercase() == v)
}

/// Filas que pasan todos los filtros, en el orden original.
pub fn aplicar<'a, R: Registro>(filas: &'a [R], filtros: &Filtros) -> Vec<&'a R> {
    filas.iter().filter(|f| filtros.admite(*f)).collect()
}
