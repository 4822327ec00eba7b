use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::algorithm::estadistica::{agrupar, espectros_resueltos, media, media_opcional};
use crate::algorithm::filters::{aplicar, Filtros};
use crate::models::{Datos, Metrica, Registro};

/// Una barra del ranking. Se serializa con la métrica como clave:
/// `{"candidato", "espectro", "likes"|"comentarios"|"interacciones", "nd"}`.
#[derive(Debug, Clone, PartialEq)]
pub struct EntradaRanking {
    pub candidato: String,
    pub espectro: Option<String>,
    pub metrica: Metrica,
    /// 0 cuando `nd`
    pub valor: f64,
    pub nd: bool,
}

impl Serialize for EntradaRanking {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(4))?;
        map.serialize_entry("candidato", &self.candidato)?;
        map.serialize_entry("espectro", &self.espectro)?;
        map.serialize_entry(self.metrica.clave(), &self.valor)?;
        map.serialize_entry("nd", &self.nd)?;
        map.end()
    }
}

/// Promedio de la métrica por candidato, en dos pasos: primero entre redes
/// dentro de cada semana, después entre semanas. Así un candidato con más redes
/// en una semana no pesa más.
pub fn promedio_por_candidato<R: Registro>(filas: &[&R], metrica: Metrica) -> Vec<(String, Option<f64>)> {
    agrupar(filas.iter().copied(), |f| f.candidato().to_string())
        .into_iter()
        .map(|(candidato, del_candidato)| {
            let por_semana = agrupar(del_candidato, |f| f.semana().to_string())
                .into_iter()
                .map(|(_, fs)| media_opcional(fs.iter().map(|f| f.valor(metrica))));
            (candidato, media(por_semana.flatten()))
        })
        .collect()
}

/// Ranking descendente sobre filas ya filtradas. Los candidatos sin dato van al
/// final; a igual valor, orden alfabético.
pub fn ranking<R: Registro>(filas: &[&R], metrica: Metrica) -> Vec<EntradaRanking> {
    let espectros = espectros_resueltos(filas);
    let mut out: Vec<EntradaRanking> = promedio_por_candidato(filas, metrica)
        .into_iter()
        .map(|(candidato, v)| EntradaRanking {
            espectro: espectros.get(&candidato).cloned().flatten(),
            candidato,
            metrica,
            valor: v.unwrap_or(0.0),
            nd: v.is_none(),
        })
        .collect();

    out.sort_by(|a, b| a.candidato.cmp(&b.candidato));
    out.sort_by(|a, b| a.nd.cmp(&b.nd).then_with(|| b.valor.total_cmp(&a.valor)));
    out
}

/// Ranking de la API: usa la hoja resumen si el libro la trae, si no la tabla unificada.
pub fn ranking_por_metrica(datos: &Datos, filtros: &Filtros, metrica: Metrica) -> Vec<EntradaRanking> {
    match &datos.resumen {
        Some(resumen) => ranking(&aplicar(&resumen.filas, filtros), metrica),
        None => ranking(&aplicar(&datos.tabla.filas, filtros), metrica),
    }
}
