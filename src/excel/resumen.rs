use std::collections::{HashMap, HashSet};

use crate::algorithm::estadistica::moda;
use crate::excel::carga::{celda, preparar_hoja};
use crate::excel::io::HojaCruda;
use crate::excel::normalizar::{interacciones, numero_celda, texto_celda};
use crate::excel::semanas::normalizar_semana;
use crate::models::{Columna, FilaResumen, Resumen, Tabla};

/// Lee la hoja "Promedio candidato": una fila por (candidato, red, semana) con
/// promedios ya calculados.
///
/// - La semana viene en una columna y pasa por el mismo mapa canónico.
/// - Si falta "Interacciones x semana" se deriva de likes + comentarios.
/// - Si falta el espectro se toma la moda del candidato en la tabla unificada.
pub fn construir_resumen(hoja: &HojaCruda, tabla: &Tabla) -> Resumen {
    let Some(util) = preparar_hoja(hoja) else {
        return Resumen::default();
    };

    let espectro_por_candidato = espectros_por_candidato(tabla);
    let mut vistas: HashSet<(String, String, String)> = HashSet::new();
    let mut filas = Vec::new();

    for fila in util.filas.iter() {
        let col = |c: Columna| celda(fila, &util.columnas, c);
        let semana = texto_celda(col(Columna::Semana))
            .map(|s| normalizar_semana(&s))
            .filter(|s| !s.is_empty());
        let (Some(candidato), Some(red), Some(semana)) =
            (texto_celda(col(Columna::Candidato)), texto_celda(col(Columna::Red)), semana)
        else {
            continue;
        };
        if !vistas.insert((candidato.clone(), red.clone(), semana.clone())) {
            continue;
        }

        let likes = numero_celda(col(Columna::Likes));
        let comentarios = numero_celda(col(Columna::Comentarios));
        let inter = numero_celda(col(Columna::Interacciones)).unwrap_or_else(|| interacciones(likes, comentarios));
        let espectro = texto_celda(col(Columna::Espectro))
            .or_else(|| espectro_por_candidato.get(&candidato).cloned().flatten());

        filas.push(FilaResumen { espectro, candidato, red, semana, likes, comentarios, interacciones: inter });
    }

    Resumen { filas }
}

fn espectros_por_candidato(tabla: &Tabla) -> HashMap<String, Option<String>> {
    let mut valores: HashMap<&str, Vec<Option<&str>>> = HashMap::new();
    for f in &tabla.filas {
        valores.entry(f.candidato.as_str()).or_default().push(f.espectro.as_deref());
    }
    valores
        .into_iter()
        .map(|(c, v)| (c.to_string(), moda(v)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Fila;
    use calamine::Data;

    fn s(v: &str) -> Data { Data::String(v.to_string()) }

    #[test]
    fn test_resumen_deriva_interacciones_y_espectro() {
        let tabla = Tabla {
            filas: vec![Fila {
                espectro: Some("Centro".into()),
                candidato: "Ana".into(),
                red: "X".into(),
                semana: "1 Sep - 7 Sep".into(),
                likes: Some(1.0),
                max_likes: None,
                tema: None,
                comentarios: None,
                interacciones: 1.0,
            }],
        };
        let hoja = HojaCruda::new(
            "Promedio candidato",
            vec![
                vec![s("Candidato"), s("Red Social"), s("Semana"), s("Promedio likes"), s("Promedio comentarios")],
                vec![s("Ana"), s("X"), s("Semana 2"), Data::Float(10.0), s("2")],
                vec![s("Ana"), s("X"), s("semana_2"), Data::Float(99.0), Data::Float(1.0)],
                vec![s("Luis"), s("nan"), s("Semana 2"), Data::Float(5.0), Data::Empty],
            ],
        );
        let r = construir_resumen(&hoja, &tabla);
        assert_eq!(r.len(), 1);
        let f = &r.filas[0];
        assert_eq!(f.semana, "8 Sep - 14 Sep");
        assert_eq!(f.interacciones, 12.0);
        assert_eq!(f.espectro.as_deref(), Some("Centro"));
    }
}
