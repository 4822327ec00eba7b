//! Etiquetas de semana: mapa canónico, orden cronológico y heurística de meses.
//!
//! Las hojas del libro se llaman "Semana 1", "semana_2", "SEMANA TRES", o a veces
//! traen directamente un rango libre tipo "8 sep - 14". Todo eso se lleva a la
//! etiqueta canónica de `SEMANAS_CANONICAS`; lo que no se reconoce queda como
//! categoría propia (limpia) y se ordena después de las canónicas.

use std::cmp::Ordering;

/// Semanas del monitoreo en orden cronológico (lunes a domingo).
pub const SEMANAS_CANONICAS: [&str; 8] = [
    "1 Sep - 7 Sep",
    "8 Sep - 14 Sep",
    "15 Sep - 21 Sep",
    "22 Sep - 28 Sep",
    "29 Sep - 5 Oct",
    "6 Oct - 12 Oct",
    "13 Oct - 19 Oct",
    "20 Oct - 26 Oct",
];

/// Números escritos que aparecen en nombres de hoja ("Semana tres", "Semana Primera").
const ORDINALES: &[(&str, usize)] = &[
    ("uno", 1), ("una", 1), ("primera", 1), ("primero", 1),
    ("dos", 2), ("segunda", 2), ("segundo", 2),
    ("tres", 3), ("tercera", 3), ("tercero", 3),
    ("cuatro", 4), ("cuarta", 4), ("cuarto", 4),
    ("cinco", 5), ("quinta", 5), ("quinto", 5),
    ("seis", 6), ("sexta", 6), ("sexto", 6),
    ("siete", 7), ("septima", 7), ("séptima", 7), ("septimo", 7), ("séptimo", 7),
    ("ocho", 8), ("octava", 8), ("octavo", 8),
];

/// Meses que reconoce el filtro `mes`: abreviatura buscada en la etiqueta + alias aceptados en la query.
pub const MESES: [(&str, &[&str]); 2] = [
    ("Sep", &["sep", "sept", "septiembre", "set", "setiembre", "september"]),
    ("Oct", &["oct", "octubre", "october"]),
];

const SEPARADORES: &[char] = &['_', '-', '.', ':', '#', 'º', '°'];

/// Recorta y colapsa espacios internos.
pub fn limpiar_etiqueta(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Lleva cualquier etiqueta de semana a su forma canónica. Es total e idempotente:
/// una etiqueta canónica vuelve sin cambios y lo irreconocible vuelve limpio.
pub fn normalizar_semana(raw: &str) -> String {
    let limpia = limpiar_etiqueta(raw);
    if SEMANAS_CANONICAS.contains(&limpia.as_str()) {
        return limpia;
    }
    if let Some(c) = numero_de_semana(&limpia).and_then(|n| n.checked_sub(1)).and_then(|i| SEMANAS_CANONICAS.get(i)) {
        return c.to_string();
    }
    if let Some(c) = canonica_por_rango(&limpia) {
        return c.to_string();
    }
    limpia
}

/// "Semana 3", "semana_3", "SEMANA-03", "Sem 3", "S3", "Semna tres" -> 3
pub fn numero_de_semana(s: &str) -> Option<usize> {
    let low = s.trim().to_lowercase();
    let letras: String = low.chars().take_while(|c| c.is_alphabetic()).collect();
    if letras.is_empty() {
        return None;
    }
    let prefijo_ok = letras == "s" || letras == "sem" || strsim::levenshtein(&letras, "semana") <= 1;
    if !prefijo_ok {
        return None;
    }

    let resto = low[letras.len()..].trim_start_matches(|c: char| c.is_whitespace() || SEPARADORES.contains(&c));
    let digitos: String = resto.chars().take_while(|c| c.is_ascii_digit()).collect();
    if !digitos.is_empty() {
        return digitos.parse::<usize>().ok();
    }
    let palabra = resto.split_whitespace().next()?;
    ORDINALES.iter().find(|(w, _)| *w == palabra).map(|(_, n)| *n)
}

/// Rango de fechas "D Mon - D [Mon]" sin año.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangoFechas {
    pub dia_inicio: u32,
    pub mes_inicio: u32,
    pub dia_fin: u32,
    pub mes_fin: Option<u32>,
}

impl RangoFechas {
    pub fn parse(s: &str) -> Option<RangoFechas> {
        let (a, b) = s.split_once(['-', '–', '—'])?;
        let ini = tokens_fecha(a);
        let fin = tokens_fecha(b);

        let (dia_inicio, mes_inicio) = match ini.as_slice() {
            [d, m] => (dia(d)?, mes_desde_texto(m)?),
            _ => return None,
        };
        let (dia_fin, mes_fin) = match fin.as_slice() {
            [d] => (dia(d)?, None),
            [d, m] => (dia(d)?, Some(mes_desde_texto(m)?)),
            _ => return None,
        };
        Some(RangoFechas { dia_inicio, mes_inicio, dia_fin, mes_fin })
    }

    fn coincide(&self, otro: &RangoFechas) -> bool {
        let meses_fin_ok = match (self.mes_fin, otro.mes_fin) {
            (Some(a), Some(b)) => a == b,
            _ => true,
        };
        self.dia_inicio == otro.dia_inicio
            && self.mes_inicio == otro.mes_inicio
            && self.dia_fin == otro.dia_fin
            && meses_fin_ok
    }
}

fn tokens_fecha(s: &str) -> Vec<&str> {
    s.split_whitespace().filter(|t| !t.eq_ignore_ascii_case("de")).collect()
}

fn dia(t: &str) -> Option<u32> {
    t.parse::<u32>().ok().filter(|d| (1..=31).contains(d))
}

/// Mes por abreviatura española; si no, lo que entienda chrono (nombres en inglés).
pub fn mes_desde_texto(t: &str) -> Option<u32> {
    let low = t.trim().trim_end_matches('.').to_lowercase();
    let es = match low.get(..3).unwrap_or(&low) {
        "ene" => Some(1),
        "feb" => Some(2),
        "mar" => Some(3),
        "abr" => Some(4),
        "may" => Some(5),
        "jun" => Some(6),
        "jul" => Some(7),
        "ago" => Some(8),
        "sep" | "set" => Some(9),
        "oct" => Some(10),
        "nov" => Some(11),
        "dic" => Some(12),
        _ => None,
    };
    es.or_else(|| low.parse::<chrono::Month>().ok().map(|m| m.number_from_month()))
}

fn canonica_por_rango(s: &str) -> Option<&'static str> {
    let buscado = RangoFechas::parse(s)?;
    SEMANAS_CANONICAS
        .iter()
        .find(|c| RangoFechas::parse(c).is_some_and(|r| r.coincide(&buscado)))
        .copied()
}

/// Trozo de una clave de orden natural ("Semana 10" va después de "Semana 9").
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Trozo {
    Num(u64),
    Texto(String),
}

pub fn clave_natural(s: &str) -> Vec<Trozo> {
    let mut out = Vec::new();
    let mut actual = String::new();
    let mut en_numero = false;
    for ch in s.chars() {
        let es_digito = ch.is_ascii_digit();
        if !actual.is_empty() && es_digito != en_numero {
            out.push(cerrar_trozo(&actual, en_numero));
            actual.clear();
        }
        en_numero = es_digito;
        actual.push(ch);
    }
    if !actual.is_empty() {
        out.push(cerrar_trozo(&actual, en_numero));
    }
    out
}

fn cerrar_trozo(s: &str, numero: bool) -> Trozo {
    if numero {
        Trozo::Num(s.parse().unwrap_or(u64::MAX))
    } else {
        Trozo::Texto(s.to_lowercase())
    }
}

/// Clave de orden cronológico: canónicas por posición, el resto detrás por orden natural.
pub fn orden_semana(s: &str) -> (usize, Vec<Trozo>) {
    match SEMANAS_CANONICAS.iter().position(|c| *c == s) {
        Some(i) => (i, Vec::new()),
        None => (SEMANAS_CANONICAS.len(), clave_natural(s)),
    }
}

pub fn comparar_semanas(a: &str, b: &str) -> Ordering {
    orden_semana(a).cmp(&orden_semana(b))
}

/// Valores únicos ordenados cronológicamente.
pub fn ordenar_semanas<'a, I: IntoIterator<Item = &'a str>>(semanas: I) -> Vec<String> {
    let mut v: Vec<String> = semanas.into_iter().map(|s| s.to_string()).collect();
    v.sort_by(|a, b| comparar_semanas(a, b));
    v.dedup();
    v
}

/// Abreviatura canónica de un valor de query `mes` ("septiembre" -> "Sep").
pub fn mes_desde_query(s: &str) -> Option<&'static str> {
    let low = s.trim().to_lowercase();
    MESES
        .iter()
        .find(|(abbr, alias)| abbr.to_lowercase() == low || alias.contains(&low.as_str()))
        .map(|(abbr, _)| *abbr)
}

/// Heurística de subcadena sobre la etiqueta: no hay fecha real detrás.
pub fn semana_en_mes(semana: &str, abbr: &str) -> bool {
    semana.to_lowercase().contains(&abbr.to_lowercase())
}

/// Meses de `MESES` que aparecen en alguna de las semanas dadas.
pub fn meses_presentes<'a, I: IntoIterator<Item = &'a str>>(semanas: I) -> Vec<String> {
    let semanas: Vec<&str> = semanas.into_iter().collect();
    MESES
        .iter()
        .filter(|(abbr, _)| semanas.iter().any(|s| semana_en_mes(s, abbr)))
        .map(|(abbr, _)| abbr.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semana_n_variantes() {
        assert_eq!(normalizar_semana("Semana 1"), "1 Sep - 7 Sep");
        assert_eq!(normalizar_semana("  semana_2 "), "8 Sep - 14 Sep");
        assert_eq!(normalizar_semana("SEMANA-03"), "15 Sep - 21 Sep");
        assert_eq!(normalizar_semana("Semna 4"), "22 Sep - 28 Sep");
        assert_eq!(normalizar_semana("Semana cinco"), "29 Sep - 5 Oct");
        assert_eq!(normalizar_semana("S6"), "6 Oct - 12 Oct");
    }

    #[test]
    fn test_rango_libre() {
        assert_eq!(normalizar_semana("8 sep - 14"), "8 Sep - 14 Sep");
        assert_eq!(normalizar_semana("29 de septiembre - 5 de octubre"), "29 Sep - 5 Oct");
        assert_eq!(normalizar_semana("13 OCT – 19"), "13 Oct - 19 Oct");
    }

    #[test]
    fn test_idempotente_y_total() {
        for c in SEMANAS_CANONICAS {
            assert_eq!(normalizar_semana(c), c);
        }
        let adhoc = normalizar_semana("  Semana   extra ");
        assert_eq!(adhoc, "Semana extra");
        assert_eq!(normalizar_semana(&adhoc), adhoc);
        // fuera de rango: queda como categoría propia
        assert_eq!(normalizar_semana("Semana 12"), "Semana 12");
    }

    #[test]
    fn test_orden_canonicas_antes_que_adhoc() {
        let v = ordenar_semanas(["Semana 10", "8 Sep - 14 Sep", "Semana 9", "1 Sep - 7 Sep", "Semana 9"]);
        assert_eq!(v, vec!["1 Sep - 7 Sep", "8 Sep - 14 Sep", "Semana 9", "Semana 10"]);
    }

    #[test]
    fn test_meses() {
        assert_eq!(mes_desde_query("septiembre"), Some("Sep"));
        assert_eq!(mes_desde_query("OCT"), Some("Oct"));
        assert_eq!(mes_desde_query("nov"), None);
        assert!(semana_en_mes("29 Sep - 5 Oct", "Oct"));
        assert_eq!(meses_presentes(["1 Sep - 7 Sep"]), vec!["Sep"]);
    }
}
