//! Estadísticas pequeñas compartidas por los agregadores.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

use crate::models::Registro;

/// Orden fijo de espectros conocidos; el resto va después, alfabético.
const ORDEN_ESPECTROS: [&[&str]; 3] = [&["izquierda", "left"], &["centro", "center", "centre"], &["derecha", "right"]];

pub fn media<I: IntoIterator<Item = f64>>(valores: I) -> Option<f64> {
    let (suma, n) = valores.into_iter().fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if n == 0 { None } else { Some(suma / n as f64) }
}

/// Media ignorando nulos; `None` si no queda ningún valor.
pub fn media_opcional<I: IntoIterator<Item = Option<f64>>>(valores: I) -> Option<f64> {
    media(valores.into_iter().flatten())
}

/// Moda de una serie categórica con nulos.
///
/// Si hay una única moda se devuelve; si hay empate o no hay datos, el primer
/// valor no nulo en orden de aparición; si todo es nulo, `None`.
pub fn moda<'a, I: IntoIterator<Item = Option<&'a str>>>(valores: I) -> Option<String> {
    let mut conteo: Vec<(&str, usize)> = Vec::new();
    for v in valores.into_iter().flatten() {
        match conteo.iter_mut().find(|(k, _)| *k == v) {
            Some((_, n)) => *n += 1,
            None => conteo.push((v, 1)),
        }
    }
    let max = conteo.iter().map(|(_, n)| *n).max()?;
    let mut con_max = conteo.iter().filter(|(_, n)| *n == max);
    match (con_max.next(), con_max.next()) {
        (Some((unica, _)), None) => Some(unica.to_string()),
        _ => conteo.first().map(|(k, _)| k.to_string()),
    }
}

/// Primer máximo estricto: ante empate gana el que apareció antes.
pub fn argmax_estable<T, I: IntoIterator<Item = (T, f64)>>(items: I) -> Option<(T, f64)> {
    let mut mejor: Option<(T, f64)> = None;
    for (k, v) in items {
        match &mejor {
            Some((_, m)) if v <= *m => {}
            _ => mejor = Some((k, v)),
        }
    }
    mejor
}

/// Agrupa preservando el orden de primera aparición de cada clave.
pub fn agrupar<T, K, F>(items: impl IntoIterator<Item = T>, clave: F) -> Vec<(K, Vec<T>)>
where
    K: Eq + Hash + Clone,
    F: Fn(&T) -> K,
{
    let mut indice: HashMap<K, usize> = HashMap::new();
    let mut grupos: Vec<(K, Vec<T>)> = Vec::new();
    for item in items {
        let k = clave(&item);
        match indice.get(&k) {
            Some(&i) => grupos[i].1.push(item),
            None => {
                indice.insert(k.clone(), grupos.len());
                grupos.push((k, vec![item]));
            }
        }
    }
    grupos
}

/// Espectro de cada candidato como moda sobre las filas dadas (el subconjunto filtrado).
pub fn espectros_resueltos<R: Registro>(filas: &[&R]) -> HashMap<String, Option<String>> {
    agrupar(filas.iter().copied(), |f| f.candidato().to_string())
        .into_iter()
        .map(|(c, fs)| {
            let e = moda(fs.iter().map(|f| f.espectro()));
            (c, e)
        })
        .collect()
}

fn rango_espectro(e: &str) -> usize {
    let low = e.trim().to_lowercase();
    ORDEN_ESPECTROS
        .iter()
        .position(|alias| alias.contains(&low.as_str()))
        .unwrap_or(ORDEN_ESPECTROS.len())
}

pub fn comparar_espectros(a: &str, b: &str) -> Ordering {
    rango_espectro(a).cmp(&rango_espectro(b)).then_with(|| a.cmp(b))
}

/// Valores únicos de espectro en orden de presentación.
pub fn ordenar_espectros<'a, I: IntoIterator<Item = &'a str>>(espectros: I) -> Vec<String> {
    let mut v: Vec<String> = espectros.into_iter().map(|s| s.to_string()).collect();
    v.sort_by(|a, b| comparar_espectros(a, b));
    v.dedup();
    v
}

/// Valores únicos ordenados alfabéticamente (candidatos, redes).
pub fn unicos_ordenados<'a, I: IntoIterator<Item = &'a str>>(valores: I) -> Vec<String> {
    let mut v: Vec<String> = valores.into_iter().map(|s| s.to_string()).collect();
    v.sort();
    v.dedup();
    v
}
