// Tipos del lado de la request: parámetros de query -> `Filtros` + `Metrica`.
pub mod handlers;

use std::collections::HashMap;

use crate::algorithm::Filtros;
use crate::models::Metrica;

/// Separa un parámetro multi-valor (`red=Instagram,TikTok`).
pub fn split_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .map(|p| p.to_string())
        .collect()
}

fn lista(q: &HashMap<String, String>, clave: &str) -> Vec<String> {
    q.get(clave).map(|v| split_list(v)).unwrap_or_default()
}

/// Construye los filtros una vez por request. Parámetros ausentes o vacíos no restringen.
pub fn filtros_desde_query(q: &HashMap<String, String>) -> Filtros {
    Filtros::new(lista(q, "red"), lista(q, "semana"), lista(q, "espectro"), lista(q, "mes"))
}

/// `metric` ausente o desconocido -> interacciones.
pub fn metrica_desde_query(q: &HashMap<String, String>) -> Metrica {
    q.get("metric").map(|m| Metrica::desde_query(m)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(pares: &[(&str, &str)]) -> HashMap<String, String> {
        pares.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_split_list() {
        assert_eq!(split_list("Instagram, TikTok,,"), vec!["Instagram", "TikTok"]);
        assert!(split_list("  ").is_empty());
    }

    #[test]
    fn test_filtros_desde_query() {
        let f = filtros_desde_query(&query(&[("red", "X,Y"), ("semana", "Semana 2"), ("espectro", ""), ("otro", "z")]));
        assert_eq!(f.redes, vec!["X", "Y"]);
        assert_eq!(f.semanas, vec!["8 Sep - 14 Sep"]);
        assert!(f.espectros.is_empty());
        assert!(filtros_desde_query(&HashMap::new()).es_vacio());
    }

    #[test]
    fn test_metrica_desde_query() {
        assert_eq!(metrica_desde_query(&query(&[("metric", "likes")])), Metrica::Likes);
        assert_eq!(metrica_desde_query(&query(&[("metric", "Comentarios")])), Metrica::Comentarios);
        assert_eq!(metrica_desde_query(&query(&[("metric", "xyz")])), Metrica::Interacciones);
        assert_eq!(metrica_desde_query(&HashMap::new()), Metrica::Interacciones);
    }
}
