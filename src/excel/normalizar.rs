use calamine::Data;
use crate::excel::io::cell_to_string;

/// Cadenas que en el libro significan "sin dato".
const MARCADORES_NULOS: [&str; 3] = ["nan", "none", "null"];

pub fn es_marcador_nulo(s: &str) -> bool {
    let t = s.trim();
    t.is_empty() || MARCADORES_NULOS.iter().any(|m| t.eq_ignore_ascii_case(m))
}

/// Texto recortado, o `None` si está vacío o es un marcador ("nan", "None", ...).
pub fn texto(s: &str) -> Option<String> {
    if es_marcador_nulo(s) {
        None
    } else {
        Some(s.trim().to_string())
    }
}

pub fn texto_celda(c: &Data) -> Option<String> {
    texto(&cell_to_string(c))
}

/// Parseo permisivo de números escritos a mano.
///
/// Se descarta todo lo que no sea dígito, signo, exponente o punto; después se
/// eliminan los puntos de miles (punto seguido de exactamente 3 dígitos y luego
/// un no-dígito o el final). "19,000,000" -> 19000000, "1.234.567" -> 1234567,
/// "abc" -> None. Nunca devuelve 0 por un valor ilegible.
pub fn numero(s: &str) -> Option<f64> {
    let filtrado: Vec<char> = s
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | 'e' | 'E' | '.'))
        .collect();

    let mut limpio = String::with_capacity(filtrado.len());
    for (i, c) in filtrado.iter().enumerate() {
        if *c == '.' && es_punto_de_miles(&filtrado, i) {
            continue;
        }
        limpio.push(*c);
    }

    limpio.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn es_punto_de_miles(chars: &[char], i: usize) -> bool {
    let tres_digitos = (1..=3).all(|k| chars.get(i + k).is_some_and(|c| c.is_ascii_digit()));
    let luego = chars.get(i + 4);
    tres_digitos && !luego.is_some_and(|c| c.is_ascii_digit())
}

/// Número desde una celda: los numéricos nativos pasan directo, el texto se parsea permisivo.
pub fn numero_celda(c: &Data) -> Option<f64> {
    match c {
        Data::Float(f) if f.is_finite() => Some(*f),
        Data::Float(_) => None,
        Data::Int(i) => Some(*i as f64),
        Data::String(s) => {
            if es_marcador_nulo(s) { None } else { numero(s) }
        }
        Data::Bool(_) | Data::Empty | Data::Error(_) => None,
        Data::DateTime(_) | Data::DateTimeIso(_) | Data::DurationIso(_) => None,
    }
}

/// Suma que alimenta el puntaje de interacciones: sólo aquí un nulo vale 0.
pub fn interacciones(likes: Option<f64>, comentarios: Option<f64>) -> f64 {
    likes.unwrap_or(0.0) + comentarios.unwrap_or(0.0)
}
