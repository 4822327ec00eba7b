// Estructuras de datos principales

use serde::Serialize;
use std::path::PathBuf;

/// Columnas conocidas del libro de monitoreo.
///
/// Cada variante acepta varios encabezados (español del archivo original e
/// inglés); la comparación se hace sobre el encabezado normalizado, así que un
/// doble espacio o mayúsculas distintas no rompen el mapeo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Columna {
    Espectro,
    Candidato,
    Red,
    Likes,
    MaxLikes,
    Tema,
    Comentarios,
    /// Sólo en la hoja resumen: las hojas semanales toman la semana del nombre de la hoja.
    Semana,
    /// Sólo en la hoja resumen.
    Interacciones,
}

impl Columna {
    pub const TODAS: [Columna; 9] = [
        Columna::Espectro,
        Columna::Candidato,
        Columna::Red,
        Columna::Likes,
        Columna::MaxLikes,
        Columna::Tema,
        Columna::Comentarios,
        Columna::Semana,
        Columna::Interacciones,
    ];

    pub fn encabezados(&self) -> &'static [&'static str] {
        match self {
            Columna::Espectro => &["Espectro", "Spectrum"],
            Columna::Candidato => &["Candidato", "Candidata", "Candidate"],
            Columna::Red => &["Red Social", "Red", "Social Network", "Network"],
            Columna::Likes => &[
                "Promedio likes x semana",
                "Promedio likes por semana",
                "Promedio likes",
                "Avg likes per week",
            ],
            Columna::MaxLikes => &["Publicación con más likes", "Publicacion con mas likes", "Post with most likes"],
            Columna::Tema => &["Tema", "Topic"],
            Columna::Comentarios => &[
                "Promedio comentarios  por publicación",
                "Promedio comentarios por publicacion",
                "Promedio comentarios x semana",
                "Promedio comentarios",
                "Avg comments per post",
            ],
            Columna::Semana => &["Semana", "Week"],
            Columna::Interacciones => &[
                "Interacciones x semana",
                "Interacciones por semana",
                "Interacciones",
                "Interactions per week",
            ],
        }
    }

    /// Resuelve un encabezado ya normalizado (ver `excel::normalize_header`).
    pub fn desde_encabezado_normalizado(h: &str) -> Option<Columna> {
        Columna::TODAS.iter().copied().find(|c| {
            c.encabezados()
                .iter()
                .any(|e| crate::excel::normalize_header(e) == h)
        })
    }
}

/// Métrica seleccionable en rankings, heatmap semanal y variaciones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Metrica {
    Likes,
    Comentarios,
    #[default]
    Interacciones,
}

impl Metrica {
    /// Nombre usado en la query string y como clave JSON.
    pub fn clave(&self) -> &'static str {
        match self {
            Metrica::Likes => "likes",
            Metrica::Comentarios => "comentarios",
            Metrica::Interacciones => "interacciones",
        }
    }

    /// Valores desconocidos caen en `Interacciones`.
    pub fn desde_query(s: &str) -> Metrica {
        match s.trim().to_lowercase().as_str() {
            "likes" => Metrica::Likes,
            "comentarios" | "coment" | "comments" => Metrica::Comentarios,
            _ => Metrica::Interacciones,
        }
    }

    pub fn de_fila(&self, f: &Fila) -> Option<f64> {
        match self {
            Metrica::Likes => f.likes,
            Metrica::Comentarios => f.comentarios,
            Metrica::Interacciones => Some(f.interacciones),
        }
    }

    pub fn de_resumen(&self, f: &FilaResumen) -> Option<f64> {
        match self {
            Metrica::Likes => f.likes,
            Metrica::Comentarios => f.comentarios,
            Metrica::Interacciones => Some(f.interacciones),
        }
    }
}

/// Una medición: un candidato, una red, una semana.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fila {
    pub espectro: Option<String>,
    pub candidato: String,
    pub red: String,
    /// Etiqueta canónica (o ad-hoc si no se pudo mapear)
    pub semana: String,
    pub likes: Option<f64>,
    pub max_likes: Option<f64>,
    pub tema: Option<String>,
    pub comentarios: Option<f64>,
    /// likes (nulo→0) + comentarios (nulo→0), calculado al cargar
    pub interacciones: f64,
}

/// Fila de la hoja resumen (promedios ya calculados por candidato/red/semana).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilaResumen {
    pub espectro: Option<String>,
    pub candidato: String,
    pub red: String,
    pub semana: String,
    pub likes: Option<f64>,
    pub comentarios: Option<f64>,
    pub interacciones: f64,
}

/// Acceso uniforme a los campos por los que se filtra y agrupa, para que el
/// motor de filtros y los agregadores sirvan a ambas tablas.
pub trait Registro {
    fn candidato(&self) -> &str;
    fn red(&self) -> &str;
    fn semana(&self) -> &str;
    fn espectro(&self) -> Option<&str>;
    fn valor(&self, m: Metrica) -> Option<f64>;
}

impl Registro for Fila {
    fn candidato(&self) -> &str { &self.candidato }
    fn red(&self) -> &str { &self.red }
    fn semana(&self) -> &str { &self.semana }
    fn espectro(&self) -> Option<&str> { self.espectro.as_deref() }
    fn valor(&self, m: Metrica) -> Option<f64> { m.de_fila(self) }
}

impl Registro for FilaResumen {
    fn candidato(&self) -> &str { &self.candidato }
    fn red(&self) -> &str { &self.red }
    fn semana(&self) -> &str { &self.semana }
    fn espectro(&self) -> Option<&str> { self.espectro.as_deref() }
    fn valor(&self, m: Metrica) -> Option<f64> { m.de_resumen(self) }
}

/// Tabla unificada (todas las hojas semanales concatenadas y normalizadas).
#[derive(Debug, Clone, Default)]
pub struct Tabla {
    pub filas: Vec<Fila>,
}

impl Tabla {
    pub fn len(&self) -> usize { self.filas.len() }
    pub fn is_empty(&self) -> bool { self.filas.is_empty() }
}

/// Tabla secundaria: hoja "Promedio candidato".
#[derive(Debug, Clone, Default)]
pub struct Resumen {
    pub filas: Vec<FilaResumen>,
}

impl Resumen {
    pub fn len(&self) -> usize { self.filas.len() }
    pub fn is_empty(&self) -> bool { self.filas.is_empty() }
}

/// Todo lo que se construye una vez por proceso a partir del libro.
#[derive(Debug, Clone, Default)]
pub struct Datos {
    /// Ruta absoluta resuelta del libro (clave del caché)
    pub ruta: PathBuf,
    pub tabla: Tabla,
    /// `None` cuando el libro no trae hoja resumen (o viene vacía)
    pub resumen: Option<Resumen>,
}
