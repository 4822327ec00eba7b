use calamine::{open_workbook_auto, Data, Reader};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errores al abrir/leer el libro. Nunca llegan al cliente HTTP: `cargar_datos`
/// los registra y degrada a tablas vacías.
#[derive(Debug, Error)]
pub enum CargaError {
    #[error("archivo no encontrado: {0}")]
    NoEncontrado(PathBuf),
    #[error("no se pudo abrir el libro {ruta}: {fuente}")]
    Abrir {
        ruta: PathBuf,
        #[source]
        fuente: calamine::Error,
    },
    #[error("no se pudo leer la hoja '{hoja}': {fuente}")]
    Hoja {
        hoja: String,
        #[source]
        fuente: calamine::Error,
    },
}

/// Una hoja tal como viene del libro: nombre + celdas (la primera fila es el encabezado).
#[derive(Debug, Clone, PartialEq)]
pub struct HojaCruda {
    pub nombre: String,
    pub filas: Vec<Vec<Data>>,
}

impl HojaCruda {
    pub fn new(nombre: impl Into<String>, filas: Vec<Vec<Data>>) -> Self {
        HojaCruda { nombre: nombre.into(), filas }
    }
}

/// Convierte un `Data` de calamine a String (versión genérica para celdas)
pub fn cell_to_string(c: &Data) -> String {
    match c {
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) => {
            if (f.floor() - f).abs() < f64::EPSILON {
                format!("{}", *f as i64)
            } else {
                format!("{}", f)
            }
        }
        Data::Int(i) => format!("{}", i),
        Data::Bool(b) => format!("{}", b),
        Data::Empty => String::new(),
        Data::Error(_) => String::new(),
        Data::DateTime(s) => s.to_string(),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
    }
}

pub fn celda_vacia(c: &Data) -> bool {
    match c {
        Data::Empty | Data::Error(_) => true,
        Data::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

pub fn fila_vacia(fila: &[Data]) -> bool {
    fila.iter().all(celda_vacia)
}

/// Normaliza encabezados eliminando espacios y pasando a minúsculas.
pub fn normalize_header(s: &str) -> String {
    s.to_lowercase().chars().filter(|c| !c.is_whitespace()).collect()
}

/// Lee todas las hojas del libro en el orden que reporta calamine.
pub fn leer_hojas<P: AsRef<Path>>(path: P) -> Result<Vec<HojaCruda>, CargaError> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(CargaError::NoEncontrado(path.to_path_buf()));
    }
    let mut workbook = open_workbook_auto(path).map_err(|fuente| CargaError::Abrir {
        ruta: path.to_path_buf(),
        fuente,
    })?;

    let names = workbook.sheet_names().to_owned();
    let mut hojas = Vec::with_capacity(names.len());
    for nombre in names {
        let range = workbook
            .worksheet_range(&nombre)
            .map_err(|fuente| CargaError::Hoja { hoja: nombre.clone(), fuente })?;
        let filas: Vec<Vec<Data>> = range.rows().map(|r| r.to_vec()).collect();
        hojas.push(HojaCruda { nombre, filas });
    }
    Ok(hojas)
}
