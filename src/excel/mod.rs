//! Módulo `excel` dividido en submódulos para mantener el código organizado.
//!
//! Submódulos:
//! - `io`: lectura de hojas con calamine y helpers de celdas/encabezados
//! - `normalizar`: texto y números permisivos, marcadores de nulo
//! - `semanas`: mapa canónico de semanas, orden cronológico y meses
//! - `carga`: hojas semanales -> tabla unificada
//! - `resumen`: hoja "Promedio candidato" -> tabla secundaria
//! - `cache`: memo por proceso de los datos ya construidos

/// Helpers de IO y utilidades para parsing de Excel
mod io;

/// Coerción de tipos por celda
pub mod normalizar;

/// Etiquetas de semana
pub mod semanas;

/// Cargador de la tabla unificada: `cargar_datos`, `construir_datos`
pub mod carga;

/// Tabla secundaria de promedios por candidato
pub mod resumen;

/// Caché en memoria keyed por ruta absoluta
pub mod cache;

pub use io::{cell_to_string, leer_hojas, normalize_header, CargaError, HojaCruda};
pub use carga::{cargar_datos, construir_datos, construir_tabla, ReporteCarga};
pub use cache::{datos_cached, estadisticas_cache, ruta_absoluta};
pub use semanas::{normalizar_semana, ordenar_semanas, SEMANAS_CANONICAS};
