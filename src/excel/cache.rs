//! Caché en memoria del libro ya procesado.
//!
//! `datos_cached(ruta)` construye tabla unificada + resumen una sola vez por
//! proceso y por ruta absoluta, y devuelve siempre el mismo `Arc<Datos>`. No hay
//! invalidación: un cambio en el archivo no se ve hasta reiniciar.

use log::debug;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, OnceLock};

use crate::models::Datos;

static DATOS_CACHE: OnceLock<Mutex<HashMap<PathBuf, Arc<Datos>>>> = OnceLock::new();
static HITS: AtomicU64 = AtomicU64::new(0);
static MISSES: AtomicU64 = AtomicU64::new(0);

/// Ruta absoluta usada como clave; no exige que el archivo exista.
pub fn ruta_absoluta(ruta: &Path) -> PathBuf {
    std::fs::canonicalize(ruta)
        .or_else(|_| std::path::absolute(ruta))
        .unwrap_or_else(|_| ruta.to_path_buf())
}

/// Devuelve los datos del libro, leyéndolo sólo la primera vez.
///
/// El candado se mantiene durante la construcción: peticiones concurrentes
/// sobre la misma ruta esperan a la primera carga en vez de repetirla.
pub fn datos_cached(ruta: &Path, hoja_resumen: &str) -> Arc<Datos> {
    let key = ruta_absoluta(ruta);
    let cache = DATOS_CACHE.get_or_init(|| Mutex::new(HashMap::new()));
    let mut guard = cache.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

    if let Some(existing) = guard.get(&key) {
        HITS.fetch_add(1, Ordering::Relaxed);
        debug!("caché hit para {:?}", key);
        return Arc::clone(existing);
    }

    MISSES.fetch_add(1, Ordering::Relaxed);
    debug!("caché miss para {:?}, leyendo libro", key);
    let datos = Arc::new(crate::excel::carga::cargar_datos(&key, hoja_resumen));
    guard.insert(key, Arc::clone(&datos));
    datos
}

/// (hits, misses, entradas)
pub fn estadisticas_cache() -> (u64, u64, usize) {
    let entradas = DATOS_CACHE
        .get()
        .map(|c| c.lock().map(|g| g.len()).unwrap_or_else(|p| p.into_inner().len()))
        .unwrap_or(0);
    (HITS.load(Ordering::Relaxed), MISSES.load(Ordering::Relaxed), entradas)
}
