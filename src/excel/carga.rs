use calamine::Data;
use log::{debug, info, warn};
use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::excel::io::{fila_vacia, leer_hojas, normalize_header, HojaCruda};
use crate::excel::normalizar::{interacciones, numero_celda, texto, texto_celda};
use crate::excel::resumen::construir_resumen;
use crate::excel::semanas::normalizar_semana;
use crate::models::{Columna, Datos, Fila, Tabla};

static VACIA: Data = Data::Empty;

/// Conteos de lo que pasó durante la carga, para el log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReporteCarga {
    pub hojas_leidas: usize,
    pub hojas_omitidas: usize,
    pub filas_crudas: usize,
    pub descartadas_identidad: usize,
    pub duplicadas: usize,
}

/// Encabezado + filas de datos de una hoja, ya sin filas completamente vacías.
pub(crate) struct HojaUtil<'a> {
    pub columnas: HashMap<Columna, usize>,
    pub filas: Vec<&'a [Data]>,
}

/// La primera fila no vacía es el encabezado. `None` si la hoja no tiene datos.
pub(crate) fn preparar_hoja(hoja: &HojaCruda) -> Option<HojaUtil<'_>> {
    let mut no_vacias = hoja.filas.iter().filter(|f| !fila_vacia(f));
    let encabezado = no_vacias.next()?;
    let filas: Vec<&[Data]> = no_vacias.map(|f| f.as_slice()).collect();
    if filas.is_empty() {
        return None;
    }
    Some(HojaUtil { columnas: mapa_columnas(encabezado), filas })
}

/// Columna -> índice. Si un encabezado se repite gana la primera aparición.
pub(crate) fn mapa_columnas(encabezado: &[Data]) -> HashMap<Columna, usize> {
    let mut out = HashMap::new();
    for (i, celda) in encabezado.iter().enumerate() {
        let h = normalize_header(&crate::excel::io::cell_to_string(celda));
        if let Some(col) = Columna::desde_encabezado_normalizado(&h) {
            out.entry(col).or_insert(i);
        }
    }
    out
}

pub(crate) fn celda<'a>(fila: &'a [Data], columnas: &HashMap<Columna, usize>, col: Columna) -> &'a Data {
    columnas.get(&col).and_then(|i| fila.get(*i)).unwrap_or(&VACIA)
}

pub fn es_hoja_resumen(nombre: &str, hoja_resumen: &str) -> bool {
    normalize_header(nombre) == normalize_header(hoja_resumen)
}

/// Concatena las hojas semanales en la tabla unificada.
///
/// Cada hoja (salvo la resumen) aporta sus filas con la semana tomada del nombre
/// de la hoja. Columnas ausentes quedan nulas. Se descartan filas sin candidato,
/// red o semana y se deduplica por (candidato, red, semana) conservando la primera.
pub fn construir_tabla(hojas: &[HojaCruda], hoja_resumen: &str) -> (Tabla, ReporteCarga) {
    let mut reporte = ReporteCarga::default();
    let mut filas: Vec<Fila> = Vec::new();
    let mut vistas: HashSet<(String, String, String)> = HashSet::new();

    for hoja in hojas {
        if es_hoja_resumen(&hoja.nombre, hoja_resumen) {
            continue;
        }
        let Some(util) = preparar_hoja(hoja) else {
            debug!("hoja '{}' vacía, se omite", hoja.nombre);
            reporte.hojas_omitidas += 1;
            continue;
        };
        reporte.hojas_leidas += 1;
        let semana = texto(&normalizar_semana(&hoja.nombre));

        for fila in util.filas.iter() {
            reporte.filas_crudas += 1;
            let col = |c: Columna| celda(fila, &util.columnas, c);

            let (Some(candidato), Some(red), Some(semana)) =
                (texto_celda(col(Columna::Candidato)), texto_celda(col(Columna::Red)), semana.clone())
            else {
                reporte.descartadas_identidad += 1;
                continue;
            };

            if !vistas.insert((candidato.clone(), red.clone(), semana.clone())) {
                reporte.duplicadas += 1;
                continue;
            }

            let likes = numero_celda(col(Columna::Likes));
            let comentarios = numero_celda(col(Columna::Comentarios));
            filas.push(Fila {
                espectro: texto_celda(col(Columna::Espectro)),
                candidato,
                red,
                semana,
                likes,
                max_likes: numero_celda(col(Columna::MaxLikes)),
                tema: texto_celda(col(Columna::Tema)),
                comentarios,
                interacciones: interacciones(likes, comentarios),
            });
        }
    }

    (Tabla { filas }, reporte)
}

/// Construye tabla unificada + resumen desde hojas ya leídas.
pub fn construir_datos(hojas: &[HojaCruda], hoja_resumen: &str) -> Datos {
    let (tabla, reporte) = construir_tabla(hojas, hoja_resumen);
    info!(
        "tabla unificada: {} filas de {} hojas ({} hojas vacías, {} sin identidad, {} duplicadas)",
        tabla.len(),
        reporte.hojas_leidas,
        reporte.hojas_omitidas,
        reporte.descartadas_identidad,
        reporte.duplicadas
    );

    let resumen = hojas
        .iter()
        .find(|h| es_hoja_resumen(&h.nombre, hoja_resumen))
        .map(|h| construir_resumen(h, &tabla))
        .filter(|r| !r.is_empty());
    match &resumen {
        Some(r) => info!("hoja resumen '{}': {} filas", hoja_resumen, r.len()),
        None => debug!("sin hoja resumen '{}'", hoja_resumen),
    }

    Datos { ruta: Default::default(), tabla, resumen }
}

/// Lee el libro y arma los datos. Nunca falla: un archivo ausente o ilegible
/// se registra y produce tablas vacías.
pub fn cargar_datos(ruta: &Path, hoja_resumen: &str) -> Datos {
    let mut datos = match leer_hojas(ruta) {
        Ok(hojas) => construir_datos(&hojas, hoja_resumen),
        Err(e) => {
            warn!("{}; se sirven resultados vacíos", e);
            Datos::default()
        }
    };
    datos.ruta = ruta.to_path_buf();
    datos
}
