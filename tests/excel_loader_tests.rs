mod common;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use common::{ENCABEZADO, HOJA_RESUMEN};
use monitoreo::algorithm::{heatmap_redes, Filtros};
use monitoreo::excel::{cargar_datos, datos_cached, estadisticas_cache, leer_hojas, CargaError};

fn ruta_temporal(nombre: &str) -> PathBuf {
    let dir = std::env::temp_dir().join("monitoreo_tests");
    std::fs::create_dir_all(&dir).unwrap();
    dir.join(nombre)
}

/// Escribe un libro con dos hojas semanales + hoja resumen.
fn escribir_libro(ruta: &Path) {
    let mut book = umya_spreadsheet::new_file();
    for nombre in ["Semana 1", "Semana 2"] {
        book.new_sheet(nombre).unwrap();
        let ws = book.get_sheet_by_name_mut(nombre).unwrap();
        for (i, h) in ENCABEZADO.iter().enumerate() {
            ws.get_cell_mut((i as u32 + 1, 1)).set_value(*h);
        }
        let filas: [(&str, &str, &str, f64, f64); 2] =
            [("Izquierda", "Ana", "Network1", 10.0, 5.0), ("Derecha", "Luis", "Network2", 20.0, 0.0)];
        for (r, (esp, cand, red, likes, com)) in filas.iter().enumerate() {
            let fila = r as u32 + 2;
            ws.get_cell_mut((1, fila)).set_value(*esp);
            ws.get_cell_mut((2, fila)).set_value(*cand);
            ws.get_cell_mut((3, fila)).set_value(*red);
            ws.get_cell_mut((4, fila)).set_value_number(*likes);
            ws.get_cell_mut((7, fila)).set_value_number(*com);
        }
    }
    book.new_sheet(HOJA_RESUMEN).unwrap();
    let ws = book.get_sheet_by_name_mut(HOJA_RESUMEN).unwrap();
    for (i, h) in ["Candidato", "Red Social", "Semana", "Promedio likes x semana", "Promedio comentarios x semana"]
        .iter()
        .enumerate()
    {
        ws.get_cell_mut((i as u32 + 1, 1)).set_value(*h);
    }
    ws.get_cell_mut((1, 2)).set_value("Ana");
    ws.get_cell_mut((2, 2)).set_value("Network1");
    ws.get_cell_mut((3, 2)).set_value("1 Sep - 7 Sep");
    ws.get_cell_mut((4, 2)).set_value_string("1.234");
    ws.get_cell_mut((5, 2)).set_value_number(3.0);

    umya_spreadsheet::writer::xlsx::write(&book, ruta).unwrap();
}

#[test]
fn test_carga_libro_xlsx() {
    let ruta = ruta_temporal("libro_carga.xlsx");
    escribir_libro(&ruta);

    let hojas = leer_hojas(&ruta).unwrap();
    assert!(hojas.iter().any(|h| h.nombre == "Semana 1"));

    let datos = cargar_datos(&ruta, HOJA_RESUMEN);
    assert_eq!(datos.tabla.len(), 4);
    assert_eq!(datos.ruta, ruta);

    let h = heatmap_redes(&datos.tabla, &Filtros::default());
    assert_eq!(h.rows, vec!["Ana", "Luis"]);
    assert_eq!(h.values.iter().filter(|c| c.nd).count(), 2);
    assert_eq!(h.values[0].valor, 15.0);

    let resumen = datos.resumen.expect("hoja resumen");
    assert_eq!(resumen.len(), 1);
    // "1.234" con punto de miles
    assert_eq!(resumen.filas[0].likes, Some(1234.0));
    assert_eq!(resumen.filas[0].interacciones, 1237.0);
}

#[test]
fn test_archivo_inexistente_degrada_a_vacio() {
    let ruta = ruta_temporal("no_existe.xlsx");
    let _ = std::fs::remove_file(&ruta);
    assert!(matches!(leer_hojas(&ruta), Err(CargaError::NoEncontrado(_))));

    let datos = cargar_datos(&ruta, HOJA_RESUMEN);
    assert!(datos.tabla.is_empty());
    assert!(datos.resumen.is_none());
}

#[test]
fn test_cache_devuelve_los_mismos_datos() {
    let ruta = ruta_temporal("libro_cache.xlsx");
    escribir_libro(&ruta);

    let primero = datos_cached(&ruta, HOJA_RESUMEN);
    let (hits_antes, _, entradas) = estadisticas_cache();
    assert!(entradas >= 1);

    let segundo = datos_cached(&ruta, HOJA_RESUMEN);
    assert!(Arc::ptr_eq(&primero, &segundo));
    let (hits_despues, _, _) = estadisticas_cache();
    assert!(hits_despues > hits_antes);

    // releer el libro da las mismas filas que la copia en caché
    let fresco = cargar_datos(&ruta, HOJA_RESUMEN);
    assert_eq!(fresco.tabla.filas, segundo.tabla.filas);
}
