use log::warn;
use std::env;
use std::path::PathBuf;

pub const EXCEL_PATH_DEFAULT: &str = "Monitoreo_de_candidatos_largo.xlsx";
pub const HOJA_RESUMEN_DEFAULT: &str = "Promedio candidato";

/// Configuración del proceso, leída una vez en `main` y pasada explícitamente.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub excel_path: PathBuf,
    pub hoja_resumen: String,
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            excel_path: PathBuf::from(EXCEL_PATH_DEFAULT),
            hoja_resumen: HOJA_RESUMEN_DEFAULT.to_string(),
            host: "0.0.0.0".to_string(),
            port: 5000,
            workers: std::cmp::max(1, num_cpus::get()),
        }
    }
}

// load .env if present
fn load_dotenv() {
    let _ = dotenv::dotenv();
}

impl Config {
    /// EXCEL_PATH, HOJA_RESUMEN, HOST, PORT, WORKERS (con `.env` si existe).
    pub fn desde_entorno() -> Config {
        load_dotenv();
        Config::desde_fuente(|k| env::var(k).ok())
    }

    /// Versión parametrizable para pruebas: `leer` resuelve una variable por nombre.
    pub fn desde_fuente<F>(leer: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let def = Config::default();
        let no_vacio = |k: &str| leer(k).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let port = match no_vacio("PORT") {
            Some(p) => p.parse::<u16>().unwrap_or_else(|_| {
                warn!("PORT inválido '{}', usando {}", p, def.port);
                def.port
            }),
            None => def.port,
        };
        let workers = match no_vacio("WORKERS") {
            Some(w) => match w.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    warn!("WORKERS inválido '{}', usando {}", w, def.workers);
                    def.workers
                }
            },
            None => def.workers,
        };

        Config {
            excel_path: no_vacio("EXCEL_PATH").map(PathBuf::from).unwrap_or(def.excel_path),
            hoja_resumen: no_vacio("HOJA_RESUMEN").unwrap_or(def.hoja_resumen),
            host: no_vacio("HOST").unwrap_or(def.host),
            port,
            workers,
        }
    }

    pub fn bind(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Nombre de archivo del libro, para mostrar en el dashboard.
    pub fn nombre_archivo(&self) -> String {
        self.excel_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.excel_path.to_string_lossy().into_owned())
    }
}
