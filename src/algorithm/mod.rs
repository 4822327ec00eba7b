// Pipeline de consulta: filtros -> agregadores -> variaciones.
// Todas las funciones reciben la tabla y los filtros explícitamente; no hay
// estado de request ambiental.
pub mod estadistica;
pub mod filters;
pub mod ranking;
pub mod ganador;
pub mod heatmap;
pub mod variacion;
pub mod facetas;

pub use filters::{aplicar, Filtros};
pub use ranking::{ranking, ranking_por_metrica, EntradaRanking};
pub use ganador::{ganadores_semanales, serie_ganadores, Ganador, SerieGanadores};
pub use heatmap::{heatmap_redes, heatmap_semanal, HeatmapRedes, HeatmapSemanas};
pub use variacion::{ganadores_variacion, serie_ganadores_variacion, variaciones, MejorAlza, SerieVariacion, Variacion};
pub use facetas::{colores, facetas, Facetas, Kpis};
