pub mod dashboard;
pub mod ranking;
pub mod ganadores;
pub mod heatmap;
pub mod variacion;
pub mod estado;

pub use dashboard::*;
pub use ranking::*;
pub use ganadores::*;
pub use heatmap::*;
pub use variacion::*;
pub use estado::*;
