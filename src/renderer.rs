pub mod vertex_description;
pub use vertex_description::*;

mod config;
pub use config::*;

mod gpu_write;
pub use gpu_write::*;
