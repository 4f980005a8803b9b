pub mod geometry;
pub mod layout;
pub mod renderer;

pub use layout::*;
