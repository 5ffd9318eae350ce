pub mod food;
pub mod status;

pub use food::*;
pub use status::*;
