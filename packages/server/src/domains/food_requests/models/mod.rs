pub mod food_request;

pub use food_request::*;
