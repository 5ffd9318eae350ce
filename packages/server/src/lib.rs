// PlateShare - API Core
//
// Backend API for a community food-donation marketplace: donors list surplus
// food, recipients browse and request it, and the request workflow keeps each
// listing's status in step with its outstanding requests.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
