// HTTP routes
pub mod auth;
pub mod donations;
pub mod food_requests;
pub mod foods;
pub mod health;

pub use auth::*;
pub use donations::*;
pub use food_requests::*;
pub use foods::*;
pub use health::*;
