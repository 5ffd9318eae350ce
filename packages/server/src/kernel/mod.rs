// Kernel - infrastructure behind the domain actions
//
// Traits describe what the domains need from storage; adapters implement
// them. `ServerDeps` bundles the chosen adapters for the HTTP layer.

pub mod deps;
pub mod postgres_store;
pub mod test_dependencies;
pub mod traits;

pub use deps::ServerDeps;
pub use postgres_store::PostgresFoodStore;
pub use test_dependencies::InMemoryFoodStore;
pub use traits::*;
