//! Server dependencies (using traits for testability)
//!
//! Built once by the entry point (or a test) and shared by every handler.

use std::sync::Arc;

use crate::domains::auth::JwtService;
use crate::domains::foods::SortDirection;
use crate::kernel::BaseFoodStore;

#[derive(Clone)]
pub struct ServerDeps {
    pub store: Arc<dyn BaseFoodStore>,
    pub jwt_service: Arc<JwtService>,
    pub quantity_sort: SortDirection,
}

impl ServerDeps {
    pub fn new(
        store: Arc<dyn BaseFoodStore>,
        jwt_service: Arc<JwtService>,
        quantity_sort: SortDirection,
    ) -> Self {
        Self {
            store,
            jwt_service,
            quantity_sort,
        }
    }

    pub fn store(&self) -> &dyn BaseFoodStore {
        self.store.as_ref()
    }
}
