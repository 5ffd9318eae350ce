use super::{FoodRequest, RequestFilter, RequestRole};
use crate::common::DomainError;
use crate::kernel::BaseFoodStore;

/// Requests involving `email` on the given side, newest first
pub async fn list_requests(
    store: &dyn BaseFoodStore,
    email: &str,
    role: RequestRole,
) -> Result<Vec<FoodRequest>, DomainError> {
    let filter = RequestFilter::for_role(role, email.trim());
    Ok(store.query_requests(&filter).await?)
}
