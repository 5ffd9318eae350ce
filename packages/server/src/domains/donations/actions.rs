use tracing::info;

use super::{Donation, NewDonation};
use crate::common::{DomainError, InsertOutcome};
use crate::kernel::BaseFoodStore;

pub async fn record_donation(
    store: &dyn BaseFoodStore,
    input: NewDonation,
) -> Result<InsertOutcome, DomainError> {
    let donation = Donation::from_new(input)?;
    store.insert_donation(&donation).await?;

    info!(donation_id = %donation.id, amount = donation.amount, "Donation recorded");
    Ok(InsertOutcome::new(donation.id))
}

pub async fn list_donations(store: &dyn BaseFoodStore) -> Result<Vec<Donation>, DomainError> {
    Ok(store.list_donations().await?)
}
