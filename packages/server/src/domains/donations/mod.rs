//! Donations domain - a ledger of monetary donations to the platform

pub mod actions;
pub mod models;

pub use models::{Donation, NewDonation};
