//! Transport shapes exchanged with the inventory API.

pub mod credit_card;
pub mod customer;
pub mod product;
pub mod purchase;
pub mod types;

use serde::Deserialize;

/// Response of the API root endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Health {
    pub ok: bool,
    pub message: String,
}

/// Minimal `{id}` body returned by endpoints that do not echo the resource.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CreatedId {
    pub id: i64,
}
