/// Remote message API layer: endpoint client and response types.
pub mod client;
pub mod response;

pub use client::{ApiClient, DEFAULT_ENDPOINT, Outcome};
