//! Google Places (Text Search) client.
//!
//! [`PlacesClient`] implements [`gbpro_audit::PlacesLookup`] for the audit
//! engine and the listing search endpoint.

pub mod client;
pub mod error;
pub mod normalize;
pub mod types;

pub use client::PlacesClient;
pub use error::PlacesError;
pub use normalize::normalize_place;
