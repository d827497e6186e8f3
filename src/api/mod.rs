//! TheCatApi HTTP client and wire types.

mod client;
pub mod dto;

pub use client::{ApiError, CatApiClient};
