/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod advisor;
pub mod client;
pub mod error;

pub use error::{DashboardError, Result};

pub use advisor::AdvisorApi;
pub use client::{ClientConfig, DashboardClient, DEFAULT_BASE_URL};
