/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public task dashboard adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    AdvisorApi,
    ClientConfig,
    DashboardClient,
    DashboardError,
    Result,
    DEFAULT_BASE_URL,
};

// Re-export all types
pub use types::*;
