/*
[INPUT]:  Public API exports for the task-dashboard crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod config;
pub mod dispatch;
pub mod export;
pub mod headless;
pub mod markdown;
pub mod state;
pub mod tui;

// Re-export main types for convenience
pub use config::DashboardConfig;
pub use dispatch::Dispatcher;
pub use state::{Action, DashboardState, reduce};
