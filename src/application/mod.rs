// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - Boundary between a transport (out of this crate) and the services
// - Owns process wiring and error-to-response mapping

pub mod error_handling;
pub mod state;

pub use error_handling::ErrorResponse;
pub use state::AppState;
