// src/infrastructure/mod.rs
//
// Infrastructure Layer
//
// Process-wide concerns that support the domain
// but are not part of the domain itself.

pub mod logger;

pub use logger::init_logger;
