// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod group_service;
pub mod super_service;

pub use group_service::{CreatedGroup, GroupService};
pub use super_service::SuperService;
