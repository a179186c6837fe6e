// handlers/public/mod.rs - Public handlers (no authentication required)
//
// Service discovery, health, and token acquisition.

pub mod auth;
pub mod service;
