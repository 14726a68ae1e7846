//! RSVP sheet service: the scripting endpoint the RSVP client talks to,
//! backed by a single append-only table.

pub mod api;
pub mod config;
pub mod db;
pub mod entity;
pub mod repository;

pub use api::{AppState, create_router};
pub use config::ServerConfig;
