//! HTTP API: the form-facing collaborator around the listing generator.

pub mod app;
pub mod config;
pub mod middleware;
