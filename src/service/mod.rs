//! Service layer for business logic orchestration
//!
//! This module contains the service layer that orchestrates loading,
//! resolution and output projection, separating concerns from the CLI layer
//! in main.rs.

pub mod render;

pub use render::{RenderConfig, RenderService};
