pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod image;
pub mod product;
pub mod resolve;
pub mod security;
pub mod selector;
pub mod service;

pub use anyhow::Result;
