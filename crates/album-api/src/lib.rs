#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
// DefaultApiClient is used through AlbumApiPort, not its generic structure
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod port;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultApiClient;

// Configuration
pub use config::{ApiClientConfig, DEFAULT_BASE_URL};
