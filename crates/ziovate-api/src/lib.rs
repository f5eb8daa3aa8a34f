//! # ziovate-api
//!
//! The API client seam for the ziovate adherence client.
//!
//! This crate provides:
//! - The [`ApiClient`] trait — the one boundary between UI actions and the
//!   future backend
//! - [`StubApiClient`] — the always-succeeding placeholder the app runs on today
//! - [`InMemoryApiClient`] — a fake backend with real contract semantics, for tests
//! - [`CallPolicy`] — deadlines and bounded retry around seam operations
//! - [`ClientConfig`] — TOML configuration for the above

pub mod config;
pub mod memory;
pub mod policy;
pub mod stub;
pub mod traits;

pub use config::ClientConfig;
pub use memory::{AdherenceEvent, InMemoryApiClient};
pub use policy::CallPolicy;
pub use stub::StubApiClient;
pub use traits::ApiClient;
