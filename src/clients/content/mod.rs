//! High-level Content API client.
//!
//! [`GhostClient`] wraps the resource operations from
//! [`content`](crate::content) and applies the configured
//! [`ExceptionLevel`](crate::content::ExceptionLevel): a failure is either
//! returned as an error or recorded and turned into `Ok(None)`.
//!
//! # Example
//!
//! ```rust,ignore
//! use ghost_api::GhostClient;
//!
//! let client = GhostClient::new("https://demo.ghost.io", "22444f78447824223cefc48062")?;
//! let settings = client.get_settings().await?;
//! ```

mod client;

pub use client::GhostClient;
