//! # bsky-list-export
//!
//! Batch exporter for Bluesky curated lists.
//!
//! Authenticates against the Bluesky XRPC API, fetches each configured
//! list with cursor pagination, strips viewer-specific and mutable
//! profile metadata, sorts members by subject DID, and writes one
//! 2-space-indented JSON file per list.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bsky_list_export::config::Credentials;
//! use bsky_list_export::export::{export_list, ExportOptions};
//! use bsky_list_export::xrpc::XrpcClient;
//!
//! #[tokio::main]
//! async fn main() -> bsky_list_export::Result<()> {
//!     let client = XrpcClient::new()?;
//!     client.login(&Credentials::from_env()?).await?;
//!
//!     let report = export_list(
//!         &client,
//!         "at://did:plc:xxx/app.bsky.graph.list/3jyh6vcbrfl2z",
//!         &ExportOptions::default(),
//!     )
//!     .await?;
//!     println!("{} members -> {}", report.members, report.file.display());
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

/// Error types
pub mod error;

/// Credentials and list-set configuration
pub mod config;

/// Typed XRPC response models
pub mod api;

/// Cursor-driven pagination
pub mod pagination;

/// Authenticated XRPC client
pub mod xrpc;

/// List export and JSON output
pub mod export;

/// Command-line interface
pub mod cli;

pub use error::{Error, Result};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
