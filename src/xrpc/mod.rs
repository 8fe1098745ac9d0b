//! Authenticated XRPC client
//!
//! A thin client for the handful of Bluesky XRPC endpoints the exporter
//! needs: `com.atproto.server.createSession`, `refreshSession`, and
//! `app.bsky.graph.getList`. The session token is cached and refreshed
//! once when the server rejects it as expired; there is no other retry
//! machinery.

mod client;

pub use client::{XrpcClient, XrpcConfig, XrpcConfigBuilder, DEFAULT_SERVICE};

use crate::api::GetListOutput;
use crate::error::Result;
use async_trait::async_trait;

/// A source of list pages. The seam between the exporter and the wire.
#[async_trait]
pub trait ListSource: Send + Sync {
    /// Fetch one page of the list at `uri`, requesting up to `limit`
    /// members, continuing from `cursor` when present.
    async fn get_list(
        &self,
        uri: &str,
        limit: u32,
        cursor: Option<String>,
    ) -> Result<GetListOutput>;
}
