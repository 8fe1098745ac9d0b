//! Response models for `app.bsky.graph.getList` and
//! `com.atproto.server.createSession` / `refreshSession`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Response of `app.bsky.graph.getList`
///
/// One page of a list. `cursor` is the opaque continuation token; the
/// server omits it on the last page. The exporter clears it before
/// writing the aggregated result.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetListOutput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    pub list: ListView,
    pub items: Vec<ListItemView>,
}

/// `app.bsky.graph.defs#listView`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListView {
    pub uri: String,
    pub cid: String,
    pub name: String,
    pub purpose: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<ProfileView>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_item_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewer: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indexed_at: Option<DateTime<Utc>>,
    /// Upstream fields this exporter does not interpret (labels, facets, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `app.bsky.graph.defs#listItemView`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItemView {
    pub uri: String,
    /// The member profile. Optional so that records the server returns
    /// without a subject still round-trip instead of failing the batch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<ProfileView>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ListItemView {
    /// Stable sort key: the subject's DID, if the subject is present.
    pub fn subject_did(&self) -> Option<&str> {
        self.subject.as_ref().map(|s| s.did.as_str())
    }
}

/// `app.bsky.actor.defs#profileView`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    pub did: String,
    pub handle: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewer: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indexed_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response of `com.atproto.server.createSession` and `refreshSession`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionOutput {
    pub access_jwt: String,
    pub refresh_jwt: String,
    pub did: String,
    #[serde(default)]
    pub handle: Option<String>,
}
