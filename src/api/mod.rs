//! Typed models for the Bluesky XRPC endpoints this exporter calls
//!
//! Field names follow the upstream lexicons (camelCase on the wire).
//! Anything the exporter does not touch is carried through untouched via
//! flattened maps, so exported JSON keeps the upstream structure.

mod types;

pub use types::{GetListOutput, ListItemView, ListView, ProfileView, SessionOutput};
