//! List export: fetch all pages, post-process, write one JSON file
//!
//! # Overview
//!
//! For one list AT-URI the exporter paginates `getList` to completion,
//! sorts the members by subject DID, strips viewer-specific and mutable
//! profile metadata, and writes the snapshot as indented JSON named
//! after the trailing segment of the URI. The write is atomic: the
//! snapshot goes to a temp file in the destination directory first and
//! is renamed over the target, so a failed export never leaves a
//! corrupt or truncated file behind.

use crate::api::GetListOutput;
use crate::error::{Error, Result};
use crate::pagination::reduce_pages;
use crate::xrpc::ListSource;
use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default getList page size
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Options for a batch of exports
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Members requested per getList call (the server may return fewer)
    pub page_size: u32,
    /// Directory the JSON files are written into
    pub output_dir: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            output_dir: PathBuf::from("."),
        }
    }
}

/// Outcome of one successful export, for driver-level logging
#[derive(Debug, Clone)]
pub struct ExportReport {
    /// The exported list's AT-URI
    pub uri: String,
    /// Path of the written file
    pub file: PathBuf,
    /// Number of member records in the file
    pub members: usize,
}

/// Export one list: paginate, post-process, write `<segment>.json`.
pub async fn export_list(
    source: &impl ListSource,
    uri: &str,
    options: &ExportOptions,
) -> Result<ExportReport> {
    let mut snapshot = reduce_pages(
        |cursor| async move {
            let page = source.get_list(uri, options.page_size, cursor).await?;
            let next = page.cursor.clone();
            Ok((page, next))
        },
        |page: &mut GetListOutput| &mut page.items,
    )
    .await?;

    debug!(uri, members = snapshot.items.len(), "pagination complete");

    postprocess(&mut snapshot);

    let file = options.output_dir.join(output_filename(uri));
    write_snapshot(&snapshot, &file)?;

    info!(uri, file = %file.display(), members = snapshot.items.len(), "list exported");

    Ok(ExportReport {
        uri: uri.to_string(),
        file,
        members: snapshot.items.len(),
    })
}

/// Sort, clear the cursor, and strip volatile fields from a snapshot.
///
/// Members sort ascending by subject DID, byte order; records without a
/// subject sort after all records that have one. The sort is stable, so
/// ties (and subjectless records among themselves) keep fetch order.
pub fn postprocess(snapshot: &mut GetListOutput) {
    snapshot.items.sort_by(compare_by_subject);
    snapshot.cursor = None;

    for item in &mut snapshot.items {
        if let Some(subject) = item.subject.as_mut() {
            subject.viewer = None;
            subject.avatar = None;
            subject.indexed_at = None;
            subject.description = None;
            subject.labels = None;
        }
    }

    snapshot.list.viewer = None;
    snapshot.list.creator = None;
    snapshot.list.avatar = None;
}

fn compare_by_subject(a: &crate::api::ListItemView, b: &crate::api::ListItemView) -> Ordering {
    match (a.subject_did(), b.subject_did()) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Derive the output filename from the trailing path segment of the URI.
pub fn output_filename(uri: &str) -> String {
    let segment = uri.rsplit('/').next().unwrap_or(uri);
    format!("{segment}.json")
}

/// Serialize the snapshot and atomically replace `path` with it.
fn write_snapshot(snapshot: &GetListOutput, path: &Path) -> Result<()> {
    // Encode fully before touching the filesystem; an encode failure
    // must not create or truncate the destination.
    let mut bytes = serde_json::to_vec_pretty(snapshot)?;
    bytes.push(b'\n');

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, &bytes)?;
    fs::rename(&tmp, path).map_err(|e| {
        // Leave no temp file behind on a failed rename
        let _ = fs::remove_file(&tmp);
        Error::output(format!(
            "failed to move {} into place: {e}",
            path.display()
        ))
    })?;

    Ok(())
}
