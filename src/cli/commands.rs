//! CLI arguments

use clap::Parser;
use std::path::PathBuf;

/// Bluesky curated list exporter
///
/// Reads credentials from the BSKY_CREDENTIALS environment variable
/// (identifier:secret) and writes one JSON file per list.
#[derive(Parser, Debug)]
#[command(name = "bsky-list-export")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// List AT-URIs to export
    #[arg(value_name = "AT_URI")]
    pub lists: Vec<String>,

    /// File with list AT-URIs, one per line (blank lines and # comments skipped)
    #[arg(short, long)]
    pub lists_file: Option<PathBuf>,

    /// Directory to write the JSON files into
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Members requested per getList page
    #[arg(long, default_value_t = crate::export::DEFAULT_PAGE_SIZE)]
    pub page_size: u32,

    /// XRPC service base URL
    #[arg(long, default_value = crate::xrpc::DEFAULT_SERVICE)]
    pub service: String,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
