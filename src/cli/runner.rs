//! CLI runner - executes the export batch

use crate::cli::commands::Cli;
use crate::config::{read_lists_file, Credentials};
use crate::error::{Error, Result};
use crate::export::{export_list, ExportOptions};
use crate::xrpc::{XrpcClient, XrpcConfig};
use tracing::{error, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the batch: log in once, then export every configured list
    /// sequentially. Per-list failures are logged and skipped; only
    /// configuration and login errors abort the process.
    pub async fn run(&self) -> Result<()> {
        let lists = self.resolve_lists()?;
        let credentials = Credentials::from_env()?;

        let client = XrpcClient::with_config(
            XrpcConfig::builder().service(&self.cli.service).build(),
        )?;
        let session = client.login(&credentials).await?;
        info!(did = %session.did, lists = lists.len(), "starting export batch");

        let options = ExportOptions {
            page_size: self.cli.page_size,
            output_dir: self.cli.output_dir.clone(),
        };

        for uri in &lists {
            let _group = LogGroup::open(uri);
            if let Err(e) = export_list(&client, uri, &options).await {
                error!(uri = %uri, error = %e, "failed to dump the list");
            }
        }

        Ok(())
    }

    /// Resolve the list set: positional URIs first, then the lists file,
    /// both in declaration order.
    fn resolve_lists(&self) -> Result<Vec<String>> {
        let mut lists = self.cli.lists.clone();
        if let Some(path) = &self.cli.lists_file {
            lists.extend(read_lists_file(path)?);
        }

        if lists.is_empty() {
            return Err(Error::config(
                "no lists to export; pass AT-URIs or --lists-file",
            ));
        }

        Ok(lists)
    }
}

/// GitHub Actions log group frame on stderr, closed on drop so the
/// group ends even when an export bails early.
struct LogGroup;

impl LogGroup {
    fn open(name: &str) -> Self {
        eprintln!("::group::{name}");
        Self
    }
}

impl Drop for LogGroup {
    fn drop(&mut self) {
        eprintln!("::endgroup::");
    }
}
