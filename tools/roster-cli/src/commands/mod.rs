//! CLI command implementations.

pub mod check;
pub mod config;
pub mod init;
pub mod render;

use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};
use roster_core::PageConfig;
use roster_data::{FetchClient, FetchStrategy, FileTransport, HttpTransport, Transport};
use roster_observability::{LogFormat, LogLevel, RequestId, StructuredLogger};
use roster_page::StudentDirectoryPage;

use crate::context::Context;

/// Where to read the roster from; flags override `roster.toml`.
#[derive(Args, Debug, Default)]
pub struct SourceArgs {
    /// Roster document path (or URL).
    #[arg(short, long)]
    pub data: Option<String>,

    /// Directory relative paths are read from.
    #[arg(long)]
    pub root: Option<String>,

    /// Fetch over HTTP from this base URL.
    #[arg(long)]
    pub base_url: Option<String>,
}

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Write the page to this file instead of stdout.
    #[arg(short, long)]
    pub out: Option<String>,
}

/// Arguments for the check command.
#[derive(Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Load with the combinator chain instead of the linear fetch.
    #[arg(long)]
    pub chained: bool,
}

impl CheckArgs {
    pub fn strategy(&self) -> FetchStrategy {
        if self.chained {
            FetchStrategy::Chained
        } else {
            FetchStrategy::Linear
        }
    }
}

/// Arguments for the init command.
#[derive(Args)]
pub struct InitArgs {
    /// Overwrite existing files without asking.
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration.
    Show,
    /// Print the config file in use.
    Path,
}

/// Page config with the `--data` override applied.
pub fn page_config(source: &SourceArgs, ctx: &Context) -> PageConfig {
    match &source.data {
        Some(path) => ctx.config.page.clone().with_data_path(path),
        None => ctx.config.page.clone(),
    }
}

/// Logger for fetch and page events; quiet unless `--verbose`.
pub fn cli_logger(ctx: &Context) -> StructuredLogger {
    let level = if ctx.output.is_verbose() {
        LogLevel::Debug
    } else {
        LogLevel::Warn
    };
    let format = if ctx.output.is_json() {
        LogFormat::Json
    } else {
        LogFormat::Human
    };

    StructuredLogger::new(RequestId::generate())
        .with_workload("roster-cli")
        .with_min_level(level)
        .with_format(format)
}

/// Fetch client over HTTP when a base URL is set, else over files.
pub fn fetch_client(
    source: &SourceArgs,
    ctx: &Context,
    logger: StructuredLogger,
) -> Result<FetchClient<Box<dyn Transport>>> {
    let base_url = source
        .base_url
        .clone()
        .or_else(|| ctx.config.source.base_url.clone());

    if let Some(base_url) = base_url {
        ctx.output.debug(&format!("Fetching from {}", base_url));
        let transport = HttpTransport::new().context("Failed to create HTTP client")?;
        let transport: Box<dyn Transport> = Box::new(transport);
        return Ok(FetchClient::new(transport, logger).with_base_url(base_url));
    }

    let root = match source.root.as_deref().or(ctx.config.source.root.as_deref()) {
        Some(root) => ctx.resolve_path(root),
        None => ctx.cwd.clone(),
    };
    ctx.output.debug(&format!("Reading from {}", root.display()));
    let transport: Box<dyn Transport> = Box::new(FileTransport::new(root));
    Ok(FetchClient::new(transport, logger))
}

/// Page for the given source flags.
pub fn build_page(
    source: &SourceArgs,
    ctx: &Context,
) -> Result<StudentDirectoryPage<Box<dyn Transport>>> {
    let client = fetch_client(source, ctx, cli_logger(ctx))?;
    Ok(StudentDirectoryPage::new(client, page_config(source, ctx)))
}
