//! CLI for the MCV checksum verifier.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use mcv_core::config;
use std::path::Path;

use commands::{run_digest, run_list, run_verify};

/// Top-level CLI for the MCV checksum verifier.
#[derive(Debug, Parser)]
#[command(name = "mcv")]
#[command(about = "MCV: checksum verification for archives fetched from release mirrors", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Verify a downloaded archive against the checksum its mirror directory publishes.
    Verify {
        /// Path to the downloaded archive.
        path: String,

        /// URL of the mirror directory the archive came from.
        #[arg(long)]
        directory_url: String,

        /// Archive filename as listed on the mirror (defaults to the file name of PATH).
        #[arg(long)]
        filename: Option<String>,

        /// Full archive URL (defaults to DIRECTORY_URL/FILENAME).
        #[arg(long)]
        archive_url: Option<String>,

        /// Client (tool) name the archive belongs to, e.g. "oc" or "kamel".
        #[arg(long, default_value = "")]
        client: String,

        /// Version range the archive was selected from, e.g. "4.*".
        #[arg(long, default_value = "*")]
        version_range: String,
    },

    /// Compute a digest of a file (e.g. after download).
    Digest {
        /// Path to the file.
        path: String,

        /// Digest algorithm: "md5" or "sha256".
        #[arg(long, default_value = "sha256")]
        algorithm: String,
    },

    /// List the entries of a mirror directory.
    List {
        /// Directory URL.
        url: String,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Verify {
                path,
                directory_url,
                filename,
                archive_url,
                client,
                version_range,
            } => {
                run_verify(
                    &cfg,
                    Path::new(&path),
                    &directory_url,
                    filename.as_deref(),
                    archive_url.as_deref(),
                    &client,
                    &version_range,
                )
                .await?;
            }
            CliCommand::Digest { path, algorithm } => run_digest(Path::new(&path), &algorithm)?,
            CliCommand::List { url } => run_list(&cfg, &url)?,
        }

        Ok(())
    }
}
