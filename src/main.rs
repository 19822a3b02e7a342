// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

use membership_artifacts::config::Config;
use membership_artifacts::{membership, Auth};

/// Manage the GKE Hub membership CRD and CR of a registered cluster
#[derive(Parser, Debug)]
#[command(name = "membership-artifacts", version)]
struct Cli {
    /// Kubeconfig file to use instead of the inferred configuration
    #[arg(long, global = true)]
    kubeconfig: Option<PathBuf>,

    /// Context of the kubeconfig file to use
    #[arg(long, global = true, requires = "kubeconfig")]
    context: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the membership CRD as YAML
    GetCrd,
    /// Print the membership CR as YAML
    GetCr,
    /// Install or upgrade the CRD and CR
    Install {
        /// CRD manifest file
        #[arg(long)]
        crd: Option<PathBuf>,
        /// CR manifest file
        #[arg(long)]
        cr: Option<PathBuf>,
    },
    /// Delete the CRD and CR
    Delete,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;
    init_tracing(&config);

    let auth = match &cli.kubeconfig {
        Some(path) => Auth::Kubeconfig {
            content: read_file(path)?,
            context: cli.context.clone(),
        },
        None => Auth::Infer,
    };

    match cli.command {
        Command::GetCrd => print_manifest(&membership::get_membership_crd(&auth, &config).await?),
        Command::GetCr => print_manifest(&membership::get_membership_cr(&auth, &config).await?),
        Command::Install { crd, cr } => {
            let crd = crd.as_deref().map(read_file).transpose()?.unwrap_or_default();
            let cr = cr.as_deref().map(read_file).transpose()?.unwrap_or_default();
            membership::install_exclusivity_manifests(&auth, &config, &crd, &cr).await?;
            info!("Membership artifacts installed");
        }
        Command::Delete => {
            membership::delete_artifacts(&auth, &config).await?;
            info!("Membership artifacts deleted");
        }
    }

    Ok(())
}

/// `RUST_LOG` wins over the configured verbosity
fn init_tracing(config: &Config) {
    let default_level = if config.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Reading {}", path.display()))
}

fn print_manifest(manifest: &str) {
    if !manifest.is_empty() {
        print!("{}", manifest);
    }
}
