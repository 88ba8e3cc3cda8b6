use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use unused_pvcs_k8s::{KubeClient, resolve_kubeconfig_path};
use unused_pvcs_scan::{Reporter, scan};

/// unused-pvcs - Report PersistentVolumeClaims not mounted by any pod
#[derive(Parser, Debug)]
#[command(name = "unused-pvcs")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Namespace to scan
    #[arg(long, default_value = "default")]
    namespace: String,

    /// Path to the kubeconfig file (defaults to ~/.kube/config)
    #[arg(long, value_name = "PATH")]
    kubeconfig: Option<PathBuf>,

    /// Kubeconfig context to use (defaults to the current context)
    #[arg(long, value_name = "CONTEXT")]
    context: Option<String>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<()> {
    let mut reporter = Reporter::new(io::stdout());

    let kubeconfig_path = resolve_kubeconfig_path(args.kubeconfig)?;
    reporter
        .kubeconfig(&kubeconfig_path)
        .context("Failed to write to stdout")?;

    let client = KubeClient::from_kubeconfig(&kubeconfig_path, args.context.as_deref()).await?;

    scan(&client, &args.namespace, &mut reporter).await?;

    Ok(())
}
