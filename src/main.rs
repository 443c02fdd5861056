use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use ghas_audit::{
    AuditOptions, AuditRunner, Config, CsvRenderer, GitHubClient, Renderer, TableRenderer,
};

#[derive(Parser, Debug)]
#[command(name = "ghas-audit")]
#[command(version = "0.1.0")]
#[command(about = "Audit your GHAS deployment")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Audit your code scanning setup
    CodeScanning(CodeScanningArgs),
}

#[derive(clap::Args, Debug)]
struct CodeScanningArgs {
    /// Comma separated list of organizations to audit
    #[arg(short, long)]
    organizations: Option<String>,

    /// Audit a single repository (owner/name) instead of whole organizations
    #[arg(short, long)]
    repository: Option<String>,

    /// Write the report as CSV to this path instead of printing a table
    #[arg(long)]
    csv_output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("ghas_audit=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Some(Command::CodeScanning(args)) => {
            // Audit failures are reported, not escalated: the process exits
            // zero on every path past argument parsing.
            if let Err(e) = run_code_scanning(args).await {
                tracing::error!("{:#}", e);
            }
        }
        None => {
            Cli::command().print_help()?;
        }
    }

    Ok(())
}

async fn run_code_scanning(args: CodeScanningArgs) -> anyhow::Result<()> {
    let config = Config::from_env()?;

    let options = AuditOptions {
        organizations: args.organizations,
        repository: args.repository,
        csv_output: args.csv_output,
    };

    let Some(mode) = options.mode()? else {
        tracing::error!("No organizations or repository provided");
        print_code_scanning_help()?;
        return Ok(());
    };

    let github = GitHubClient::new(&config)?;

    let mut renderer: Box<dyn Renderer> = match options.csv_output {
        Some(ref path) => {
            tracing::info!("CSV output enabled, writing to {}", path.display());
            Box::new(CsvRenderer::create(path)?)
        }
        None => Box::new(TableRenderer::new()),
    };

    tracing::info!("Starting audit");
    let report = AuditRunner::new(github).run(&mode).await?;
    renderer.render(&report)?;
    tracing::info!("Audit complete, {} repositories audited", report.len());

    Ok(())
}

fn print_code_scanning_help() -> anyhow::Result<()> {
    let mut cli = Cli::command();
    if let Some(subcommand) = cli.find_subcommand_mut("code-scanning") {
        subcommand.print_help()?;
    }
    Ok(())
}
