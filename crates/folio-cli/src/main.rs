//! Folio content CLI

use anyhow::Context;
use clap::{Parser, Subcommand};
use folio_core::SiteContent;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Validate and inspect portfolio content payloads")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a JSON content payload
    Validate {
        /// Path to the content file
        file: PathBuf,
    },

    /// List the page sections and the navigation links targeting them
    Sections {
        /// Path to the content file (defaults to the bundled content)
        file: Option<PathBuf>,
    },

    /// Print the bundled content payload
    Dump,
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }

    let result = match cli.command {
        Commands::Validate { file } => cmd_validate(&file),
        Commands::Sections { file } => cmd_sections(file.as_deref()),
        Commands::Dump => cmd_dump(),
    };

    match result {
        Ok(output) => print!("{}", output),
        Err(e) => {
            error!("{:#}", e);
            std::process::exit(1);
        }
    }
}

fn load(file: Option<&Path>) -> anyhow::Result<SiteContent> {
    match file {
        Some(path) => {
            info!("Loading content: {}", path.display());
            SiteContent::from_path(path)
                .with_context(|| format!("Invalid content in {}", path.display()))
        }
        None => SiteContent::bundled().context("Bundled content is invalid"),
    }
}

fn cmd_validate(file: &Path) -> anyhow::Result<String> {
    let content = load(Some(file))?;
    Ok(format!(
        "{}: ok ({} nav links, {} projects, sections: {})\n",
        file.display(),
        content.nav.len(),
        content.work.projects.len(),
        content
            .section_ids()
            .map(|id| id.as_str())
            .join(", ")
    ))
}

fn cmd_sections(file: Option<&Path>) -> anyhow::Result<String> {
    let content = load(file)?;
    Ok(sections_report(&content))
}

fn cmd_dump() -> anyhow::Result<String> {
    let content = load(None)?;
    let mut json = content.to_json_pretty()?;
    json.push('\n');
    Ok(json)
}

fn sections_report(content: &SiteContent) -> String {
    let mut out = String::new();
    for id in content.section_ids() {
        let labels: Vec<&str> = content.links_to(id).map(|link| link.label.as_str()).collect();
        let labels = if labels.is_empty() {
            "(no links)".to_string()
        } else {
            labels.join(", ")
        };
        let _ = writeln!(out, "{:<10} {:<12} {}", id, id.href(), labels);
    }
    out
}
