mod fetch;
mod output;
mod parser;
mod record;
mod settings;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing::info;

use parser::extract::CertificateRecord;
use settings::Settings;

#[derive(Parser)]
#[command(name = "orc_scraper", about = "ORC certificate page to JSON extractor")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a certificate page and extract it
    Fetch {
        /// Certificate URL or numeric certificate id
        cert: String,
        #[command(flatten)]
        out: OutputArgs,
    },
    /// Extract from a saved certificate HTML file
    Parse {
        /// Path to the HTML file
        file: PathBuf,
        #[command(flatten)]
        out: OutputArgs,
    },
}

#[derive(Args)]
struct OutputArgs {
    /// Output directory (default: $ORC_OUTPUT_DIR or JSON_certificates)
    #[arg(short, long)]
    out_dir: Option<PathBuf>,
    /// Print the JSON to stdout instead of writing a file
    #[arg(long)]
    stdout: bool,
    /// Single-line JSON
    #[arg(long)]
    compact: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Fetch { cert, out } => {
            let settings = Settings::load()?;
            fetch_certificate(&cert, &out, &settings).await
        }
        Commands::Parse { file, out } => {
            let html = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            info!("Parsing {} ({} bytes)", file.display(), html.len());
            let record = parser::process_page(&html);
            // Offline parsing only needs settings for the default output dir.
            emit(&record, &out, Settings::load)
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        eprintln!("\nDone in {}", format_duration(elapsed));
    }

    result
}

/// Fetch, extract, emit. A fetch failure returns before anything is written.
async fn fetch_certificate(
    cert: &str,
    out: &OutputArgs,
    settings: &Settings,
) -> anyhow::Result<()> {
    let url = fetch::certificate_url(cert, &settings.base_url)?;
    let client = fetch::client(settings)?;
    let html = fetch::fetch_html(&client, &url).await?;
    let record = parser::process_page(&html);
    emit(&record, out, || Ok(settings.clone()))
}

fn emit(
    record: &CertificateRecord,
    out: &OutputArgs,
    load_settings: impl FnOnce() -> anyhow::Result<Settings>,
) -> anyhow::Result<()> {
    let pretty = !out.compact;
    if out.stdout {
        println!("{}", output::to_json(record, pretty)?);
        return Ok(());
    }

    let dir = output_dir(out, load_settings)?;
    let path = output::write_record(&dir, record, pretty)?;

    println!("Sections:");
    for line in output::summary_lines(record) {
        println!("{}", line);
    }
    println!("Saved: {}", path.display());
    Ok(())
}

/// `--out-dir` wins; settings are only consulted without it.
fn output_dir(
    out: &OutputArgs,
    load_settings: impl FnOnce() -> anyhow::Result<Settings>,
) -> anyhow::Result<PathBuf> {
    match &out.out_dir {
        Some(dir) => Ok(dir.clone()),
        None => Ok(load_settings()?.output_dir),
    }
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

// ── Tests ──
