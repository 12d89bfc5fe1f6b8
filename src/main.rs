use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use corpusify::{
    config::Config,
    constants::PREVIEW_CHARS,
    models::{BatchOutput, ExportMode},
    output,
    pipeline::Pipeline,
    progress::BarReporter,
    source::{self, InputSource, PathListSource},
    Format,
};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "corpusify")]
#[command(about = "Convert office documents into a single text file for AI training")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Config file (defaults to config/settings.toml, then ~/.config/corpusify/settings.toml)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert files and directories into one combined output file
    #[command(name = "convert")]
    Convert {
        /// Files to convert, or directories to scan for supported files
        #[arg(value_name = "PATH", required = true)]
        inputs: Vec<PathBuf>,
        /// Output file (overrides config)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
        /// Output format: text or jsonl (overrides config)
        #[arg(short, long, value_name = "MODE")]
        format: Option<ExportMode>,
        /// Write the result to stdout instead of a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
        /// Overwrite an existing output file without asking
        #[arg(short, long)]
        yes: bool,
        /// Print the first characters of the result when done
        #[arg(long)]
        preview: bool,
        /// Hide the progress bar
        #[arg(long)]
        no_progress: bool,
    },
    /// Extract the text of a single file to stdout
    #[command(name = "extract")]
    Extract {
        /// File to extract
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Print a JSONL record instead of bare text
        #[arg(long)]
        jsonl: bool,
    },
    /// List supported file types
    #[command(name = "formats")]
    Formats,
}

struct ConvertArgs {
    inputs: Vec<PathBuf>,
    output: Option<PathBuf>,
    format: Option<ExportMode>,
    stdout: bool,
    yes: bool,
    preview: bool,
    no_progress: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load_from(cli.config.as_deref())?;
    init_tracing(&config, cli.verbose);

    match cli.command {
        Commands::Convert {
            inputs,
            output,
            format,
            stdout,
            yes,
            preview,
            no_progress,
        } => {
            let args = ConvertArgs {
                inputs,
                output,
                format,
                stdout,
                yes,
                preview,
                no_progress,
            };
            convert(&config, args).await?;
        }
        Commands::Extract { file, jsonl } => {
            extract(&config, &file, jsonl).await?;
        }
        Commands::Formats => {
            println!("Supported file types:");
            for format in Format::ALL {
                println!("- {}", format);
            }
        }
    }

    Ok(())
}

fn init_tracing(config: &Config, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("corpusify=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.filter))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn convert(config: &Config, args: ConvertArgs) -> Result<()> {
    let mode = args.format.unwrap_or(config.output.mode);
    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| config.output.resolve_path(mode));

    let files = source::collect_inputs(&args.inputs, &config.scan).await?;
    if files.is_empty() {
        anyhow::bail!("No supported files found in the given paths");
    }

    if !args.stdout && output_path.exists() && !args.yes && !confirm_overwrite(&output_path)? {
        println!("Cancelled.");
        return Ok(());
    }

    let start = Instant::now();
    let total = files.len() as u64;
    let pipeline = Pipeline::from_config(config);
    let mut reporter = if args.no_progress || args.stdout {
        BarReporter::hidden(total)
    } else {
        BarReporter::new(total)
    };

    // The batch is CPU-bound and sequential: run it off the async workers in one go
    let (batch, reporter) = tokio::task::spawn_blocking(move || {
        let batch = pipeline.run_with(&files, mode, &mut reporter);
        (batch, reporter)
    })
    .await
    .context("Extraction task failed")?;
    reporter.finish();

    let rendered = batch.render()?;
    if args.stdout {
        print!("{}", rendered);
    } else {
        output::write_output(&output_path, &rendered).await?;
    }

    let summary = summarize(&batch, &rendered, start.elapsed().as_secs_f64());
    // Keep stdout clean for the artifact itself
    if args.stdout {
        eprint!("{}", summary);
    } else {
        print!("{}", summary);
        println!("💾 Saved to {} ({})", output_path.display(), mode.mime_type());
        info!(path = %output_path.display(), "conversion complete");
    }

    if args.preview {
        println!("\nPreview (first {} characters):\n", PREVIEW_CHARS);
        println!("{}", output::preview(&rendered, PREVIEW_CHARS));
    }

    Ok(())
}

fn confirm_overwrite(path: &Path) -> Result<bool> {
    use dialoguer::Confirm;
    Confirm::new()
        .with_prompt(format!("{} already exists. Overwrite?", path.display()))
        .default(false)
        .interact()
        .context("Failed to read user input (use --yes to overwrite without asking)")
}

fn summarize(batch: &BatchOutput, rendered: &str, elapsed_secs: f64) -> String {
    let mut summary = format!(
        "✅ Conversion complete! Processed {} files in {:.1} seconds.\n",
        batch.len(),
        elapsed_secs
    );

    let failed: Vec<_> = batch.records.iter().filter(|r| !r.succeeded()).collect();
    if !failed.is_empty() {
        summary.push_str(&format!("⚠️  {} file(s) could not be extracted:\n", failed.len()));
        for record in failed {
            summary.push_str(&format!("   - {}: {}\n", record.source_name, record.text()));
        }
    }

    summary.push_str(&format!("📊 Text size: {:.2} KB\n", rendered.len() as f64 / 1024.0));
    summary
}

async fn extract(config: &Config, file: &Path, jsonl: bool) -> Result<()> {
    let files = PathListSource::new(vec![file.to_path_buf()]).load().await?;
    let pipeline = Pipeline::from_config(config);

    let records: Vec<_> = files.iter().map(|f| pipeline.extract_one(f)).collect();
    for record in &records {
        if !record.succeeded() {
            warn!(file = %record.source_name, "no text extracted");
        }
    }

    if jsonl {
        print!("{}", BatchOutput::new(records, ExportMode::Jsonl).render()?);
    } else {
        for record in &records {
            println!("{}", record.text());
        }
    }

    Ok(())
}
