//! CLI entry point for `mailcorpus`.

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{CommandFactory, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};

use mailcorpus::corpus::loader;
use mailcorpus::export::{csv, preview};

#[derive(Parser)]
#[command(
    name = "mailcorpus",
    version,
    about = "Turn spam/ham email folders into a normalized CSV dataset"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory containing spam-labeled message files
    #[arg(value_name = "SPAM_DIR")]
    spam: Option<PathBuf>,

    /// Directory containing ham-labeled message files
    #[arg(value_name = "HAM_DIR")]
    ham: Option<PathBuf>,

    /// Output CSV path (defaults to the configured path)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Number of preview rows printed after loading (0 disables)
    #[arg(long, global = true)]
    preview: Option<usize>,

    /// Print the load summary and preview as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Verbose logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a labeled corpus and write the CSV dataset
    Load {
        spam_dir: PathBuf,
        ham_dir: PathBuf,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
    /// Generate a man page
    Manpage,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = mailcorpus::config::load_config();

    let log_level = match cli.verbose {
        0 => config.general.log_level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    setup_logging(log_level, &config);

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| config.output.default_output.clone());
    let preview_rows = cli.preview.unwrap_or(config.output.preview_rows);

    match cli.command {
        Some(Commands::Load { spam_dir, ham_dir }) => {
            cmd_load(&spam_dir, &ham_dir, &output, preview_rows, cli.json)
        }
        Some(Commands::Completions { shell }) => cmd_completions(shell),
        Some(Commands::Manpage) => cmd_manpage(),
        None => match (cli.spam, cli.ham) {
            (Some(spam_dir), Some(ham_dir)) => {
                cmd_load(&spam_dir, &ham_dir, &output, preview_rows, cli.json)
            }
            _ => {
                eprintln!("Usage: mailcorpus <SPAM_DIR> <HAM_DIR> [-o OUTPUT]");
                std::process::exit(2);
            }
        },
    }
}

/// Set up tracing with stderr output and optional file logging.
fn setup_logging(level: &str, config: &mailcorpus::config::Config) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    // Try to set up file logging
    let log_dir = mailcorpus::config::cache_dir(config);
    if std::fs::create_dir_all(&log_dir).is_ok() {
        let file_appender = tracing_appender::rolling::never(&log_dir, "mailcorpus.log");
        let file_layer = tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(file_appender);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(stderr_layer)
            .with(file_layer)
            .init();
    } else {
        // Fall back to stderr only
        tracing_subscriber::registry()
            .with(env_filter)
            .with(stderr_layer)
            .init();
    }
}

/// Load the corpus, write the CSV, and print a bounded preview.
fn cmd_load(
    spam_dir: &Path,
    ham_dir: &Path,
    output: &Path,
    preview_rows: usize,
    json: bool,
) -> anyhow::Result<()> {
    for dir in [spam_dir, ham_dir] {
        if !dir.is_dir() {
            anyhow::bail!("Corpus directory not found: {}", dir.display());
        }
    }

    let start = Instant::now();
    let mut records = Vec::new();

    for (dir, label) in [(spam_dir, "spam"), (ham_dir, "ham")] {
        if !json {
            println!("  Loading {label}...");
        }
        let pb = ProgressBar::new(0);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(&format!(
                    "{{spinner:.green}} Loading {label} [{{bar:40.cyan/blue}}] {{pos}}/{{len}}"
                ))
                .expect("valid template")
                .progress_chars("#>-"),
        );

        let loaded = loader::load_folder(
            dir,
            label,
            Some(&|current, total| {
                pb.set_length(total);
                pb.set_position(current);
            }),
        )?;
        pb.finish_and_clear();
        records.extend(loaded);
    }

    let elapsed = start.elapsed();
    let spam_count = records.iter().filter(|r| r.label == "spam").count();
    let ham_count = records.len() - spam_count;

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    csv::write_csv(&records, output)?;

    if json {
        let sample = &records[..records.len().min(preview_rows)];
        let summary = serde_json::json!({
            "records": records.len(),
            "spam": spam_count,
            "ham": ham_count,
            "elapsed_ms": elapsed.as_millis(),
            "output": output.to_string_lossy(),
            "sample": sample,
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!();
    println!(
        "  Loaded {} record(s) ({} spam, {} ham) in {:.2?}",
        records.len(),
        spam_count,
        ham_count,
        elapsed
    );
    println!("  Saved dataset to {}", output.display());

    preview::print_preview(&records, preview_rows);

    Ok(())
}

/// Generate shell completions and print to stdout.
fn cmd_completions(shell: clap_complete::Shell) -> anyhow::Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "mailcorpus", &mut std::io::stdout());
    Ok(())
}

/// Generate a man page and print to stdout.
fn cmd_manpage() -> anyhow::Result<()> {
    let cmd = Cli::command();
    let man = clap_mangen::Man::new(cmd);
    let mut buf = Vec::new();
    man.render(&mut buf)?;
    std::io::Write::write_all(&mut std::io::stdout(), &buf)?;
    Ok(())
}
