use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;

use tracing_subscriber::EnvFilter;

use xrefgraph::graph::CrossReferenceQueries;
use xrefgraph::resolution::BookLookup;
use xrefgraph::xrefgraph::XrefGraph;

/// Verse cross-reference converter.
#[derive(Parser)]
#[command(
    name = "xrefgraph",
    about = "Builds a localized verse cross-reference index"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default configuration file
    Init {
        /// Project path (default: current directory)
        path: Option<String>,
    },
    /// Convert the tab-delimited corpus into a JSON index
    Convert {
        /// Project path (default: current directory)
        #[arg(short, long)]
        path: Option<String>,
        /// Override the configured input corpus
        #[arg(short, long)]
        input: Option<String>,
        /// Override the configured output file
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Show statistics for the exported index
    Stats {
        /// Project path (default: current directory)
        #[arg(short, long)]
        path: Option<String>,
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },
    /// Print the cross references of one verse
    Lookup {
        /// Book abbreviation (e.g. Gen) or display name
        book: String,
        /// Chapter number
        chapter: u32,
        /// Verse number
        verse: u32,
        /// Project path
        #[arg(short, long)]
        path: Option<String>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> xrefgraph::errors::Result<()> {
    match cli.command {
        Commands::Init { path } => {
            let project_path = resolve_path(path);
            XrefGraph::init(&project_path)?;
            println!("Initialized xrefgraph at {}", project_path.display());
        }
        Commands::Convert {
            path,
            input,
            output,
        } => {
            let project_path = resolve_path(path);
            let mut config = xrefgraph::config::load_config(&project_path)?;
            if let Some(input) = input {
                config.input = input;
            }
            if let Some(output) = output {
                config.output = output;
            }
            let xg = XrefGraph::with_config(&project_path, config)?;
            let result = xg.convert()?;
            println!(
                "Converted {} source verses: {} references, {} ranges, {} lines skipped in {}ms",
                result.stats.source_count,
                result.stats.reference_count,
                result.stats.range_count,
                result.stats.skipped_lines,
                result.duration_ms
            );
            println!("  Output: {}", result.output_path.display());
            println!("  SHA-256: {}", result.output_digest);

            let queries = CrossReferenceQueries::new(&result.index);
            for (key, targets) in queries.sample(xg.config().sample_size) {
                let shown: Vec<String> = targets.iter().take(3).map(|t| t.to_string()).collect();
                println!("  {} -> {}", key, shown.join(", "));
            }
        }
        Commands::Stats { path, json } => {
            let project_path = resolve_path(path);
            let xg = XrefGraph::open(&project_path)?;
            let index = xg.load_index()?;
            let queries = CrossReferenceQueries::new(&index);
            if json {
                let stats = serde_json::json!({
                    "source_count": queries.source_count(),
                    "reference_count": queries.reference_count(),
                });
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("Cross-Reference Index");
                println!("  Sources:    {}", queries.source_count());
                println!("  References: {}", queries.reference_count());
            }
        }
        Commands::Lookup {
            book,
            chapter,
            verse,
            path,
        } => {
            let project_path = resolve_path(path);
            let xg = XrefGraph::open(&project_path)?;
            let index = xg.load_index()?;
            let queries = CrossReferenceQueries::new(&index);
            let display = xg.books().resolve(&book);
            let targets = queries.get(&display, chapter, verse);
            if targets.is_empty() {
                println!("No cross references for {} {}:{}", display, chapter, verse);
            } else {
                for target in targets {
                    println!("{}", target);
                }
            }
        }
    }
    Ok(())
}

/// Resolves an optional path argument to a `PathBuf`.
///
/// Defaults to the current working directory if no path is provided.
fn resolve_path(path: Option<String>) -> PathBuf {
    match path {
        Some(p) => PathBuf::from(p),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}
