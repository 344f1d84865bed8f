use anyhow::Context;
use clap::{Parser, ValueEnum};
use letterbook_core::*;
use std::path::PathBuf;
use std::process;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod errors;
mod operations;
mod ui;

use errors::map_run_error;
use operations::parse_selection;
use ui::{format_index_strip, format_markdown, format_plain, format_selection};

/// Letterbook - Display a list of names grouped into alphabetical sections
///
/// Examples:
///   # Display the built-in fruit list
///   letterbook
///
///   # Display names from a JSON file
///   letterbook names.json
///
///   # Resolve the first row of the second section
///   letterbook names.json --select 1,0
///
///   # Drop empty entries instead of failing
///   letterbook names.json --skip-empty --format json
#[derive(Parser, Debug)]
#[command(name = "letterbook")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Input Format:\n  \
    - A JSON array of strings: [\"Apple\", \"Banana\"]\n  \
    - Or an object with an items array: {\"items\": [\"Apple\", \"Banana\"]}\n\n\
Grouping:\n  \
    - Items are grouped by their upper-cased first character\n  \
    - Sections and the items inside them are sorted case-insensitively\n  \
    - Empty items are an error unless --skip-empty is given\n\n\
Logging:\n  \
    - Set RUST_LOG (e.g. RUST_LOG=debug) to see diagnostics on stderr")]
struct Cli {
    /// Path to a JSON item list (defaults to the built-in fruit list)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Markdown)]
    format: OutputFormat,

    /// Resolve a selected row, zero-based (format: SECTION,ROW)
    #[arg(short, long = "select", value_name = "SECTION,ROW")]
    select: Option<String>,

    /// Drop empty items with a warning instead of failing
    #[arg(long)]
    skip_empty: bool,

    /// Print the section index titles only
    #[arg(short, long)]
    index: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Markdown,
    Plain,
    Json,
}

fn main() {
    init_logging();

    let cli = Cli::parse();

    if let Err(error) = run(&cli) {
        let (title, message, details) = map_run_error(&error, cli.file.as_deref());
        eprintln!("{}: {}\n\n{}", title, message, details);
        process::exit(1);
    }
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let items = load(cli)?;

    let items = if cli.skip_empty {
        partition_valid(items).0
    } else {
        items
    };

    let index = build(items)?;
    info!(
        sections = index.section_count(),
        items = index.total_items(),
        "index ready"
    );

    if let Some(selection) = &cli.select {
        let (section, row) = parse_selection(selection)?;
        let selection = index.select(section, row)?;
        match cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&selection)?)
            }
            _ => println!("{}", format_selection(&selection)),
        }
        return Ok(());
    }

    if cli.index {
        match cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(&index.section_index_titles())?)
            }
            _ => println!("{}", format_index_strip(&index)),
        }
        return Ok(());
    }

    match cli.format {
        OutputFormat::Markdown => print!("{}", format_markdown(&index)),
        OutputFormat::Plain => println!("{}", format_plain(&index)),
        OutputFormat::Json => println!("{}", index_to_json(&index)?),
    }

    Ok(())
}

fn load(cli: &Cli) -> anyhow::Result<Vec<String>> {
    match &cli.file {
        Some(path) => {
            let items = load_items(path)
                .with_context(|| format!("loading items from '{}'", path.display()))?;
            info!(path = %path.display(), count = items.len(), "loaded item list");
            Ok(items)
        }
        None => {
            info!("no input file given, using the built-in fruit list");
            Ok(sample_fruits().into_iter().map(String::from).collect())
        }
    }
}
