use clap::{Parser, Subcommand};
use colored::Colorize;
use sml_core::reader::read_sml_objects;
use sml_protocol::SmlConverterResult;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sml", about = "Read and inspect SML model folders", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Read a model folder and print a summary of the objects found
    Read {
        /// Path to the model folder
        path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    // Reader warnings (skipped settings objects) go to stderr so the
    // summary on stdout stays clean.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Read { path } => {
            let result = read_sml_objects(&path).await?;
            print_summary(&result);
        }
    }

    Ok(())
}

fn print_summary(result: &SmlConverterResult) {
    match &result.catalog {
        Some(catalog) => println!("{} {}", "catalog:".bold(), catalog.label),
        None => println!("{} {}", "catalog:".bold(), "none".dimmed()),
    }

    let collections = [
        ("models", result.models.len()),
        ("dimensions", result.dimensions.len()),
        ("datasets", result.datasets.len()),
        ("metrics", result.metrics.len()),
        ("calculated metrics", result.metrics_calculated.len()),
        ("connections", result.connections.len()),
        ("row securities", result.row_securities.len()),
        ("composite models", result.composite_models.len()),
    ];
    for (name, count) in collections {
        println!("{} {count}", format!("{name}:").bold());
    }

    println!("{} {}", "total objects:".bold(), result.object_count());
}
