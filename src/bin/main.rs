//! Resourcepack Report CLI
//!
//! Extract item rename rules from Minecraft resource packs into a
//! browsable HTML report.

use clap::{Parser, Subcommand};
use resourcepack_report::{
    build_table, load_pack, render_report, resolve_all, Diagnostics, DocumentSet, ReportConfig,
    ReportError, DEFAULT_TEMPLATE,
};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resourcepack-report")]
#[command(author, version, about = "Extract item rename rules from Minecraft resource packs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the HTML report from resource packs
    Report {
        /// Directory scanned for *.zip resource packs
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// Additional pack paths to include (ZIP or directory)
        #[arg(short, long)]
        pack: Vec<PathBuf>,

        /// Path to the config file
        #[arg(short, long, default_value = "config.json")]
        config: PathBuf,

        /// HTML template file containing a {{TABLES}} placeholder
        #[arg(short, long)]
        template: Option<PathBuf>,

        /// Output file path
        #[arg(short, long, default_value = "resourcepack.html")]
        output: PathBuf,
    },

    /// Show information about a resource pack
    Info {
        /// Path to resource pack (ZIP or directory)
        #[arg(short, long)]
        pack: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Report {
            dir,
            pack,
            config,
            template,
            output,
        } => {
            generate_report(&dir, pack, &config, template, &output)?;
        }
        Commands::Info { pack } => {
            show_pack_info(&pack)?;
        }
    }

    Ok(())
}

fn generate_report(
    dir: &PathBuf,
    explicit_packs: Vec<PathBuf>,
    config_path: &PathBuf,
    template_path: Option<PathBuf>,
    output_path: &PathBuf,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = ReportConfig::load(config_path)?;

    let template = match &template_path {
        Some(path) => fs::read_to_string(path)?,
        None => DEFAULT_TEMPLATE.to_string(),
    };

    let pack_paths = find_packs(dir, explicit_packs)?;
    println!("Found {} resource pack(s)", pack_paths.len());

    let mut documents = DocumentSet::new();
    let mut diagnostics = Diagnostics::default();

    for path in &pack_paths {
        println!("Processing {:?}...", path);
        match load_pack(path, &mut documents, &mut diagnostics) {
            Ok(count) => println!("  Found {} item definitions", count),
            Err(e) => {
                // One unreadable pack never prevents the report from
                // covering the rest.
                eprintln!("Warning: Skipping {:?}: {}", path, e);
            }
        }
    }

    if documents.item_count() == 0 {
        return Err(Box::new(ReportError::NoUsableInput(
            "no item definitions found in any pack".to_string(),
        )));
    }

    let items = resolve_all(&documents, &mut diagnostics);
    let table = build_table(&items, &config);
    let html = render_report(&table, &config, &template)?;
    fs::write(output_path, &html)?;

    println!(
        "Wrote {} rows across {} pack(s) to {:?}",
        table.row_count(),
        table.packs.len(),
        output_path
    );
    println!("Summary: {}", diagnostics.summary());

    Ok(())
}

/// Collect pack paths: every *.zip in the scan directory plus the
/// explicitly given ones.
fn find_packs(
    dir: &PathBuf,
    explicit_packs: Vec<PathBuf>,
) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    let mut paths = explicit_packs;

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.extension().map(|e| e == "zip").unwrap_or(false) {
            paths.push(path);
        }
    }
    paths.sort();
    paths.dedup();

    if paths.is_empty() {
        return Err(Box::new(ReportError::NoUsableInput(format!(
            "no .zip resource packs found in {:?}",
            dir
        ))));
    }

    Ok(paths)
}

fn show_pack_info(pack_path: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let mut documents = DocumentSet::new();
    let mut diagnostics = Diagnostics::default();

    println!("Loading resource pack from {:?}...", pack_path);
    let count = load_pack(pack_path, &mut documents, &mut diagnostics)?;

    println!("\nResource Pack Info:");
    println!("  Item definitions: {}", count);
    println!("  Namespaces: {}", documents.namespaces().join(", "));
    if !diagnostics.is_clean() {
        println!("  Diagnostics: {}", diagnostics.summary());
    }

    Ok(())
}
