//! WC26 CLI - Build, check and query the guide's search catalog

mod config;

use anyhow::{bail, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;
use wc26_content::ContentSet;
use wc26_core::Category;
use wc26_search::{BuildOptions, Catalog, CatalogBuilder, CatalogQuery, DuplicatePolicy};

use crate::config::CliConfig;

fn main() -> Result<()> {
    // Logs go to stderr so `build` output can be piped
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("wc26=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    run(&args, CliConfig::from_env)
}

/// Dispatch a command line; config is only loaded by commands that use it
fn run(args: &[String], load_config: impl Fn() -> Result<CliConfig>) -> Result<()> {
    if args.len() < 2 {
        print_help();
        return Ok(());
    }

    let command = &args[1];

    match command.as_str() {
        "help" | "--help" | "-h" => print_help(),
        "build" => build(&load_config()?)?,
        "check" => check(&load_config()?)?,
        "search" => {
            if args.len() < 3 {
                eprintln!("Usage: wc26-cli search <terms...>");
                return Ok(());
            }
            search(&load_config()?, &args[2..].join(" "))?;
        }
        _ => {
            eprintln!("Unknown command: {}", command);
            print_help();
        }
    }

    Ok(())
}

fn print_help() {
    println!(
        r#"WC26 CLI - World Cup 2026 guide search catalog

USAGE:
    wc26-cli <COMMAND> [OPTIONS]

COMMANDS:
    help            Show this help message
    build           Build the catalog and print it as JSON
    check           Build the catalog and report skipped or duplicate records
    search          Print entries matching every search term

ENVIRONMENT:
    WC26_DATA_DIR       Load content files from this directory
    WC26_BASE_URL       Site origin for absolute links
    WC26_STRICT         Fail on malformed records (1/true)
    WC26_SEARCH_LIMIT   Maximum search results (default 20)

EXAMPLES:
    wc26-cli build > search-index.json
    WC26_DATA_DIR=./data wc26-cli check
    wc26-cli search toronto
"#
    );
}

fn load_catalog(config: &CliConfig, options: BuildOptions) -> Result<Catalog> {
    let content = match &config.data_dir {
        Some(dir) => ContentSet::load_dir(dir)?,
        None => ContentSet::embedded()?,
    };
    let builder = CatalogBuilder::new().with_options(options);
    Ok(content.build_catalog(&builder)?)
}

fn build(config: &CliConfig) -> Result<()> {
    let catalog = load_catalog(config, config.build_options())?;
    println!("{}", serde_json::to_string_pretty(catalog.entries())?);
    Ok(())
}

fn check(config: &CliConfig) -> Result<()> {
    // Collect every duplicate instead of stopping at the first one
    let options = BuildOptions {
        duplicates: DuplicatePolicy::KeepFirst,
        ..config.build_options()
    };
    let catalog = load_catalog(config, options)?;
    let report = catalog.report();

    println!("Entries: {}", catalog.len());
    for category in Category::ALL {
        let count = catalog.by_category(category).len();
        if count > 0 {
            println!("  {:<10} {}", category, count);
        }
    }

    for skipped in &report.skipped {
        println!("Skipped {} {:?}: {}", skipped.source_kind, skipped.id, skipped.reason);
    }
    for duplicate in &report.duplicates {
        println!("Duplicate {} {:?}", duplicate.source_kind, duplicate.id);
    }

    if !report.is_clean() {
        bail!(
            "{} skipped and {} duplicate records",
            report.skipped.len(),
            report.duplicates.len()
        );
    }
    info!("Catalog is clean");
    Ok(())
}

fn search(config: &CliConfig, text: &str) -> Result<()> {
    let catalog = load_catalog(config, config.build_options())?;
    let results = catalog.search(&CatalogQuery::new(text).with_limit(config.search_limit));

    if results.results.is_empty() {
        println!("No matches for {:?}", results.query);
        return Ok(());
    }

    println!("{} matches for {:?}:", results.total_matches, results.query);
    for entry in &results.results {
        println!(
            "  [{}] {} -> {}",
            entry.category,
            entry.title,
            entry.url(&config.base_url)?
        );
    }
    Ok(())
}
