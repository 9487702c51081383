use std::io::Write;
use std::path::Path;
use std::str::FromStr;

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::{info, warn};

use addressbook::cli::{Cli, Command, OutputFormat, Placement};
use addressbook::config::Config;
use addressbook::{AddressEntry, EntryList, codec};

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    let mut builder = env_logger::Builder::from_default_env();

    // Priority: CLI --log-level > config file > RUST_LOG > INFO
    match cli_log_level.or(config_log_level) {
        Some(level) => {
            let filter = log::LevelFilter::from_str(level).map_err(|_| eyre::eyre!("Invalid log level: {}", level))?;
            builder.filter_level(filter);
        }
        None if std::env::var_os("RUST_LOG").is_none() => {
            builder.filter_level(log::LevelFilter::Info);
        }
        None => {}
    }

    builder.init();
    Ok(())
}

/// Load the book at `path`; a missing file is an empty book only when `create` is set
fn open_book(path: &Path, create: bool) -> Result<EntryList> {
    if create && !path.exists() {
        warn!("Address book {} does not exist, starting empty", path.display());
        return Ok(EntryList::new());
    }
    EntryList::from_file(path).context("Failed to load address book")
}

fn save_book(book: &EntryList, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).context("Failed to create address book directory")?;
    }
    book.save_to(path).context("Failed to save address book")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    setup_logging(cli.log_level.as_deref(), config.log_level.as_deref()).context("Failed to setup logging")?;

    let book_path = cli.book.clone().unwrap_or_else(|| config.book_path.clone());
    info!("addressbook starting with {}", book_path.display());

    match cli.command {
        Command::List { format } => {
            let book = open_book(&book_path, false)?;
            match format {
                OutputFormat::Text => {
                    let stdout = std::io::stdout();
                    book.print_all(stdout.lock(), config.layout())?;
                }
                OutputFormat::Json => {
                    let entries: Vec<&AddressEntry> = book.iter().collect();
                    println!("{}", serde_json::to_string_pretty(&entries)?);
                }
            }
        }
        Command::Count => {
            let book = open_book(&book_path, false)?;
            println!("{}", book.size());
        }
        Command::Get { index } => {
            let book = open_book(&book_path, false)?;
            match usize::try_from(index).ok().and_then(|i| book.get(i)) {
                Some(entry) => println!("{}", entry),
                None => println!("{} No entry at index {}", "✗".red(), index),
            }
        }
        Command::Search { name } => {
            let book = open_book(&book_path, false)?;
            match book.search(&name) {
                Some(entry) => println!("{}", entry),
                None => println!("{} No entry named {}", "✗".red(), name),
            }
        }
        Command::Add { name, email, at } => {
            for field in [&name, &email] {
                codec::check_field(field).context("Cannot add entry")?;
            }
            let mut book = open_book(&book_path, true)?;
            let entry = AddressEntry::new(name, email);
            let shown = entry.to_string();
            match at {
                Placement::Sorted => book.insert_sorted(entry),
                Placement::Front => book.insert_at_front(entry),
                Placement::End => book.append(entry),
            }
            save_book(&book, &book_path)?;
            println!("{} Added {}", "✓".green(), shown.cyan());
        }
        Command::Import { file } => {
            let mut book = open_book(&book_path, true)?;
            let count = book
                .load_from(&file)
                .context(format!("Failed to import {}", file.display()))?;
            save_book(&book, &book_path)?;
            println!("{} Imported {} entries ({} total)", "✓".green(), count, book.size());
        }
        Command::WriteConfig { path } => {
            let mut effective = config.clone();
            effective.book_path = book_path;
            effective.save(&path).context("Failed to write configuration")?;
            println!("{} Wrote config to {}", "✓".green(), path.display());
        }
    }

    std::io::stdout().flush()?;
    Ok(())
}
