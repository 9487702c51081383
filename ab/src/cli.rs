//! CLI argument parsing for addressbook

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ab")]
#[command(author, version, about = "Name-ordered address book", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Address book file (overrides config)
    #[arg(short, long)]
    pub book: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print every entry as a table
    List {
        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Print the number of entries
    Count,

    /// Show the entry at a position (0-based)
    Get {
        #[arg(required = true, allow_negative_numbers = true)]
        index: i64,
    },

    /// Find the first entry with an exact name
    Search {
        #[arg(required = true)]
        name: String,
    },

    /// Add an entry and save the book
    Add {
        #[arg(required = true)]
        name: String,

        #[arg(required = true)]
        email: String,

        /// Where to put the entry
        #[arg(short, long, value_enum, default_value = "sorted")]
        at: Placement,
    },

    /// Merge records from another file into the book
    Import {
        #[arg(required = true)]
        file: PathBuf,
    },

    /// Write the effective configuration to a YAML file
    WriteConfig {
        #[arg(required = true)]
        path: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Placement {
    /// Keep name order
    #[default]
    Sorted,
    /// Put first regardless of name
    Front,
    /// Put last regardless of name
    End,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add_defaults_to_sorted() {
        let cli = Cli::try_parse_from(["ab", "add", "Alice", "alice@x.com"]).unwrap();
        match cli.command {
            Command::Add { name, email, at } => {
                assert_eq!(name, "Alice");
                assert_eq!(email, "alice@x.com");
                assert_eq!(at, Placement::Sorted);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_negative_index() {
        let cli = Cli::try_parse_from(["ab", "get", "-1"]).unwrap();
        assert!(matches!(cli.command, Command::Get { index: -1 }));
    }

    #[test]
    fn test_parse_book_override() {
        let cli = Cli::try_parse_from(["ab", "--book", "/tmp/b.txt", "list", "--format", "json"]).unwrap();
        assert_eq!(cli.book, Some(PathBuf::from("/tmp/b.txt")));
        assert!(matches!(
            cli.command,
            Command::List {
                format: OutputFormat::Json
            }
        ));
    }
}
