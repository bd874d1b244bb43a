use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "quotebox")]
#[command(about = "Keep a list of quotes, show them by category, and sync with a remote")]
#[command(long_about = "quotebox - a quote keeper

Stores quotes locally, shows a random one from the selected category,
imports and exports them as JSON, and merges in quotes from a remote
endpoint.

QUICK START:
  quotebox show                          Show a random quote
  quotebox add \"Ship it.\" Work           Add a quote
  quotebox filter Coding                 Only show Coding quotes from now on
  quotebox watch                         Show a quote and keep syncing

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

Data lives in ~/.quotebox/. Settings are read from ~/.quotebox/config.yaml.")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Defaults to `general.default_output` from the config file.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Increase log verbosity (-v info, -vv debug)
    ///
    /// `RUST_LOG` takes precedence when set.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show a random quote
    ///
    /// Picks from the selected category (see `quotebox filter`), or from the
    /// category given here without changing the selection.
    ///
    /// # Examples
    ///
    ///   quotebox show
    ///   quotebox show -c Coding
    #[command(alias = "s")]
    Show {
        /// Pick from this category instead of the selected one
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Add a quote
    ///
    /// Both text and category are required; surrounding whitespace is
    /// trimmed. The new quote is posted to the remote unless disabled.
    ///
    /// # Examples
    ///
    ///   quotebox add "Keep calm and code on." Coding
    ///   quotebox add "Ship it." Work --no-post
    #[command(alias = "a")]
    Add(AddArgs),

    /// List quotes
    #[command(alias = "ls")]
    List {
        /// Only list quotes in this category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List categories in first-seen order
    Categories,

    /// Select the category to show quotes from
    ///
    /// The selection is remembered. Use `all` to clear it.
    ///
    /// # Examples
    ///
    ///   quotebox filter Motivation
    ///   quotebox filter all
    Filter {
        /// Category name, or `all`
        category: String,
    },

    /// Import quotes from a JSON file
    ///
    /// The file must hold an array of {"text", "category"} objects. They are
    /// appended as-is. A file that does not parse imports nothing.
    Import {
        /// File to read
        file: PathBuf,
    },

    /// Export all quotes to a JSON file
    Export {
        /// File to write, or `-` for stdout
        #[arg(default_value = "quotes.json")]
        file: PathBuf,
    },

    /// Fetch remote quotes once and merge new ones
    Sync,

    /// Show a quote, then keep syncing on an interval until Ctrl-C
    Watch {
        /// Seconds between syncs (defaults to `sync.interval_secs`)
        #[arg(short, long)]
        interval: Option<u64>,
    },

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   source <(quotebox completions bash)
    ///   quotebox completions fish > ~/.config/fish/completions/quotebox.fish
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for `quotebox add`.
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Quote text
    pub text: String,

    /// Quote category
    pub category: String,

    /// Do not post the new quote to the remote
    #[arg(long)]
    pub no_post: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_show_command() {
        let cli = Cli::try_parse_from(["quotebox", "show"]).unwrap();
        assert!(matches!(cli.command, Commands::Show { category: None }));
        assert!(cli.output.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_cli_show_with_category() {
        let cli = Cli::try_parse_from(["quotebox", "s", "-c", "Coding"]).unwrap();
        match cli.command {
            Commands::Show { category } => assert_eq!(category.as_deref(), Some("Coding")),
            _ => panic!("Expected Show command"),
        }
    }

    #[test]
    fn test_cli_add_command() {
        let cli = Cli::try_parse_from(["quotebox", "add", "Ship it.", "Work", "--no-post"]).unwrap();
        match cli.command {
            Commands::Add(args) => {
                assert_eq!(args.text, "Ship it.");
                assert_eq!(args.category, "Work");
                assert!(args.no_post);
            }
            _ => panic!("Expected Add command"),
        }
    }

    #[test]
    fn test_cli_add_requires_category() {
        assert!(Cli::try_parse_from(["quotebox", "add", "Only text"]).is_err());
    }

    #[test]
    fn test_cli_export_default_file() {
        let cli = Cli::try_parse_from(["quotebox", "export"]).unwrap();
        match cli.command {
            Commands::Export { file } => assert_eq!(file, PathBuf::from("quotes.json")),
            _ => panic!("Expected Export command"),
        }
    }

    #[test]
    fn test_cli_global_flags() {
        let cli = Cli::try_parse_from(["quotebox", "list", "-o", "json", "-vv"]).unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_watch_interval() {
        let cli = Cli::try_parse_from(["quotebox", "watch", "--interval", "30"]).unwrap();
        assert!(matches!(cli.command, Commands::Watch { interval: Some(30) }));
    }

    #[test]
    fn test_cli_completions() {
        let cli = Cli::try_parse_from(["quotebox", "completions", "zsh"]).unwrap();
        assert!(matches!(cli.command, Commands::Completions { shell: Shell::Zsh }));
    }
}
