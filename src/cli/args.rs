//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Site metadata tool: validate `site.toml` and generate what depends on it
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(short = 'C', long, global = true, default_value = "site.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a commented site.toml and a starter colors.toml
    #[command(visible_alias = "i")]
    Init {
        /// Target directory (default: current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        dir: Option<PathBuf>,

        /// Print the config template instead of writing files
        #[arg(long)]
        dry: bool,
    },

    /// Load and validate the config
    #[command(visible_alias = "c")]
    Check,

    /// Write manifest.json
    #[command(visible_alias = "m")]
    Manifest {
        /// Output directory (relative to the config file)
        #[arg(short, long, default_value = "public", value_hint = clap::ValueHint::DirPath)]
        output: PathBuf,
    },

    /// Print <head> tags for a page
    Head {
        #[command(flatten)]
        args: HeadArgs,
    },

    /// Print the config as JSON
    #[command(visible_alias = "q")]
    Query {
        #[command(flatten)]
        args: QueryArgs,
    },
}

/// Head command arguments.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct HeadArgs {
    /// Page title; omit for the home page
    #[arg(short, long)]
    pub title: Option<String>,

    /// Site path of the page (e.g. posts/hello/)
    #[arg(short, long, default_value = "")]
    pub path: String,
}

/// Query command arguments.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct QueryArgs {
    /// Only output these top-level sections (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub sections: Option<Vec<String>>,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Write output to file instead of stdout (relative to the config file)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["sitemeta", "check", "-C", "blog/site.toml", "-v"]);
        assert!(matches!(cli.command, Commands::Check));
        assert_eq!(cli.config, PathBuf::from("blog/site.toml"));
        assert!(cli.verbose);
    }

    #[test]
    fn test_query_sections() {
        let cli = Cli::parse_from(["sitemeta", "query", "--sections", "author,contact", "--pretty"]);
        let Commands::Query { args } = cli.command else {
            panic!("expected query");
        };
        assert_eq!(
            args.sections,
            Some(vec!["author".to_string(), "contact".to_string()])
        );
        assert!(args.pretty);
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["sitemeta", "manifest"]);
        assert_eq!(cli.config, PathBuf::from("site.toml"));
        let Commands::Manifest { output } = cli.command else {
            panic!("expected manifest");
        };
        assert_eq!(output, PathBuf::from("public"));

        let cli = Cli::parse_from(["sitemeta", "init", "--dry"]);
        assert!(matches!(cli.command, Commands::Init { dir: None, dry: true }));
    }
}
