//! sitemeta - Site metadata for a static blog.
//!
//! Loads `site.toml`, checks it, and writes the files that depend on it.

mod cli;
mod config;
mod generator;
mod logger;
mod palette;
mod seo;
mod utils;

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;
use std::path::{Path, PathBuf};
use std::sync::Arc;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    execute(&cli.command, || load_config(&cli.config))
}

/// Run one subcommand. `load` is only called by commands that read the config.
fn execute(command: &Commands, load: impl FnOnce() -> Result<Arc<SiteConfig>>) -> Result<()> {
    match command {
        Commands::Init { dir, dry } => {
            let root = match dir {
                Some(dir) => dir.clone(),
                None => std::env::current_dir()?,
            };
            cli::init::new_site(&root, *dry)
        }
        Commands::Check => {
            let config = load()?;
            cli::check::run_check(&config)
        }
        Commands::Manifest { output } => {
            let config = load()?;
            let out_dir = config.root_join(output);
            generator::manifest::write_manifest(&config, &out_dir).map(|_| ())
        }
        Commands::Head { args } => {
            let config = load()?;
            cli::head::run_head(args, &config)
        }
        Commands::Query { args } => {
            let config = load()?;
            cli::query::run_query(args, &config)
        }
    }
}

/// Locate and load the config into the process-wide handle.
fn load_config(name: &Path) -> Result<Arc<SiteConfig>> {
    let path = resolve_config_path(name)?;
    debug!("config"; "using {}", path.display());
    config::load_once(&path)
}

/// Find the config file, walking up from the current directory.
fn resolve_config_path(name: &Path) -> Result<PathBuf> {
    let path = config::find_config_file(name).with_context(|| {
        format!(
            "Config file `{}` not found in the current directory or its parents.\n\
             Run `sitemeta init` to create one.",
            name.display()
        )
    })?;
    Ok(std::path::absolute(&path).unwrap_or(path))
}
