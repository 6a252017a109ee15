//! `query` command: the config as JSON, for templates.
//!
//! Top-level keys follow the `site.toml` sections. Palette references are
//! already resolved, so colors are plain strings.

use std::fs;
use std::io::Write;

use anyhow::{Context, Result, bail};
use serde_json::{Map, Value as JsonValue};

use crate::cli::args::QueryArgs;
use crate::config::SiteConfig;
use crate::log;

/// Execute query command
pub fn run_query(args: &QueryArgs, config: &SiteConfig) -> Result<()> {
    let output = build_output(config, args.sections.as_deref())?;

    let formatted = if args.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };

    if let Some(ref output) = args.output {
        let output_path = config.root_join(output);
        let mut file = fs::File::create(&output_path)
            .with_context(|| format!("Failed to create {}", output_path.display()))?;
        writeln!(file, "{}", formatted)
            .with_context(|| format!("Failed to write {}", output_path.display()))?;
        log!("query"; "wrote output to {}", output_path.display());
    } else {
        println!("{}", formatted);
    }

    Ok(())
}

/// Serialize the config, keeping only `sections` when given.
fn build_output(config: &SiteConfig, sections: Option<&[String]>) -> Result<JsonValue> {
    let JsonValue::Object(all) = serde_json::to_value(config)? else {
        bail!("config did not serialize to an object");
    };

    let Some(sections) = sections else {
        return Ok(JsonValue::Object(all));
    };

    let mut filtered = Map::new();
    for name in sections {
        match all.get(name) {
            Some(value) => {
                filtered.insert(name.clone(), value.clone());
            }
            None => bail!(
                "unknown section '{}', expected one of: {}",
                name,
                all.keys().map(String::as_str).collect::<Vec<_>>().join(", ")
            ),
        }
    }
    Ok(JsonValue::Object(filtered))
}
