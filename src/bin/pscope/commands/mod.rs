mod claims;
mod coverage;
mod markush;

use claims::run_claims;
use coverage::run_coverage;
use markush::run_markush;

use std::path::Path;

use anyhow::{Context, Result, bail};
use patent_scope::{Patent, ScopeConfig, load_config};

use crate::cli::{Command, ConfigOptions, IoOptions};
use crate::display::Context as DisplayContext;
use crate::io::{open_input, stdin_is_tty};

pub fn dispatch(command: Command, ctx: DisplayContext) -> Result<()> {
    match command {
        Command::Claims(args) => run_claims(args, ctx),
        Command::Markush(args) => run_markush(args, ctx),
        Command::Coverage(args) => run_coverage(args, ctx),
    }
}

fn read_patent(io: &IoOptions) -> Result<Patent> {
    if io.input.is_none() && stdin_is_tty() {
        bail!(
            "No input file specified and stdin is a terminal.\n\nUsage: pscope <COMMAND> <FILE> or pipe a patent document via stdin."
        );
    }

    let input = open_input(io.input.as_deref())?;
    let patent = patent_scope::io::read_patent(input).with_context(|| match &io.input {
        Some(path) => format!("Failed to load patent document: {}", path.display()),
        None => "Failed to load patent document from stdin".to_string(),
    })?;

    tracing::info!(
        patent = patent.number(),
        claims = patent.claims().len(),
        structures = patent.structures().len(),
        "patent document loaded"
    );
    Ok(patent)
}

fn load_settings(opts: &ConfigOptions) -> Result<ScopeConfig> {
    let Some(path) = opts.config.as_deref() else {
        return Ok(load_config(None)?);
    };
    load_settings_file(path)
}

fn load_settings_file(path: &Path) -> Result<ScopeConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file: {}", path.display()))?;
    let config = load_config(Some(&text))
        .with_context(|| format!("Invalid settings file: {}", path.display()))?;
    Ok(config)
}
