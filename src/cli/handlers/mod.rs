use std::path::Path;

use tracing::debug;

use crate::cli::commands::*;
use crate::cli::output::print_query;
use crate::io::config_io::{self, ConfigError};
use crate::model::{FileConfig, SelectionState};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let path = config_io::config_path(cli.config.as_deref())?;
    let config = load_config(&path, &cli.picker)?;

    match cli.command {
        None => cmd_pick(&config, &cli.filters, json),
        Some(Commands::Query(args)) => cmd_query(&config, args, json),
        Some(Commands::Config(args)) => cmd_config(&config, &path, args, json),
    }
}

/// Read the config file and apply command-line overrides on top.
pub fn load_config(path: &Path, args: &PickerArgs) -> Result<FileConfig, ConfigError> {
    let mut config = config_io::read_config(path)?;
    apply_overrides(&mut config, args)?;
    Ok(config)
}

fn apply_overrides(config: &mut FileConfig, args: &PickerArgs) -> Result<(), ConfigError> {
    let picker = &mut config.picker;
    if let Some(start) = args.start {
        picker.start = start;
    }
    if let Some(chunk) = args.chunk_size {
        picker.chunk_size = chunk;
    }
    if let Some(threshold) = args.threshold {
        picker.threshold = threshold;
    }
    if let Some(viewport) = args.viewport {
        picker.viewport = viewport;
    }
    picker.validate().map_err(|e| ConfigError::Invalid {
        field: e.field,
        reason: e.reason,
    })
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_pick(
    config: &FileConfig,
    filters: &FilterArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let query = filters.to_query();
    let outcome = crate::tui::run(config, query.clone())?;
    let mut filters = query;
    filters.year = outcome.year;
    print_query(outcome.year, &outcome.query, &filters, json)?;
    Ok(())
}

fn cmd_query(
    config: &FileConfig,
    args: QueryArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let picker = &config.picker;
    let (min, max) = picker.bounds();
    let mut selection = SelectionState::new(picker.start).with_bounds(Some(min), Some(max));
    if let Some(raw) = &args.year
        && !selection.set_raw(raw)
    {
        debug!(raw = %raw, start = picker.start, "year left at start value");
    }
    let year = selection.get();
    let query = args.filters.to_query().year(year);
    let query_string = query.to_query_string_with(&config.ui.field);
    print_query(Some(year), &query_string, &query, json)?;
    Ok(())
}

fn cmd_config(
    config: &FileConfig,
    path: &Path,
    args: ConfigArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if args.init {
        config_io::write_config(path, config)?;
        println!("Wrote {}", path.display());
        return Ok(());
    }
    if json {
        println!("{}", serde_json::to_string_pretty(config)?);
    } else {
        print!("{}", toml::to_string_pretty(config)?);
    }
    Ok(())
}
