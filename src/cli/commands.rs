use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::ops::query::SearchQuery;

#[derive(Parser)]
#[command(name = "yp", about = concat!("yearpick v", env!("CARGO_PKG_VERSION"), " - pick a year, build a case search"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Use this config file instead of the default location
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Write logs to this file (RUST_LOG controls the level)
    #[arg(long = "log-file", global = true)]
    pub log_file: Option<PathBuf>,

    #[command(flatten)]
    pub picker: PickerArgs,

    #[command(flatten)]
    pub filters: FilterArgs,
}

/// Overrides for the [picker] config table
#[derive(Args, Debug, Default, Clone)]
pub struct PickerArgs {
    /// Initial year
    #[arg(long, allow_negative_numbers = true)]
    pub start: Option<i64>,
    /// Years added per growth step
    #[arg(long = "chunk-size")]
    pub chunk_size: Option<i64>,
    /// Rows from an edge that trigger growth
    #[arg(long)]
    pub threshold: Option<f64>,
    /// Visible panel rows
    #[arg(long)]
    pub viewport: Option<f64>,
}

/// Search filters other than the year
#[derive(Args, Debug, Default, Clone)]
pub struct FilterArgs {
    /// Free text matched against file paths
    #[arg(short = 'q', long = "q")]
    pub text: Option<String>,
    /// Month folder (Jan..Dec)
    #[arg(long)]
    pub month: Option<String>,
    /// Fragment of the case folder name (Petitioner v. Respondent)
    #[arg(long)]
    pub party: Option<String>,
    /// Criminal, Civil, Commercial
    #[arg(long)]
    pub domain: Option<String>,
    /// Sub-folder such as "Orders/Judgments"
    #[arg(long)]
    pub subcategory: Option<String>,
}

impl FilterArgs {
    pub fn to_query(&self) -> SearchQuery {
        let mut query = SearchQuery::new();
        if let Some(q) = &self.text {
            query = query.text(q);
        }
        if let Some(month) = &self.month {
            query = query.month(month);
        }
        if let Some(party) = &self.party {
            query = query.party(party);
        }
        if let Some(domain) = &self.domain {
            query = query.domain(domain);
        }
        if let Some(sub) = &self.subcategory {
            query = query.subcategory(sub);
        }
        query
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a search query without the TUI
    Query(QueryArgs),
    /// Show the effective config, or create a starter file
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct QueryArgs {
    /// Year to search; anything that is not an integer is ignored
    #[arg(long, allow_hyphen_values = true)]
    pub year: Option<String>,

    #[command(flatten)]
    pub filters: FilterArgs,
}

#[derive(Args)]
pub struct ConfigArgs {
    /// Write a starter config file (refuses to overwrite)
    #[arg(long)]
    pub init: bool,
}
