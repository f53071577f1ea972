//! Command-line entry point for lease royalty allocation.
//!
//! Collects lease inputs from a config file and/or flags, prints the results summary and
//! owner breakdown, and optionally exports the owner breakdown as CSV.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use openroyalty::allocation::{allocation_warnings, compute_allocations};
use openroyalty::config::LeaseConfig;
use openroyalty::core::{OwnerInput, RoyaltyPreset, to_json_pretty};
use openroyalty::report::{DEFAULT_CSV_FILE_NAME, render_text, write_owner_csv};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Multi-owner oil & gas royalty calculator.
#[derive(Debug, Parser)]
#[command(name = "royalty_calc", version, about)]
struct Cli {
    /// Lease file (.toml or .json); flags override its values.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Gross production revenue in dollars.
    #[arg(long)]
    gross_revenue: Option<f64>,

    /// Total tract acres.
    #[arg(long)]
    total_acres: Option<f64>,

    /// Estimated drilling and operating costs in dollars.
    #[arg(long)]
    estimated_costs: Option<f64>,

    /// Standard royalty: 1/8, 3/16, 1/5 or 1/4.
    #[arg(long, conflicts_with = "royalty_percent")]
    royalty: Option<RoyaltyPreset>,

    /// Custom royalty percentage in [0, 100].
    #[arg(long)]
    royalty_percent: Option<f64>,

    /// Mineral owner as NAME=ACRES or ACRES; repeat per owner. Replaces config owners.
    #[arg(short, long = "owner", value_name = "NAME=ACRES")]
    owners: Vec<OwnerInput>,

    /// Maximum number of owners accepted.
    #[arg(long)]
    max_owners: Option<usize>,

    /// Write the owner breakdown CSV (default file: owner_breakdown.csv).
    #[arg(
        long,
        value_name = "PATH",
        num_args = 0..=1,
        default_missing_value = DEFAULT_CSV_FILE_NAME
    )]
    csv: Option<PathBuf>,

    /// Print the full report as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> anyhow::Result<(LeaseConfig, bool)> {
        let mut config = match &self.config {
            Some(path) => LeaseConfig::load(path)
                .with_context(|| format!("failed to load lease file {}", path.display()))?,
            None => LeaseConfig::default(),
        };

        if let Some(v) = self.gross_revenue {
            config.lease.gross_revenue = v;
        }
        if let Some(v) = self.total_acres {
            config.lease.total_acres = v;
        }
        if let Some(v) = self.estimated_costs {
            config.lease.estimated_costs = v;
        }
        if let Some(preset) = self.royalty {
            config.lease.royalty = Some(preset);
            config.lease.royalty_percent = None;
        }
        if let Some(percent) = self.royalty_percent {
            config.lease.royalty_percent = Some(percent);
            config.lease.royalty = None;
        }
        if !self.owners.is_empty() {
            config.owners = self.owners;
        }
        if let Some(max) = self.max_owners {
            config.export.max_owners = max;
        }
        if self.csv.is_some() {
            config.export.csv_path = self.csv;
        }
        Ok((config, self.json))
    }
}

/// Log filter: `--verbose` wins, then `RUST_LOG`, then the info-level default.
fn log_filter(verbose: bool, rust_log: Option<&str>) -> anyhow::Result<EnvFilter> {
    const DEFAULT_DIRECTIVE: &str = "openroyalty=info,royalty_calc=info";
    const VERBOSE_DIRECTIVE: &str = "openroyalty=debug,royalty_calc=debug";

    let filter = match rust_log.map(str::trim).filter(|d| !d.is_empty()) {
        _ if verbose => EnvFilter::try_new(VERBOSE_DIRECTIVE)?,
        Some(directives) => EnvFilter::try_new(directives)
            .with_context(|| format!("invalid RUST_LOG directives `{directives}`"))?,
        None => EnvFilter::try_new(DEFAULT_DIRECTIVE)?,
    };
    Ok(filter)
}

fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose, rust_log.as_deref())?)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let (config, json) = cli.into_config()?;

    let params = config
        .lease_parameters()
        .context("invalid lease parameters")?;
    let owners = config.validated_owners().context("invalid owner list")?;
    info!(
        owners = owners.len(),
        royalty_rate = params.royalty_rate,
        "computing allocations"
    );

    for warning in allocation_warnings(&params, owners) {
        warn!("{warning}");
    }

    let report = compute_allocations(&params, owners);

    if json {
        println!("{}", to_json_pretty(&report)?);
    } else {
        print!("{}", render_text(&report));
    }

    if let Some(path) = &config.export.csv_path {
        let file = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        write_owner_csv(&mut writer, &report.allocations)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), rows = report.allocations.len(), "wrote owner breakdown");
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;
    run(cli)
}
