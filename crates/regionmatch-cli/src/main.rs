//! regionmatch: compare US states with European countries
//!
//! Usage examples
//! --------------
//!
//! - Show dataset stats
//!   $ regionmatch stats
//!
//! - List regions of one pool
//!   $ regionmatch list --group eu
//!
//! - Show one region (shared names need --group)
//!   $ regionmatch show georgia --group eu --metric
//!
//! - Nearest regions by an axis
//!   $ regionmatch compare "new york" --by gdp --per-capita
//!
//! - Interactive session
//!   $ regionmatch interactive
//!
//! Data source
//! -----------
//!
//! By default the dataset compiled into `regionmatch-core` is used. Use
//! `--input <path>` for a custom `.json`/`.json.gz` source or a `.bin` snapshot
//! written by `regionmatch export`.
mod args;

use crate::args::{CliArgs, Commands, ViewArgs};
use anyhow::{bail, Context};
use clap::Parser;
use regionmatch_cli::{render, session::Session};
use regionmatch_core::{AppState, Autocomplete, Dataset, GdpMode, LandUnit, Settings};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn apply_view(settings: &mut Settings, view: &ViewArgs) {
    if view.per_capita {
        settings.gdp_mode = GdpMode::PerCapita;
    }
    if view.metric {
        settings.land_unit = LandUnit::Metric;
    }
}

/// Selects `name` in `state`, honouring an explicit pool.
fn select(state: &mut AppState<'_>, name: &str, view: &ViewArgs) -> anyhow::Result<()> {
    let found = match view.group {
        Some(group) => state.select_in(group, name),
        None => state.select_region(name),
    };
    if found {
        return Ok(());
    }
    let mut picker = Autocomplete::for_dataset(state.dataset());
    picker.input(name);
    let hints = picker.suggestions();
    if hints.is_empty() {
        bail!("no region named '{name}'");
    }
    bail!("no region named '{name}'; did you mean: {}?", hints.join(", "))
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    let loaded;
    let db: &Dataset = match &args.input {
        Some(path) => {
            loaded = Dataset::load_from_path(path)
                .with_context(|| format!("loading dataset from {}", path.display()))?;
            &loaded
        }
        None => Dataset::bundled().context("loading bundled dataset")?,
    };

    let mut settings = match &args.config {
        Some(path) => Settings::load_from_path(path)
            .with_context(|| format!("reading settings from {}", path.display()))?,
        None => Settings::default(),
    };
    tracing::debug!(?settings, "effective settings");

    match args.command {
        Commands::Stats => print!("{}", render::stats(db)),

        Commands::List { group } => print!("{}", render::region_list(db, group)),

        Commands::Show { name, view } => {
            apply_view(&mut settings, &view);
            let mut state = AppState::with_settings(db, settings);
            select(&mut state, &name, &view)?;
            if let Some(summary) = state.summary() {
                print!("{}", render::summary(&summary));
            }
        }

        Commands::Compare {
            name,
            by,
            count,
            json,
            view,
        } => {
            apply_view(&mut settings, &view);
            if let Some(axis) = by {
                settings.axis = axis;
            }
            if let Some(k) = count {
                settings.candidates = k;
            }
            let mut state = AppState::with_settings(db, settings);
            select(&mut state, &name, &view)?;
            let table = state
                .comparison()
                .context("selection vanished while building the table")?;
            if json {
                println!("{}", serde_json::to_string_pretty(&table)?);
            } else {
                print!("{}", render::comparison_table(&table));
            }
        }

        Commands::Suggest { text } => {
            let mut picker = Autocomplete::for_dataset(db);
            picker.input(text);
            for name in picker.suggestions() {
                println!("{name}");
            }
        }

        Commands::Export { out } => {
            db.save_as(&out)
                .with_context(|| format!("writing snapshot to {}", out.display()))?;
            println!("Wrote {} regions to {}", db.stats().total(), out.display());
        }

        Commands::Interactive => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            Session::new(db, settings).run(stdin.lock(), stdout.lock())?;
        }
    }

    Ok(())
}
