use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use billing_ledger::config::{self, Config};
use billing_ledger::db::SqliteStore;
use billing_ledger::dispatch::{self, Invocation};
use billing_ledger::Ledger;

#[derive(Parser)]
#[command(name = "bledger")]
#[command(about = "Deterministic time-entry and milestone billing ledger")]
struct Cli {
    #[command(flatten)]
    config: Config,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a state-changing function (init, resourcetimeentry, completeprojectmilestone)
    Invoke {
        function: String,
        #[arg(allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Run a read-only function (read) and print its payload
    Query {
        function: String,
        #[arg(allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Apply a JSON array of {"function", "args"} invocations in order
    Replay {
        file: PathBuf,
    },
    /// Pretty-print decoded ledger records
    Show {
        #[command(subcommand)]
        view: View,
    },
    /// List every stored key
    Keys,
}

#[derive(Subcommand)]
enum View {
    /// The project index
    Projects,
    /// Hourly rates for a project
    Rates { project: String },
    /// Time entries logged by a person on a project
    Entries { project: String, person: String },
    /// People who have logged time on a project
    Users { project: String },
    /// Completed milestones for a project
    Milestones { project: String },
}

/// Logs go to stderr so stdout carries only command output.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(config::log_filter());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let store = cli.config.open_store()?;
    let ledger = Ledger::with_namespace(store, cli.config.namespace());

    match cli.command {
        Commands::Invoke { function, args } => {
            dispatch::invoke(&ledger, &function, &args)?;
            println!("ok");
        }
        Commands::Query { function, args } => {
            if let Some(bytes) = dispatch::query(&ledger, &function, &args)? {
                println!("{}", String::from_utf8_lossy(&bytes));
            }
        }
        Commands::Replay { file } => replay(&ledger, &file)?,
        Commands::Show { view } => show(&ledger, view)?,
        Commands::Keys => {
            for key in ledger.store().keys()? {
                println!("{}", key);
            }
        }
    }

    Ok(())
}

fn replay(ledger: &Ledger<SqliteStore>, file: &Path) -> Result<()> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let invocations: Vec<Invocation> =
        serde_json::from_str(&raw).context("Replay file must be a JSON array of invocations")?;

    let outcomes = dispatch::replay(ledger, &invocations);
    let mut failed = 0;
    for (inv, outcome) in invocations.iter().zip(&outcomes) {
        match outcome {
            Ok(_) => println!("ok    {} {:?}", inv.function, inv.args),
            Err(e) => {
                failed += 1;
                println!("error {} {:?}: {}", inv.function, inv.args, e);
            }
        }
    }
    println!("{} applied, {} failed", outcomes.len() - failed, failed);
    Ok(())
}

fn show(ledger: &Ledger<SqliteStore>, view: View) -> Result<()> {
    match view {
        View::Projects => print_json(&ledger.projects()?),
        View::Rates { project } => print_json(&ledger.rate_table(&project)?),
        View::Entries { project, person } => print_json(&ledger.time_entries(&project, &person)?),
        View::Users { project } => print_json(&ledger.active_users(&project)?),
        View::Milestones { project } => print_json(&ledger.milestones(&project)?),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
