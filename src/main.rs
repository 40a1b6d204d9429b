use clap::{Parser, Subcommand, ValueEnum};
use finboard::db::Database;
use finboard::errors::AppResult;
use finboard::reports::ReportCore;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "finboard", about = "Financial KPI reports over the seeded sales database")]
struct Args {
    /// Path to the SQLite database file.
    #[arg(long, env = "FINBOARD_DB", default_value = "financial_db.sqlite")]
    db: PathBuf,
    /// Directory for rolling log files.
    #[arg(long, default_value = "logs")]
    log_dir: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Drop and recreate the database with the fixed sample dataset.
    Seed,
    /// Run a report and print it as JSON on stdout. Seeds the database
    /// first if it does not exist yet.
    Report {
        #[arg(value_enum)]
        kind: ReportKind,
        #[arg(long)]
        pretty: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ReportKind {
    Financial,
    Inventory,
    CreditRisk,
    Pareto,
}

fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(error) = finboard::init_tracing(&args.log_dir) {
        eprintln!("failed to initialize logging: {}", error);
        return ExitCode::FAILURE;
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{}", error);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> AppResult<()> {
    match args.command {
        Command::Seed => {
            let db = Database::rebuild(&args.db)?;
            let counts = db.dataset_counts()?;
            println!("{}", serde_json::to_string_pretty(&counts)?);
        }
        Command::Report { kind, pretty } => {
            let db = Arc::new(Database::bootstrap(&args.db)?);
            info!(path = %db.path().display(), report = ?kind, "running report");
            let reports = ReportCore::new(db);
            let value = match kind {
                ReportKind::Financial => serde_json::to_value(reports.financial_summary()?)?,
                ReportKind::Inventory => serde_json::to_value(reports.inventory_turnover()?)?,
                ReportKind::CreditRisk => serde_json::to_value(reports.credit_risk()?)?,
                ReportKind::Pareto => serde_json::to_value(reports.revenue_concentration()?)?,
            };
            let rendered = if pretty {
                serde_json::to_string_pretty(&value)?
            } else {
                serde_json::to_string(&value)?
            };
            println!("{}", rendered);
        }
    }
    Ok(())
}
