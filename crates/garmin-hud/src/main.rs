use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use garmin_hud::cli::{commands, OutputFormat};
use garmin_hud::config::{parse_date_arg, Settings};
use garmin_hud::error::format_user_error;

#[derive(Parser)]
#[command(name = "garmin-hud")]
#[command(author, version, about = "Period insights over Garmin daily and activity data", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(short, long, global = true, default_value = "table")]
    format: OutputFormat,

    /// Store directory [env: GARMIN_HUD_DATA_DIR]
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Reference date for period windows, YYYY-MM-DD [env: GARMIN_HUD_TODAY]
    #[arg(long, global = true, value_parser = parse_date_arg)]
    today: Option<NaiveDate>,

    /// Metric catalog JSON file [env: GARMIN_HUD_CATALOG]
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Log filter, e.g. "info" or "garmin_hud=debug" (falls back to RUST_LOG)
    #[arg(long, global = true, env = "GARMIN_HUD_LOG")]
    log: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Import rows into the local store
    Import {
        #[command(subcommand)]
        command: ImportCommands,
    },
    /// Catalog metrics over WTD / MTD / QTD / YTD / TOTAL
    Insights,
    /// Per-day, per-type activity totals
    Activities {
        /// Only this activity type (e.g. running)
        #[arg(short = 't', long = "type")]
        activity_type: Option<String>,

        /// First date, YYYY-MM-DD
        #[arg(long, value_parser = parse_date_arg)]
        from: Option<NaiveDate>,

        /// Last date, YYYY-MM-DD
        #[arg(long, value_parser = parse_date_arg)]
        to: Option<NaiveDate>,
    },
    /// Correlation matrix of daily columns
    Correlate {
        /// Column names (at least two)
        #[arg(required = true, num_args = 1..)]
        columns: Vec<String>,
    },
    /// Chart points of one daily column
    Series {
        /// Column name
        column: String,

        /// Only the last N days
        #[arg(short, long)]
        days: Option<u32>,
    },
    /// Render the HUD, optionally publishing it to a notes target
    Hud {
        /// Notes target identifier
        #[arg(long)]
        target: Option<String>,

        /// Directory for published HUD files
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum ImportCommands {
    /// Daily rows (JSON array of sheet rows)
    Daily {
        /// Input file
        file: PathBuf,
    },
    /// Activity rows (JSON array of sheet rows, or raw Garmin Connect activities)
    Activities {
        /// Input file
        file: PathBuf,

        /// Input is raw Garmin Connect activity JSON
        #[arg(long)]
        raw: bool,
    },
}

fn init_tracing(filter: Option<&str>) {
    let log_env = filter
        .map(str::to_string)
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| "warn".to_string());
    let env_filter = tracing_subscriber::EnvFilter::try_new(&log_env)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();
}

fn run(cli: Cli) -> garmin_hud::Result<()> {
    let settings = Settings::from_env()?.with_overrides(cli.data_dir, cli.today, cli.catalog);
    tracing::debug!(?settings, "resolved settings");
    let format = cli.format;

    match cli.command {
        Commands::Import { command } => match command {
            ImportCommands::Daily { file } => commands::import::daily(&settings, &file, format),
            ImportCommands::Activities { file, raw } => {
                commands::import::activities(&settings, &file, raw, format)
            }
        },
        Commands::Insights => commands::insights::run(&settings, format),
        Commands::Activities {
            activity_type,
            from,
            to,
        } => commands::activities::run(&settings, activity_type, from, to, format),
        Commands::Correlate { columns } => commands::correlate::run(&settings, &columns, format),
        Commands::Series { column, days } => {
            commands::series::run(&settings, &column, days, format)
        }
        Commands::Hud { target, out_dir } => {
            commands::hud::run(&settings, target, out_dir, format)
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log.as_deref());

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", format_user_error(&e));
        std::process::exit(1);
    }
}
