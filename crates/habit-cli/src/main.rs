mod cmd;
mod output;

use clap::{Parser, Subcommand};
use habit_core::config::Config;
use habit_core::dates;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "habit",
    about = "Daily protocol habit tracker — completions, stats, reflection, and AI coaching",
    version,
    propagate_version = true
)]
struct Cli {
    /// Config file (default: ./habit.yaml)
    #[arg(long, global = true, env = "HABIT_CONFIG")]
    config: Option<PathBuf>,

    /// Reference date as YYYY-MM-DD (default: today)
    #[arg(long, global = true, env = "HABIT_DATE")]
    date: Option<String>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Today's protocol: non-negotiables first, win rate up top
    Today {
        /// Toggle these habit ids for the reference date before rendering
        #[arg(long = "toggle", value_name = "ID")]
        toggle: Vec<String>,
    },

    /// Monthly tracker grid with per-habit percent and burn-risk flags
    Tracker {
        /// Month 1-12 (default: reference date's month)
        #[arg(long)]
        month: Option<u32>,

        /// Year (default: reference date's year)
        #[arg(long)]
        year: Option<i32>,

        /// Show one category only
        #[arg(long)]
        category: Option<String>,

        /// Show non-negotiable habits only
        #[arg(long)]
        focus: bool,

        /// Toggle completions as ID=DATE pairs before rendering
        #[arg(long = "toggle", value_name = "ID=DATE")]
        toggle: Vec<String>,

        /// Reassign categories as ID=CATEGORY pairs before rendering
        #[arg(long = "set-category", value_name = "ID=CATEGORY")]
        set_category: Vec<String>,
    },

    /// Aggregate stats: completion rate, tier, leaderboard, burn risks
    Dashboard,

    /// Daily reflection journal
    Reflect {
        /// Mood score 1-10
        #[arg(long)]
        mood: Option<u8>,

        /// Screen-time minutes as PERIOD=MINUTES (morning, day, evening, night)
        #[arg(long = "screen", value_name = "PERIOD=MINUTES")]
        screen: Vec<String>,

        /// Record an achievement (repeatable)
        #[arg(long = "achievement", value_name = "TEXT")]
        achievements: Vec<String>,

        /// Free-text notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Generate AI coaching advice from the current habit data
    Coach,
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Coach => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .init();

    let result = run(cli);
    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = cli
        .config
        .unwrap_or_else(|| PathBuf::from(Config::FILE_NAME));
    let config = Config::load(&config_path)?;

    let reference = match cli.date.as_deref() {
        Some(s) => dates::parse_date(s)?,
        None => dates::today(),
    };

    match cli.command {
        Commands::Today { toggle } => cmd::today::run(reference, &toggle, cli.json),
        Commands::Tracker {
            month,
            year,
            category,
            focus,
            toggle,
            set_category,
        } => cmd::tracker::run(
            reference,
            month,
            year,
            category.as_deref(),
            focus,
            &toggle,
            &set_category,
            cli.json,
        ),
        Commands::Dashboard => cmd::dashboard::run(&config, reference, cli.json),
        Commands::Reflect {
            mood,
            screen,
            achievements,
            notes,
        } => cmd::reflect::run(reference, mood, &screen, &achievements, notes, cli.json),
        Commands::Coach => cmd::coach::run(&config, cli.json),
    }
}
