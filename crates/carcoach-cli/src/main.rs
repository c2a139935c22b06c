//! carcoach CLI — car facts, road-rules quiz and loan calculator.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use carcoach_core::Level;

mod commands;

#[derive(Parser)]
#[command(
    name = "carcoach",
    version,
    about = "Learn, drive, plan: car facts, road-rules quiz and loan calculator"
)]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding car_facts.txt, quiz_bank.txt and quiz_results.txt
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the car facts glossary
    Facts {
        /// Only list topics containing this text
        #[arg(long)]
        search: Option<String>,

        /// Show the explanation for one topic
        #[arg(long)]
        topic: Option<String>,
    },

    /// Take the road-rules quiz
    Quiz {
        /// Player name recorded with the score
        #[arg(long)]
        name: Option<String>,

        /// Difficulty: easy, medium, hard
        #[arg(long, default_value = "easy")]
        level: Level,

        /// Answer letters in question order (e.g. "A,C,,B,D"); prompts on stdin if omitted
        #[arg(long)]
        answers: Option<String>,

        /// Seed for question sampling
        #[arg(long)]
        seed: Option<u64>,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Show past quiz scores
    Scores {
        /// Render the log as a table
        #[arg(long)]
        table: bool,
    },

    /// Calculate monthly repayments for a car loan
    Loan {
        /// Car price in dollars
        #[arg(long)]
        price: f64,

        /// Deposit in dollars
        #[arg(long, default_value = "0")]
        deposit: f64,

        /// Annual interest rate in percent
        #[arg(long)]
        rate: f64,

        /// Loan term in years
        #[arg(long)]
        years: u32,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Create a starter config and sample data files
    Init,
}

fn main() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("carcoach=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = || commands::data_paths(cli.config.as_deref(), cli.data_dir.as_deref());

    let result = match cli.command {
        Commands::Facts { search, topic } => {
            paths().and_then(|p| commands::facts::execute(&p, search, topic))
        }
        Commands::Quiz {
            name,
            level,
            answers,
            seed,
            format,
        } => paths().and_then(|p| commands::quiz::execute(&p, name, level, answers, seed, format)),
        Commands::Scores { table } => paths().and_then(|p| commands::scores::execute(&p, table)),
        Commands::Loan {
            price,
            deposit,
            rate,
            years,
            format,
        } => commands::loan::execute(price, deposit, rate, years, format),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
