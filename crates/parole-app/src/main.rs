use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use parole_config::Config;
use parole_config::log::LogConfig;
use parole_types::{Level, QuestionType};
use tracing_subscriber::EnvFilter;

pub mod commands;
pub mod corpus;
pub mod stats;


#[derive(Parser)]
#[command(name = "parole", about = "Morphology-aware search over French exam questions")]
struct Cli {
    /// JSON config file; environment variables still override it
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ranked search over a corpus
    Search {
        corpus: PathBuf,
        query: String,
        #[arg(long = "type", value_parser = parse_question_type)]
        question_type: Option<QuestionType>,
        #[arg(long, value_parser = parse_level)]
        level: Option<Level>,
        /// Mark matched variations in the output
        #[arg(long)]
        highlight: bool,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Show what the morphology knows about a word
    Word { word: String },
    /// Add every word of a corpus to the vocabulary
    Index { corpus: PathBuf },
    /// Rate a word from 0 to 5 stars
    Rate { word: String, stars: u8 },
    /// Print the vocabulary or write it to a file
    Export {
        #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Question counts per type and level
    Stats { corpus: PathBuf },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::new(),
    };

    init_tracing(&config.log);

    match cli.command {
        Commands::Search {
            corpus,
            query,
            question_type,
            level,
            highlight,
            limit,
        } => {
            let options = commands::SearchOptions {
                question_type,
                level,
                highlight,
                limit,
            };
            commands::search(&config, &corpus, &query, options).await
        }
        Commands::Word { word } => commands::word(&word),
        Commands::Index { corpus } => commands::index(&config, &corpus).await,
        Commands::Rate { word, stars } => commands::rate(&config, &word, stars).await,
        Commands::Export { format, output } => {
            commands::export(&config, format, output.as_deref()).await
        }
        Commands::Stats { corpus } => commands::stats(&corpus).await,
    }
}

fn init_tracing(log: &LogConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&log.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if log.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn parse_question_type(s: &str) -> Result<QuestionType, String> {
    QuestionType::from_str(s).ok_or_else(|| format!("unknown question type '{s}' (CE, CO, EE, EO)"))
}

fn parse_level(s: &str) -> Result<Level, String> {
    Level::from_str(s).ok_or_else(|| format!("unknown level '{s}' (A1 to C2)"))
}
