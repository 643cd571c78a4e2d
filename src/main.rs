//! Propensity scoring CLI.
//!
//! Scores a single customer from command line arguments and prints the
//! result as JSON to stdout. Logs go to stderr so the output stays parseable.
//!
//! # Usage
//! ```sh
//! propensity --age 35 --occupation Engineer --credit-score 720
//! ```
//!
//! # Environment Variables
//! - `PROPENSITY_MODEL_PATH` - Model artifact location (default: data/propensity_model.json)

use clap::Parser;
use propensity::application::ml::provider::ModelProvider;
use propensity::application::scoring::scorer::PropensityScorer;
use propensity::config::Config;
use propensity::domain::customer::ScoreRequest;
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Customer age in years
    #[arg(long)]
    age: Option<String>,

    /// Customer occupation
    #[arg(long)]
    occupation: Option<String>,

    /// Website visits in the last month
    #[arg(long)]
    website_visits: Option<String>,

    /// Annual income
    #[arg(long)]
    annual_income: Option<String>,

    /// Monthly expenses
    #[arg(long)]
    expenses: Option<String>,

    /// Credit score (300-850)
    #[arg(long)]
    credit_score: Option<String>,
}

fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Setup logging (stderr, so stdout carries only the JSON result)
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stderr_layer)
        .init();

    let args = Args::parse();

    info!("Propensity Scorer {} starting...", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env();
    let model = ModelProvider::new(config.model_path).load();
    info!("Model: {} ({})", model.name(), model.version());

    let scorer = PropensityScorer::new(model);
    let request = ScoreRequest {
        age: args.age,
        occupation: args.occupation,
        website_visits: args.website_visits,
        annual_income: args.annual_income,
        expenses: args.expenses,
        credit_score: args.credit_score,
    };

    let result = scorer.score(&request);
    info!(
        "Scored via {}: propensity {}%",
        result.source, result.propensity_score
    );

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
