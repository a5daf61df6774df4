//! Trip budget CLI

use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use trip_budget::selection::TripCostCalculator;
use trip_budget::types::{Amount, TripRequest};

#[derive(Debug, Parser)]
#[command(
    name = "trip-budget",
    about = "List every multi-city trip cost within a guest budget",
    long_about = None
)]
struct Cli {
    /// Request as inline JSON; the Paris/London/Berlin example when omitted
    #[arg(long)]
    request: Option<String>,

    /// Override the number of consecutive days spent in each city
    #[arg(long, allow_negative_numbers = true)]
    days: Option<i64>,

    /// Override the guest budget
    #[arg(long, allow_negative_numbers = true)]
    budget: Option<Amount>,

    /// Print the full quote as JSON instead of the cost list
    #[arg(long)]
    explain: bool,
}

fn main() {
    init_logging();

    let cli = Cli::parse();

    match run(cli) {
        Ok(output) => println!("{output}"),
        Err(error) => {
            eprintln!("{error}");
            process::exit(1);
        }
    }
}

// Logs go to stderr so stdout only carries results. RUST_LOG overrides the level.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .compact()
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn run(cli: Cli) -> Result<String, String> {
    let mut request = match cli.request.as_deref() {
        Some(raw) => serde_json::from_str::<TripRequest>(raw)
            .map_err(|error| format!("invalid request: {error}"))?,
        None => TripRequest::example(),
    };

    if let Some(days) = cli.days {
        request.days_per_city = days;
    }
    if let Some(budget) = cli.budget {
        request.budget = budget;
    }

    if cli.explain {
        let quote = TripCostCalculator::default()
            .quote(&request)
            .map_err(|error| error.to_string())?;
        return serde_json::to_string_pretty(&quote)
            .map_err(|error| format!("failed to encode quote: {error}"));
    }

    let costs = trip_budget::trip_cost(&request).map_err(|error| error.to_string())?;
    Ok(format!("Possible trip costs: {}", format_costs(&costs)))
}

fn format_costs(costs: &[Amount]) -> String {
    let rendered: Vec<String> = costs.iter().map(ToString::to_string).collect();
    format!("[{}]", rendered.join(", "))
}
