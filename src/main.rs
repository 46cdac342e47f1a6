//! CLI tool for delivery time prediction
//!
//! Provides commands for estimating a single delivery and for recommending
//! the best departure hour.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use delivery_oracle::data::history::PredictionHistory;
use delivery_oracle::data::types::{BaseInput, PredictionInput, Zone};
use delivery_oracle::data::validate::validate_input;
use delivery_oracle::format::{clock_time, format_duration};
use delivery_oracle::model::{candidate_hours, DeliveryModel};
use delivery_oracle::service;

#[derive(Parser)]
#[command(name = "delivery_oracle")]
#[command(about = "Medical-supply delivery time estimation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the delivery time for one order
    Predict {
        /// Clinic the order is delivered to
        #[arg(short, long)]
        clinic: String,

        /// Departure time as fractional hours since midnight (e.g. 9.5 for 09:30)
        #[arg(short, long)]
        time: f64,

        /// Delivery zone (1, 2, or 3)
        #[arg(short, long)]
        zone: String,

        /// Temperature in degrees Celsius
        #[arg(long, default_value = "30.0")]
        temperature: f64,

        /// Distance in kilometers
        #[arg(short, long)]
        distance: f64,

        /// Traffic volume in vehicles per hour
        #[arg(long, default_value = "0.0")]
        traffic: f64,

        /// Emit the raw outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// Recommend the departure hour with the lowest predicted delivery time
    BestTime {
        /// Clinic the order is delivered to
        #[arg(short, long)]
        clinic: String,

        /// Delivery zone (1, 2, or 3)
        #[arg(short, long)]
        zone: String,

        /// Temperature in degrees Celsius
        #[arg(long, default_value = "30.0")]
        temperature: f64,

        /// Distance in kilometers
        #[arg(short, long)]
        distance: f64,

        /// Traffic volume in vehicles per hour
        #[arg(long, default_value = "0.0")]
        traffic: f64,

        /// Emit the raw outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run a JSON file of orders through the predictor and show the recent history
    Batch {
        /// Path to a JSON array of prediction inputs
        file: std::path::PathBuf,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env()
            .add_directive("delivery_oracle=info".parse()?))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Predict { clinic, time, zone, temperature, distance, traffic, json } => {
            let input = PredictionInput {
                clinic,
                time_of_day: time,
                zone: zone.parse::<Zone>()?,
                temperature,
                distance,
                traffic_volume: traffic,
            };
            predict(&input, json)?;
        }
        Commands::BestTime { clinic, zone, temperature, distance, traffic, json } => {
            let base = BaseInput {
                clinic,
                zone: zone.parse::<Zone>()?,
                temperature,
                distance,
                traffic_volume: traffic,
            };
            best_time(&base, json)?;
        }
        Commands::Batch { file } => {
            batch(&file)?;
        }
    }

    Ok(())
}

fn predict(input: &PredictionInput, json: bool) -> Result<()> {
    validate_input(input)?;

    let outcome = service::calculate_prediction(input);
    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    match outcome.predicted_time {
        Some(minutes) => {
            println!("Estimated delivery time: {}", format_duration(minutes));
            println!("  departure:   {}", clock_time(input.time_of_day));
            println!("  zone:        {}", input.zone);
            println!("  raw minutes: {minutes:.4}");
            if let Some(advisory) = service::traffic_advisory(input.traffic_volume) {
                println!("\nWarning: {advisory}");
            }
        }
        None => {
            println!("{}", outcome.error.unwrap_or_else(|| "Unknown error".to_string()));
        }
    }

    Ok(())
}

fn best_time(base: &BaseInput, json: bool) -> Result<()> {
    // best-time shares the prediction's field constraints, minus the hour
    validate_input(&base.with_time_of_day(0.0))?;

    let outcome = service::find_best_departure_time(base);
    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    let (Some(best_hour), Some(best_minutes)) =
        (outcome.best_time_of_day, outcome.best_predicted_time)
    else {
        println!("{}", outcome.error.unwrap_or_else(|| "Unknown error".to_string()));
        return Ok(());
    };

    println!("Evaluated departure hours (7 AM to 4 PM):\n");
    println!("{:<12} {:>12} {:<24}", "Departure", "Minutes", "Estimated");
    println!("{}", "-".repeat(50));

    let model = DeliveryModel::new();
    for hour in candidate_hours() {
        let minutes = model.predict(&base.with_time_of_day(hour))?;
        let marker = if hour == best_hour { "  <- best" } else { "" };
        println!(
            "{:<12} {:>12.4} {:<24}{marker}",
            clock_time(hour).to_string(),
            minutes,
            format_duration(minutes)
        );
    }

    println!(
        "\nBest departure time: {} ({})",
        clock_time(best_hour),
        format_duration(best_minutes)
    );

    Ok(())
}

fn batch(file: &std::path::Path) -> Result<()> {
    let contents = std::fs::read_to_string(file)?;
    let inputs: Vec<PredictionInput> = serde_json::from_str(&contents)?;

    let mut history = PredictionHistory::default();
    let mut skipped = 0usize;

    for input in inputs {
        if let Err(err) = validate_input(&input) {
            warn!(%err, clinic = %input.clinic, "skipping invalid order");
            skipped += 1;
            continue;
        }
        match service::calculate_prediction(&input) {
            service::PredictionOutcome { predicted_time: Some(minutes), .. } => {
                history.push(input, minutes);
            }
            outcome => {
                warn!(error = ?outcome.error, "prediction failed");
                skipped += 1;
            }
        }
    }

    if history.is_empty() {
        println!("No predictions have been made yet.");
        return Ok(());
    }

    println!("Recent predictions (newest first):\n");
    println!(
        "{:<36} {:>10} {:<12} {:>8} {:>10} {:>10} {:<20}",
        "Clinic", "Departure", "Zone", "Temp", "Dist (km)", "Traffic", "Estimated"
    );
    println!("{}", "-".repeat(112));

    for record in history.records() {
        println!(
            "{:<36} {:>10} {:<12} {:>8.1} {:>10.1} {:>10.0} {:<20}",
            record.input.clinic.chars().take(36).collect::<String>(),
            clock_time(record.input.time_of_day).to_string(),
            record.input.zone.to_string(),
            record.input.temperature,
            record.input.distance,
            record.input.traffic_volume,
            format_duration(record.predicted_time)
        );
    }

    println!("\n{} kept, {} skipped", history.len(), skipped);

    Ok(())
}
