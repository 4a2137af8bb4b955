use std::process::ExitCode;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use reckon_engine::{
    add_to_date, build_measurement, calendar_difference, convert_measurement, remove_from_date,
    CalendarPoint, Dimension, Language, TextOptions, Unit,
};
use serde_json::json;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "reckon", version)]
#[command(about = "Unit conversion and calendar arithmetic", long_about = None)]
struct Cli {
    /// Language for rendered differences (en, pt)
    #[arg(long, global = true, env = "RECKON_LANGUAGE", default_value = "en")]
    language: Language,
    /// Log filter used when RECKON_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
    /// Print results as JSON
    #[arg(long, global = true, default_value_t = false)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a value between two units of the same dimension
    Convert {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        from: Unit,
        to: Unit,
    },
    /// List known units, optionally for one dimension
    Units { dimension: Option<Dimension> },
    /// Shift a point forward by the day and clock fields of a delta point
    Add {
        point: CalendarPoint,
        /// e.g. 1000-01-05T04:00:00 for 5 days and 4 hours
        delta: CalendarPoint,
    },
    /// Shift a point backward by the day and clock fields of a delta point
    Remove {
        point: CalendarPoint,
        delta: CalendarPoint,
    },
    /// Describe the gap between two points
    Diff {
        initial: CalendarPoint,
        #[arg(value_name = "FINAL")]
        final_point: CalendarPoint,
        /// Include hours, minutes and seconds
        #[arg(long, default_value_t = false)]
        with_time: bool,
    },
}

fn init_tracing(level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_env("RECKON_LOG").unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!("failed to install log subscriber: {err}"))
}

fn run(cli: Cli) -> Result<()> {
    init_tracing(&cli.log_level)?;
    let options = TextOptions {
        language: cli.language,
    };

    match cli.command {
        Commands::Convert { value, from, to } => {
            let result = convert_measurement(&build_measurement(from, value), to)?;
            if cli.json {
                println!("{}", serde_json::to_string(&result)?);
            } else {
                println!("{} {}", result.value, result.unit);
            }
        }
        Commands::Units { dimension } => {
            let dimensions: Vec<Dimension> = match dimension {
                Some(d) => vec![d],
                None => Dimension::ALL
                    .into_iter()
                    .filter(|d| *d != Dimension::Unknown)
                    .collect(),
            };
            if cli.json {
                let listing: Vec<_> = dimensions
                    .iter()
                    .flat_map(|d| d.units())
                    .map(|unit| json!({ "unit": unit, "dimension": unit.dimension() }))
                    .collect();
                println!("{}", serde_json::to_string(&listing)?);
            } else if dimension.is_some() {
                for unit in dimensions.iter().flat_map(|d| d.units()) {
                    println!("{unit}");
                }
            } else {
                for d in &dimensions {
                    let names: Vec<&str> = d.units().map(Unit::name).collect();
                    println!("{d}: {}", names.join(", "));
                }
            }
        }
        Commands::Add { point, delta } => print_point(&add_to_date(&point, &delta), cli.json)?,
        Commands::Remove { point, delta } => {
            print_point(&remove_from_date(&point, &delta), cli.json)?
        }
        Commands::Diff {
            initial,
            final_point,
            with_time,
        } => {
            let difference = calendar_difference(&initial, &final_point);
            let text = if with_time {
                difference.to_text(&options)
            } else {
                difference.to_date_text(&options)
            };
            debug!(%initial, %final_point, with_time, "rendered difference");
            if cli.json {
                let output = json!({ "text": text, "difference": difference });
                println!("{}", serde_json::to_string(&output)?);
            } else {
                println!("{text}");
            }
        }
    }
    Ok(())
}

fn print_point(point: &CalendarPoint, as_json: bool) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string(point)?);
    } else {
        println!("{point}");
    }
    Ok(())
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
