mod logging;

use anyhow::{anyhow, Result};
use clap::{arg, Command};
use log::{info, LevelFilter};
use rand::{rngs::SmallRng, SeedableRng};
use salesman_algorithms::{trials::TrialRecord, Solver};
use salesman_challenge::{exhaustive::ranked_tours, route_length, Challenge, Point, Solution};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use std::{fs, io::Read, path::PathBuf};

fn cli() -> Command {
    Command::new("salesman")
        .about("Approximates closed travelling salesman tours from a fixed origin")
        .arg_required_else_help(true)
        .arg(
            arg!(--"log-level" [LEVEL] "Log verbosity, overridden by RUST_LOG")
                .global(true)
                .default_value("info")
                .value_parser(["error", "warn", "info", "debug", "trace"]),
        )
        .subcommand(
            Command::new("solve")
                .about("Searches for a short tour with the genetic algorithm and 2-opt")
                .arg(
                    arg!(<POINTS> "Points json string, path to json file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--hyperparameters [HYPERPARAMETERS] "Hyperparameters json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--seed [SEED] "Seed for the random number generator")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    arg!(--output [OUTPUT_FILE] "If set, the result will be saved to this file path")
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        )
        .subcommand(
            Command::new("generate")
                .about("Generates a random instance of distinct points")
                .arg(arg!(<SIZE> "Number of points").value_parser(clap::value_parser!(usize)))
                .arg(
                    arg!(--seed [SEED] "Seed for the random number generator")
                        .default_value("0")
                        .value_parser(clap::value_parser!(u64)),
                ),
        )
        .subcommand(
            Command::new("exhaustive")
                .about("Ranks every tour of a small instance")
                .arg(
                    arg!(<POINTS> "Points json string, path to json file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--top [TOP] "Number of tours to print")
                        .default_value("10")
                        .value_parser(clap::value_parser!(usize)),
                ),
        )
        .subcommand(
            Command::new("verify")
                .about("Verifies a solution and prints its length")
                .arg(
                    arg!(<POINTS> "Points json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(<SOLUTION> "Solution json string, path to json file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                ),
        )
}

fn main() {
    let matches = cli().get_matches();

    let level = matches
        .get_one::<String>("log-level")
        .and_then(|l| l.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info);
    if let Err(e) = logging::init_logger(level) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = match matches.subcommand() {
        Some(("solve", sub_m)) => solve(
            sub_m.get_one::<String>("POINTS").unwrap().clone(),
            sub_m.get_one::<String>("hyperparameters").cloned(),
            sub_m.get_one::<u64>("seed").cloned(),
            sub_m.get_one::<PathBuf>("output").cloned(),
        ),
        Some(("generate", sub_m)) => generate(
            *sub_m.get_one::<usize>("SIZE").unwrap(),
            *sub_m.get_one::<u64>("seed").unwrap(),
        ),
        Some(("exhaustive", sub_m)) => exhaustive(
            sub_m.get_one::<String>("POINTS").unwrap().clone(),
            *sub_m.get_one::<usize>("top").unwrap(),
        ),
        Some(("verify", sub_m)) => verify(
            sub_m.get_one::<String>("POINTS").unwrap().clone(),
            sub_m.get_one::<String>("SOLUTION").unwrap().clone(),
        ),
        _ => Err(anyhow!("Invalid subcommand")),
    } {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[derive(Serialize)]
struct Report {
    seed: u64,
    labels: Vec<String>,
    route: Vec<usize>,
    length: f64,
    baseline_length: f64,
    trials: Vec<TrialRecord>,
}

pub fn solve(
    points: String,
    hyperparameters: Option<String>,
    seed: Option<u64>,
    output_file: Option<PathBuf>,
) -> Result<()> {
    let challenge = load_challenge(&points)?;
    let hyperparameters = hyperparameters
        .map(|h| load_json::<Map<String, Value>>(&h))
        .transpose()?;
    let seed = seed.unwrap_or_else(rand::random);
    info!(
        "Solving {} points with seed {}",
        challenge.num_points(),
        seed
    );

    let mut rng = SmallRng::seed_from_u64(seed);
    let outcome = Solver::solve_challenge(&challenge, &hyperparameters, &mut rng)?;
    for record in &outcome.trials {
        if record.improved {
            info!("Trial {}: check reset, best {:.2}", record.trial, record.best_length);
        } else {
            info!(
                "Trial {}: check begin {}, length {:.2}, best {:.2}",
                record.trial, record.stall, record.length, record.best_length
            );
        }
    }
    info!(
        "Final best after {} trials: {} ({:.2})",
        outcome.trials.len(),
        outcome.labels.join(" -> "),
        outcome.length
    );

    let baseline_length = route_length(&challenge.baseline_route(), &challenge.distance_matrix);
    let report = Report {
        seed,
        labels: outcome.labels,
        route: outcome.route,
        length: outcome.length,
        baseline_length,
        trials: outcome.trials,
    };
    let report = serde_json::to_string_pretty(&report)?;
    match output_file {
        Some(path) => {
            fs::write(&path, report)
                .map_err(|e| anyhow!("Failed to write output file {}: {}", path.display(), e))?;
            info!("Result saved to {}", path.display());
        }
        None => println!("{}", report),
    }
    Ok(())
}

pub fn generate(size: usize, seed: u64) -> Result<()> {
    let challenge = Challenge::generate_instance(seed, size)?;
    println!("{}", serde_json::to_string_pretty(&challenge.points)?);
    Ok(())
}

pub fn exhaustive(points: String, top: usize) -> Result<()> {
    let challenge = load_challenge(&points)?;
    for (route, length) in ranked_tours(&challenge, top)? {
        println!(
            "Path: {} | Total Distance: {:.2}",
            challenge.labels(&route)?.join(" -> "),
            length
        );
    }
    Ok(())
}

pub fn verify(points: String, solution: String) -> Result<()> {
    let challenge = load_challenge(&points)?;
    let solution = load_json::<Solution>(&solution)?;
    let length = challenge
        .verify_solution(&solution)
        .map_err(|e| anyhow!("Invalid solution: {}", e))?;
    println!("Solution is valid. Total distance: {:.2}", length);
    Ok(())
}

fn load_challenge(points: &str) -> Result<Challenge> {
    let points = load_json::<Vec<Point>>(points)?;
    Ok(Challenge::new(points)?)
}

fn load_json<T: DeserializeOwned>(arg: &str) -> Result<T> {
    let content = if arg == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| anyhow!("Failed to read from stdin: {}", e))?;
        buffer
    } else if arg.ends_with(".json") {
        fs::read_to_string(arg).map_err(|e| anyhow!("Failed to read file {}: {}", arg, e))?
    } else {
        arg.to_string()
    };
    serde_json::from_str::<T>(&content).map_err(|e| anyhow!("Failed to parse json: {}", e))
}
