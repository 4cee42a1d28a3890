use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use facility_layout::{solve, EvolutionOptions, LayoutProblem, RandomNumberGenerator, Result};

/// Orders stations along a line to minimise weighted centre-to-centre distance.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Problem file: station count, sizes, then one preference row per station
    input: PathBuf,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Number of generations to run
    #[arg(long)]
    generations: Option<usize>,
}

fn run(args: &Args) -> Result<()> {
    let problem = LayoutProblem::from_file(&args.input)?;

    let mut builder = EvolutionOptions::builder();
    if let Some(generations) = args.generations {
        builder = builder.num_generations(generations);
    }
    let options = builder.build()?;

    let mut rng = match args.seed {
        Some(seed) => RandomNumberGenerator::from_seed(seed),
        None => RandomNumberGenerator::new(),
    };

    let best = solve(problem, &options, &mut rng)?;
    println!("Best ordering: {}", best.pheno);
    println!("Objective value: {}", best.score);
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
