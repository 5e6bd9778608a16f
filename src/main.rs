use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use lattice_automaton::{
    Algorithm, AutomatonConfig, AutomatonState, application::DEFAULT_DENSITY, domain::rule_by_name,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Run a mask-rule lattice automaton headlessly and report its population
#[derive(Parser, Debug)]
#[command(name = "lattice", version)]
struct Args {
    #[arg(long, default_value_t = 800)]
    width: usize,

    #[arg(long, default_value_t = 600)]
    height: usize,

    /// Named rule: Conway, HighLife, Seeds or Day&Night
    #[arg(long, conflicts_with_all = ["survive", "birth"])]
    preset: Option<String>,

    /// Neighbour counts that keep a live cell alive [default: from the default rule]
    #[arg(long)]
    survive: Option<String>,

    /// Neighbour counts that bring a dead cell to life [default: from the default rule]
    #[arg(long)]
    birth: Option<String>,

    #[arg(long, default_value_t = 100)]
    generations: u64,

    /// Seed the grid from this image instead of random noise
    #[arg(long)]
    image: Option<PathBuf>,

    #[arg(long)]
    seed: Option<u64>,

    /// Probability that a cell starts alive
    #[arg(long, default_value_t = DEFAULT_DENSITY)]
    density: f64,

    /// Use the single-threaded kernel
    #[arg(long)]
    serial: bool,

    /// Log population every N generations
    #[arg(long, default_value_t = 10)]
    log_every: u64,
}

impl Args {
    fn config(&self) -> lattice_automaton::Result<AutomatonConfig> {
        let mut config = AutomatonConfig {
            width: self.width,
            height: self.height,
            initial_density: self.density,
            seed: self.seed,
            algorithm: if self.serial { Algorithm::Serial } else { Algorithm::Parallel },
            ..AutomatonConfig::default()
        };
        if let Some(name) = &self.preset {
            config = config.with_rule(&rule_by_name(name)?);
        }
        if let Some(survive) = &self.survive {
            config.survive = survive.clone();
        }
        if let Some(birth) = &self.birth {
            config.birth = birth.clone();
        }
        Ok(config)
    }
}

fn run(args: &Args) -> lattice_automaton::Result<()> {
    let mut state = AutomatonState::new(&args.config()?)?;
    if let Some(path) = &args.image {
        state.load_image(path)?;
        info!(path = %path.display(), population = state.population(), "seeded from image");
    }

    let log_every = args.log_every.max(1);
    for _ in 0..args.generations {
        state.step();
        if state.generation() % log_every == 0 {
            info!(
                generation = state.generation(),
                population = state.population(),
                step_ms = state.last_step_time().as_secs_f32() * 1000.0,
                "progress"
            );
        }
    }

    info!(
        rule = %state.rule(),
        algorithm = state.algorithm().name(),
        generation = state.generation(),
        population = state.population(),
        "finished"
    );
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "run failed");
            ExitCode::FAILURE
        }
    }
}
