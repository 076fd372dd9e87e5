mod board;
mod channel_port;
mod food_placer;
mod runner_config;
mod session;

use clap::Parser;
use snake_controller::config::Validate;
use snake_controller::{log, logger, ControllerConfig};

use food_placer::FoodPlacer;
use session::SnakeSession;

#[derive(Parser)]
#[command(name = "snake_runner")]
struct Args {
    /// YAML runner config. Defaults are used when omitted or missing.
    #[arg(long)]
    config: Option<String>,

    /// Overrides `max_ticks` from the config.
    #[arg(long)]
    ticks: Option<u64>,

    /// Overrides `seed` from the config.
    #[arg(long)]
    seed: Option<u64>,

    /// Writes the effective config to `--config` before running.
    #[arg(long)]
    save_config: bool,

    /// Prints the board after every tick.
    #[arg(long)]
    render: bool,

    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Runner".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    let mut config = runner_config::load_config(args.config.as_deref())?;
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(ticks) = args.ticks {
        config.max_ticks = ticks;
    }
    config.validate()?;

    if args.save_config {
        match args.config.as_deref() {
            Some(path) => {
                runner_config::save_config(path, &config)?;
                log!("Config saved to {}", path);
            }
            None => log!("--save-config needs --config, nothing saved"),
        }
    }

    let placer = match config.seed {
        Some(seed) => FoodPlacer::new(seed),
        None => FoodPlacer::from_random(),
    };
    log!("Starting session with seed {}", placer.seed());
    log!("Initial state: {}", ControllerConfig::parse(&config.initial_state)?);
    if args.verbose {
        log!("Effective config:\n{}", runner_config::to_yaml(&config)?);
    }

    let session = SnakeSession::create(&config, placer)?;
    let (outcome, board) = session.run(&config, config.max_ticks, args.render).await?;

    if !args.render {
        println!("{}", board.render());
    }
    log!(
        "Session finished after {} ticks: score {}, length {}, {}",
        outcome.ticks,
        outcome.score,
        outcome.length,
        if outcome.lost { "lost" } else { "tick limit reached" }
    );

    Ok(())
}
