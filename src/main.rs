use std::io;
use std::process::ExitCode;

use clap::Parser;
use log::{debug, error};
use rand::rngs::StdRng;
use rand::SeedableRng;

use find_my_hat::generator::{
    DEFAULT_HEIGHT, DEFAULT_HOLE_PERCENTAGE, DEFAULT_MAX_ATTEMPTS, DEFAULT_WIDTH,
};
use find_my_hat::{FieldConfig, Game, HatRegion, Renderer};

/// Find your hat on a field full of holes.
#[derive(Parser, Debug)]
#[command(about, version, long_about = None)]
struct Args {
    /// Field width in cells
    #[arg(long, env = "HAT_WIDTH", default_value_t = DEFAULT_WIDTH)]
    width: usize,

    /// Field height in cells
    #[arg(long, env = "HAT_HEIGHT", default_value_t = DEFAULT_HEIGHT)]
    height: usize,

    /// Chance, in percent, that a cell is a hole
    #[arg(long, env = "HAT_HOLES", default_value_t = DEFAULT_HOLE_PERCENTAGE)]
    holes: u8,

    /// Boards to try before giving up on finding a solvable one
    #[arg(long, env = "HAT_MAX_ATTEMPTS", default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Let the hat land anywhere instead of the bottom-right quarter
    #[arg(long, default_value_t = false)]
    hat_anywhere: bool,

    /// Seed for reproducible boards
    #[arg(long, env = "HAT_SEED")]
    seed: Option<u64>,

    /// Disable colored output (also honours NO_COLOR)
    #[arg(long, default_value_t = false)]
    no_color: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

impl Args {
    fn field_config(&self) -> FieldConfig {
        FieldConfig {
            width: self.width,
            height: self.height,
            hole_percentage: self.holes,
            max_attempts: self.max_attempts,
            hat_region: if self.hat_anywhere {
                HatRegion::Anywhere
            } else {
                HatRegion::BottomRight
            },
        }
    }

    fn color(&self) -> bool {
        !self.no_color && std::env::var_os("NO_COLOR").is_none()
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if args.debug {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();
    debug!("{args:?}");

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let stdin = io::stdin();
    let mut game = Game::new(
        rng,
        stdin.lock(),
        io::stdout(),
        args.field_config(),
        Renderer::new(args.color()),
    );

    match game.run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
