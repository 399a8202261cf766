use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tictactoe_cli::{run, Terminal};
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Tic-tac-toe on an N x N board against the computer
#[derive(Parser)]
struct Args {
    /// Side length of the board, from 1 to 9
    #[arg(short, long, default_value_t = 3)]
    size: usize,

    /// RNG seed for the computer's random moves
    #[arg(long)]
    seed: Option<u64>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "warn")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed, size = args.size);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut terminal = Terminal::new(std::io::stdin().lock(), std::io::stdout().lock());
    run(&mut terminal, args.size, &mut rng)
}

// Logs go to stderr, stdout is where the game is played.
fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
