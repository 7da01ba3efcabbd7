#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleship_solo::{init_logging, random_fleet, run_session, sample_fleet, Board, ShipSpec};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Hunt a hidden fleet from the terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for a reproducible fleet (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Use the built-in sample fleet instead of a random one")]
        sample: bool,
        #[arg(long, help = "Show ships on the board while playing")]
        reveal: bool,
    },
    /// Print a fleet without playing.
    Show {
        #[arg(long, help = "Fix RNG seed for a reproducible fleet (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Use the built-in sample fleet instead of a random one")]
        sample: bool,
    },
}

#[cfg(feature = "std")]
fn build_board(seed: Option<u64>, sample: bool) -> anyhow::Result<Board> {
    let specs: Vec<ShipSpec> = if sample {
        sample_fleet().to_vec()
    } else {
        let mut rng = if let Some(s) = seed {
            println!("Using fixed seed: {} (fleet will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        } else {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        };
        random_fleet(&mut rng)?
    };
    Ok(Board::new(&specs)?)
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            seed,
            sample,
            reveal,
        } => {
            let mut board = build_board(seed, sample)?;
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            let report = run_session(&mut board, stdin.lock(), &mut stdout, reveal)?;
            if !report.cleared {
                println!(
                    "Game over after {} shots, {} ships still afloat.",
                    report.shots,
                    board.ships_remaining()
                );
                board.print();
            }
        }
        Commands::Show { seed, sample } => {
            let board = build_board(seed, sample)?;
            board.print();
        }
    }
    Ok(())
}
