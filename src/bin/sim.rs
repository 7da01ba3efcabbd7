use battleship_solo::{init_logging, random_fleet, simulate, Board};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;

    let mut rng = SmallRng::seed_from_u64(seed);
    let fleet = random_fleet(&mut rng)?;
    let mut board = Board::new(&fleet)?;
    let report = simulate(&mut board, &mut rng)?;

    let result = json!({
        "seed": seed,
        "report": report,
        "board": board.render().lines().collect::<Vec<_>>(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
