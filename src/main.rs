use anyhow::Result;
use clap::Parser;
use eight_puzzle::{render, solve_board, Board, SolverConfig, SolverError};
use rand::{rngs::StdRng, SeedableRng};
use tracing_subscriber::EnvFilter;

/// Solve the 8-puzzle optimally with A*.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Starting tiles in row-major order, 0 for the blank
    #[arg(short, long, default_value = "8,0,6,5,4,7,2,3,1", conflicts_with = "shuffle")]
    board: Board,

    /// Target tiles in row-major order
    #[arg(short, long, default_value = "0,1,2,3,4,5,6,7,8")]
    goal: Board,

    /// Start from a random solvable board instead
    #[arg(long)]
    shuffle: bool,

    /// Seed for --shuffle
    #[arg(long, requires = "shuffle")]
    seed: Option<u64>,

    /// Reject unsolvable boards by parity before searching
    #[arg(long)]
    parity_check: bool,

    /// Print boards without terminal styling
    #[arg(long)]
    plain: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let start = if args.shuffle {
        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Board::shuffled(&args.goal, &mut rng)
    } else {
        args.board
    };

    let config = SolverConfig {
        goal: args.goal,
        parity_precheck: args.parity_check,
    };

    println!("Initial board:\n{}", render::board(&start, args.plain));

    let solution = match solve_board(&start, &config) {
        Ok(solution) => solution,
        Err(SolverError::NoSolutionFound { stats }) => {
            println!(
                "No solution: the goal is unreachable from this board ({} states expanded).",
                stats.expanded
            );
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    println!("Found optimal solution with: {} moves", solution.len());

    for step in solution.steps() {
        println!(
            "Step {}: {}\n{}",
            step.depth,
            step.movement,
            render::board(&step.board, args.plain)
        );
    }

    let stats = solution.stats();
    println!(
        "Expanded {} boards (generated {} total).",
        stats.expanded, stats.generated
    );

    Ok(())
}
