//! Generating random formulas from the command line.
//!
//! Run with: `cargo run --example random_formula -- --size 15 -n 3`

use clap::Parser;

use synth_bench::expr::Expr;
use synth_bench::ops::{BoolOp, Op};
use synth_bench::random::{random_dnf, random_formula, DEFAULT_SEED};

#[derive(Parser, Debug)]
#[command(name = "random_formula")]
#[command(about = "Generate a seeded random formula")]
struct Args {
    /// Number of boolean variables
    #[arg(short, long, default_value_t = 4)]
    n: usize,

    /// Exact node count of the generated tree
    #[arg(short, long, default_value_t = 40)]
    size: usize,

    /// Random seed
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Generate a DNF with this clause probability instead
    #[arg(long)]
    dnf: Option<u8>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Debug,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let args = Args::parse();
    let inputs: Vec<Expr> = (0..args.n).map(|i| Expr::bool_var(format!("x{}", i))).collect();

    let formula = match args.dnf {
        Some(probability) => random_dnf(&inputs, probability, args.seed),
        None => {
            let ops = [
                Op::binary(BoolOp::And),
                Op::binary(BoolOp::Or),
                Op::binary(BoolOp::Xor),
                Op::unary(BoolOp::Not),
            ];
            random_formula(&inputs, args.size, &ops, args.seed)?
        }
    };

    println!("formula = {}", formula);
    println!("size = {}", formula.size());

    Ok(())
}
