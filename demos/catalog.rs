//! Listing the base benchmark suite.
//!
//! Run with: `cargo run --example catalog`

use synth_bench::catalog::Base;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let suite = Base.all()?;
    println!("{} benchmarks:", suite.len());
    for bench in &suite {
        println!("- {}", bench);
        println!("    spec: {}", bench.spec);
        for (op, uses) in &bench.ops {
            match uses {
                Some(n) => println!("    op: {} (max {})", op, n),
                None => println!("    op: {}", op),
            }
        }
        if !bench.desc.is_empty() {
            println!("    desc: {}", bench.desc);
        }
    }

    Ok(())
}
