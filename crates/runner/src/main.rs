use anyhow::{Context, Error, Result};
use clap::{Parser, ValueEnum};
use fibo_common::OverflowPolicy;
use fibo_runner::{run_fibonacci, RunnerOptions, DEFAULT_INDEX};
use tracing::Level;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Fibonacci Runner - Evaluate positions of the Fibonacci sequence",
    long_about = None
)]
struct Args {
    /// 1-based position to evaluate (position 1 holds 0, position 2 holds 1)
    #[arg(default_value_t = DEFAULT_INDEX)]
    index: i64,

    /// How to treat values that outgrow 64 bits
    #[arg(long, value_enum, default_value = "fail")]
    overflow: OverflowArg,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OverflowArg {
    Fail,
    Saturate,
    Wrap,
}

impl From<OverflowArg> for OverflowPolicy {
    fn from(arg: OverflowArg) -> Self {
        match arg {
            OverflowArg::Fail => Self::Fail,
            OverflowArg::Saturate => Self::Saturate,
            OverflowArg::Wrap => Self::Wrap,
        }
    }
}

fn main() -> Result<(), Error> {
    let args = Args::parse();
    if args.verbose {
        tracing_subscriber::fmt().with_max_level(Level::INFO).init();
    }

    let options = RunnerOptions {
        overflow: args.overflow.into(),
    };
    let output = run_fibonacci(args.index, options)
        .with_context(|| format!("Evaluation failed for position {}", args.index))?;

    println!("{}", output.value);

    Ok(())
}
