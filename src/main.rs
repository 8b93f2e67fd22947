use std::io;

use anyhow::Result;
use clap::Parser;

use rexbuild::Pattern;
use rexbuild::app;
use rexbuild::pattern::DEFAULT_CAPACITY;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Maximum pattern length in bytes
    #[arg(short = 'c', long, value_name = "BYTES", default_value_t = DEFAULT_CAPACITY)]
    capacity: usize,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    app::run_with(
        &mut input,
        &mut output,
        Pattern::with_capacity(args.capacity),
    )
}
