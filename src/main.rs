use clap::Parser;
use pascalify::config::Config;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(
    name = "pascalify",
    version,
    about = "pascalify — append each word of a list, in Pascal case, to a file"
)]
struct Cli {
    /// Input file, one word per line
    input: PathBuf,

    /// Output file to append to (created if missing)
    output: PathBuf,
}

fn die(msg: &str) -> ! {
    eprintln!("error: {}", msg);
    process::exit(1);
}

fn main() {
    let cli = Cli::parse();

    // Empty lines are always rejected from the command line
    let config = Config::default();

    let written = pascalify::run(&cli.input, &cli.output, &config)
        .unwrap_or_else(|e| die(&e.to_string()));
    eprintln!("pascalified {} word(s) -> {}", written, cli.output.display());
}
