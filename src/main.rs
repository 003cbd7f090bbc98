use clap::Parser;

use padel_series::cli::Cli;

fn main() {
    setup_logging();

    let cli = Cli::parse();
    if let Err(e) = cli.run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn setup_logging() {
    sensible_env_logger::init!();
}
