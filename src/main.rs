mod cli;
mod config;
mod convert;
mod generate;
mod logging;

use std::process;

use clap::Parser;

use crate::cli::Cli;

fn main() {
    // Usage errors share the single failure status; --help/--version still exit 0.
    let cli = Cli::try_parse().unwrap_or_else(|e| {
        if e.use_stderr() {
            let _ = e.print();
            process::exit(1);
        }
        e.exit()
    });
    logging::init(cli.verbose);

    if let Err(e) = generate::run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
