#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! pushover — send Pushover notifications from the CLI.

mod api;
mod cli;
mod notify;

use clap::Parser;

use cli::Cli;

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    match notify::run(&cli) {
        Ok(()) => {}
        Err(err) => {
            cli::write_error(&err);
            std::process::exit(err.exit_code());
        }
    }
}
