use std::io;
use std::process;

use clap::Parser;
use env_logger::Env;

use tiny_rsa::ui::Cli;

fn main() {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(cli.log_level())).init();

    let stdin = io::stdin();
    if let Err(e) = cli.execute(stdin.lock(), io::stdout()) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
