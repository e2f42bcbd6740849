mod cli;
mod commands;

use clap::Parser;
use cli::Cli;
use commands::execute_command;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    execute_command(cli.command)
}
