mod commands;
mod config;
mod error;
mod installer;
mod launcher;
mod options;
mod platform;
mod utils;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = options::Cli::parse();

    options::verbose::set_verbose(cli.verbose);

    if cli.version {
        options::version::show();
        return Ok(());
    }

    match cli.command {
        Some(options::Commands::Install { major }) => {
            commands::install::execute(major)?;
        }
        Some(options::Commands::Remove { major }) => {
            commands::remove::execute(major)?;
        }
        Some(options::Commands::List { remote }) => {
            commands::list::execute(remote)?;
        }
        None => {
            commands::launch::execute(cli.major)?;
        }
    }

    Ok(())
}
