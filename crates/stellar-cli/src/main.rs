use anyhow::Result;
use clap::Parser;

mod cli;
mod setup;


use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup::init_logging(cli.verbose)?;

    let output = cli::run(&cli)?;
    println!("{output}");
    Ok(())
}
