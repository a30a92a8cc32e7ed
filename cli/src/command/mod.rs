use clap::Subcommand;

use super::ENV;

pub mod demo;
pub mod search;
pub mod wrap;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the three reference scenarios on the 8-bit demo sequence.
    Demo,
    /// Search `[1..=len]` for a target and print the loop trace.
    Search(search::SearchArgs),
    /// Wrap an integer literal into a bounded width.
    Wrap(wrap::WrapArgs),
}

pub fn handle_command(cmd: Command) -> anyhow::Result<()> {
    dotenvy::from_read(ENV.as_bytes())?;

    let mut stdout = std::io::stdout().lock();
    match cmd {
        Command::Demo => demo::handle_command(&mut stdout),
        Command::Search(args) => search::handle_command(args, &mut stdout),
        Command::Wrap(args) => wrap::handle_command(args, &mut stdout),
    }
}
