use std::io;

use clap::Parser;

mod model;
mod prompt;

use model::change::Change;

/// Count the fewest US coins needed to make change for a dollar amount
#[derive(Parser)]
#[command(version, about)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let cents = prompt::read_positive_cents(&mut stdin.lock(), &mut stdout.lock())?;

    let change = Change::for_cents(cents);
    println!("{}", change.total());

    Ok(())
}
