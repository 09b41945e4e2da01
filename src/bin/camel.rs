//! Camel Cards Binary
//!
//! Reads `<hand> <bid>` lines and prints total winnings,
//! first under standard rules, then with jacks as jokers.

use camelcards::cards::Mode;
use camelcards::game::Ledger;
use clap::Parser;

#[derive(Parser)]
#[command(name = "camel", about = "Rank Camel Cards hands and total their winnings")]
struct Args {
    /// file with one `<hand> <bid>` per line
    #[arg(default_value = camelcards::DEFAULT_INPUT)]
    path: std::path::PathBuf,
}

fn main() -> anyhow::Result<()> {
    camelcards::log();
    let args = Args::parse();
    let ledger = Ledger::load(&args.path)?;
    for mode in Mode::all() {
        let total = ledger.winnings(mode)?;
        log::info!("{} winnings: {}", mode, total);
        println!("{}", total);
    }
    Ok(())
}
