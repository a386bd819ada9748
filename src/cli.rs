mod analyze;
mod display;
mod prices;

use clap::{Parser, Subcommand};

pub use self::{
    analyze::{AnalyzeArgs, analyze},
    prices::{PricesArgs, prices},
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: fetch today's spot prices and find the cheapest and the most expensive hours.
    #[clap(name = "prices")]
    Prices(Box<PricesArgs>),

    /// Analyze prices previously saved in the feed format.
    #[clap(name = "analyze")]
    Analyze(Box<AnalyzeArgs>),
}
