#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

mod api;
mod cache;
mod cli;
mod core;
mod prelude;
mod quantity;
mod tables;

use clap::{Parser, crate_version};

use crate::{
    cli::{Args, Command, analyze, prices},
    prelude::*,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().with_writer(std::io::stderr).init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Prices(args) => prices(&args).await?,
        Command::Analyze(args) => analyze(&args)?,
    }

    info!("done!");
    Ok(())
}
