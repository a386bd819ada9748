use std::{fs, path::PathBuf};

use clap::Parser;

use crate::{api::elpris, cli::display::DisplayArgs, core::zone::Zone, prelude::*};

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// JSON file with the prices in the feed format.
    pub path: PathBuf,

    /// Zone the prices belong to.
    #[clap(long, env = "ZONE", default_value = "se3")]
    pub zone: Zone,

    #[clap(flatten)]
    pub display: DisplayArgs,
}

#[instrument(skip_all, fields(path = %args.path.display()))]
pub fn analyze(args: &AnalyzeArgs) -> Result {
    let body = fs::read_to_string(&args.path)
        .with_context(|| format!("failed to read `{}`", args.path.display()))?;
    let samples = elpris::parse(&body)?;
    info!(n_samples = samples.len(), "loaded");
    args.display.print(&[(args.zone, samples)], Some(args.zone));
    Ok(())
}
