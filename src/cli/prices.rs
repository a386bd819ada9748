use std::path::PathBuf;

use chrono::{DateTime, Days, NaiveDate, Utc};
use chrono_tz::Europe::Stockholm;
use clap::Parser;
use enumset::EnumSet;

use crate::{
    api::elpris,
    cache::Cache,
    cli::display::DisplayArgs,
    core::{sample::PriceSample, zone::Zone},
    prelude::*,
};

#[derive(Parser)]
pub struct PricesArgs {
    /// Day to fetch the prices for, defaults to today in Sweden.
    #[clap(long, env = "PRICES_DATE")]
    pub date: Option<NaiveDate>,

    /// Zones to fetch.
    #[clap(
        long,
        env = "ZONES",
        value_delimiter = ',',
        num_args = 1..,
        default_value = "se1,se2,se3,se4",
    )]
    pub zones: Vec<Zone>,

    /// Highlighted zone.
    #[clap(long, env = "ZONE", default_value = "se3")]
    pub zone: Zone,

    /// Cache the fetched prices in the TOML file.
    #[clap(long = "cache-path", env = "CACHE_PATH")]
    pub cache_path: Option<PathBuf>,

    /// Days to keep in the cache.
    #[clap(long = "cache-days", env = "CACHE_DAYS", default_value = "7")]
    pub cache_days: u64,

    #[clap(flatten)]
    pub display: DisplayArgs,
}

impl PricesArgs {
    fn zones(&self) -> EnumSet<Zone> {
        self.zones.iter().copied().collect()
    }
}

#[instrument(skip_all)]
pub async fn prices(args: &PricesArgs) -> Result {
    let on = args.date.unwrap_or_else(|| stockholm_date(Utc::now()));
    let zones = args.zones();
    ensure!(!zones.is_empty(), "at least one zone is required");
    info!(%on, n_zones = zones.len(), "planning…");

    let mut cache = args.cache_path.as_deref().map(Cache::read_from);
    let series = get_day(on, zones, cache.as_mut()).await?;
    if let (Some(mut cache), Some(path)) = (cache, &args.cache_path) {
        if let Some(since) = on.checked_sub_days(Days::new(args.cache_days)) {
            cache.retain_since(since);
        }
        cache.write_to(path);
    }

    args.display.print(&series, Some(args.zone));
    Ok(())
}

/// Calendar date in Sweden, where the delivery days of the price feed begin and end.
fn stockholm_date(now: DateTime<Utc>) -> NaiveDate {
    now.with_timezone(&Stockholm).date_naive()
}

/// Get the day prices, fetching only the zones missing from the cache.
async fn get_day(
    on: NaiveDate,
    zones: EnumSet<Zone>,
    mut cache: Option<&mut Cache>,
) -> Result<Vec<(Zone, Vec<PriceSample>)>> {
    let cached = zones
        .iter()
        .filter_map(|zone| {
            let samples = cache.as_deref()?.get(on, zone)?;
            Some((zone, samples.to_vec()))
        })
        .collect::<Vec<_>>();
    let missing = zones - cached.iter().map(|(zone, _)| *zone).collect::<EnumSet<_>>();
    info!(n_cached = cached.len(), n_missing = missing.len(), "looked up the cache");

    let fetched = if missing.is_empty() {
        Vec::new()
    } else {
        elpris::Api::new()?.get_day(on, missing).await?
    };
    if let Some(cache) = cache.as_deref_mut() {
        for (zone, samples) in &fetched {
            cache.insert(on, *zone, samples.clone());
        }
    }

    let mut series = cached;
    series.extend(fetched);
    series.sort_by_key(|(zone, _)| zone.code());
    Ok(series)
}
