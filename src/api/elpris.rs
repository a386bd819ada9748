//! [Elpriset just nu](https://www.elprisetjustnu.se/elpris-api) client.

use std::time::Duration;

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, TimeDelta};
use enumset::EnumSet;
use futures::future::try_join_all;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_with::{DisplayFromStr, PickFirst, serde_as};

use crate::{
    core::{interval::Interval, sample::PriceSample, zone::Zone},
    prelude::*,
    quantity::price::{KilowattHourPrice, Ore},
};

pub struct Api(Client);

impl Api {
    pub fn new() -> Result<Self> {
        Ok(Self(Client::builder().timeout(Duration::from_secs(10)).build()?))
    }

    /// Get the prices of all the zones on the specified day, in zone order.
    #[instrument(skip_all, fields(on = %on))]
    pub async fn get_day(
        &self,
        on: NaiveDate,
        zones: EnumSet<Zone>,
    ) -> Result<Vec<(Zone, Vec<PriceSample>)>> {
        try_join_all(zones.iter().map(|zone| async move {
            Ok::<_, Error>((zone, self.get_prices(on, zone).await?))
        }))
        .await
    }

    /// Get the zone prices on the specified day.
    ///
    /// Returns an empty series when the day is not published yet.
    #[instrument(skip_all, fields(on = %on, zone = %zone))]
    pub async fn get_prices(&self, on: NaiveDate, zone: Zone) -> Result<Vec<PriceSample>> {
        info!("fetching…");
        let response = self.0.get(url(on, zone)).send().await.context("failed to call")?;
        if response.status() == StatusCode::NOT_FOUND {
            warn!("the prices are not published yet");
            return Ok(Vec::new());
        }
        let records = response
            .error_for_status()
            .with_context(|| format!("failed to fetch {zone} prices"))?
            .json::<Vec<Record>>()
            .await
            .context("failed to deserialize the response")?;
        let samples = normalize(records)?;
        info!(n_samples = samples.len(), "fetched");
        Ok(samples)
    }
}

fn url(on: NaiveDate, zone: Zone) -> String {
    format!(
        "https://www.elprisetjustnu.se/api/v1/prices/{}/{:02}-{:02}_{zone}.json",
        on.year(),
        on.month(),
        on.day(),
    )
}

/// Parse the records in the feed format and normalize them into samples.
pub fn parse(body: &str) -> Result<Vec<PriceSample>> {
    normalize(serde_json::from_str(body).context("failed to deserialize the prices")?)
}

fn normalize(records: Vec<Record>) -> Result<Vec<PriceSample>> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            PriceSample::try_from(record)
                .with_context(|| format!("invalid price record #{index}"))
        })
        .collect()
}

/// Single price record.
///
/// Different sources report the price under different names and units, so every known field
/// is optional and [`Record::normalized_price`] picks the first one present.
#[serde_as]
#[derive(Deserialize)]
struct Record {
    time_start: DateTime<FixedOffset>,
    time_end: DateTime<FixedOffset>,

    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(rename = "SEK_per_kWh")]
    sek_per_kwh: Option<f64>,

    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(rename = "Öre_per_kWh")]
    ore_per_kwh: Option<f64>,

    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(rename = "Ore_per_kWh")]
    ascii_ore_per_kwh: Option<f64>,

    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    price: Option<f64>,

    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    value: Option<f64>,
}

impl Record {
    /// Bare numbers above this are assumed to be in öre.
    const MAX_BARE_KRONOR: f64 = 10.0;

    fn normalized_price(&self) -> Result<KilowattHourPrice> {
        if let Some(sek_per_kwh) = self.sek_per_kwh {
            Ok(KilowattHourPrice(sek_per_kwh))
        } else if let Some(ore_per_kwh) = self.ore_per_kwh.or(self.ascii_ore_per_kwh) {
            Ok(Ore(ore_per_kwh).into())
        } else if let Some(bare) = self.price.or(self.value) {
            if bare > Self::MAX_BARE_KRONOR {
                Ok(Ore(bare).into())
            } else {
                Ok(KilowattHourPrice(bare))
            }
        } else {
            bail!("unknown price format")
        }
    }
}

impl TryFrom<Record> for PriceSample {
    type Error = Error;

    fn try_from(record: Record) -> Result<Self> {
        let interval = Interval::from_std(record.time_start..record.time_end);
        ensure!(interval.duration() > TimeDelta::zero(), "empty interval: {interval:?}");
        Ok(Self::new(interval, record.normalized_price()?))
    }
}
