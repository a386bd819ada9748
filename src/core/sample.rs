use chrono::{DurationRound, TimeDelta};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{core::interval::Interval, quantity::price::KilowattHourPrice};

/// Spot price over a single interval, normally one hour.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize, derive_more::Constructor)]
#[must_use]
pub struct PriceSample {
    pub interval: Interval,
    pub price: KilowattHourPrice,
}

/// Check that every sample starts exactly where the previous one ends.
#[must_use]
pub fn is_contiguous(samples: &[PriceSample]) -> bool {
    samples.iter().tuple_windows().all(|(left, right)| left.interval.end == right.interval.start)
}

/// Average sub-hour samples into hourly ones.
///
/// Hourly series are returned as is. Returns [`None`] when the samples do not tile whole
/// clock hours, for example when a quarter of an hour is missing or a sample is longer than an
/// hour.
#[must_use]
pub fn resample_hourly(samples: &[PriceSample]) -> Option<Vec<PriceSample>> {
    let hour = TimeDelta::hours(1);
    if samples.iter().all(|sample| sample.interval.duration() == hour) {
        return Some(samples.to_vec());
    }

    let keyed = samples
        .iter()
        .map(|sample| Some((sample.interval.start.duration_trunc(hour).ok()?, sample)))
        .collect::<Option<Vec<_>>>()?;
    let mut resampled = Vec::new();
    for (start, group) in &keyed.iter().chunk_by(|(start, _)| *start) {
        let group = group.map(|(_, sample)| **sample).collect_vec();
        if !is_contiguous(&group) {
            return None;
        }
        let (first, last) = (group.first()?, group.last()?);
        if first.interval.start != start || last.interval.end != start + hour {
            return None;
        }
        let sum: KilowattHourPrice = group.iter().map(|sample| sample.price).sum();
        #[allow(clippy::cast_precision_loss)]
        let average = sum / group.len() as f64;
        resampled.push(PriceSample::new(Interval::new(start, start + hour), average));
    }
    Some(resampled)
}
