//! Cheapest consecutive hours and the most expensive hour of a day.
//!
//! Samples must be sorted by start time and gap-free. This is not validated: an unsorted or gapped
//! series produces a window over whatever samples happen to be adjacent.

use crate::{
    core::{interval::Interval, sample::PriceSample},
    quantity::price::KilowattHourPrice,
};

/// Cheapest block of consecutive samples.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct PriceWindow {
    /// From the first sample start till the last sample end.
    pub interval: Interval,

    /// Mean price over the window.
    pub average: KilowattHourPrice,
}

/// The most expensive sample.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct PeakHour {
    pub interval: Interval,
    pub price: KilowattHourPrice,
}

impl From<&PriceSample> for PeakHour {
    fn from(sample: &PriceSample) -> Self {
        Self { interval: sample.interval, price: sample.price }
    }
}

impl PriceWindows for [PriceSample] {}

pub trait PriceWindows: AsRef<[PriceSample]> {
    /// Find the block of `window_length` consecutive samples with the lowest total price.
    ///
    /// Uses a running sum over the sliding window. On ties the earliest window wins.
    /// Returns [`None`] for a zero length or when there are fewer samples than `window_length`.
    #[must_use]
    fn cheapest_window(&self, window_length: usize) -> Option<PriceWindow> {
        let samples = self.as_ref();
        if window_length == 0 || samples.len() < window_length {
            return None;
        }

        let mut sum: KilowattHourPrice =
            samples[..window_length].iter().map(|sample| sample.price).sum();
        let mut best_sum = sum;
        let mut best_offset = 0;

        for (offset, (leaving, entering)) in
            samples.iter().zip(&samples[window_length..]).enumerate()
        {
            sum += entering.price - leaving.price;
            if sum < best_sum {
                best_sum = sum;
                best_offset = offset + 1;
            }
        }

        let first = &samples[best_offset];
        let last = &samples[best_offset + window_length - 1];
        #[allow(clippy::cast_precision_loss)]
        let average = best_sum / window_length as f64;
        Some(PriceWindow { interval: first.interval.with_end(last.interval.end), average })
    }

    /// Find the most expensive sample. On ties the earliest one wins.
    #[must_use]
    fn peak_hour(&self) -> Option<PeakHour> {
        let mut samples = self.as_ref().iter();
        let mut peak = samples.next()?;
        for sample in samples {
            if sample.price > peak.price {
                peak = sample;
            }
        }
        Some(PeakHour::from(peak))
    }
}
