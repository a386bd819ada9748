use std::cmp::Reverse;

use chrono::{DateTime, FixedOffset};

use crate::core::{
    sample::PriceSample,
    window::{PeakHour, PriceWindow, PriceWindows},
    zone::Zone,
};

/// Planning summary for one zone and day.
#[derive(Debug)]
#[must_use]
pub struct ZoneSummary {
    pub zone: Zone,

    /// Cheapest window for each requested length, in the requested order.
    pub cheapest: Vec<(usize, Option<PriceWindow>)>,

    /// Best hour to sell.
    pub peak: Option<PeakHour>,
}

impl ZoneSummary {
    pub fn new(zone: Zone, samples: &[PriceSample], window_lengths: &[usize]) -> Self {
        let cheapest = window_lengths
            .iter()
            .map(|&window_length| (window_length, samples.cheapest_window(window_length)))
            .collect();
        Self { zone, cheapest, peak: samples.peak_hour() }
    }

    /// Longest requested window that contains the moment, if any.
    ///
    /// Returns the window's rank among the windows found: `0` for the longest one.
    #[must_use]
    pub fn window_rank_at(&self, time: DateTime<FixedOffset>) -> Option<usize> {
        let mut windows = self
            .cheapest
            .iter()
            .filter_map(|(window_length, window)| window.map(|window| (*window_length, window)))
            .collect::<Vec<_>>();
        windows.sort_by_key(|(window_length, _)| Reverse(*window_length));
        windows.iter().position(|(_, window)| window.interval.contains(time))
    }
}
