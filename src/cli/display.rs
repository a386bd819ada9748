use clap::Parser;
use itertools::Itertools;

use crate::{
    core::{
        sample::{PriceSample, is_contiguous, resample_hourly},
        summary::ZoneSummary,
        zone::Zone,
    },
    prelude::*,
    quantity::percent::Percent,
    tables::{build_hourly_table, build_summary_table},
};

#[derive(Parser)]
pub struct DisplayArgs {
    /// Lengths of the cheapest windows to look for, in hours.
    #[clap(
        long = "window-hours",
        env = "WINDOW_HOURS",
        value_delimiter = ',',
        num_args = 1..,
        default_value = "2,4",
    )]
    pub window_hours: Vec<usize>,

    /// Display the prices with VAT («inkl. moms»).
    #[clap(long, env = "INCLUDE_VAT")]
    pub include_vat: bool,

    #[clap(long = "vat-percent", default_value = "25", env = "VAT_PERCENT")]
    pub vat: Percent,

    /// Also print the hour-by-hour prices.
    #[clap(long, env = "SHOW_HOURLY")]
    pub hourly: bool,
}

impl DisplayArgs {
    /// Multiplier applied to the displayed prices.
    #[must_use]
    pub fn multiplier(&self) -> f64 {
        if self.include_vat { self.vat.to_multiplier() } else { 1.0 }
    }

    /// Summarize the zone series and print the tables.
    pub fn print(&self, series: &[(Zone, Vec<PriceSample>)], selected_zone: Option<Zone>) {
        let (series, summaries) = self.summarize(series);
        let multiplier = self.multiplier();
        println!("{}", build_summary_table(&summaries, selected_zone, multiplier));
        if self.hourly {
            let selected = summaries.iter().find(|summary| Some(summary.zone) == selected_zone);
            println!("{}", build_hourly_table(&series, selected, multiplier));
        }
    }

    /// Bring the series to hourly resolution and summarize them.
    ///
    /// Series that cannot be resampled to whole hours are skipped.
    fn summarize(
        &self,
        series: &[(Zone, Vec<PriceSample>)],
    ) -> (Vec<(Zone, Vec<PriceSample>)>, Vec<ZoneSummary>) {
        let series = series
            .iter()
            .filter_map(|(zone, samples)| {
                if !is_contiguous(samples) {
                    warn!(%zone, "the series has gaps or is unsorted, the windows are unreliable");
                }
                let Some(samples) = resample_hourly(samples) else {
                    warn!(%zone, "the samples do not tile whole hours, skipping");
                    return None;
                };
                Some((*zone, samples))
            })
            .collect_vec();
        let summaries = series
            .iter()
            .map(|(zone, samples)| {
                let summary = ZoneSummary::new(*zone, samples, &self.window_hours);
                debug!(%zone, cheapest = ?summary.cheapest, peak = ?summary.peak, "summarized");
                summary
            })
            .collect_vec();
        (series, summaries)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use chrono::TimeDelta;

    use super::*;
    use crate::core::{sample::tests::quarterly, window::tests::start_of_day};

    fn display_args(window_hours: Vec<usize>, include_vat: bool) -> DisplayArgs {
        DisplayArgs { window_hours, include_vat, vat: Percent::VAT, hourly: false }
    }

    #[test]
    fn test_multiplier() {
        assert_abs_diff_eq!(display_args(vec![2], false).multiplier(), 1.0);
        assert_abs_diff_eq!(display_args(vec![2], true).multiplier(), 1.25);
    }

    #[test]
    fn test_parse_explicit_flags() {
        let args = DisplayArgs::try_parse_from([
            "test",
            "--include-vat",
            "--window-hours",
            "1,3",
            "--vat-percent",
            "12",
        ])
        .unwrap();
        assert_eq!(args.window_hours, [1, 3]);
        assert_abs_diff_eq!(args.multiplier(), 1.12, epsilon = 1e-9);
    }

    #[test]
    fn test_summarize_quarter_hours_in_hours() {
        let prices = (0..8).map(f64::from).collect_vec();
        let series = vec![(Zone::Se3, quarterly(&prices))];
        let (series, summaries) = display_args(vec![2], false).summarize(&series);

        assert_eq!(series[0].1.len(), 2);
        let window = summaries[0].cheapest[0].1.unwrap();
        assert_eq!(window.interval.start, start_of_day());
        assert_eq!(window.interval.duration(), TimeDelta::hours(2));
        assert_abs_diff_eq!(window.average.0, 3.5);

        let peak = summaries[0].peak.unwrap();
        assert_eq!(peak.interval.start, start_of_day() + TimeDelta::hours(1));
        assert_eq!(peak.interval.duration(), TimeDelta::hours(1));
        assert_abs_diff_eq!(peak.price.0, 5.5);
    }

    #[test]
    fn test_summarize_skips_partial_hours() {
        let series = vec![(Zone::Se1, quarterly(&[1.0, 2.0, 3.0]))];
        let (series, summaries) = display_args(vec![1], false).summarize(&series);
        assert!(series.is_empty());
        assert!(summaries.is_empty());
    }
}
