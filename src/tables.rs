use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    core::{sample::PriceSample, summary::ZoneSummary, zone::Zone},
    quantity::price::KilowattHourPrice,
};

const MISSING: &str = "-";

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

/// Build the per-zone planning summary.
///
/// `multiplier` is applied to the displayed prices only, for example to include VAT.
pub fn build_summary_table(
    summaries: &[ZoneSummary],
    selected_zone: Option<Zone>,
    multiplier: f64,
) -> Table {
    let mut table = new_table();

    let mut header = vec!["Zone".to_string(), "Area".to_string()];
    if let Some(summary) = summaries.first() {
        header.extend(summary.cheapest.iter().map(|(hours, _)| format!("Cheapest {hours} h")));
    }
    header.push("Best 1 h to sell".to_string());
    table.set_header(header);

    for summary in summaries {
        let mut row = vec![
            Cell::new(summary.zone),
            Cell::new(summary.zone.label()).add_attribute(Attribute::Dim),
        ];
        row.extend(summary.cheapest.iter().map(|(_, window)| {
            window.map_or_else(
                || Cell::new(MISSING),
                |window| {
                    Cell::new(format!("{} · {}", window.interval, window.average * multiplier))
                        .fg(Color::Green)
                },
            )
        }));
        row.push(summary.peak.map_or_else(
            || Cell::new(MISSING),
            |peak| {
                let text = format!("{} · {}", peak.interval, peak.price * multiplier);
                Cell::new(text).fg(Color::Red)
            },
        ));
        if Some(summary.zone) == selected_zone {
            row = row.into_iter().map(|cell| cell.add_attribute(Attribute::Bold)).collect();
        }
        table.add_row(row);
    }
    table
}

/// Build the hour-by-hour price table for all the zones.
///
/// Rows are highlighted by the selected zone's summary: the longest cheapest window in green,
/// shorter ones in cyan, and the peak hour in red.
pub fn build_hourly_table(
    series: &[(Zone, Vec<PriceSample>)],
    selected: Option<&ZoneSummary>,
    multiplier: f64,
) -> Table {
    let mut table = new_table();

    let mut header = vec![Cell::new("Time")];
    header.extend(series.iter().map(|(zone, _)| {
        let cell = Cell::new(zone);
        if selected.is_some_and(|summary| summary.zone == *zone) {
            cell.add_attribute(Attribute::Bold)
        } else {
            cell
        }
    }));
    table.set_header(header);

    for (start, prices) in pivot(series) {
        let color = selected.map_or(Color::Reset, |summary| row_color(summary, start));
        let mut row = vec![Cell::new(start.format("%H:%M")).fg(color)];
        row.extend(prices.into_iter().zip(series).map(|(price, (zone, _))| {
            let cell = price.map_or_else(
                || Cell::new(MISSING),
                |price| Cell::new(format!("{:.2}", (price * multiplier).0)),
            );
            let cell = cell.set_alignment(CellAlignment::Right).fg(color);
            if selected.is_some_and(|summary| summary.zone == *zone) {
                cell.add_attribute(Attribute::Bold)
            } else {
                cell
            }
        }));
        table.add_row(row);
    }
    table
}

fn row_color(summary: &ZoneSummary, start: DateTime<FixedOffset>) -> Color {
    match summary.window_rank_at(start) {
        Some(0) => Color::Green,
        Some(_) => Color::Cyan,
        None if summary.peak.is_some_and(|peak| peak.interval.contains(start)) => Color::Red,
        None => Color::Reset,
    }
}

/// Align the zone series by sample start, one price column per zone.
fn pivot(
    series: &[(Zone, Vec<PriceSample>)],
) -> BTreeMap<DateTime<FixedOffset>, Vec<Option<KilowattHourPrice>>> {
    let mut rows = BTreeMap::new();
    for (column, (_, samples)) in series.iter().enumerate() {
        for sample in samples {
            rows.entry(sample.interval.start).or_insert_with(|| vec![None; series.len()])[column] =
                Some(sample.price);
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use chrono::TimeDelta;

    use super::*;
    use crate::core::window::tests::{hourly, start_of_day};

    #[test]
    fn test_pivot_union_of_starts() {
        let series =
            vec![(Zone::Se1, hourly(&[1.0, 2.0])), (Zone::Se2, hourly(&[3.0, 4.0, 5.0]))];
        let rows = pivot(&series);
        assert_eq!(rows.len(), 3);
        assert!(rows.keys().is_sorted());
        let last = &rows[&(start_of_day() + TimeDelta::hours(2))];
        assert_eq!(last, &[None, Some(KilowattHourPrice(5.0))]);
    }

    #[test]
    fn test_row_color() {
        let samples = hourly(&[1.0, 1.0, 9.0, 9.0, 2.0, 2.0, 2.0, 2.0]);
        let summary = ZoneSummary::new(Zone::Se3, &samples, &[2, 4]);
        let at = |hour| start_of_day() + TimeDelta::hours(hour);
        assert_eq!(row_color(&summary, at(0)), Color::Cyan);
        assert_eq!(row_color(&summary, at(2)), Color::Red);
        assert_eq!(row_color(&summary, at(3)), Color::Reset);
        assert_eq!(row_color(&summary, at(5)), Color::Green);
    }

    #[test]
    fn test_summary_table_applies_multiplier() {
        let summary = ZoneSummary::new(Zone::Se3, &hourly(&[1.0, 1.0, 3.0, 3.0]), &[2]);
        let rendered = build_summary_table(&[summary], Some(Zone::Se3), 1.25).to_string();
        assert!(rendered.contains("Cheapest 2 h"));
        assert!(rendered.contains("00:00–02:00 · 1.25 SEK/kWh"));
        assert!(rendered.contains("02:00–03:00 · 3.75 SEK/kWh"));
    }

    #[test]
    fn test_summary_table_missing_window() {
        let summary = ZoneSummary::new(Zone::Se1, &[], &[2]);
        let rendered = build_summary_table(&[summary], None, 1.0).to_string();
        assert!(rendered.contains(MISSING));
    }

    #[test]
    fn test_hourly_table_rows() {
        let series = vec![(Zone::Se3, hourly(&[0.5, 0.25]))];
        let summary = ZoneSummary::new(Zone::Se3, &series[0].1, &[1]);
        let rendered = build_hourly_table(&series, Some(&summary), 2.0).to_string();
        assert!(rendered.contains("01:00"));
        assert!(rendered.contains("1.00"));
        assert!(rendered.contains("0.50"));
    }
}
