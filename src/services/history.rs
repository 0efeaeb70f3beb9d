//! Historical feed aggregation.
//!
//! The raw feed is hourly; the dashboard wants daily totals, the most
//! recent day's hourly curve, a day-over-day trend, and per-weekday
//! averages. All of it is computed here, client-side, from whatever the
//! feed (or its fallback) delivered.

use std::collections::BTreeMap;

use serde::Serialize;
use time::Date;

use crate::model::HistoricalRecord;
use crate::options;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Increasing,
    Decreasing,
    Stable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyRentals {
    pub date: Date,
    pub rentals: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HourlyRentals {
    pub hour: u8,
    pub rentals: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeekdayAverage {
    pub name: &'static str,
    pub average: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistorySummary {
    pub daily: Vec<DailyRentals>,
    pub hourly_today: Vec<HourlyRentals>,
    pub rentals_today: i64,
    pub trend: Trend,
    pub weekday_averages: Vec<WeekdayAverage>,
}

/// Aggregate the feed. Empty input yields an empty summary, not an error.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn summarize(records: &[HistoricalRecord]) -> HistorySummary {
    let mut by_day: BTreeMap<Date, i64> = BTreeMap::new();
    for record in records {
        *by_day.entry(record.date).or_default() += record.rentals;
    }

    let daily: Vec<DailyRentals> = by_day
        .iter()
        .map(|(&date, &rentals)| DailyRentals { date, rentals })
        .collect();

    // Hourly curve and total for the most recent day in the feed.
    let most_recent = daily.last().map(|entry| entry.date);
    let mut by_hour: BTreeMap<u8, i64> = BTreeMap::new();
    if let Some(day) = most_recent {
        for record in records.iter().filter(|record| record.date == day) {
            *by_hour.entry(record.hour).or_default() += record.rentals;
        }
    }
    let hourly_today: Vec<HourlyRentals> = by_hour
        .iter()
        .map(|(&hour, &rentals)| HourlyRentals { hour, rentals })
        .collect();
    let rentals_today = hourly_today.iter().map(|entry| entry.rentals).sum();

    let trend = match daily.len() {
        0 | 1 => Trend::Stable,
        len => {
            let yesterday = daily[len - 2].rentals;
            if rentals_today > yesterday {
                Trend::Increasing
            } else if rentals_today < yesterday {
                Trend::Decreasing
            } else {
                Trend::Stable
            }
        }
    };

    // Per-weekday averages over daily totals, Sunday first.
    let mut totals = [0_i64; 7];
    let mut counts = [0_i64; 7];
    for entry in &daily {
        let index = usize::from(entry.date.weekday().number_days_from_sunday());
        totals[index] += entry.rentals;
        counts[index] += 1;
    }
    let weekday_averages = (0..7)
        .map(|index| WeekdayAverage {
            name: options::WEEKDAYS[index].label,
            average: if counts[index] > 0 {
                (totals[index] as f64 / counts[index] as f64).round() as i64
            } else {
                0
            },
        })
        .collect();

    HistorySummary { daily, hourly_today, rentals_today, trend, weekday_averages }
}

#[cfg(test)]
#[path = "history_test.rs"]
mod tests;
