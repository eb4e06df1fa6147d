use std::collections::BTreeMap;

use chrono::NaiveDate;
use color_eyre::eyre::Result;
use serde::{Deserialize, Serialize};
use strum::Display;

const SAMPLE_DATASET: &str = include_str!("../../.config/sample_bookings.json5");

/// Which series a `type`-keyed record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SeriesKind {
    Value,
    Quantity,
}

/// A booking record as found in the raw dataset. Two shapes coexist:
/// per-series rows keyed by `type`, and flat rows carrying both measures.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawBookingRecord {
    Series {
        date: NaiveDate,
        value: u64,
        #[serde(rename = "type")]
        series: SeriesKind,
    },
    Flat {
        date: NaiveDate,
        value: u64,
        quantity: u64,
    },
}

impl RawBookingRecord {
    pub fn date(&self) -> NaiveDate {
        match self {
            RawBookingRecord::Series { date, .. } | RawBookingRecord::Flat { date, .. } => *date,
        }
    }
}

/// The single flat record shape every rendering component sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingSample {
    pub date: NaiveDate,
    pub value: u64,
    pub quantity: u64,
}

/// Collapse the mixed-shape raw records into flat per-date samples.
///
/// `type`-keyed rows for the same date merge into one sample; a missing
/// counterpart defaults to zero. Flat rows overwrite both measures, so a
/// duplicate flat row for a date collapses to the last one. Output is
/// ordered by date.
pub fn normalize(records: &[RawBookingRecord]) -> Vec<BookingSample> {
    let mut merged: BTreeMap<NaiveDate, (u64, u64)> = BTreeMap::new();
    for record in records {
        let entry = merged.entry(record.date()).or_insert((0, 0));
        match record {
            RawBookingRecord::Series { series, value, .. } => match series {
                SeriesKind::Value => entry.0 = *value,
                SeriesKind::Quantity => entry.1 = *value,
            },
            RawBookingRecord::Flat {
                value, quantity, ..
            } => {
                entry.0 = *value;
                entry.1 = *quantity;
            }
        }
    }
    merged
        .into_iter()
        .map(|(date, (value, quantity))| BookingSample {
            date,
            value,
            quantity,
        })
        .collect()
}

/// Parse the embedded sample dataset into raw records.
pub fn raw_sample_dataset() -> Result<Vec<RawBookingRecord>> {
    Ok(json5::from_str(SAMPLE_DATASET)?)
}

/// The normalized embedded dataset driving the dashboard chart.
pub fn sample_dataset() -> Result<Vec<BookingSample>> {
    Ok(normalize(&raw_sample_dataset()?))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 10, day).expect("valid date")
    }

    #[test]
    fn test_raw_dataset_parses_both_shapes() {
        let records = raw_sample_dataset().expect("dataset parses");
        assert_eq!(records.len(), 12);
        assert!(matches!(records[0], RawBookingRecord::Series { .. }));
        assert!(matches!(records[8], RawBookingRecord::Flat { .. }));
    }

    #[test]
    fn test_normalize_merges_series_rows_per_date() {
        let records = vec![
            RawBookingRecord::Series {
                date: date(21),
                value: 40,
                series: SeriesKind::Value,
            },
            RawBookingRecord::Series {
                date: date(21),
                value: 3,
                series: SeriesKind::Quantity,
            },
        ];
        assert_eq!(
            normalize(&records),
            vec![BookingSample {
                date: date(21),
                value: 40,
                quantity: 3,
            }]
        );
    }

    #[test]
    fn test_normalize_collapses_duplicate_flat_rows() {
        let records = vec![
            RawBookingRecord::Flat {
                date: date(25),
                value: 68,
                quantity: 4,
            },
            RawBookingRecord::Flat {
                date: date(25),
                value: 68,
                quantity: 4,
            },
        ];
        assert_eq!(normalize(&records).len(), 1);
    }

    #[test]
    fn test_normalize_missing_counterpart_defaults_to_zero() {
        let records = vec![RawBookingRecord::Series {
            date: date(28),
            value: 10,
            series: SeriesKind::Value,
        }];
        assert_eq!(
            normalize(&records),
            vec![BookingSample {
                date: date(28),
                value: 10,
                quantity: 0,
            }]
        );
    }

    #[test]
    fn test_sample_dataset_normalizes_to_seven_days() {
        let samples = sample_dataset().expect("dataset normalizes");
        assert_eq!(samples.len(), 7);
        assert_eq!(samples[0].date, date(21));
        assert_eq!(samples[6].date, date(27));
        // Sorted and contiguous over the source range.
        assert!(samples.windows(2).all(|w| w[0].date < w[1].date));
        assert_eq!(
            samples[3],
            BookingSample {
                date: date(24),
                value: 96,
                quantity: 9,
            }
        );
        assert_eq!(
            samples[4],
            BookingSample {
                date: date(25),
                value: 68,
                quantity: 4,
            }
        );
    }
}
