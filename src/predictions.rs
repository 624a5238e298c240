//! Prediction-result formatting and accuracy math.
//!
//! The backend returns raw prediction records; everything display-related
//! (trend badge, percentage confidence, renamed price field) is derived here,
//! once per fetch, and never persisted.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Direction of a predicted price relative to its predecessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Stable,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Up => "Up",
            Trend::Stable => "Stable",
        }
    }
}

/// A prediction record as the backend emits it.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RawPrediction {
    pub timestamp: DateTime<Utc>,
    pub predicted_price: f64,
    /// Model confidence in [0, 1].
    pub confidence: f64,
}

/// A prediction record shaped for the chart overlay and detail table.
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedPrediction {
    pub timestamp: DateTime<Utc>,
    pub predicted_price: f64,
    pub confidence: f64,
    /// Same value as `predicted_price`; the display layer keys off this name.
    pub predicted_value: f64,
    /// Confidence as a percentage string, e.g. "95.00%".
    pub display_confidence: String,
    pub trend: Trend,
}

/// Derive display records from a time-ascending slice of raw predictions.
///
/// Output has the same length and order as the input. Each record's trend is
/// judged against the previous record's predicted price; the first record has
/// no predecessor and is compared against zero, so any positive first
/// prediction reads as Up. That quirk is inherited behavior and kept as-is.
pub fn format_predictions(records: &[RawPrediction]) -> Vec<FormattedPrediction> {
    records
        .iter()
        .enumerate()
        .map(|(i, rec)| {
            let prev_price = if i > 0 { records[i - 1].predicted_price } else { 0.0 };
            let trend = if rec.predicted_price > prev_price {
                Trend::Up
            } else {
                Trend::Stable
            };
            FormattedPrediction {
                timestamp: rec.timestamp,
                predicted_price: rec.predicted_price,
                confidence: rec.confidence,
                predicted_value: rec.predicted_price,
                display_confidence: format!("{:.2}%", rec.confidence * 100.0),
                trend,
            }
        })
        .collect()
}

/// Closeness of a prediction to the realized price, as a percentage rounded to
/// two decimals: `100 - |actual - predicted| / actual * 100`.
///
/// Not defined for `actual == 0`; the division yields a non-finite value and
/// callers render whatever comes out. The admin report never feeds a zero
/// actual price in practice.
pub fn accuracy(predicted_price: f64, actual_price: f64) -> f64 {
    let raw = 100.0 - (actual_price - predicted_price).abs() / actual_price * 100.0;
    (raw * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn raw(seconds: i64, price: f64, confidence: f64) -> RawPrediction {
        RawPrediction {
            timestamp: Utc.timestamp_opt(1_700_000_000 + seconds, 0).unwrap(),
            predicted_price: price,
            confidence,
        }
    }

    #[test]
    fn test_format_preserves_length_and_order() {
        let input = vec![raw(0, 50.0, 0.5), raw(60, 51.0, 0.6), raw(120, 49.0, 0.7)];
        let out = format_predictions(&input);
        assert_eq!(out.len(), input.len(), "formatted length must match input");
        for (f, r) in out.iter().zip(&input) {
            assert_eq!(f.timestamp, r.timestamp, "timestamp order must be preserved");
            assert_eq!(f.predicted_value, r.predicted_price);
        }
    }

    #[test]
    fn test_first_record_trends_up_for_positive_price() {
        // Zero-sentinel predecessor: any positive first prediction reads Up.
        let out = format_predictions(&[raw(0, 0.01, 0.5)]);
        assert_eq!(out[0].trend, Trend::Up);
    }

    #[test]
    fn test_trend_follows_previous_price() {
        let input = vec![raw(0, 100.0, 0.9), raw(60, 105.0, 0.95), raw(120, 95.0, 0.80)];
        let out = format_predictions(&input);
        let trends: Vec<&str> = out.iter().map(|f| f.trend.as_str()).collect();
        assert_eq!(trends, ["Up", "Up", "Stable"]);
        let confs: Vec<&str> = out.iter().map(|f| f.display_confidence.as_str()).collect();
        assert_eq!(confs, ["90.00%", "95.00%", "80.00%"]);
    }

    #[test]
    fn test_equal_price_is_stable() {
        let input = vec![raw(0, 100.0, 0.5), raw(60, 100.0, 0.5)];
        let out = format_predictions(&input);
        assert_eq!(out[1].trend, Trend::Stable, "equal price is not a rise");
    }

    #[test]
    fn test_display_confidence_formatting() {
        let out = format_predictions(&[raw(0, 10.0, 0.123456)]);
        assert_eq!(out[0].display_confidence, "12.35%");
        assert!(out[0].display_confidence.ends_with('%'));
    }

    #[test]
    fn test_format_empty_input() {
        assert!(format_predictions(&[]).is_empty());
    }

    #[test]
    fn test_accuracy_known_values() {
        assert_eq!(accuracy(95.0, 100.0), 95.00);
        assert_eq!(accuracy(100.0, 100.0), 100.00);
        assert_eq!(accuracy(105.0, 100.0), 95.00);
    }

    #[test]
    fn test_accuracy_rounds_to_two_decimals() {
        // |300 - 299| / 300 * 100 = 0.3333... -> 99.67 after rounding
        assert_eq!(accuracy(299.0, 300.0), 99.67);
    }

    #[test]
    fn test_accuracy_zero_actual_is_not_finite() {
        // Division by zero is a known boundary, not clamped.
        assert!(!accuracy(95.0, 0.0).is_finite());
    }
}
