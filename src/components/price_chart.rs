//! Inline SVG price chart: closing-price history line plus an optional
//! dashed overlay of predicted values. The original delegated rendering to a
//! chart library; here the view is a plain polyline and the scaling math is
//! kept in pure helpers so it can be unit tested.

use leptos::prelude::*;

use crate::api::CandlePoint;
use crate::predictions::FormattedPrediction;

const VIEW_WIDTH: f64 = 800.0;
const VIEW_HEIGHT: f64 = 320.0;
const PADDING: f64 = 16.0;

/// Axis-aligned data bounds across every plotted series.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Bounds {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

fn bounds(series: &[&[(f64, f64)]]) -> Option<Bounds> {
    let mut b: Option<Bounds> = None;
    for points in series {
        for &(x, y) in *points {
            b = Some(match b {
                None => Bounds { x_min: x, x_max: x, y_min: y, y_max: y },
                Some(b) => Bounds {
                    x_min: b.x_min.min(x),
                    x_max: b.x_max.max(x),
                    y_min: b.y_min.min(y),
                    y_max: b.y_max.max(y),
                },
            });
        }
    }
    b
}

/// Map data points into the SVG viewport as a polyline `points` attribute.
/// The y axis is flipped; a degenerate span collapses to the viewport center.
fn polyline_points(points: &[(f64, f64)], b: Bounds) -> String {
    let x_span = b.x_max - b.x_min;
    let y_span = b.y_max - b.y_min;
    let inner_w = VIEW_WIDTH - 2.0 * PADDING;
    let inner_h = VIEW_HEIGHT - 2.0 * PADDING;

    points
        .iter()
        .map(|&(x, y)| {
            let fx = if x_span > 0.0 { (x - b.x_min) / x_span } else { 0.5 };
            let fy = if y_span > 0.0 { (y - b.y_min) / y_span } else { 0.5 };
            let px = PADDING + fx * inner_w;
            let py = PADDING + (1.0 - fy) * inner_h;
            format!("{:.1},{:.1}", px, py)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[component]
pub fn PriceChart(
    history: ReadSignal<Vec<CandlePoint>>,
    predictions: ReadSignal<Vec<FormattedPrediction>>,
    show_prediction: ReadSignal<bool>,
) -> impl IntoView {
    let lines = move || {
        let history_pts: Vec<(f64, f64)> = history
            .get()
            .iter()
            .map(|c| (c.x.timestamp_millis() as f64, c.close()))
            .collect();
        let prediction_pts: Vec<(f64, f64)> = if show_prediction.get() {
            predictions
                .get()
                .iter()
                .map(|p| (p.timestamp.timestamp_millis() as f64, p.predicted_value))
                .collect()
        } else {
            Vec::new()
        };

        let Some(b) = bounds(&[&history_pts, &prediction_pts]) else {
            return view! { <p class="chart-empty">"No price data yet."</p> }.into_any();
        };

        let history_attr = polyline_points(&history_pts, b);
        // Empty when the overlay is off, which renders nothing.
        let prediction_attr = polyline_points(&prediction_pts, b);

        view! {
            <svg
                class="price-chart"
                viewBox=format!("0 0 {} {}", VIEW_WIDTH, VIEW_HEIGHT)
                preserveAspectRatio="none"
            >
                <polyline class="chart-history" points=history_attr fill="none" />
                <polyline
                    class="chart-prediction"
                    points=prediction_attr
                    fill="none"
                    stroke-dasharray="6 4"
                />
            </svg>
        }
        .into_any()
    };

    view! { <div class="chart-container">{lines}</div> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_span_all_series() {
        let a = [(0.0, 10.0), (10.0, 20.0)];
        let c = [(5.0, 5.0), (15.0, 25.0)];
        let b = bounds(&[&a, &c]).unwrap();
        assert_eq!(b.x_min, 0.0);
        assert_eq!(b.x_max, 15.0);
        assert_eq!(b.y_min, 5.0);
        assert_eq!(b.y_max, 25.0);
    }

    #[test]
    fn test_bounds_empty_is_none() {
        assert!(bounds(&[&[], &[]]).is_none());
    }

    #[test]
    fn test_polyline_maps_extremes_to_viewport_edges() {
        let pts = [(0.0, 0.0), (1.0, 1.0)];
        let b = bounds(&[&pts]).unwrap();
        let attr = polyline_points(&pts, b);
        // Lowest y lands at the bottom edge, highest at the top.
        let expected_bottom = format!("{:.1},{:.1}", PADDING, VIEW_HEIGHT - PADDING);
        let expected_top = format!("{:.1},{:.1}", VIEW_WIDTH - PADDING, PADDING);
        assert_eq!(attr, format!("{} {}", expected_bottom, expected_top));
    }

    #[test]
    fn test_polyline_flat_series_centers_vertically() {
        let pts = [(0.0, 50.0), (10.0, 50.0)];
        let b = bounds(&[&pts]).unwrap();
        let attr = polyline_points(&pts, b);
        let mid = format!("{:.1}", VIEW_HEIGHT / 2.0);
        for point in attr.split(' ') {
            let y = point.split(',').nth(1).unwrap();
            assert_eq!(y, mid, "flat series must sit at mid-height: {}", attr);
        }
    }
}
