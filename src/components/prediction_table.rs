use leptos::prelude::*;

use crate::predictions::{FormattedPrediction, Trend};

/// Detail table for one prediction run: time, price, trend badge, confidence.
#[component]
pub fn PredictionTable(
    symbol: ReadSignal<String>,
    predictions: ReadSignal<Vec<FormattedPrediction>>,
) -> impl IntoView {
    view! {
        <div class="table-section">
            <h3>{move || format!("Detailed Prediction Results for {}", symbol.get())}</h3>
            <table class="prediction-table">
                <thead>
                    <tr>
                        <th>"Predicted Time"</th>
                        <th>"Predicted Price"</th>
                        <th>"Trend Status"</th>
                        <th>"AI Confidence"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        predictions
                            .get()
                            .iter()
                            .map(|p| {
                                let badge = match p.trend {
                                    Trend::Up => view! {
                                        <span class="badge badge-up">"Bullish"</span>
                                    }.into_any(),
                                    Trend::Stable => view! {
                                        <span class="badge badge-stable">"Stable/Bearish"</span>
                                    }.into_any(),
                                };
                                view! {
                                    <tr>
                                        <td>{p.timestamp.format("%H:%M:%S").to_string()}</td>
                                        <td class="price-cell">{format!("${:.2}", p.predicted_value)}</td>
                                        <td>{badge}</td>
                                        <td>{p.display_confidence.clone()}</td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
        </div>
    }
}
