use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::{AccuracyRow, ApiClient, StatsSummary};
use crate::predictions::accuracy;
use crate::session::SessionContext;

/// Admin-only report: system counters plus a backtest table comparing each
/// stored prediction with the realized market price. The accuracy column is
/// computed client-side for display only.
#[component]
pub fn AdminReportsPage() -> impl IntoView {
    let ctx = SessionContext::use_context();
    let api = ApiClient::new();

    let (stats, set_stats) = signal::<Option<StatsSummary>>(None);
    let (report, set_report) = signal(Vec::<AccuracyRow>::new());
    let (error, set_error) = signal::<Option<String>>(None);

    {
        let api = api.clone();
        Effect::new(move |_| {
            let api = api.clone();
            let token = ctx.token().unwrap_or_default();
            spawn_local(async move {
                match api.admin_stats(&token).await {
                    Ok(summary) => set_stats.set(Some(summary)),
                    Err(e) => set_error.set(Some(format!("Failed to load stats: {}", e))),
                }
                match api.accuracy_report(&token).await {
                    Ok(rows) => set_report.set(rows),
                    Err(e) => set_error.set(Some(format!("Failed to load report: {}", e))),
                }
            });
        });
    }

    let print_report = move |_| {
        if let Some(window) = web_sys::window() {
            let _ = window.print();
        }
    };

    view! {
        <div class="page report-page">
            <h2>"System Performance & Audit"</h2>

            <Show when=move || error.get().is_some()>
                <p class="status-text status-error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            {move || {
                stats.get().map(|s| view! {
                    <div class="stats-row">
                        <div class="stat-card">"Users: " <strong>{s.total_users}</strong></div>
                        <div class="stat-card">"Market Records: " <strong>{s.total_data_points}</strong></div>
                        <div class="stat-card">"AI Forecasts: " <strong>{s.total_predictions}</strong></div>
                    </div>
                })
            }}

            <div class="table-container" id="printable-report">
                <h3>"AI Model Accuracy Report"</h3>
                <table class="report-table">
                    <thead>
                        <tr>
                            <th>"Asset"</th>
                            <th>"Target Time"</th>
                            <th>"AI Predicted ($)"</th>
                            <th>"Actual Market ($)"</th>
                            <th>"Accuracy (%)"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            report
                                .get()
                                .iter()
                                .map(|row| {
                                    let acc = accuracy(row.predicted_price, row.actual_price);
                                    let acc_class = if acc > 90.0 { "acc-good" } else { "acc-warn" };
                                    view! {
                                        <tr>
                                            <td>{row.asset.to_uppercase()}</td>
                                            <td>{row.timestamp.format("%Y-%m-%d %H:%M").to_string()}</td>
                                            <td>{format!("{:.2}", row.predicted_price)}</td>
                                            <td>{format!("{:.2}", row.actual_price)}</td>
                                            <td class=acc_class>{format!("{:.2}%", acc)}</td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </div>

            <button class="btn btn-primary" on:click=print_report>
                "Export Full Report to PDF"
            </button>
        </div>
    }
}
