use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::{ApiClient, AssetStat, CandlePoint};
use crate::components::add_data_form::AddDataForm;
use crate::components::csv_upload::CsvUpload;
use crate::components::prediction_table::PredictionTable;
use crate::components::price_chart::PriceChart;
use crate::components::stat_card::StatCard;
use crate::predictions::{format_predictions, FormattedPrediction};
use crate::session::SessionContext;

const COINS: [(&str, &str); 5] = [
    ("BTC", "Bitcoin (BTC)"),
    ("ETH", "Ethereum (ETH)"),
    ("BNB", "Binance (BNB)"),
    ("SOL", "Solana (SOL)"),
    ("DOG", "Dogecoin (DOGE)"),
];

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = SessionContext::use_context();
    let api = ApiClient::new();

    let (selected_coin, set_selected_coin) = signal(String::from("BTC"));
    let (stats, set_stats) = signal(Vec::<AssetStat>::new());
    let (stats_error, set_stats_error) = signal::<Option<String>>(None);
    let (history, set_history) = signal(Vec::<CandlePoint>::new());
    let (history_loaded, set_history_loaded) = signal(false);
    let (history_error, set_history_error) = signal::<Option<String>>(None);
    let (predictions, set_predictions) = signal(Vec::<FormattedPrediction>::new());
    let (show_prediction, set_show_prediction) = signal(false);

    // Top-asset cards, fetched once on mount.
    {
        let api = api.clone();
        Effect::new(move |_| {
            let api = api.clone();
            let token = ctx.token().unwrap_or_default();
            spawn_local(async move {
                match api.top_assets(&token).await {
                    Ok(assets) => set_stats.set(assets),
                    Err(e) => set_stats_error.set(Some(format!("Failed to load assets: {}", e))),
                }
            });
        });
    }

    // History refresh whenever the selected coin changes. The prediction
    // overlay is reset and the predict button stays disabled until the new
    // history has arrived.
    {
        let api = api.clone();
        Effect::new(move |_| {
            let coin = selected_coin.get();
            set_show_prediction.set(false);
            set_history_loaded.set(false);
            set_history_error.set(None);
            let api = api.clone();
            let token = ctx.token().unwrap_or_default();
            spawn_local(async move {
                match api.price_history(&coin, &token).await {
                    Ok(points) => {
                        set_history.set(points);
                        set_history_loaded.set(true);
                    }
                    Err(e) => {
                        set_history.set(Vec::new());
                        set_history_error.set(Some(format!("Failed to load history: {}", e)));
                    }
                }
            });
        });
    }

    let predict = {
        let api = api.clone();
        move |_| {
            let coin = selected_coin.get();
            let api = api.clone();
            let token = ctx.token().unwrap_or_default();
            spawn_local(async move {
                match api.predict(&coin, &token).await {
                    Ok(raw) => {
                        set_predictions.set(format_predictions(&raw));
                        set_show_prediction.set(true);
                    }
                    Err(e) => {
                        // The prediction endpoint keeps the blocking alert
                        // with the backend's own detail message.
                        let detail = e.backend_detail().unwrap_or("Insufficient data");
                        alert(&format!("Error fetching prediction: {}", detail));
                    }
                }
            });
        }
    };

    view! {
        <div class="page dashboard-page">
            <header class="dashboard-header">
                <h2>"Smart Trading Dashboard"</h2>
                <p class="welcome-line">
                    {move || format!("Welcome back, {}", ctx.username().unwrap_or_default())}
                </p>
            </header>

            <Show when=move || stats_error.get().is_some()>
                <p class="status-text status-error">
                    {move || stats_error.get().unwrap_or_default()}
                </p>
            </Show>
            <div class="stats-grid">
                <For
                    each=move || stats.get()
                    key=|stat| stat.id.clone()
                    children=|stat| view! { <StatCard stat=stat /> }
                />
            </div>

            <section class="main-section">
                <div class="controls">
                    <select
                        class="select"
                        on:change=move |ev| set_selected_coin.set(event_target_value(&ev))
                    >
                        {COINS
                            .iter()
                            .map(|(value, label)| {
                                let value = *value;
                                view! {
                                    <option
                                        value=value
                                        selected=move || selected_coin.get() == value
                                    >
                                        {*label}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>

                    <button
                        class="btn btn-predict"
                        on:click=predict
                        disabled=move || !history_loaded.get()
                    >
                        "Start AI Prediction"
                    </button>
                </div>

                <Show when=move || history_error.get().is_some()>
                    <p class="status-text status-error">
                        {move || history_error.get().unwrap_or_default()}
                    </p>
                </Show>

                <PriceChart history=history predictions=predictions show_prediction=show_prediction />
            </section>

            <Show when=move || ctx.is_admin()>
                <section class="admin-section">
                    <div class="admin-section-header">
                        <h3>"Admin Control Panel"</h3>
                        <small>"Tools for data injection and model management."</small>
                    </div>
                    <div class="admin-tools-grid">
                        <AddDataForm />
                        <CsvUpload />
                    </div>
                </section>
            </Show>

            <Show when=move || show_prediction.get()>
                <PredictionTable symbol=selected_coin predictions=predictions />
            </Show>
        </div>
    }
}
