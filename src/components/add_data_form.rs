use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::{ApiClient, MarketDataInput};
use crate::session::SessionContext;

fn parse_number(label: &str, value: &str) -> Result<f64, String> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("Enter a valid number for {}", label))
}

/// Admin form for injecting a single market record into the backend.
#[component]
pub fn AddDataForm() -> impl IntoView {
    let ctx = SessionContext::use_context();
    let api = ApiClient::new();

    let (symbol, set_symbol) = signal(String::from("BTC"));
    let (open, set_open) = signal(String::new());
    let (high, set_high) = signal(String::new());
    let (low, set_low) = signal(String::new());
    let (close, set_close) = signal(String::new());
    let (volume, set_volume) = signal(String::new());
    let (sentiment, set_sentiment) = signal(String::from("0.0"));
    let (is_saving, set_is_saving) = signal(false);
    let (status, set_status) = signal::<Option<String>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    let submit = move |_| {
        set_status.set(None);
        set_error.set(None);

        let input = (|| -> Result<MarketDataInput, String> {
            Ok(MarketDataInput {
                symbol: symbol.get().trim().to_uppercase(),
                open: parse_number("open", &open.get())?,
                high: parse_number("high", &high.get())?,
                low: parse_number("low", &low.get())?,
                close: parse_number("close", &close.get())?,
                volume: parse_number("volume", &volume.get())?,
                avg_sentiment: parse_number("sentiment", &sentiment.get())?,
            })
        })();

        let input = match input {
            Ok(input) => input,
            Err(e) => {
                set_error.set(Some(e));
                return;
            }
        };

        let api = api.clone();
        let token = ctx.token().unwrap_or_default();
        set_is_saving.set(true);
        spawn_local(async move {
            match api.add_market_data(&input, &token).await {
                Ok(result) => {
                    set_status.set(Some(result.message));
                }
                Err(e) => {
                    set_error.set(Some(format!("Failed to add record: {}", e)));
                }
            }
            set_is_saving.set(false);
        });
    };

    let text_input = move |label: &'static str,
                           value: ReadSignal<String>,
                           setter: WriteSignal<String>| {
        view! {
            <div class="form-group">
                <label>{label}</label>
                <input
                    type="text"
                    class="input"
                    prop:value=move || value.get()
                    on:input=move |ev| setter.set(event_target_value(&ev))
                />
            </div>
        }
    };

    view! {
        <div class="admin-form add-data-form">
            <h4>"Add Market Record"</h4>
            {text_input("Symbol", symbol, set_symbol)}
            <div class="form-row">
                {text_input("Open", open, set_open)}
                {text_input("High", high, set_high)}
                {text_input("Low", low, set_low)}
                {text_input("Close", close, set_close)}
            </div>
            <div class="form-row">
                {text_input("Volume", volume, set_volume)}
                {text_input("Avg Sentiment", sentiment, set_sentiment)}
            </div>
            <button
                class="btn btn-save"
                on:click=submit
                disabled=move || is_saving.get()
            >
                {move || if is_saving.get() { "Saving..." } else { "Add Record" }}
            </button>
            {move || {
                if let Some(err) = error.get() {
                    view! { <span class="status-text status-error">{err}</span> }.into_any()
                } else if let Some(msg) = status.get() {
                    view! { <span class="status-text status-saved">{msg}</span> }.into_any()
                } else {
                    view! { <span class="status-text"></span> }.into_any()
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::parse_number;

    #[test]
    fn test_parse_number_accepts_decimals_and_whitespace() {
        assert_eq!(parse_number("open", " 42.5 "), Ok(42.5));
    }

    #[test]
    fn test_parse_number_rejects_garbage() {
        let err = parse_number("volume", "abc").unwrap_err();
        assert!(err.contains("volume"), "error should name the field: {}", err);
    }
}
