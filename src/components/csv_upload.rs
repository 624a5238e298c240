use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};

use crate::api::ApiClient;
use crate::session::SessionContext;

/// Admin bulk-import: picks a CSV of historical candles and posts it to the
/// backend as a multipart upload.
#[component]
pub fn CsvUpload() -> impl IntoView {
    let ctx = SessionContext::use_context();
    let api = ApiClient::new();

    let (is_uploading, set_is_uploading) = signal(false);
    let (status, set_status) = signal::<Option<String>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    let on_file_change = move |ev: web_sys::Event| {
        set_status.set(None);
        set_error.set(None);

        let input: web_sys::HtmlInputElement = match ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        {
            Some(input) => input,
            None => return,
        };
        let file = match input.files().and_then(|files| files.get(0)) {
            Some(file) => file,
            None => return,
        };

        let api = api.clone();
        let token = ctx.token().unwrap_or_default();
        set_is_uploading.set(true);
        spawn_local(async move {
            let name = file.name();
            match JsFuture::from(file.text()).await {
                Ok(text) => {
                    let bytes = text.as_string().unwrap_or_default().into_bytes();
                    match api.upload_csv(&name, bytes, &token).await {
                        Ok(result) => set_status.set(Some(result.message)),
                        Err(e) => set_error.set(Some(format!("Upload failed: {}", e))),
                    }
                }
                Err(_) => {
                    set_error.set(Some(format!("Could not read file {}", name)));
                }
            }
            set_is_uploading.set(false);
        });
    };

    view! {
        <div class="admin-form csv-upload">
            <h4>"Bulk CSV Import"</h4>
            <p class="section-description">
                "Columns: asset, timestamp, open, high, low, close, volume."
            </p>
            <input
                type="file"
                accept=".csv"
                class="input input-file"
                on:change=on_file_change
                disabled=move || is_uploading.get()
            />
            {move || {
                if is_uploading.get() {
                    view! { <span class="status-text">"Uploading..."</span> }.into_any()
                } else if let Some(err) = error.get() {
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
