use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wasm_bindgen_futures::spawn_local;

use crate::api::{ApiClient, RegisterRequest};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let api = ApiClient::new();
    let navigate = use_navigate();

    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let submit = move |_| {
        let request = RegisterRequest {
            username: username.get().trim().to_string(),
            email: email.get().trim().to_string(),
            password: password.get(),
        };
        if request.username.is_empty() || request.email.is_empty() || request.password.is_empty() {
            set_error.set(Some("All fields are required".to_string()));
            return;
        }
        set_error.set(None);
        set_is_submitting.set(true);

        let api = api.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api.register(&request).await {
                Ok(_) => {
                    navigate("/login", Default::default());
                }
                Err(e) => {
                    let detail = e
                        .backend_detail()
                        .unwrap_or("Registration failed, try again")
                        .to_string();
                    set_error.set(Some(detail));
                }
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="auth-page register-page">
            <div class="auth-card">
                <h2>"Create Account"</h2>

                <div class="form-group">
                    <label for="reg-username">"Username"</label>
                    <input
                        id="reg-username"
                        type="text"
                        class="input"
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="reg-email">"Email"</label>
                    <input
                        id="reg-email"
                        type="email"
                        class="input"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="reg-password">"Password"</label>
                    <input
                        id="reg-password"
                        type="password"
                        class="input"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </div>

                <button
                    class="btn btn-primary"
                    on:click=submit
                    disabled=move || is_submitting.get()
                >
                    {move || if is_submitting.get() { "Creating..." } else { "Register" }}
                </button>

                <Show when=move || error.get().is_some()>
                    <span class="status-text status-error">
                        {move || error.get().unwrap_or_default()}
                    </span>
                </Show>

                <p class="auth-switch">
                    "Already registered? " <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
