use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wasm_bindgen_futures::spawn_local;

use crate::api::ApiClient;
use crate::session::SessionContext;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = SessionContext::use_context();
    let api = ApiClient::new();
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let submit = move |_| {
        let email = email.get();
        let password = password.get();
        if email.is_empty() || password.is_empty() {
            set_error.set(Some("Enter your email and password".to_string()));
            return;
        }
        set_error.set(None);
        set_is_submitting.set(true);

        let api = api.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api.login(&email, &password).await {
                Ok(response) => {
                    ctx.log_in(response.into_session());
                    navigate("/dashboard", Default::default());
                }
                Err(e) => {
                    let detail = e
                        .backend_detail()
                        .unwrap_or("Login failed, try again")
                        .to_string();
                    set_error.set(Some(detail));
                }
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="auth-page login-page">
            <div class="auth-card">
                <h2>"Sign In"</h2>
                <p class="page-description">"Crypto Predict dashboard access"</p>

                <div class="form-group">
                    <label for="login-email">"Email"</label>
                    <input
                        id="login-email"
                        type="email"
                        class="input"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="login-password">"Password"</label>
                    <input
                        id="login-password"
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
                    {move || if is_submitting.get() { "Signing in..." } else { "Sign In" }}
                </button>

                <Show when=move || error.get().is_some()>
                    <span class="status-text status-error">
                        {move || error.get().unwrap_or_default()}
                    </span>
                </Show>

                <p class="auth-switch">
                    "No account yet? " <a href="/register">"Register"</a>
                </p>
            </div>
        </div>
    }
}
