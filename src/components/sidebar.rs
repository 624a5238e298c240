use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::session::SessionContext;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = SessionContext::use_context();
    let navigate = use_navigate();

    let log_out = move |_| {
        ctx.log_out();
        navigate("/login", Default::default());
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar-brand">
                <div class="sidebar-logo">"\u{20bf}"</div>
                <div>
                    <p class="sidebar-title">"Crypto Predict"</p>
                    <p class="sidebar-subtitle">"AI Insights"</p>
                </div>
            </div>
            <nav class="sidebar-nav">
                <a href="/dashboard" class="nav-item">"Overview"</a>
                // Admin-only entry; the route itself is guarded as well.
                <Show when=move || ctx.is_admin()>
                    <a href="/dashboard/reports" class="nav-item admin-link">"Reports & Analytics"</a>
                </Show>
            </nav>
            <div class="sidebar-footer">
                <Show when=move || ctx.is_logged_in()>
                    <p class="sidebar-user">{move || ctx.username().unwrap_or_default()}</p>
                </Show>
                <button class="btn btn-logout" on:click=log_out>"Log out"</button>
            </div>
        </aside>
    }
}
