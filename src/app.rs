use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::components::sidebar::Sidebar;
use crate::pages::admin_reports::AdminReportsPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::login::LoginPage;
use crate::pages::register::RegisterPage;
use crate::session::SessionContext;

/// Renders children only with a live session; otherwise bounces to login.
/// Purely a synchronous check of already-loaded client state. The backend
/// still authorizes every protected endpoint on its own.
#[component]
fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let ctx = SessionContext::use_context();
    view! {
        <Show
            when=move || ctx.is_logged_in()
            fallback=|| view! { <Redirect path="/login" /> }
        >
            {children()}
        </Show>
    }
}

/// Admin-gated content; signed-in non-admins land back on the dashboard.
#[component]
fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let ctx = SessionContext::use_context();
    view! {
        <Show
            when=move || ctx.is_admin()
            fallback=|| view! { <Redirect path="/dashboard" /> }
        >
            {children()}
        </Show>
    }
}

/// Shared chrome for authenticated views: sidebar plus content area.
#[component]
fn AppShell(children: ChildrenFn) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Sidebar />
            <main class="content">{children()}</main>
        </div>
    }
}

#[component]
fn DashboardRoute() -> impl IntoView {
    view! {
        <RequireSession>
            <AppShell>
                <DashboardPage />
            </AppShell>
        </RequireSession>
    }
}

#[component]
fn AdminReportsRoute() -> impl IntoView {
    view! {
        <RequireSession>
            <RequireAdmin>
                <AppShell>
                    <AdminReportsPage />
                </AppShell>
            </RequireAdmin>
        </RequireSession>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_context(SessionContext::new());

    view! {
        <Router>
            <Routes fallback=|| view! { <Redirect path="/login" /> }>
                <Route path=path!("/") view=|| view! { <Redirect path="/login" /> } />
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/register") view=RegisterPage />
                <Route path=path!("/dashboard") view=DashboardRoute />
                <Route path=path!("/dashboard/reports") view=AdminReportsRoute />
            </Routes>
        </Router>
    }
}
