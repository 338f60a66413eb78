//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Outlet, ParentRoute, Route, Router, Routes},
};

use crate::components::{require_auth::RequireAuth, toolbar::Toolbar};
use crate::config::ClientConfig;
use crate::net::api::{ApiClient, AppApi};
use crate::net::transport::FetchTransport;
use crate::pages::{dashboard::DashboardPage, live_rides::LiveRidesPage, login::LoginPage};
use crate::state::auth::{AuthContext, AuthService};
use crate::state::theme::{ThemeContext, ThemeService};
use crate::util::dark_mode::DocumentRoot;
use crate::util::storage::LocalStorage;

/// Root application component.
///
/// Resolves config, theme and session synchronously, provides them as
/// context, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let api: AppApi = ApiClient::new(config.api_root(), FetchTransport, LocalStorage);
    let theme = ThemeContext::new(ThemeService::new(LocalStorage, DocumentRoot));
    let auth = AuthContext::new(AuthService::new(api.clone()));

    provide_context(config);
    provide_context(api);
    provide_context(theme);
    provide_context(auth);

    view! {
        <Title text="EcoRide Admin"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <ParentRoute path=StaticSegment("") view=ProtectedLayout>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=(StaticSegment("rides"), StaticSegment("live")) view=LiveRidesPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

/// Chrome shared by every authenticated page, behind the route guard.
#[component]
fn ProtectedLayout() -> impl IntoView {
    view! {
        <RequireAuth>
            <div class="app-shell">
                <Toolbar/>
                <main class="app-shell__content">
                    <Outlet/>
                </main>
            </div>
        </RequireAuth>
    }
}
