//! Overview page: user and ride statistics plus backend health.
//!
//! SYSTEM CONTEXT
//! ==============
//! The authenticated landing route. Each region fetches once on mount and
//! renders its own loading/error/data state, so one failing endpoint does not
//! blank the page.

use leptos::prelude::*;
use serde_json::Value;

use crate::components::stats_panel::StatsPanel;
use crate::config::ClientConfig;
use crate::net::api::AppApi;
use crate::net::endpoints;
use crate::state::remote::Remote;

fn load_region(api: AppApi, path: &'static str, target: RwSignal<Remote<Value>>) {
    leptos::task::spawn_local(async move {
        let result = api.get_data::<Value>(path).await;
        if let Err(e) = &result {
            leptos::logging::warn!("{path} failed: {e}");
        }
        target.set(Remote::from_result(result));
    });
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = expect_context::<AppApi>();
    let config = expect_context::<ClientConfig>();

    let users = RwSignal::new(Remote::<Value>::Loading);
    let rides = RwSignal::new(Remote::<Value>::Loading);
    let health = RwSignal::new(Remote::<Value>::Loading);

    load_region(api.clone(), endpoints::USERS_STATS, users);
    load_region(api.clone(), endpoints::RIDES_STATS, rides);

    let health_url = config.health_url();
    leptos::task::spawn_local(async move {
        health.set(Remote::from_result(api.get(&health_url).await));
    });

    let health_label = move || match health.get() {
        Remote::Loading => "checking",
        Remote::Ready(_) => "online",
        Remote::Failed(_) => "offline",
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Overview"</h1>
                <span class=move || format!("health-badge health-badge--{}", health_label())>
                    "API " {health_label}
                </span>
            </header>
            <div class="dashboard-page__grid">
                <StatsPanel title="Users" state=users/>
                <StatsPanel title="Rides" state=rides/>
            </div>
        </div>
    }
}
