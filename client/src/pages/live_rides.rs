//! Live rides page: active rides refreshed on a fixed interval.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only polling view. The poll handle lives in a local `StoredValue`
//! owned by this view and is cancelled on cleanup, so leaving the page stops
//! the timer.

#[cfg(test)]
#[path = "live_rides_test.rs"]
mod live_rides_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::net::api::AppApi;
use crate::net::endpoints;
use crate::state::remote::Remote;
use crate::util::poll::PollHandle;

/// Display projection of one ride record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct RideRow {
    pub id: String,
    pub rider: String,
    pub status: String,
}

pub(crate) fn ride_row(ride: &Value) -> RideRow {
    let text = |v: Option<&Value>| v.and_then(Value::as_str).map(str::to_owned);
    let id = text(ride.get("_id")).or_else(|| text(ride.get("id")));
    let rider = text(ride.pointer("/rider/name")).or_else(|| text(ride.get("riderName")));
    RideRow {
        id: id.unwrap_or_else(|| "unknown".to_owned()),
        rider: rider.unwrap_or_else(|| "-".to_owned()),
        status: text(ride.get("status")).unwrap_or_else(|| "unknown".to_owned()),
    }
}

#[component]
pub fn LiveRidesPage() -> impl IntoView {
    let api = expect_context::<AppApi>();
    let config = expect_context::<ClientConfig>();
    let rides = RwSignal::new(Remote::<Vec<Value>>::Loading);

    let refresh = move || {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let result = api.get_data::<Vec<Value>>(endpoints::ACTIVE_RIDES).await;
            rides.set(Remote::from_result(result));
        });
    };

    refresh();
    let poller = StoredValue::new_local(PollHandle::start(config.poll_interval_ms, refresh));
    on_cleanup(move || {
        poller.update_value(PollHandle::cancel);
    });

    view! {
        <div class="live-rides-page">
            <h1>"Live Rides"</h1>
            {move || match rides.get() {
                Remote::Loading => view! { <p>"Loading rides..."</p> }.into_any(),
                Remote::Failed(message) => view! { <p class="live-rides-page__error">{message}</p> }.into_any(),
                Remote::Ready(items) if items.is_empty() => view! { <p>"No active rides."</p> }.into_any(),
                Remote::Ready(items) => {
                    view! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Ride"</th>
                                    <th>"Rider"</th>
                                    <th>"Status"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {items
                                    .iter()
                                    .map(ride_row)
                                    .map(|row| {
                                        view! {
                                            <tr>
                                                <td>{row.id}</td>
                                                <td>{row.rider}</td>
                                                <td>{row.status}</td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
