//! Key/value panel for one metrics region (loading, error, or data).

#[cfg(test)]
#[path = "stats_panel_test.rs"]
mod stats_panel_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use serde_json::Value;

use crate::state::remote::Remote;

#[component]
pub fn StatsPanel(title: &'static str, state: RwSignal<Remote<Value>>) -> impl IntoView {
    view! {
        <section class="stats-panel">
            <h2 class="stats-panel__title">{title}</h2>
            {move || match state.get() {
                Remote::Loading => view! { <p class="stats-panel__status">"Loading..."</p> }.into_any(),
                Remote::Failed(message) => view! { <p class="stats-panel__error">{message}</p> }.into_any(),
                Remote::Ready(value) => {
                    let rows = stat_rows(&value);
                    view! {
                        <dl class="stats-panel__rows">
                            {rows
                                .into_iter()
                                .map(|(label, text)| view! { <dt>{label}</dt><dd>{text}</dd> })
                                .collect_view()}
                        </dl>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}

/// Top-level scalar fields of a stats object as `(label, text)` rows.
/// Nested objects and arrays are left to dedicated charts.
pub(crate) fn stat_rows(value: &Value) -> Vec<(String, String)> {
    let Some(map) = value.as_object() else {
        return Vec::new();
    };
    map.iter()
        .filter_map(|(key, v)| scalar_text(v).map(|text| (humanize_key(key), text)))
        .collect()
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(if *b { "yes" } else { "no" }.to_owned()),
        _ => None,
    }
}

/// `totalUsers` / `total_users` -> `Total users`.
pub(crate) fn humanize_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch == '_' || ch == '-' {
            out.push(' ');
        } else if ch.is_ascii_uppercase() && !out.is_empty() && !out.ends_with(' ') {
            out.push(' ');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch.to_ascii_lowercase());
        }
    }
    let mut chars = out.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => out,
    }
}
