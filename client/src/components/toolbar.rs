//! Top bar with navigation, theme toggle, operator identity, and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by the protected layout above every authenticated page. Logout
//! only clears the session; the route guard performs the redirect.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::auth::AuthContext;
use crate::state::theme::ThemeContext;

/// Top toolbar for authenticated pages.
#[component]
pub fn Toolbar() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let theme = expect_context::<ThemeContext>();

    let self_identity = move || {
        auth.state
            .get()
            .user()
            .map(|user| (user.display_name().to_owned(), user.email.clone().unwrap_or_default()))
            .unwrap_or_default()
    };

    view! {
        <header class="toolbar">
            <span class="toolbar__brand">"EcoRide Admin"</span>
            <span class="toolbar__divider" aria-hidden="true"></span>
            <nav class="toolbar__nav">
                <A href="/">"Overview"</A>
                <A href="/rides/live">"Live Rides"</A>
            </nav>

            <span class="toolbar__spacer"></span>

            <button
                class="btn toolbar__dark-toggle"
                on:click=move |_| theme.toggle_theme()
                title="Toggle dark mode"
            >
                {move || if theme.theme.get().is_dark() { "☀" } else { "☾" }}
            </button>

            <span class="toolbar__self">
                {move || self_identity().0}
                <span class="toolbar__self-email">{move || self_identity().1}</span>
            </span>

            <button class="btn toolbar__logout" on:click=move |_| auth.logout() title="Logout">
                "Logout"
            </button>
        </header>
    }
}
