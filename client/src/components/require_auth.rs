//! Protected-route wrapper.
//!
//! Re-evaluates the guard whenever the auth state or the location changes and
//! swaps its children for a redirect to `/login` when the operator is signed
//! out. Children are only rebuilt when the decision flips.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::state::auth::AuthContext;
use crate::util::auth::{GuardDecision, guard};

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let location = use_location();

    let redirect = Memo::new(move |_| match guard(&auth.state.get(), &location.pathname.get()) {
        GuardDecision::Render(_) => None,
        GuardDecision::Redirect(path) => Some(path),
    });

    move || match redirect.get() {
        None => children().into_any(),
        Some(path) => view! { <Redirect path=path/> }.into_any(),
    }
}
