//! Backend route paths, relative to the API root.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

pub const AUTH_LOGIN: &str = "/auth/login";

pub const USERS: &str = "/users";
pub const USERS_STATS: &str = "/users/stats";
pub const RIDES: &str = "/rides";
pub const RIDES_STATS: &str = "/rides/stats";
pub const ACTIVE_RIDES: &str = "/rides?status=active";
pub const EMERGENCY: &str = "/emergency";
pub const NOTIFICATIONS: &str = "/notifications";
pub const SETTINGS: &str = "/settings";
pub const REPORTS: &str = "/reports";

pub fn user(id: &str) -> String {
    format!("{USERS}/{id}")
}

pub fn ride(id: &str) -> String {
    format!("{RIDES}/{id}")
}

pub fn emergency(id: &str) -> String {
    format!("{EMERGENCY}/{id}")
}

pub fn notification(id: &str) -> String {
    format!("{NOTIFICATIONS}/{id}")
}

/// `/analytics/{section}`, e.g. `demand`, `routes`, `safety`, `sustainability`.
pub fn analytics(section: &str) -> String {
    format!("/analytics/{section}")
}

pub fn monitoring(section: &str) -> String {
    format!("/monitoring/{section}")
}

pub fn settings_section(section: &str) -> String {
    format!("{SETTINGS}/{section}")
}

pub fn report(kind: &str) -> String {
    format!("{REPORTS}/{kind}")
}

/// Admin document routes, e.g. `pending` or `{id}/approve`.
pub fn admin_documents(rest: &str) -> String {
    format!("/documents/admin/{}", rest.trim_start_matches('/'))
}
