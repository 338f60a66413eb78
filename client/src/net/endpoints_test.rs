use super::*;

#[test]
fn id_routes_format_expected_paths() {
    assert_eq!(user("u1"), "/users/u1");
    assert_eq!(ride("r9"), "/rides/r9");
    assert_eq!(emergency("e3"), "/emergency/e3");
    assert_eq!(notification("n2"), "/notifications/n2");
}

#[test]
fn section_routes_format_expected_paths() {
    assert_eq!(analytics("demand"), "/analytics/demand");
    assert_eq!(monitoring("live"), "/monitoring/live");
    assert_eq!(settings_section("pricing"), "/settings/pricing");
    assert_eq!(report("monthly"), "/reports/monthly");
}

#[test]
fn admin_documents_strips_leading_slash() {
    assert_eq!(admin_documents("pending"), "/documents/admin/pending");
    assert_eq!(admin_documents("/d1/approve"), "/documents/admin/d1/approve");
}
