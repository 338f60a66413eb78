use super::*;
use serde_json::json;

#[test]
fn humanize_key_splits_camel_and_snake_case() {
    assert_eq!(humanize_key("totalUsers"), "Total users");
    assert_eq!(humanize_key("active_rides"), "Active rides");
    assert_eq!(humanize_key("co2-saved"), "Co2 saved");
    assert_eq!(humanize_key(""), "");
}

#[test]
fn stat_rows_keeps_scalars_only() {
    let mut rows = stat_rows(&json!({
        "totalRides": 120,
        "status": "ok",
        "surgeActive": false,
        "byCity": { "Lagos": 3 },
        "recent": []
    }));
    rows.sort();
    assert_eq!(
        rows,
        vec![
            ("Status".to_owned(), "ok".to_owned()),
            ("Surge active".to_owned(), "no".to_owned()),
            ("Total rides".to_owned(), "120".to_owned()),
        ]
    );
}

#[test]
fn stat_rows_of_non_object_is_empty() {
    assert!(stat_rows(&json!([1, 2, 3])).is_empty());
    assert!(stat_rows(&Value::Null).is_empty());
}
