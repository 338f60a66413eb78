use super::*;
use serde_json::json;

#[test]
fn ride_row_reads_mongo_style_ids_and_nested_rider() {
    let row = ride_row(&json!({ "_id": "r1", "status": "in_progress", "rider": { "name": "Ada" } }));
    assert_eq!(
        row,
        RideRow { id: "r1".to_owned(), rider: "Ada".to_owned(), status: "in_progress".to_owned() }
    );
}

#[test]
fn ride_row_falls_back_to_flat_fields() {
    let row = ride_row(&json!({ "id": "r2", "riderName": "Bo", "status": "requested" }));
    assert_eq!(row.id, "r2");
    assert_eq!(row.rider, "Bo");
}

#[test]
fn ride_row_defaults_missing_fields() {
    let row = ride_row(&json!({}));
    assert_eq!(row, RideRow { id: "unknown".to_owned(), rider: "-".to_owned(), status: "unknown".to_owned() });
}
