use crate::router::handle;
use crate::tests::utils::{body_json, get, make_db, request};

fn report(db: &crate::db::connection::Database, room_id: &str, severity: &str) -> i64 {
    let payload = serde_json::json!({
        "title": "Broken fan",
        "description": "Ceiling fan rattles",
        "room_id": room_id,
        "reporter": "student1",
        "severity": severity,
    });
    let mut resp = handle(request("POST", "/api/issues", &payload.to_string()), db).unwrap();
    assert_eq!(resp.status(), 200);
    let json = body_json(&mut resp);
    assert_eq!(json["ok"], true);
    json["issue_id"].as_i64().unwrap()
}

fn room_status(db: &crate::db::connection::Database, room_id: &str) -> String {
    let mut resp = handle(get("/api/rooms"), db).unwrap();
    let rooms = body_json(&mut resp);
    rooms
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["id"] == room_id)
        .unwrap()["status"]
        .as_str()
        .unwrap()
        .to_string()
}

#[test]
fn reporting_flips_the_room_status() {
    let db = make_db("report_status");

    assert_eq!(room_status(&db, "A-Floor1-R1"), "green");
    report(&db, "A-Floor1-R1", "yellow");
    assert_eq!(room_status(&db, "A-Floor1-R1"), "yellow");
    report(&db, "A-Floor1-R1", "red");
    assert_eq!(room_status(&db, "A-Floor1-R1"), "red");
    // other rooms untouched
    assert_eq!(room_status(&db, "A-Floor1-R2"), "green");
}

#[test]
fn reporting_against_unknown_room_is_404_json() {
    let db = make_db("report_unknown");

    let payload = serde_json::json!({
        "title": "t", "description": "d",
        "room_id": "Z-Floor9-R9", "reporter": "student1", "severity": "yellow",
    });
    let mut resp = handle(request("POST", "/api/issues", &payload.to_string()), &db).unwrap();
    assert_eq!(resp.status(), 404);
    assert!(body_json(&mut resp)["error"].is_string());

    let mut resp = handle(get("/api/issues"), &db).unwrap();
    assert_eq!(body_json(&mut resp).as_array().unwrap().len(), 0);
}

#[test]
fn blank_title_is_400() {
    let db = make_db("report_blank");

    let payload = serde_json::json!({
        "title": "   ", "description": "d",
        "room_id": "A-Floor1-R1", "reporter": "student1", "severity": "yellow",
    });
    let resp = handle(request("POST", "/api/issues", &payload.to_string()), &db).unwrap();
    assert_eq!(resp.status(), 400);
    assert_eq!(room_status(&db, "A-Floor1-R1"), "green");
}

#[test]
fn resolve_walks_the_room_back_down() {
    let db = make_db("resolve_walk");

    let yellow_id = report(&db, "A-Floor1-R1", "yellow");
    let red_id = report(&db, "A-Floor1-R1", "red");
    assert_eq!(room_status(&db, "A-Floor1-R1"), "red");

    let body = serde_json::json!({ "resolver": "electrician1" }).to_string();
    let mut resp = handle(
        request("POST", &format!("/api/issues/{red_id}/resolve"), &body),
        &db,
    )
    .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(body_json(&mut resp)["ok"], true);
    assert_eq!(room_status(&db, "A-Floor1-R1"), "yellow");

    let resp = handle(
        request("POST", &format!("/api/issues/{yellow_id}/resolve"), &body),
        &db,
    )
    .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(room_status(&db, "A-Floor1-R1"), "green");
}

#[test]
fn double_resolve_is_409() {
    let db = make_db("resolve_twice");

    let id = report(&db, "A-Floor1-R1", "yellow");
    let body = serde_json::json!({ "resolver": "electrician1" }).to_string();
    let uri = format!("/api/issues/{id}/resolve");

    let resp = handle(request("POST", &uri, &body), &db).unwrap();
    assert_eq!(resp.status(), 200);

    let mut resp = handle(request("POST", &uri, &body), &db).unwrap();
    assert_eq!(resp.status(), 409);
    assert!(body_json(&mut resp)["error"].is_string());
    assert_eq!(room_status(&db, "A-Floor1-R1"), "green");
}

#[test]
fn resolving_unknown_or_malformed_ids_fails_cleanly() {
    let db = make_db("resolve_bad_ids");

    let resp = handle(request("POST", "/api/issues/9999/resolve", "{}"), &db).unwrap();
    assert_eq!(resp.status(), 404);

    let resp = handle(request("POST", "/api/issues/abc/resolve", "{}"), &db).unwrap();
    assert_eq!(resp.status(), 400);
}

#[test]
fn open_filter_and_room_filter_narrow_the_listing() {
    let db = make_db("issue_filters");

    let resolved_id = report(&db, "A-Floor1-R1", "yellow");
    report(&db, "A-Floor1-R2", "red");
    let body = serde_json::json!({ "resolver": "electrician1" }).to_string();
    handle(
        request("POST", &format!("/api/issues/{resolved_id}/resolve"), &body),
        &db,
    )
    .unwrap();

    let mut resp = handle(get("/api/issues?status=open"), &db).unwrap();
    let open = body_json(&mut resp);
    let open = open.as_array().unwrap();
    assert_eq!(open.len(), 1);
    assert!(open.iter().all(|i| i["resolved_at"].is_null()));

    let mut resp = handle(get("/api/issues?room_id=A-Floor1-R1"), &db).unwrap();
    let for_room = body_json(&mut resp);
    let for_room = for_room.as_array().unwrap();
    assert_eq!(for_room.len(), 1);
    assert_eq!(for_room[0]["room_id"], "A-Floor1-R1");
    assert_eq!(for_room[0]["status"], "resolved");
}

#[test]
fn issue_records_expose_the_expected_fields() {
    let db = make_db("issue_fields");

    report(&db, "A-Floor1-R1", "red");
    let mut resp = handle(get("/api/issues"), &db).unwrap();
    let issues = body_json(&mut resp);
    let issue = &issues.as_array().unwrap()[0];

    for field in [
        "id",
        "title",
        "description",
        "room_id",
        "reporter",
        "severity",
        "status",
        "created_at",
        "deadline",
        "resolved_at",
    ] {
        assert!(issue.get(field).is_some(), "missing field {field}");
    }
    assert_eq!(issue["severity"], "red");
    assert_eq!(issue["status"], "open");
}
