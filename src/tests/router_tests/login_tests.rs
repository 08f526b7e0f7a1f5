use crate::router::handle;
use crate::tests::utils::{body_json, make_db, request};

#[test]
fn seeded_user_can_log_in() {
    let db = make_db("login_ok");

    let body = serde_json::json!({ "username": "student1" }).to_string();
    let mut resp = handle(request("POST", "/api/login", &body), &db).unwrap();
    assert_eq!(resp.status(), 200);

    let user = body_json(&mut resp);
    assert_eq!(user["username"], "student1");
    assert_eq!(user["role"], "student");
    assert_eq!(user["room_id"], "A-Floor1-R1");
}

#[test]
fn unknown_user_is_404() {
    let db = make_db("login_unknown");

    let body = serde_json::json!({ "username": "ghost" }).to_string();
    let mut resp = handle(request("POST", "/api/login", &body), &db).unwrap();
    assert_eq!(resp.status(), 404);
    assert!(body_json(&mut resp)["error"].is_string());
}

#[test]
fn missing_username_is_400() {
    let db = make_db("login_missing");

    let resp = handle(request("POST", "/api/login", "{}"), &db).unwrap();
    assert_eq!(resp.status(), 400);

    // empty body gets the same treatment
    let resp = handle(request("POST", "/api/login", ""), &db).unwrap();
    assert_eq!(resp.status(), 400);
}
