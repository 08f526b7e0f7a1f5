use crate::router::handle;
use crate::tests::utils::{body_json, get, make_db};

#[test]
fn lists_the_full_seeded_catalog() {
    let db = make_db("rooms_all");

    let mut resp = handle(get("/api/rooms"), &db).unwrap();
    assert_eq!(resp.status(), 200);

    let rooms = body_json(&mut resp);
    let rooms = rooms.as_array().unwrap();
    // 3 blocks x 3 floors x 8 rooms
    assert_eq!(rooms.len(), 72);
    assert!(rooms.iter().all(|r| r["status"] == "green"));
}

#[test]
fn filters_by_block_and_floor() {
    let db = make_db("rooms_filter");

    let mut resp = handle(get("/api/rooms?block=A"), &db).unwrap();
    let rooms = body_json(&mut resp);
    assert_eq!(rooms.as_array().unwrap().len(), 24);

    let mut resp = handle(get("/api/rooms?block=B&floor=Floor2"), &db).unwrap();
    let rooms = body_json(&mut resp);
    let rooms = rooms.as_array().unwrap();
    assert_eq!(rooms.len(), 8);
    assert!(rooms
        .iter()
        .all(|r| r["block"] == "B" && r["floor"] == "Floor2"));
}

#[test]
fn room_records_expose_the_expected_fields() {
    let db = make_db("rooms_fields");

    let mut resp = handle(get("/api/rooms?block=A&floor=Floor1"), &db).unwrap();
    let rooms = body_json(&mut resp);
    let room = &rooms.as_array().unwrap()[0];

    for field in ["id", "block", "floor", "number", "status", "last_updated"] {
        assert!(room.get(field).is_some(), "missing field {field}");
    }
    assert_eq!(room["id"], "A-Floor1-R1");
}
