use super::*;
use canvas::op::Tool;

fn red() -> Color {
    Color::rgb(0xFF, 0x3B, 0x30)
}

// =============================================================
// outbound encoding
// =============================================================

#[test]
fn join_encodes_with_kebab_tag_and_camel_fields() {
    let event = ClientEvent::Join {
        room_id: "room-1".to_owned(),
        username: "CreativeArtist42".to_owned(),
        color: red(),
    };
    let json: serde_json::Value =
        serde_json::from_str(&encode_client_event(&event).unwrap()).unwrap();
    assert_eq!(json["event"], "join");
    assert_eq!(json["payload"]["roomId"], "room-1");
    assert_eq!(json["payload"]["username"], "CreativeArtist42");
    assert_eq!(json["payload"]["color"], "#FF3B30");
}

#[test]
fn draw_flattens_the_op_into_the_payload() {
    let op = DrawingOp::stroke(
        Tool::Freehand,
        vec![Point::new(10.0, 10.0), Point::new(20.0, 10.0)],
        Color::BLACK,
        5,
    );
    let event = ClientEvent::Draw { room_id: "room-1".to_owned(), op };
    let json: serde_json::Value =
        serde_json::from_str(&encode_client_event(&event).unwrap()).unwrap();
    assert_eq!(json["event"], "draw");
    assert_eq!(json["payload"]["roomId"], "room-1");
    assert_eq!(json["payload"]["tool"], "freehand");
    assert_eq!(json["payload"]["strokeWidth"], 5);
    assert_eq!(json["payload"]["points"][1]["x"], 20.0);
    assert!(json["payload"].get("op").is_none(), "no nested op object");
}

#[test]
fn cursor_move_carries_flat_coordinates() {
    let event = ClientEvent::CursorMove { room_id: "r".to_owned(), x: 3.0, y: 4.0 };
    let json: serde_json::Value =
        serde_json::from_str(&encode_client_event(&event).unwrap()).unwrap();
    assert_eq!(json["event"], "cursor-move");
    assert_eq!(json["payload"]["x"], 3.0);
    assert_eq!(json["payload"]["y"], 4.0);
}

#[test]
fn control_events_use_kebab_case_tags() {
    for (event, tag) in [
        (ClientEvent::ClearCanvas { room_id: "r".to_owned() }, "clear-canvas"),
        (ClientEvent::Undo { room_id: "r".to_owned() }, "undo"),
        (ClientEvent::Leave { room_id: "r".to_owned() }, "leave"),
        (
            ClientEvent::SendMessage { room_id: "r".to_owned(), message: "hi".to_owned() },
            "send-message",
        ),
    ] {
        let json: serde_json::Value =
            serde_json::from_str(&encode_client_event(&event).unwrap()).unwrap();
        assert_eq!(json["event"], tag);
    }
}

// =============================================================
// inbound decoding
// =============================================================

#[test]
fn room_data_decodes_a_full_snapshot() {
    let frame = r##"{
        "event": "room-data",
        "payload": {
            "drawings": [
                { "tool": "freehand", "points": [{"x":1,"y":2},{"x":3,"y":4}],
                  "color": "#000000", "strokeWidth": 5 }
            ],
            "users": [
                { "id": "u1", "username": "a", "color": "#FF3B30", "joinedAt": 1 }
            ],
            "chat": []
        }
    }"##;
    let ServerEvent::RoomData(snapshot) = decode_server_event(frame).unwrap() else {
        panic!("expected room-data");
    };
    assert_eq!(snapshot.drawings.len(), 1);
    assert_eq!(snapshot.users.len(), 1);
    assert!(snapshot.chat.is_empty());
}

#[test]
fn sparse_room_data_defaults_to_empty_collections() {
    let frame = r#"{ "event": "room-data", "payload": {} }"#;
    let ServerEvent::RoomData(snapshot) = decode_server_event(frame).unwrap() else {
        panic!("expected room-data");
    };
    assert!(snapshot.drawings.is_empty());
    assert!(snapshot.users.is_empty());
    assert!(snapshot.chat.is_empty());
}

#[test]
fn payloadless_events_decode_as_unit_variants() {
    assert_eq!(
        decode_server_event(r#"{ "event": "canvas-cleared" }"#).unwrap(),
        ServerEvent::CanvasCleared
    );
    assert_eq!(decode_server_event(r#"{ "event": "undone" }"#).unwrap(), ServerEvent::Undone);
}

#[test]
fn user_left_payload_is_a_bare_id() {
    let event = decode_server_event(r#"{ "event": "user-left", "payload": "u7" }"#).unwrap();
    assert_eq!(event, ServerEvent::UserLeft("u7".to_owned()));
}

#[test]
fn cursor_updated_decodes_user_and_position() {
    let frame = r#"{
        "event": "cursor-updated",
        "payload": { "userId": "u2", "cursor": { "x": 40.0, "y": 55.0 } }
    }"#;
    let event = decode_server_event(frame).unwrap();
    assert_eq!(
        event,
        ServerEvent::CursorUpdated { user_id: "u2".to_owned(), cursor: Point::new(40.0, 55.0) }
    );
}

#[test]
fn error_event_tolerates_a_missing_message() {
    let event = decode_server_event(r#"{ "event": "error", "payload": {} }"#).unwrap();
    assert_eq!(event, ServerEvent::Error { message: String::new() });
}

#[test]
fn unknown_event_tag_is_a_decode_error() {
    let err = decode_server_event(r#"{ "event": "mystery", "payload": {} }"#).unwrap_err();
    assert!(matches!(err, WireError::Decode(_)));
}

#[test]
fn malformed_json_is_a_decode_error() {
    assert!(decode_server_event("not json").is_err());
}

#[test]
fn drawing_event_round_trips() {
    let op = DrawingOp::text(Point::new(5.0, 6.0), "note", red(), 5);
    let event = ServerEvent::Drawing(op);
    let json = serde_json::to_string(&event).unwrap();
    assert_eq!(decode_server_event(&json).unwrap(), event);
}
