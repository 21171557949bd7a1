use scenevault_types::{Error, RoomId, SessionId, MAX_ROOM_ID_LEN};
use std::collections::HashSet;
use std::str::FromStr;

// ── RoomId ───────────────────────────────────────────────────────

#[test]
fn room_id_accepts_url_safe_ids() {
    let id = RoomId::new("abc-DEF_123").unwrap();
    assert_eq!(id.as_str(), "abc-DEF_123");
    assert_eq!(id.to_string(), "abc-DEF_123");
}

#[test]
fn room_id_rejects_empty() {
    assert!(matches!(RoomId::new(""), Err(Error::InvalidRoomId(_))));
}

#[test]
fn room_id_rejects_path_characters() {
    assert!(RoomId::new("a/b").is_err());
    assert!(RoomId::new("a b").is_err());
    assert!(RoomId::new("..").is_err());
    assert!(RoomId::new("room?x=1").is_err());
}

#[test]
fn room_id_rejects_overlong() {
    let long = "a".repeat(MAX_ROOM_ID_LEN + 1);
    assert!(RoomId::new(long).is_err());
    let max = "a".repeat(MAX_ROOM_ID_LEN);
    assert!(RoomId::new(max).is_ok());
}

#[test]
fn room_id_generate_is_unique_and_valid() {
    let a = RoomId::generate();
    let b = RoomId::generate();
    assert_ne!(a, b);
    assert_eq!(a.as_str().len(), 32);
    assert!(RoomId::new(a.as_str()).is_ok());
}

#[test]
fn room_id_from_str() {
    let id = RoomId::from_str("room1").unwrap();
    assert_eq!(id, RoomId::new("room1").unwrap());
}

#[test]
fn room_id_serde_is_plain_string() {
    let id = RoomId::new("abc").unwrap();
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, "\"abc\"");
    let back: RoomId = serde_json::from_str(&json).unwrap();
    assert_eq!(back, id);
}

#[test]
fn room_id_serde_validates() {
    let result: Result<RoomId, _> = serde_json::from_str("\"not/valid\"");
    assert!(result.is_err());
}

// ── SessionId ────────────────────────────────────────────────────

#[test]
fn session_id_new_is_unique() {
    assert_ne!(SessionId::new(), SessionId::new());
}

#[test]
fn session_id_display_and_parse() {
    let id = SessionId::new();
    let parsed = SessionId::parse(&id.to_string()).unwrap();
    assert_eq!(id, parsed);
    let parsed: SessionId = id.to_string().parse().unwrap();
    assert_eq!(id, parsed);
}

#[test]
fn session_id_parse_invalid() {
    assert!(matches!(
        SessionId::parse("not-a-uuid"),
        Err(Error::InvalidUuid(_))
    ));
}

#[test]
fn session_id_from_uuid_roundtrip() {
    let uuid = uuid::Uuid::now_v7();
    assert_eq!(SessionId::from_uuid(uuid).as_uuid(), uuid);
}

#[test]
fn session_id_hash_and_eq() {
    let id = SessionId::new();
    let mut set = HashSet::new();
    set.insert(id);
    set.insert(id);
    assert_eq!(set.len(), 1);
}
