//! Collaboration session handle.

use scenevault_crypto::RoomKey;
use scenevault_types::{RoomId, SessionId};

/// The parts of a collaboration session the sync layer reads.
///
/// Any of the three may be missing: before a room is joined, after the
/// connection dropped, or while the room key is still being imported.
#[derive(Debug, Clone, Default)]
pub struct CollabSession {
    /// Room being collaborated on.
    pub room_id: Option<RoomId>,
    /// Key imported from the room secret.
    pub room_key: Option<RoomKey>,
    /// Identifier of the live connection.
    pub session_id: Option<SessionId>,
}

/// A session with every field present.
#[derive(Debug, Clone, Copy)]
pub struct ActiveSession<'a> {
    /// Room being collaborated on.
    pub room_id: &'a RoomId,
    /// Key imported from the room secret.
    pub room_key: &'a RoomKey,
    /// Identifier of the live connection.
    pub session_id: SessionId,
}

impl CollabSession {
    /// Creates a fully connected session.
    pub fn new(room_id: RoomId, room_key: RoomKey, session_id: SessionId) -> Self {
        Self {
            room_id: Some(room_id),
            room_key: Some(room_key),
            session_id: Some(session_id),
        }
    }

    /// Creates a session that is not connected to any room.
    pub fn disconnected() -> Self {
        Self::default()
    }

    /// Returns the session fields if all of them are present.
    pub fn active(&self) -> Option<ActiveSession<'_>> {
        Some(ActiveSession {
            room_id: self.room_id.as_ref()?,
            room_key: self.room_key.as_ref()?,
            session_id: self.session_id?,
        })
    }

    /// Returns true if room id, room key and session id are all present.
    pub fn is_active(&self) -> bool {
        self.active().is_some()
    }
}
