use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::room::RoomNumber;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classroom {
    pub id: Uuid,
    pub room_number: RoomNumber,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Classroom {
    pub fn into_view(self) -> ClassroomView {
        ClassroomView {
            floor: self.room_number.floor(),
            classroom: self,
        }
    }
}

/// A classroom with its floor, which is derived from the room number.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassroomView {
    #[serde(flatten)]
    pub classroom: Classroom,
    pub floor: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassroomRequest {
    pub room_number: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ClassroomFilter {
    pub active_only: bool,
    pub room_number: Option<RoomNumber>,
    pub floor: Option<u8>,
}

impl ClassroomFilter {
    pub fn active() -> Self {
        Self {
            active_only: true,
            ..Default::default()
        }
    }

    pub fn matches(&self, classroom: &Classroom) -> bool {
        (!self.active_only || classroom.is_active)
            && self.room_number.is_none_or(|room| room == classroom.room_number)
            && self.floor.is_none_or(|floor| floor == classroom.room_number.floor())
    }
}
