use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{errors::TimetableError, validation::is_valid_room_number};

pub const ROOM_RANGE_MESSAGE: &str = "Room number must be between 101-110 or 201-207";

/// A validated room number. Travels as a string on the wire and in storage,
/// always in its canonical decimal form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RoomNumber(u16);

impl RoomNumber {
    pub fn value(self) -> u16 {
        self.0
    }

    /// Floor the room sits on: 1 for 101-110, 2 for 201-207.
    pub fn floor(self) -> u8 {
        (self.0 / 100) as u8
    }
}

impl FromStr for RoomNumber {
    type Err = TimetableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !is_valid_room_number(s) {
            return Err(TimetableError::validation(ROOM_RANGE_MESSAGE));
        }
        s.trim()
            .parse::<u16>()
            .map(RoomNumber)
            .map_err(|_| TimetableError::validation(ROOM_RANGE_MESSAGE))
    }
}

impl TryFrom<String> for RoomNumber {
    type Error = TimetableError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RoomNumber> for String {
    fn from(room: RoomNumber) -> Self {
        room.to_string()
    }
}

impl fmt::Display for RoomNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Inclusive room range of a floor, or `None` for a floor the school doesn't have.
pub fn floor_rooms(floor: u8) -> Option<(u16, u16)> {
    match floor {
        1 => Some((101, 110)),
        2 => Some((201, 207)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_form_drops_padding() {
        let room: RoomNumber = " 0105 ".parse().unwrap();
        assert_eq!(room.to_string(), "105");
        assert_eq!(room.floor(), 1);
    }

    #[test]
    fn second_floor() {
        let room: RoomNumber = "207".parse().unwrap();
        assert_eq!(room.floor(), 2);
        assert_eq!(floor_rooms(2), Some((201, 207)));
        assert_eq!(floor_rooms(3), None);
    }
}
