//! Room domain parameters and DTO conversions.

use crate::model::room::RoomDto;

/// Occupancy status of a hotel room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomStatus {
    Available,
    Occupied,
    Maintenance,
}

impl RoomStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Occupied => "occupied",
            Self::Maintenance => "maintenance",
        }
    }

    /// Parses a status string, returning `None` for unknown values.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "available" => Some(Self::Available),
            "occupied" => Some(Self::Occupied),
            "maintenance" => Some(Self::Maintenance),
            _ => None,
        }
    }
}

/// Parameters for creating a room. The QR token is generated by the service.
#[derive(Debug, Clone)]
pub struct CreateRoomParams {
    pub room_number: String,
    pub floor_number: i32,
    pub status: RoomStatus,
}

/// Parameters for updating a room.
#[derive(Debug, Clone)]
pub struct UpdateRoomParams {
    pub id: i32,
    pub room_number: String,
    pub floor_number: i32,
    pub status: RoomStatus,
}

impl From<entity::room::Model> for RoomDto {
    fn from(room: entity::room::Model) -> Self {
        Self {
            id: room.id,
            room_number: room.room_number,
            floor_number: room.floor_number,
            status: room.status,
            qr_code: room.qr_code,
            created_at: room.created_at,
            updated_at: room.updated_at,
        }
    }
}
