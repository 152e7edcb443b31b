use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct RoomDto {
    pub id: i32,
    pub room_number: String,
    pub floor_number: i32,
    pub status: String,
    pub qr_code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateRoomDto {
    pub room_number: String,
    pub floor_number: i32,
    pub status: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct UpdateRoomDto {
    pub room_number: String,
    pub floor_number: i32,
    pub status: String,
}

/// Bulk status change applied to several rooms at once.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct BulkRoomStatusDto {
    pub room_ids: Vec<i32>,
    pub status: String,
}
