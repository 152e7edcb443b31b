//! Room factory for creating test room entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test rooms with customizable fields.
///
/// Defaults produce a unique room number per call so multiple rooms can be
/// created in one test without violating the unique constraint.
pub struct RoomFactory<'a> {
    db: &'a DatabaseConnection,
    room_number: String,
    floor_number: i32,
    status: String,
    qr_code: String,
}

impl<'a> RoomFactory<'a> {
    /// Creates a new RoomFactory with default values.
    ///
    /// Defaults:
    /// - room_number: `"{100 + id}"` where id is auto-incremented
    /// - floor_number: `1`
    /// - status: `"available"`
    /// - qr_code: `"ROOM_{room_number}_TEST"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let room_number = format!("{}", 100 + id);
        Self {
            db,
            qr_code: format!("ROOM_{}_TEST", room_number),
            room_number,
            floor_number: 1,
            status: "available".to_string(),
        }
    }

    pub fn room_number(mut self, room_number: impl Into<String>) -> Self {
        self.room_number = room_number.into();
        self
    }

    pub fn floor_number(mut self, floor_number: i32) -> Self {
        self.floor_number = floor_number;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn qr_code(mut self, qr_code: impl Into<String>) -> Self {
        self.qr_code = qr_code.into();
        self
    }

    /// Builds and inserts the room entity into the database.
    pub async fn build(self) -> Result<entity::room::Model, DbErr> {
        let now = Utc::now();
        entity::room::ActiveModel {
            room_number: ActiveValue::Set(self.room_number),
            floor_number: ActiveValue::Set(self.floor_number),
            status: ActiveValue::Set(self.status),
            qr_code: ActiveValue::Set(self.qr_code),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a room with default values.
///
/// Shorthand for `RoomFactory::new(db).build().await`.
pub async fn create_room(db: &DatabaseConnection) -> Result<entity::room::Model, DbErr> {
    RoomFactory::new(db).build().await
}
