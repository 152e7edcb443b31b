//! Room data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::room::{CreateRoomParams, RoomStatus, UpdateRoomParams};

/// Repository providing database operations for room management.
pub struct RoomRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoomRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new room with its QR token.
    ///
    /// Uniqueness of the room number must be checked by the caller; the unique
    /// constraint is the backstop.
    pub async fn create(
        &self,
        params: CreateRoomParams,
        qr_code: String,
    ) -> Result<entity::room::Model, DbErr> {
        let now = Utc::now();

        entity::room::ActiveModel {
            room_number: ActiveValue::Set(params.room_number),
            floor_number: ActiveValue::Set(params.floor_number),
            status: ActiveValue::Set(params.status.as_str().to_string()),
            qr_code: ActiveValue::Set(qr_code),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets all rooms ordered by room number.
    pub async fn get_all(&self) -> Result<Vec<entity::room::Model>, DbErr> {
        entity::prelude::Room::find()
            .order_by_asc(entity::room::Column::RoomNumber)
            .all(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::room::Model>, DbErr> {
        entity::prelude::Room::find_by_id(id).one(self.db).await
    }

    /// Finds a room by its printed room number (QR-code entry path).
    pub async fn find_by_number(
        &self,
        room_number: &str,
    ) -> Result<Option<entity::room::Model>, DbErr> {
        entity::prelude::Room::find()
            .filter(entity::room::Column::RoomNumber.eq(room_number))
            .one(self.db)
            .await
    }

    /// Checks whether a room number is already taken, optionally ignoring one
    /// room (for updates to an existing room).
    pub async fn number_exists(
        &self,
        room_number: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Room::find()
            .filter(entity::room::Column::RoomNumber.eq(room_number));

        if let Some(id) = exclude_id {
            query = query.filter(entity::room::Column::Id.ne(id));
        }

        Ok(query.one(self.db).await?.is_some())
    }

    /// Updates number, floor, and status of a room.
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated room
    /// - `Err(DbErr::RecordNotFound)` - No room with that id
    pub async fn update(&self, params: UpdateRoomParams) -> Result<entity::room::Model, DbErr> {
        let room = entity::prelude::Room::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Room with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::room::ActiveModel = room.into();
        active_model.room_number = ActiveValue::Set(params.room_number);
        active_model.floor_number = ActiveValue::Set(params.floor_number);
        active_model.status = ActiveValue::Set(params.status.as_str().to_string());
        active_model.updated_at = ActiveValue::Set(Utc::now());

        active_model.update(self.db).await
    }

    /// Deletes a room.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Room::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }

    /// Checks whether any orders (in any status) reference the room.
    ///
    /// Rooms with order history cannot be deleted.
    pub async fn has_orders(&self, room_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Order::find()
            .filter(entity::order::Column::RoomId.eq(room_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Sets the status of several rooms at once and returns the updated rows.
    pub async fn set_status_bulk(
        &self,
        room_ids: &[i32],
        status: RoomStatus,
    ) -> Result<Vec<entity::room::Model>, DbErr> {
        if room_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Room::update_many()
            .filter(entity::room::Column::Id.is_in(room_ids.to_vec()))
            .col_expr(
                entity::room::Column::Status,
                sea_orm::sea_query::Expr::value(status.as_str()),
            )
            .col_expr(
                entity::room::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        entity::prelude::Room::find()
            .filter(entity::room::Column::Id.is_in(room_ids.to_vec()))
            .order_by_asc(entity::room::Column::RoomNumber)
            .all(self.db)
            .await
    }
}
