//! Room business logic: guest lookups and staff management.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{order::OrderRepository, room::RoomRepository},
    error::AppError,
    model::{
        order::{OrderListFilter, OrderStatus, OrderWithRoom},
        room::{CreateRoomParams, RoomStatus, UpdateRoomParams},
    },
};

/// Service providing business logic for room management.
pub struct RoomService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> RoomService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all rooms ordered by room number.
    pub async fn get_all(&self) -> Result<Vec<entity::room::Model>, AppError> {
        let room_repo = RoomRepository::new(self.db);
        Ok(room_repo.get_all().await?)
    }

    /// Gets one room by id.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - No room with that id
    pub async fn get(&self, id: i32) -> Result<entity::room::Model, AppError> {
        let room_repo = RoomRepository::new(self.db);

        room_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Room not found".to_string()))
    }

    /// Gets one room by its printed number (the QR-code entry path).
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - No room with that number
    pub async fn get_by_number(&self, room_number: &str) -> Result<entity::room::Model, AppError> {
        let room_repo = RoomRepository::new(self.db);

        room_repo
            .find_by_number(room_number)
            .await?
            .ok_or_else(|| AppError::NotFound("Room not found".to_string()))
    }

    /// Gets the room's orders that are still in the active pipeline.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - No room with that id
    pub async fn get_active_orders(&self, room_id: i32) -> Result<Vec<OrderWithRoom>, AppError> {
        let room_repo = RoomRepository::new(self.db);

        if room_repo.find_by_id(room_id).await?.is_none() {
            return Err(AppError::NotFound("Room not found".to_string()));
        }

        let order_repo = OrderRepository::new(self.db);
        let active: Vec<OrderStatus> = OrderStatus::ALL
            .into_iter()
            .filter(|s| !s.is_terminal())
            .collect();

        Ok(order_repo
            .list(&OrderListFilter {
                statuses: active,
                room_id: Some(room_id),
                limit: None,
                offset: None,
            })
            .await?)
    }

    /// Creates a room with a fresh QR token.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Room number already exists or is empty
    pub async fn create(&self, params: CreateRoomParams) -> Result<entity::room::Model, AppError> {
        if params.room_number.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Room number and floor number are required".to_string(),
            ));
        }

        let room_repo = RoomRepository::new(self.db);

        if room_repo.number_exists(&params.room_number, None).await? {
            return Err(AppError::BadRequest(
                "Room number already exists".to_string(),
            ));
        }

        // Opaque token printed on the in-room card; uniqueness comes from the
        // room number plus creation timestamp.
        let qr_code = format!(
            "ROOM_{}_{}",
            params.room_number,
            Utc::now().timestamp_millis()
        );

        Ok(room_repo.create(params, qr_code).await?)
    }

    /// Updates a room, re-checking number uniqueness against other rooms.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - No room with that id
    /// - `Err(AppError::BadRequest)` - Number taken by another room
    pub async fn update(&self, params: UpdateRoomParams) -> Result<entity::room::Model, AppError> {
        let room_repo = RoomRepository::new(self.db);

        if room_repo.find_by_id(params.id).await?.is_none() {
            return Err(AppError::NotFound("Room not found".to_string()));
        }

        if room_repo
            .number_exists(&params.room_number, Some(params.id))
            .await?
        {
            return Err(AppError::BadRequest(
                "Room number already exists".to_string(),
            ));
        }

        Ok(room_repo.update(params).await?)
    }

    /// Deletes a room without order history.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - No room with that id
    /// - `Err(AppError::BadRequest)` - The room has orders
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let room_repo = RoomRepository::new(self.db);

        if room_repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Room not found".to_string()));
        }

        if room_repo.has_orders(id).await? {
            return Err(AppError::BadRequest(
                "Cannot delete room with existing orders".to_string(),
            ));
        }

        room_repo.delete(id).await?;

        Ok(())
    }

    /// Sets the status of several rooms at once.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - The updated rooms
    /// - `Err(AppError::BadRequest)` - Empty id list
    pub async fn bulk_set_status(
        &self,
        room_ids: &[i32],
        status: RoomStatus,
    ) -> Result<Vec<entity::room::Model>, AppError> {
        if room_ids.is_empty() {
            return Err(AppError::BadRequest(
                "Room IDs array and status are required".to_string(),
            ));
        }

        let room_repo = RoomRepository::new(self.db);
        Ok(room_repo.set_status_bulk(room_ids, status).await?)
    }
}
