use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        order::OrderSummaryDto,
        room::{BulkRoomStatusDto, CreateRoomDto, RoomDto, UpdateRoomDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            order::OrderWithRoom,
            room::{CreateRoomParams, RoomStatus, UpdateRoomParams},
        },
        service::room::RoomService,
        state::AppState,
    },
};

/// Tag for grouping room endpoints in OpenAPI documentation
pub static ROOM_TAG: &str = "rooms";

fn parse_status(value: &str) -> Result<RoomStatus, AppError> {
    RoomStatus::parse(value).ok_or_else(|| AppError::BadRequest("Invalid status".to_string()))
}

/// Get all rooms ordered by room number.
#[utoipa::path(
    get,
    path = "/api/rooms",
    tag = ROOM_TAG,
    responses(
        (status = 200, description = "All rooms", body = [RoomDto]),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_rooms(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = RoomService::new(&state.db);

    let rooms = service.get_all().await?;
    let rooms_dto: Vec<RoomDto> = rooms.into_iter().map(RoomDto::from).collect();

    Ok((StatusCode::OK, Json(rooms_dto)))
}

/// Get one room by id.
#[utoipa::path(
    get,
    path = "/api/rooms/{id}",
    tag = ROOM_TAG,
    params(
        ("id" = i32, Path, description = "Room id")
    ),
    responses(
        (status = 200, description = "The room", body = RoomDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_room(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = RoomService::new(&state.db);

    let room = service.get(id).await?;

    Ok((StatusCode::OK, Json(RoomDto::from(room))))
}

/// Get one room by its printed room number.
///
/// This is the entry point for guests scanning the in-room QR code.
#[utoipa::path(
    get,
    path = "/api/rooms/number/{room_number}",
    tag = ROOM_TAG,
    params(
        ("room_number" = String, Path, description = "Printed room number")
    ),
    responses(
        (status = 200, description = "The room", body = RoomDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_room_by_number(
    State(state): State<AppState>,
    Path(room_number): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = RoomService::new(&state.db);

    let room = service.get_by_number(&room_number).await?;

    Ok((StatusCode::OK, Json(RoomDto::from(room))))
}

/// Get the room's orders still in the active pipeline, newest first.
#[utoipa::path(
    get,
    path = "/api/rooms/{id}/orders",
    tag = ROOM_TAG,
    params(
        ("id" = i32, Path, description = "Room id")
    ),
    responses(
        (status = 200, description = "Active orders of the room", body = [OrderSummaryDto]),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_room_orders(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = RoomService::new(&state.db);

    let orders = service.get_active_orders(id).await?;
    let orders_dto: Vec<_> = orders
        .into_iter()
        .map(OrderWithRoom::into_summary_dto)
        .collect();

    Ok((StatusCode::OK, Json(orders_dto)))
}

/// Create a room.
///
/// # Access Control
/// - `Staff` - Staff or admin may manage rooms
#[utoipa::path(
    post,
    path = "/api/rooms",
    tag = ROOM_TAG,
    request_body = CreateRoomDto,
    responses(
        (status = 201, description = "Created room with generated QR token", body = RoomDto),
        (status = 400, description = "Missing fields or duplicate room number", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not staff or admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_room(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateRoomDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let status = match payload.status.as_deref() {
        Some(value) => parse_status(value)?,
        None => RoomStatus::Available,
    };

    let service = RoomService::new(&state.db);

    let room = service
        .create(CreateRoomParams {
            room_number: payload.room_number,
            floor_number: payload.floor_number,
            status,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(RoomDto::from(room))))
}

/// Update a room.
///
/// # Access Control
/// - `Staff` - Staff or admin may manage rooms
#[utoipa::path(
    put,
    path = "/api/rooms/{id}",
    tag = ROOM_TAG,
    params(
        ("id" = i32, Path, description = "Room id")
    ),
    request_body = UpdateRoomDto,
    responses(
        (status = 200, description = "Updated room", body = RoomDto),
        (status = 400, description = "Duplicate room number or invalid status", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not staff or admin", body = ErrorDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_room(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateRoomDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let status = parse_status(&payload.status)?;

    let service = RoomService::new(&state.db);

    let room = service
        .update(UpdateRoomParams {
            id,
            room_number: payload.room_number,
            floor_number: payload.floor_number,
            status,
        })
        .await?;

    Ok((StatusCode::OK, Json(RoomDto::from(room))))
}

/// Delete a room without order history.
///
/// # Access Control
/// - `Staff` - Staff or admin may manage rooms
#[utoipa::path(
    delete,
    path = "/api/rooms/{id}",
    tag = ROOM_TAG,
    params(
        ("id" = i32, Path, description = "Room id")
    ),
    responses(
        (status = 200, description = "Room deleted", body = MessageDto),
        (status = 400, description = "Room has existing orders", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not staff or admin", body = ErrorDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_room(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let service = RoomService::new(&state.db);

    service.delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Room deleted successfully".to_string(),
        }),
    ))
}

/// Set the status of several rooms at once.
///
/// # Access Control
/// - `Staff` - Staff or admin may manage rooms
#[utoipa::path(
    patch,
    path = "/api/rooms/bulk-status",
    tag = ROOM_TAG,
    request_body = BulkRoomStatusDto,
    responses(
        (status = 200, description = "Updated rooms", body = [RoomDto]),
        (status = 400, description = "Empty id list or invalid status", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not staff or admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn bulk_update_room_status(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<BulkRoomStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let status = parse_status(&payload.status)?;

    let service = RoomService::new(&state.db);

    let rooms = service.bulk_set_status(&payload.room_ids, status).await?;
    let rooms_dto: Vec<RoomDto> = rooms.into_iter().map(RoomDto::from).collect();

    Ok((StatusCode::OK, Json(rooms_dto)))
}
