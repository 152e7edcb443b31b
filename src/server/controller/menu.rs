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
        menu::{
            CreateMenuCategoryDto, CreateMenuItemDto, MenuCategoryDto, MenuCategoryWithItemsDto,
            MenuItemDetailDto, MenuItemDto, UpdateMenuCategoryDto, UpdateMenuItemDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::menu::{
            CreateMenuCategoryParams, CreateMenuItemParams, MenuCategoryWithItems,
            UpdateMenuCategoryParams, UpdateMenuItemParams,
        },
        service::menu::MenuService,
        state::AppState,
    },
};

/// Tag for grouping menu endpoints in OpenAPI documentation
pub static MENU_TAG: &str = "menu";

/// Default preparation time when an item is created without one.
const DEFAULT_PREPARATION_MINUTES: i32 = 15;

/// Get the guest menu: active categories with their available items.
#[utoipa::path(
    get,
    path = "/api/menu",
    tag = MENU_TAG,
    responses(
        (status = 200, description = "Active categories with available items", body = [MenuCategoryWithItemsDto]),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_menu(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = MenuService::new(&state.db);

    let menu = service.get_menu().await?;
    let menu_dto: Vec<_> = menu.into_iter().map(MenuCategoryWithItems::into_dto).collect();

    Ok((StatusCode::OK, Json(menu_dto)))
}

/// Get active menu categories without their items.
#[utoipa::path(
    get,
    path = "/api/menu/categories",
    tag = MENU_TAG,
    responses(
        (status = 200, description = "Active categories", body = [MenuCategoryDto]),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_categories(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = MenuService::new(&state.db);

    let categories = service.get_categories().await?;
    let categories_dto: Vec<MenuCategoryDto> =
        categories.into_iter().map(MenuCategoryDto::from).collect();

    Ok((StatusCode::OK, Json(categories_dto)))
}

/// Get the available items of one category.
#[utoipa::path(
    get,
    path = "/api/menu/categories/{id}/items",
    tag = MENU_TAG,
    params(
        ("id" = i32, Path, description = "Menu category id")
    ),
    responses(
        (status = 200, description = "Available items of the category", body = [MenuItemDto]),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_category_items(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = MenuService::new(&state.db);

    let items = service.get_category_items(id).await?;
    let items_dto: Vec<MenuItemDto> = items.into_iter().map(MenuItemDto::from).collect();

    Ok((StatusCode::OK, Json(items_dto)))
}

/// Get one menu item with its category name.
#[utoipa::path(
    get,
    path = "/api/menu/items/{id}",
    tag = MENU_TAG,
    params(
        ("id" = i32, Path, description = "Menu item id")
    ),
    responses(
        (status = 200, description = "The menu item", body = MenuItemDetailDto),
        (status = 404, description = "Menu item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_menu_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = MenuService::new(&state.db);

    let item = service.get_item(id).await?;

    Ok((StatusCode::OK, Json(item.into_dto())))
}

/// Create a menu category.
///
/// # Access Control
/// - `Staff` - Staff or admin may manage the menu
#[utoipa::path(
    post,
    path = "/api/menu/categories",
    tag = MENU_TAG,
    request_body = CreateMenuCategoryDto,
    responses(
        (status = 201, description = "Created category", body = MenuCategoryDto),
        (status = 400, description = "Missing category name", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not staff or admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_category(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateMenuCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let service = MenuService::new(&state.db);

    let category = service
        .create_category(CreateMenuCategoryParams {
            name: payload.name,
            description: payload.description,
            display_order: payload.display_order,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(MenuCategoryDto::from(category))))
}

/// Update a menu category.
///
/// # Access Control
/// - `Staff` - Staff or admin may manage the menu
#[utoipa::path(
    put,
    path = "/api/menu/categories/{id}",
    tag = MENU_TAG,
    params(
        ("id" = i32, Path, description = "Menu category id")
    ),
    request_body = UpdateMenuCategoryDto,
    responses(
        (status = 200, description = "Updated category", body = MenuCategoryDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not staff or admin", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_category(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateMenuCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let service = MenuService::new(&state.db);

    let category = service
        .update_category(UpdateMenuCategoryParams {
            id,
            name: payload.name,
            description: payload.description,
            display_order: payload.display_order,
            is_active: payload.is_active,
        })
        .await?;

    Ok((StatusCode::OK, Json(MenuCategoryDto::from(category))))
}

/// Delete an empty menu category.
///
/// # Access Control
/// - `Staff` - Staff or admin may manage the menu
#[utoipa::path(
    delete,
    path = "/api/menu/categories/{id}",
    tag = MENU_TAG,
    params(
        ("id" = i32, Path, description = "Menu category id")
    ),
    responses(
        (status = 200, description = "Category deleted", body = MessageDto),
        (status = 400, description = "Category still has menu items", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not staff or admin", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_category(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let service = MenuService::new(&state.db);

    service.delete_category(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Category deleted successfully".to_string(),
        }),
    ))
}

/// Create a menu item.
///
/// # Access Control
/// - `Staff` - Staff or admin may manage the menu
#[utoipa::path(
    post,
    path = "/api/menu/items",
    tag = MENU_TAG,
    request_body = CreateMenuItemDto,
    responses(
        (status = 201, description = "Created menu item", body = MenuItemDto),
        (status = 400, description = "Missing fields or unknown category", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not staff or admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_menu_item(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateMenuItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let service = MenuService::new(&state.db);

    let item = service
        .create_item(CreateMenuItemParams {
            category_id: payload.category_id,
            name: payload.name,
            description: payload.description,
            price_cents: payload.price_cents,
            image_url: payload.image_url,
            preparation_minutes: payload
                .preparation_minutes
                .unwrap_or(DEFAULT_PREPARATION_MINUTES),
        })
        .await?;

    Ok((StatusCode::CREATED, Json(MenuItemDto::from(item))))
}

/// Update a menu item.
///
/// # Access Control
/// - `Staff` - Staff or admin may manage the menu
#[utoipa::path(
    put,
    path = "/api/menu/items/{id}",
    tag = MENU_TAG,
    params(
        ("id" = i32, Path, description = "Menu item id")
    ),
    request_body = UpdateMenuItemDto,
    responses(
        (status = 200, description = "Updated menu item", body = MenuItemDto),
        (status = 400, description = "Unknown target category", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not staff or admin", body = ErrorDto),
        (status = 404, description = "Menu item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_menu_item(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateMenuItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let service = MenuService::new(&state.db);

    let item = service
        .update_item(UpdateMenuItemParams {
            id,
            category_id: payload.category_id,
            name: payload.name,
            description: payload.description,
            price_cents: payload.price_cents,
            image_url: payload.image_url,
            is_available: payload.is_available,
            preparation_minutes: payload.preparation_minutes,
        })
        .await?;

    Ok((StatusCode::OK, Json(MenuItemDto::from(item))))
}

/// Delete a menu item.
///
/// # Access Control
/// - `Staff` - Staff or admin may manage the menu
#[utoipa::path(
    delete,
    path = "/api/menu/items/{id}",
    tag = MENU_TAG,
    params(
        ("id" = i32, Path, description = "Menu item id")
    ),
    responses(
        (status = 200, description = "Menu item deleted", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not staff or admin", body = ErrorDto),
        (status = 404, description = "Menu item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_menu_item(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let service = MenuService::new(&state.db);

    service.delete_item(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Menu item deleted successfully".to_string(),
        }),
    ))
}
