use crate::server::{
    controller::auth::SESSION_AUTH_USER_ID,
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Permission},
};
use test_utils::{builder::TestBuilder, factory};

mod require;
