use axum::http::{HeaderMap, HeaderValue};
use entity::sea_orm_active_enums::UserRole;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Permission, OPEN_ID_HEADER},
};

mod require;

fn headers_for(open_id: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(OPEN_ID_HEADER, HeaderValue::from_str(open_id).unwrap());
    headers
}
