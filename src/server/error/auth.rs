use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The request carried no identity header.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Request is missing the identity header")]
    MissingIdentity,

    /// The identity header names a user that has never been registered.
    ///
    /// Results in a 401 Unauthorized response. Clients should call `PUT /api/me` first.
    #[error("No user registered for open id {0}")]
    UnknownUser(String),

    /// The user is known but lacks the permission or ownership the operation needs.
    ///
    /// The reason is logged; the client gets a generic 403 Forbidden.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingIdentity` / `UnknownUser` → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden
///
/// All errors are logged at debug level while the client-facing message stays generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MissingIdentity | Self::UnknownUser(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Authentication required".to_string(),
                    error_ar: Some("يجب تسجيل الدخول".to_string()),
                }),
            )
                .into_response(),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "You do not have permission to perform this action".to_string(),
                    error_ar: Some("ليس لديك صلاحية لتنفيذ هذا الإجراء".to_string()),
                }),
            )
                .into_response(),
        }
    }
}
