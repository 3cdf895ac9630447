//! Conversions between string lists and JSON columns.

use sea_orm::prelude::Json;

use crate::server::error::internal::InternalError;

/// Encodes a list of strings as a JSON array column value.
pub fn to_json_list(values: Vec<String>) -> Json {
    Json::Array(values.into_iter().map(Json::String).collect())
}

/// Decodes a JSON array column into strings.
///
/// `null` reads as an empty list; anything other than an array of strings is
/// reported as malformed.
pub fn from_json_list(column: &'static str, value: &Json) -> Result<Vec<String>, InternalError> {
    match value {
        Json::Null => Ok(Vec::new()),
        other => serde_json::from_value::<Vec<String>>(other.clone())
            .map_err(|source| InternalError::MalformedJson { column, source }),
    }
}
