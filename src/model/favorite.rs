use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FavoriteStatusDto {
    pub property_id: i32,
    pub is_favorite: bool,
}
