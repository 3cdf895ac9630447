use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{PreferredLang, UserRole};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub open_id: String,
    pub name: Option<String>,
    pub name_ar: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[schema(value_type = String)]
    pub role: UserRole,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub bio_ar: Option<String>,
    #[schema(value_type = String)]
    pub preferred_lang: PreferredLang,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub last_signed_in: DateTime<Utc>,
}

/// Profile data the identity gateway knows about the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpsertMeDto {
    pub name: Option<String>,
    pub name_ar: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateProfileDto {
    pub name: Option<String>,
    pub name_ar: Option<String>,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub bio_ar: Option<String>,
    pub avatar_url: Option<String>,
    #[schema(value_type = Option<String>)]
    pub preferred_lang: Option<PreferredLang>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateRoleDto {
    #[schema(value_type = String)]
    pub role: UserRole,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserPageDto {
    pub items: Vec<UserDto>,
    pub total: u64,
    pub limit: u64,
    pub offset: u64,
}
