//! User domain models and parameters.

use entity::sea_orm_active_enums::{PreferredLang, UserRole};

use crate::{
    model::user::{UpdateProfileDto, UpsertMeDto, UserDto},
    server::error::auth::AuthError,
};

/// The authenticated user performing an operation.
///
/// Services use it for ownership and participant checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    pub id: i32,
    pub role: UserRole,
}

impl Caller {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// True when the caller is `owner_id` or an admin.
    pub fn owns_or_admin(&self, owner_id: i32) -> bool {
        self.id == owner_id || self.is_admin()
    }

    /// Fails with `AccessDenied` unless the caller is `owner_id` or an admin.
    pub fn ensure_owner_or_admin(&self, owner_id: i32, action: &str) -> Result<(), AuthError> {
        if self.owns_or_admin(owner_id) {
            Ok(())
        } else {
            Err(self.denied(action))
        }
    }

    /// Owner id for a new record: admins may act for `requested`, everyone else
    /// always owns what they create.
    pub fn owner_for(&self, requested: Option<i32>) -> i32 {
        match requested {
            Some(id) if self.is_admin() => id,
            _ => self.id,
        }
    }

    pub fn denied(&self, action: &str) -> AuthError {
        AuthError::AccessDenied(self.id, format!("Not allowed to {}", action))
    }
}

impl From<&entity::user::Model> for Caller {
    fn from(user: &entity::user::Model) -> Self {
        Self {
            id: user.id,
            role: user.role,
        }
    }
}

/// Parameters for inserting or refreshing a user keyed by open id.
///
/// `None` fields keep whatever is stored.
#[derive(Debug, Clone, Default)]
pub struct UpsertUserParam {
    pub open_id: String,
    pub name: Option<String>,
    pub name_ar: Option<String>,
    pub email: Option<String>,
    pub role: Option<UserRole>,
}

impl UpsertUserParam {
    pub fn from_dto(open_id: String, dto: UpsertMeDto) -> Self {
        Self {
            open_id,
            name: dto.name,
            name_ar: dto.name_ar,
            email: dto.email,
            role: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateProfileParams {
    pub name: Option<String>,
    pub name_ar: Option<String>,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub bio_ar: Option<String>,
    pub avatar_url: Option<String>,
    pub preferred_lang: Option<PreferredLang>,
}

impl From<UpdateProfileDto> for UpdateProfileParams {
    fn from(dto: UpdateProfileDto) -> Self {
        Self {
            name: dto.name,
            name_ar: dto.name_ar,
            phone: dto.phone,
            bio: dto.bio,
            bio_ar: dto.bio_ar,
            avatar_url: dto.avatar_url,
            preferred_lang: dto.preferred_lang,
        }
    }
}

impl From<entity::user::Model> for UserDto {
    fn from(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            open_id: user.open_id,
            name: user.name,
            name_ar: user.name_ar,
            email: user.email,
            phone: user.phone,
            role: user.role,
            avatar_url: user.avatar_url,
            bio: user.bio,
            bio_ar: user.bio_ar,
            preferred_lang: user.preferred_lang,
            is_verified: user.is_verified,
            created_at: user.created_at,
            last_signed_in: user.last_signed_in,
        }
    }
}
