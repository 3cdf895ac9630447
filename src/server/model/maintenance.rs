//! Maintenance request models and the request status state machine.

use entity::sea_orm_active_enums::{MaintenanceCategory, MaintenancePriority, MaintenanceStatus};
use sea_orm::ActiveEnum;

use crate::{
    model::maintenance::{
        CreateMaintenanceRequestDto, MaintenanceRequestDto, UpdateMaintenanceRequestDto,
    },
    server::{
        error::{domain::DomainError, internal::InternalError},
        util::{
            json::from_json_list,
            sanitize::{sanitize_opt, sanitize_text},
        },
    },
};

#[derive(Debug, Clone)]
pub struct CreateMaintenanceParams {
    pub property_id: i32,
    pub booking_id: Option<i32>,
    pub title: String,
    pub title_ar: Option<String>,
    pub description: String,
    pub description_ar: Option<String>,
    pub category: MaintenanceCategory,
    pub priority: MaintenancePriority,
    pub photos: Vec<String>,
}

impl TryFrom<CreateMaintenanceRequestDto> for CreateMaintenanceParams {
    type Error = DomainError;

    fn try_from(dto: CreateMaintenanceRequestDto) -> Result<Self, Self::Error> {
        let title = sanitize_text(dto.title.trim());
        if title.is_empty() {
            return Err(DomainError::Invalid("title"));
        }
        let description = sanitize_text(dto.description.trim());
        if description.is_empty() {
            return Err(DomainError::Invalid("description"));
        }

        Ok(Self {
            property_id: dto.property_id,
            booking_id: dto.booking_id,
            title,
            title_ar: sanitize_opt(dto.title_ar),
            description,
            description_ar: sanitize_opt(dto.description_ar),
            category: dto.category.unwrap_or(MaintenanceCategory::Other),
            priority: dto.priority.unwrap_or(MaintenancePriority::Medium),
            photos: dto.photos,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateMaintenanceParams {
    pub status: Option<MaintenanceStatus>,
    pub landlord_response: Option<String>,
    pub landlord_response_ar: Option<String>,
    pub estimated_cost: Option<i64>,
}

impl TryFrom<UpdateMaintenanceRequestDto> for UpdateMaintenanceParams {
    type Error = DomainError;

    fn try_from(dto: UpdateMaintenanceRequestDto) -> Result<Self, Self::Error> {
        if dto.estimated_cost.is_some_and(|c| c < 0) {
            return Err(DomainError::Invalid("estimated_cost"));
        }

        Ok(Self {
            status: dto.status,
            landlord_response: sanitize_opt(dto.landlord_response),
            landlord_response_ar: sanitize_opt(dto.landlord_response_ar),
            estimated_cost: dto.estimated_cost,
        })
    }
}

impl UpdateMaintenanceParams {
    /// True when only a status change is requested.
    pub fn is_status_only(&self) -> bool {
        self.landlord_response.is_none()
            && self.landlord_response_ar.is_none()
            && self.estimated_cost.is_none()
    }
}

/// Validates a maintenance status change.
///
/// `by_tenant` restricts the move to cancelling a freshly submitted request.
pub fn ensure_transition(
    from: MaintenanceStatus,
    to: MaintenanceStatus,
    by_tenant: bool,
) -> Result<(), DomainError> {
    use MaintenanceStatus::*;

    let allowed = if by_tenant {
        matches!((from, to), (Submitted, Cancelled))
    } else {
        matches!(
            (from, to),
            (Submitted, Acknowledged)
                | (Submitted, InProgress)
                | (Submitted, Cancelled)
                | (Acknowledged, InProgress)
                | (Acknowledged, Cancelled)
                | (InProgress, Completed)
                | (InProgress, Cancelled)
        )
    };

    if allowed {
        Ok(())
    } else {
        Err(DomainError::InvalidMaintenanceTransition {
            from: from.to_value(),
            to: to.to_value(),
        })
    }
}

impl TryFrom<entity::maintenance_request::Model> for MaintenanceRequestDto {
    type Error = InternalError;

    fn try_from(request: entity::maintenance_request::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            photos: from_json_list("maintenance_request.photos", &request.photos)?,
            id: request.id,
            property_id: request.property_id,
            tenant_id: request.tenant_id,
            landlord_id: request.landlord_id,
            booking_id: request.booking_id,
            title: request.title,
            title_ar: request.title_ar,
            description: request.description,
            description_ar: request.description_ar,
            category: request.category,
            priority: request.priority,
            status: request.status,
            landlord_response: request.landlord_response,
            landlord_response_ar: request.landlord_response_ar,
            estimated_cost: request.estimated_cost,
            resolved_at: request.resolved_at,
            created_at: request.created_at,
            updated_at: request.updated_at,
        })
    }
}

pub fn into_request_dtos(
    requests: Vec<entity::maintenance_request::Model>,
) -> Result<Vec<MaintenanceRequestDto>, InternalError> {
    requests
        .into_iter()
        .map(MaintenanceRequestDto::try_from)
        .collect()
}
