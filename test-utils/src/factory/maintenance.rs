//! Maintenance request factory.

use chrono::Utc;
use entity::sea_orm_active_enums::{MaintenanceCategory, MaintenancePriority, MaintenanceStatus};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for maintenance requests raised by a tenant against a property.
///
/// Defaults to a submitted, medium priority plumbing request.
pub struct MaintenanceFactory<'a> {
    db: &'a DatabaseConnection,
    property: &'a entity::property::Model,
    tenant_id: i32,
    category: MaintenanceCategory,
    priority: MaintenancePriority,
    status: MaintenanceStatus,
}

impl<'a> MaintenanceFactory<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        property: &'a entity::property::Model,
        tenant_id: i32,
    ) -> Self {
        Self {
            db,
            property,
            tenant_id,
            category: MaintenanceCategory::Plumbing,
            priority: MaintenancePriority::Medium,
            status: MaintenanceStatus::Submitted,
        }
    }

    pub fn category(mut self, category: MaintenanceCategory) -> Self {
        self.category = category;
        self
    }

    pub fn priority(mut self, priority: MaintenancePriority) -> Self {
        self.priority = priority;
        self
    }

    pub fn status(mut self, status: MaintenanceStatus) -> Self {
        self.status = status;
        self
    }

    pub async fn build(self) -> Result<entity::maintenance_request::Model, DbErr> {
        let now = Utc::now();
        entity::maintenance_request::ActiveModel {
            property_id: ActiveValue::Set(self.property.id),
            tenant_id: ActiveValue::Set(self.tenant_id),
            landlord_id: ActiveValue::Set(self.property.landlord_id),
            booking_id: ActiveValue::Set(None),
            title: ActiveValue::Set("Leaking kitchen tap".to_string()),
            title_ar: ActiveValue::Set(None),
            description: ActiveValue::Set("Water drips constantly".to_string()),
            description_ar: ActiveValue::Set(None),
            category: ActiveValue::Set(self.category),
            priority: ActiveValue::Set(self.priority),
            status: ActiveValue::Set(self.status),
            photos: ActiveValue::Set(serde_json::json!([])),
            landlord_response: ActiveValue::Set(None),
            landlord_response_ar: ActiveValue::Set(None),
            estimated_cost: ActiveValue::Set(None),
            resolved_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
