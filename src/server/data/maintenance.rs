use chrono::Utc;
use entity::sea_orm_active_enums::{MaintenancePriority, MaintenanceStatus};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    model::maintenance::{CreateMaintenanceParams, UpdateMaintenanceParams},
    util::json::to_json_list,
};

pub struct MaintenanceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MaintenanceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Opens a request in `submitted` status.
    ///
    /// # Arguments
    /// - `tenant_id` - Reporting tenant
    /// - `landlord_id` - Owner of the listing, copied from the property
    /// - `params` - Validated request fields
    pub async fn create(
        &self,
        tenant_id: i32,
        landlord_id: i32,
        params: CreateMaintenanceParams,
    ) -> Result<entity::maintenance_request::Model, DbErr> {
        let now = Utc::now();

        entity::maintenance_request::ActiveModel {
            property_id: ActiveValue::Set(params.property_id),
            tenant_id: ActiveValue::Set(tenant_id),
            landlord_id: ActiveValue::Set(landlord_id),
            booking_id: ActiveValue::Set(params.booking_id),
            title: ActiveValue::Set(params.title),
            title_ar: ActiveValue::Set(params.title_ar),
            description: ActiveValue::Set(params.description),
            description_ar: ActiveValue::Set(params.description_ar),
            category: ActiveValue::Set(params.category),
            priority: ActiveValue::Set(params.priority),
            status: ActiveValue::Set(MaintenanceStatus::Submitted),
            photos: ActiveValue::Set(to_json_list(params.photos)),
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

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::maintenance_request::Model>, DbErr> {
        entity::prelude::MaintenanceRequest::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Applies a status change and landlord response.
    ///
    /// Moving to `completed` from another status stamps `resolved_at`.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Updated request
    /// - `Ok(None)` - No request with that id
    pub async fn update(
        &self,
        id: i32,
        params: UpdateMaintenanceParams,
    ) -> Result<Option<entity::maintenance_request::Model>, DbErr> {
        let Some(request) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let now = Utc::now();
        let previous = request.status;
        let mut active = request.into_active_model();
        if let Some(status) = params.status {
            active.status = ActiveValue::Set(status);
            if status == MaintenanceStatus::Completed && previous != MaintenanceStatus::Completed
            {
                active.resolved_at = ActiveValue::Set(Some(now));
            }
        }
        if let Some(response) = params.landlord_response {
            active.landlord_response = ActiveValue::Set(Some(response));
        }
        if let Some(response_ar) = params.landlord_response_ar {
            active.landlord_response_ar = ActiveValue::Set(Some(response_ar));
        }
        if let Some(cost) = params.estimated_cost {
            active.estimated_cost = ActiveValue::Set(Some(cost));
        }
        active.updated_at = ActiveValue::Set(now);

        active.update(self.db).await.map(Some)
    }

    pub async fn list_by_tenant(
        &self,
        tenant_id: i32,
    ) -> Result<Vec<entity::maintenance_request::Model>, DbErr> {
        entity::prelude::MaintenanceRequest::find()
            .filter(entity::maintenance_request::Column::TenantId.eq(tenant_id))
            .order_by_desc(entity::maintenance_request::Column::CreatedAt)
            .order_by_desc(entity::maintenance_request::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn list_by_landlord(
        &self,
        landlord_id: i32,
    ) -> Result<Vec<entity::maintenance_request::Model>, DbErr> {
        entity::prelude::MaintenanceRequest::find()
            .filter(entity::maintenance_request::Column::LandlordId.eq(landlord_id))
            .order_by_desc(entity::maintenance_request::Column::CreatedAt)
            .order_by_desc(entity::maintenance_request::Column::Id)
            .all(self.db)
            .await
    }

    /// Status and priority of every request, for analytics.
    pub async fn status_priority_pairs(
        &self,
    ) -> Result<Vec<(MaintenanceStatus, MaintenancePriority)>, DbErr> {
        entity::prelude::MaintenanceRequest::find()
            .select_only()
            .column(entity::maintenance_request::Column::Status)
            .column(entity::maintenance_request::Column::Priority)
            .into_tuple()
            .all(self.db)
            .await
    }
}
