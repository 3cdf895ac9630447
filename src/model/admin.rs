use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StatsDto {
    pub users: u64,
    pub properties: u64,
    pub active_properties: u64,
    pub bookings: u64,
    pub pending_bookings: u64,
    pub reviews: u64,
    /// Halalas
    pub total_revenue: i64,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AnalyticsQuery {
    /// Months of history, 1 to 24 (default 12)
    pub months: Option<i64>,
}

/// Bookings created in one calendar month, split by current status.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MonthlyBookingsDto {
    /// `YYYY-MM`
    pub month: String,
    pub total: u64,
    pub pending: u64,
    pub approved: u64,
    pub rejected: u64,
    pub active: u64,
    pub completed: u64,
    pub cancelled: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MonthlyRevenueDto {
    pub month: String,
    pub revenue: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MonthlyRegistrationsDto {
    pub month: String,
    pub total: u64,
    pub users: u64,
    pub tenants: u64,
    pub landlords: u64,
    pub admins: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LabelCountDto {
    pub label: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TopPropertyDto {
    pub property_id: i32,
    pub title_en: String,
    pub title_ar: String,
    pub bookings: u64,
    /// Total booking value in halalas
    pub revenue: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalyticsDto {
    pub months: u32,
    pub bookings_by_month: Vec<MonthlyBookingsDto>,
    pub revenue_by_month: Vec<MonthlyRevenueDto>,
    pub registrations_by_month: Vec<MonthlyRegistrationsDto>,
    pub booking_status_distribution: Vec<LabelCountDto>,
    pub properties_by_type: Vec<LabelCountDto>,
    pub properties_by_city: Vec<LabelCountDto>,
    /// Percentage of active listings with an active booking
    pub occupancy_rate: u32,
    pub top_properties: Vec<TopPropertyDto>,
    pub maintenance_by_status: Vec<LabelCountDto>,
    pub maintenance_by_priority: Vec<LabelCountDto>,
}
