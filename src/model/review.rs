use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReviewDto {
    pub id: i32,
    pub property_id: i32,
    pub tenant_id: i32,
    pub booking_id: Option<i32>,
    pub rating: i32,
    pub comment: Option<String>,
    pub comment_ar: Option<String>,
    pub is_published: bool,
    pub reviewer_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateReviewDto {
    pub property_id: i32,
    pub booking_id: Option<i32>,
    pub rating: i32,
    pub comment: Option<String>,
    pub comment_ar: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RatingSummaryDto {
    /// Mean of published ratings, 0 when there are none
    pub average: f64,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SetPublishedDto {
    pub is_published: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReviewPageDto {
    pub items: Vec<ReviewDto>,
    pub total: u64,
    pub limit: u64,
    pub offset: u64,
}
