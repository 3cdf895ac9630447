use crate::{
    model::review::{CreateReviewDto, RatingSummaryDto, ReviewDto},
    server::{error::domain::DomainError, util::sanitize::sanitize_opt},
};

#[derive(Debug, Clone)]
pub struct CreateReviewParams {
    pub property_id: i32,
    pub booking_id: Option<i32>,
    pub rating: i32,
    pub comment: Option<String>,
    pub comment_ar: Option<String>,
}

impl TryFrom<CreateReviewDto> for CreateReviewParams {
    type Error = DomainError;

    fn try_from(dto: CreateReviewDto) -> Result<Self, Self::Error> {
        if !(1..=5).contains(&dto.rating) {
            return Err(DomainError::InvalidRating);
        }

        Ok(Self {
            property_id: dto.property_id,
            booking_id: dto.booking_id,
            rating: dto.rating,
            comment: sanitize_opt(dto.comment),
            comment_ar: sanitize_opt(dto.comment_ar),
        })
    }
}

/// Mean of `ratings`, or zero when there are none.
pub fn summarize(ratings: &[i32]) -> RatingSummaryDto {
    if ratings.is_empty() {
        return RatingSummaryDto {
            average: 0.0,
            count: 0,
        };
    }

    let sum: i64 = ratings.iter().map(|r| i64::from(*r)).sum();
    RatingSummaryDto {
        average: sum as f64 / ratings.len() as f64,
        count: ratings.len() as u64,
    }
}

/// Builds the response DTO with the reviewer's display name.
pub fn to_review_dto(review: entity::review::Model, reviewer_name: Option<String>) -> ReviewDto {
    ReviewDto {
        id: review.id,
        property_id: review.property_id,
        tenant_id: review.tenant_id,
        booking_id: review.booking_id,
        rating: review.rating,
        comment: review.comment,
        comment_ar: review.comment_ar,
        is_published: review.is_published,
        reviewer_name,
        created_at: review.created_at,
    }
}
