//! Listing reviews and moderation.

use std::collections::HashMap;

use entity::sea_orm_active_enums::BookingStatus;
use sea_orm::DatabaseConnection;

use crate::{
    model::review::{RatingSummaryDto, ReviewDto},
    server::{
        data::{
            booking::BookingRepository, property::PropertyRepository, review::ReviewRepository,
            user::UserRepository,
        },
        error::{
            domain::{DomainError, Resource},
            AppError,
        },
        model::{
            review::{summarize, to_review_dto, CreateReviewParams},
            user::Caller,
        },
    },
};

pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Publishes a review by the caller.
    ///
    /// A referenced booking must be the caller's completed booking on the same
    /// listing and may be reviewed once.
    pub async fn create(
        &self,
        caller: Caller,
        params: CreateReviewParams,
    ) -> Result<entity::review::Model, AppError> {
        PropertyRepository::new(self.db)
            .find_by_id(params.property_id)
            .await?
            .ok_or_else(|| {
                AppError::from(DomainError::not_found(Resource::Property, params.property_id))
            })?;

        let review_repo = ReviewRepository::new(self.db);
        if let Some(booking_id) = params.booking_id {
            let booking = BookingRepository::new(self.db)
                .find_by_id(booking_id)
                .await?
                .ok_or_else(|| AppError::from(DomainError::not_found(Resource::Booking, booking_id)))?;

            if booking.tenant_id != caller.id
                || booking.property_id != params.property_id
                || booking.status != BookingStatus::Completed
            {
                return Err(DomainError::BookingNotReviewable.into());
            }
            if review_repo.exists_for_booking(booking_id).await? {
                return Err(DomainError::DuplicateReview.into());
            }
        }

        let review = review_repo.create(caller.id, params).await?;

        tracing::info!(
            "User {} reviewed property {} with rating {}",
            caller.id,
            review.property_id,
            review.rating
        );

        Ok(review)
    }

    /// Published reviews of a listing with the reviewers' names.
    pub async fn list_by_property(&self, property_id: i32) -> Result<Vec<ReviewDto>, AppError> {
        let reviews = ReviewRepository::new(self.db)
            .list_published_by_property(property_id)
            .await?;

        self.with_reviewer_names(reviews).await
    }

    pub async fn average_rating(&self, property_id: i32) -> Result<RatingSummaryDto, AppError> {
        let ratings = ReviewRepository::new(self.db)
            .published_ratings(property_id)
            .await?;

        Ok(summarize(&ratings))
    }

    /// One page of every review, published or not, with the overall count.
    pub async fn list_all(
        &self,
        limit: u64,
        offset: u64,
    ) -> Result<(Vec<ReviewDto>, u64), AppError> {
        let repo = ReviewRepository::new(self.db);

        let reviews = repo.list_all(limit, offset).await?;
        let total = repo.count().await?;

        Ok((self.with_reviewer_names(reviews).await?, total))
    }

    pub async fn count(&self) -> Result<u64, AppError> {
        Ok(ReviewRepository::new(self.db).count().await?)
    }

    pub async fn set_published(
        &self,
        id: i32,
        is_published: bool,
    ) -> Result<entity::review::Model, AppError> {
        let review = ReviewRepository::new(self.db)
            .set_published(id, is_published)
            .await?
            .ok_or_else(|| AppError::from(DomainError::not_found(Resource::Review, id)))?;

        tracing::info!("Review {} published set to {}", id, is_published);

        Ok(review)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !ReviewRepository::new(self.db).delete(id).await? {
            return Err(DomainError::not_found(Resource::Review, id).into());
        }

        tracing::info!("Deleted review {}", id);

        Ok(())
    }

    async fn with_reviewer_names(
        &self,
        reviews: Vec<entity::review::Model>,
    ) -> Result<Vec<ReviewDto>, AppError> {
        let mut tenant_ids: Vec<i32> = reviews.iter().map(|r| r.tenant_id).collect();
        tenant_ids.sort_unstable();
        tenant_ids.dedup();

        let names: HashMap<i32, Option<String>> = UserRepository::new(self.db)
            .names_by_ids(tenant_ids)
            .await?
            .into_iter()
            .collect();

        Ok(reviews
            .into_iter()
            .map(|review| {
                let name = names.get(&review.tenant_id).cloned().flatten();
                to_review_dto(review, name)
            })
            .collect())
    }
}
