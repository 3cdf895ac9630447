//! Platform statistics and analytics for administrators.

use chrono::Utc;
use entity::sea_orm_active_enums::{BookingStatus, PropertyStatus};
use sea_orm::DatabaseConnection;

use crate::{
    model::admin::{AnalyticsDto, StatsDto},
    server::{
        data::{
            booking::BookingRepository, maintenance::MaintenanceRepository,
            payment::PaymentRepository, property::PropertyRepository, user::UserRepository,
        },
        error::AppError,
        model::analytics::{
            bookings_by_month, distribution, maintenance_summary, occupancy_rate, ranked,
            registrations_by_month, revenue_by_month, top_properties, MonthWindow,
        },
        service::{
            booking::BookingService, payment::PaymentService, property::PropertyService,
            review::ReviewService, user::UserService,
        },
    },
};

pub struct AdminService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Headline counters for the admin dashboard.
    pub async fn stats(&self) -> Result<StatsDto, AppError> {
        let property_service = PropertyService::new(self.db);
        let booking_service = BookingService::new(self.db);

        Ok(StatsDto {
            users: UserService::new(self.db).count().await?,
            properties: property_service.count(None).await?,
            active_properties: property_service
                .count(Some(PropertyStatus::Active))
                .await?,
            bookings: booking_service.count(None).await?,
            pending_bookings: booking_service
                .count(Some(BookingStatus::Pending))
                .await?,
            reviews: ReviewService::new(self.db).count().await?,
            total_revenue: PaymentService::new(self.db).total_revenue().await?,
        })
    }

    /// Dashboard figures over the last `months` calendar months.
    ///
    /// `months` must already be clamped.
    pub async fn analytics(&self, months: u32) -> Result<AnalyticsDto, AppError> {
        let window = MonthWindow::ending_at(Utc::now(), months);

        let bookings = BookingRepository::new(self.db).all().await?;
        let properties = PropertyRepository::new(self.db).all().await?;
        let payments = PaymentRepository::new(self.db)
            .revenue_since(window.start)
            .await?;
        let registrations = UserRepository::new(self.db)
            .registrations_since(window.start)
            .await?;
        let maintenance = MaintenanceRepository::new(self.db)
            .status_priority_pairs()
            .await?;

        let (maintenance_by_status, maintenance_by_priority) = maintenance_summary(&maintenance);

        tracing::debug!(
            "Computed analytics over {} months: {} bookings, {} properties",
            months,
            bookings.len(),
            properties.len()
        );

        Ok(AnalyticsDto {
            months,
            bookings_by_month: bookings_by_month(&window, &bookings),
            revenue_by_month: revenue_by_month(&window, &payments),
            registrations_by_month: registrations_by_month(&window, &registrations),
            booking_status_distribution: distribution(bookings.iter().map(|b| b.status)),
            properties_by_type: ranked(
                properties
                    .iter()
                    .map(|p| sea_orm::ActiveEnum::to_value(&p.property_type)),
            ),
            properties_by_city: ranked(properties.iter().filter_map(|p| p.city.clone())),
            occupancy_rate: occupancy_rate(&properties, &bookings),
            top_properties: top_properties(&properties, &bookings),
            maintenance_by_status,
            maintenance_by_priority,
        })
    }
}
