use chrono::{DateTime, Duration, Utc};
use entity::sea_orm_active_enums::NotificationKind;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    data::{booking::BookingRepository, notification::NotificationRepository},
    error::AppError,
    model::notification::{CreateNotificationParams, RELATED_BOOKING},
    service::notification::NotificationService,
};

/// Starts the lease expiry reminder scheduler
///
/// On every tick of `cron` the job looks for active bookings whose move-out date
/// falls within the next `reminder_days` days and notifies both the tenant and the
/// landlord once per booking.
///
/// # Arguments
/// - `db`: Database connection
/// - `cron`: Six-field cron expression, seconds first
/// - `reminder_days`: Look-ahead window in days
pub async fn start_scheduler(
    db: DatabaseConnection,
    cron: String,
    reminder_days: i64,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_db = db.clone();

    let job = Job::new_async(cron.as_str(), move |_uuid, _lock| {
        let db = job_db.clone();

        Box::pin(async move {
            match send_lease_reminders(&db, Utc::now(), reminder_days).await {
                Ok(0) => {}
                Ok(sent) => tracing::info!("Sent {} lease expiry reminders", sent),
                Err(e) => tracing::error!("Error processing lease reminders: {}", e),
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Lease reminder scheduler started ({})", cron);

    Ok(())
}

/// Notifies tenant and landlord of every active booking ending within `reminder_days`.
///
/// A participant who already has a `lease_expiring` notification for the booking
/// is skipped, so repeated runs send each reminder once. Returns the number of
/// notifications created.
pub async fn send_lease_reminders(
    db: &DatabaseConnection,
    now: DateTime<Utc>,
    reminder_days: i64,
) -> Result<u64, AppError> {
    let bookings = BookingRepository::new(db)
        .active_ending_between(now, now + Duration::days(reminder_days))
        .await?;

    let notification_repo = NotificationRepository::new(db);
    let notification_service = NotificationService::new(db);
    let mut sent = 0;

    for booking in bookings {
        let days_left = (booking.move_out_date - now).num_days();
        let move_out = booking.move_out_date.format("%Y-%m-%d");

        for user_id in [booking.tenant_id, booking.landlord_id] {
            if notification_repo
                .exists_for(
                    user_id,
                    NotificationKind::LeaseExpiring,
                    RELATED_BOOKING,
                    booking.id,
                )
                .await?
            {
                continue;
            }

            notification_service
                .create(
                    CreateNotificationParams::new(
                        user_id,
                        NotificationKind::LeaseExpiring,
                        "Lease ending soon",
                        "عقد الإيجار على وشك الانتهاء",
                    )
                    .content(
                        format!(
                            "Booking #{} ends on {} ({} days left)",
                            booking.id, move_out, days_left
                        ),
                        format!(
                            "الحجز رقم {} ينتهي في {} (متبقي {} يوم)",
                            booking.id, move_out, days_left
                        ),
                    )
                    .related(RELATED_BOOKING, booking.id),
                )
                .await?;
            sent += 1;
        }
    }

    Ok(sent)
}
