//! Booking domain models, stay length calculation and the status state machine.

use chrono::{DateTime, Datelike, Months, Utc};
use entity::sea_orm_active_enums::{BookingStatus, UserRole};
use sea_orm::ActiveEnum;

use crate::{
    model::booking::{BookingDto, UpdateBookingStatusDto},
    server::{
        error::domain::DomainError,
        model::user::Caller,
        util::sanitize::sanitize_opt,
    },
};

/// How the caller relates to a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingActor {
    Tenant,
    Landlord,
    Admin,
}

impl BookingActor {
    /// Resolves the caller's role on `booking`, or `None` for outsiders.
    ///
    /// A landlord booking their own listing as tenant is treated as the landlord.
    pub fn of(caller: &Caller, booking: &entity::booking::Model) -> Option<Self> {
        if caller.role == UserRole::Admin {
            Some(Self::Admin)
        } else if caller.id == booking.landlord_id {
            Some(Self::Landlord)
        } else if caller.id == booking.tenant_id {
            Some(Self::Tenant)
        } else {
            None
        }
    }

    fn manages(self) -> bool {
        matches!(self, Self::Landlord | Self::Admin)
    }
}

/// Checks whether `actor` may move a booking from `from` to `to`.
pub fn ensure_transition(
    from: BookingStatus,
    to: BookingStatus,
    actor: BookingActor,
) -> Result<(), DomainError> {
    use BookingStatus::*;

    let allowed = match (from, to) {
        (Pending, Approved) | (Pending, Rejected) => actor.manages(),
        (Pending, Cancelled) => true,
        (Approved, Active) => actor.manages(),
        (Approved, Cancelled) => true,
        (Active, Completed) => actor.manages(),
        _ => false,
    };

    if allowed {
        Ok(())
    } else {
        Err(DomainError::InvalidBookingTransition {
            from: from.to_value(),
            to: to.to_value(),
        })
    }
}

/// Whole calendar months between two dates, rounded up, minimum one.
///
/// Returns `InvalidDateRange` unless `move_out` is after `move_in`.
pub fn stay_months(move_in: DateTime<Utc>, move_out: DateTime<Utc>) -> Result<i32, DomainError> {
    if move_out <= move_in {
        return Err(DomainError::InvalidDateRange);
    }

    let mut months = (month_index(move_out) - month_index(move_in)).max(0);
    while months > 0 && months_after(move_in, months).is_some_and(|anchor| anchor > move_out) {
        months -= 1;
    }
    if months_after(move_in, months).is_some_and(|anchor| anchor < move_out) {
        months += 1;
    }

    i32::try_from(months.max(1)).map_err(|_| DomainError::InvalidDateRange)
}

fn month_index(date: DateTime<Utc>) -> i64 {
    i64::from(date.year()) * 12 + i64::from(date.month0())
}

fn months_after(start: DateTime<Utc>, months: i64) -> Option<DateTime<Utc>> {
    let months = u32::try_from(months).ok()?;
    start.checked_add_months(Months::new(months))
}

#[derive(Debug, Clone)]
pub struct CreateBookingParams {
    pub property_id: i32,
    pub tenant_id: i32,
    pub landlord_id: i32,
    pub status: BookingStatus,
    pub move_in_date: DateTime<Utc>,
    pub move_out_date: DateTime<Utc>,
    pub duration_months: i32,
    pub monthly_rent: i64,
    pub security_deposit: Option<i64>,
    pub total_amount: i64,
    pub tenant_notes: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UpdateBookingStatusParams {
    pub status: BookingStatus,
    pub landlord_notes: Option<String>,
    pub rejection_reason: Option<String>,
}

impl From<UpdateBookingStatusDto> for UpdateBookingStatusParams {
    fn from(dto: UpdateBookingStatusDto) -> Self {
        Self {
            status: dto.status,
            landlord_notes: sanitize_opt(dto.landlord_notes),
            rejection_reason: sanitize_opt(dto.rejection_reason)
                .map(|r| r.trim().to_string())
                .filter(|r| !r.is_empty()),
        }
    }
}

impl From<entity::booking::Model> for BookingDto {
    fn from(booking: entity::booking::Model) -> Self {
        Self {
            id: booking.id,
            property_id: booking.property_id,
            tenant_id: booking.tenant_id,
            landlord_id: booking.landlord_id,
            status: booking.status,
            move_in_date: booking.move_in_date,
            move_out_date: booking.move_out_date,
            duration_months: booking.duration_months,
            monthly_rent: booking.monthly_rent,
            security_deposit: booking.security_deposit,
            total_amount: booking.total_amount,
            tenant_notes: booking.tenant_notes,
            landlord_notes: booking.landlord_notes,
            rejection_reason: booking.rejection_reason,
            created_at: booking.created_at,
            updated_at: booking.updated_at,
        }
    }
}
