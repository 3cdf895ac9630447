//! Aggregation behind the admin analytics dashboard.
//!
//! Everything here works on rows already loaded from the database so the
//! bucketing rules can be tested without one.

use std::collections::HashMap;

use chrono::{DateTime, Datelike, Months, NaiveDate, Utc};
use entity::sea_orm_active_enums::{
    BookingStatus, MaintenancePriority, MaintenanceStatus, PropertyStatus, UserRole,
};
use sea_orm::{ActiveEnum, Iterable};

use crate::model::admin::{
    LabelCountDto, MonthlyBookingsDto, MonthlyRegistrationsDto, MonthlyRevenueDto, TopPropertyDto,
};

pub const DEFAULT_MONTHS: u32 = 12;
pub const MAX_MONTHS: u32 = 24;
const TOP_PROPERTIES: usize = 5;

/// Clamps the requested history length to 1..=24 months.
pub fn clamp_months(requested: Option<i64>) -> u32 {
    match requested {
        Some(months) => months.clamp(1, i64::from(MAX_MONTHS)) as u32,
        None => DEFAULT_MONTHS,
    }
}

/// Consecutive calendar months ending with the one containing `now`, oldest first.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthWindow {
    pub start: DateTime<Utc>,
    keys: Vec<String>,
}

impl MonthWindow {
    pub fn ending_at(now: DateTime<Utc>, months: u32) -> Self {
        let current = NaiveDate::from_ymd_opt(now.year(), now.month(), 1).unwrap_or(now.date_naive());
        let first = current
            .checked_sub_months(Months::new(months.saturating_sub(1)))
            .unwrap_or(current);

        let keys = (0..months)
            .filter_map(|i| first.checked_add_months(Months::new(i)))
            .map(|d| month_key(d.year(), d.month()))
            .collect();

        Self {
            start: first.and_time(chrono::NaiveTime::MIN).and_utc(),
            keys,
        }
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    fn position(&self, at: DateTime<Utc>) -> Option<usize> {
        let key = month_key(at.year(), at.month());
        self.keys.iter().position(|k| *k == key)
    }
}

fn month_key(year: i32, month: u32) -> String {
    format!("{:04}-{:02}", year, month)
}

/// Bookings created in each month of the window, split by current status.
pub fn bookings_by_month(
    window: &MonthWindow,
    bookings: &[entity::booking::Model],
) -> Vec<MonthlyBookingsDto> {
    let mut rows: Vec<MonthlyBookingsDto> = window
        .keys()
        .iter()
        .map(|month| MonthlyBookingsDto {
            month: month.clone(),
            ..Default::default()
        })
        .collect();

    for booking in bookings {
        let Some(row) = window.position(booking.created_at).map(|i| &mut rows[i]) else {
            continue;
        };
        row.total += 1;
        match booking.status {
            BookingStatus::Pending => row.pending += 1,
            BookingStatus::Approved => row.approved += 1,
            BookingStatus::Rejected => row.rejected += 1,
            BookingStatus::Active => row.active += 1,
            BookingStatus::Completed => row.completed += 1,
            BookingStatus::Cancelled => row.cancelled += 1,
        }
    }

    rows
}

/// Revenue per month from `(created_at, amount)` payment rows.
///
/// Sums saturate at `i64::MAX`.
pub fn revenue_by_month(
    window: &MonthWindow,
    payments: &[(DateTime<Utc>, i64)],
) -> Vec<MonthlyRevenueDto> {
    let mut rows: Vec<MonthlyRevenueDto> = window
        .keys()
        .iter()
        .map(|month| MonthlyRevenueDto {
            month: month.clone(),
            revenue: 0,
        })
        .collect();

    for (at, amount) in payments {
        if let Some(i) = window.position(*at) {
            rows[i].revenue = rows[i].revenue.saturating_add(*amount);
        }
    }

    rows
}

/// Sign-ups per month from `(created_at, role)` rows, split by role.
pub fn registrations_by_month(
    window: &MonthWindow,
    users: &[(DateTime<Utc>, UserRole)],
) -> Vec<MonthlyRegistrationsDto> {
    let mut rows: Vec<MonthlyRegistrationsDto> = window
        .keys()
        .iter()
        .map(|month| MonthlyRegistrationsDto {
            month: month.clone(),
            ..Default::default()
        })
        .collect();

    for (at, role) in users {
        let Some(row) = window.position(*at).map(|i| &mut rows[i]) else {
            continue;
        };
        row.total += 1;
        match role {
            UserRole::User => row.users += 1,
            UserRole::Tenant => row.tenants += 1,
            UserRole::Landlord => row.landlords += 1,
            UserRole::Admin => row.admins += 1,
        }
    }

    rows
}

/// Count per value of `E`, listing every value including zeros, in declaration order.
pub fn distribution<E>(values: impl IntoIterator<Item = E>) -> Vec<LabelCountDto>
where
    E: ActiveEnum<Value = String> + Iterable + Copy + Eq + std::hash::Hash,
{
    let mut counts: HashMap<E, u64> = HashMap::new();
    for value in values {
        *counts.entry(value).or_default() += 1;
    }

    E::iter()
        .map(|value| LabelCountDto {
            label: value.to_value(),
            count: counts.get(&value).copied().unwrap_or(0),
        })
        .collect()
}

/// Non-zero counts per label, largest first, ties by label.
pub fn ranked(labels: impl IntoIterator<Item = String>) -> Vec<LabelCountDto> {
    let mut counts: HashMap<String, u64> = HashMap::new();
    for label in labels {
        *counts.entry(label).or_default() += 1;
    }

    let mut rows: Vec<LabelCountDto> = counts
        .into_iter()
        .map(|(label, count)| LabelCountDto { label, count })
        .collect();
    rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    rows
}

/// Share of active listings with an active booking, as a rounded percentage.
pub fn occupancy_rate(
    properties: &[entity::property::Model],
    bookings: &[entity::booking::Model],
) -> u32 {
    let active: Vec<i32> = properties
        .iter()
        .filter(|p| p.status == PropertyStatus::Active)
        .map(|p| p.id)
        .collect();
    if active.is_empty() {
        return 0;
    }

    let occupied = active
        .iter()
        .filter(|id| {
            bookings
                .iter()
                .any(|b| b.property_id == **id && b.status == BookingStatus::Active)
        })
        .count();

    (occupied as f64 * 100.0 / active.len() as f64).round() as u32
}

/// The five listings with the most bookings.
///
/// Revenue is the booked total, ignoring rejected and cancelled bookings, and
/// saturates at `i64::MAX`.
pub fn top_properties(
    properties: &[entity::property::Model],
    bookings: &[entity::booking::Model],
) -> Vec<TopPropertyDto> {
    let mut per_property: HashMap<i32, (u64, i64)> = HashMap::new();
    for booking in bookings {
        let entry = per_property.entry(booking.property_id).or_default();
        entry.0 += 1;
        if !matches!(
            booking.status,
            BookingStatus::Rejected | BookingStatus::Cancelled
        ) {
            entry.1 = entry.1.saturating_add(booking.total_amount);
        }
    }

    let mut rows: Vec<TopPropertyDto> = properties
        .iter()
        .filter_map(|p| {
            per_property.get(&p.id).map(|(count, revenue)| TopPropertyDto {
                property_id: p.id,
                title_en: p.title_en.clone(),
                title_ar: p.title_ar.clone(),
                bookings: *count,
                revenue: *revenue,
            })
        })
        .collect();
    rows.sort_by(|a, b| {
        b.bookings
            .cmp(&a.bookings)
            .then_with(|| b.revenue.cmp(&a.revenue))
            .then_with(|| a.property_id.cmp(&b.property_id))
    });
    rows.truncate(TOP_PROPERTIES);
    rows
}

/// Maintenance request counts by status and by priority.
pub fn maintenance_summary(
    pairs: &[(MaintenanceStatus, MaintenancePriority)],
) -> (Vec<LabelCountDto>, Vec<LabelCountDto>) {
    (
        distribution(pairs.iter().map(|(status, _)| *status)),
        distribution(pairs.iter().map(|(_, priority)| *priority)),
    )
}
