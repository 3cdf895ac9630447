use entity::sea_orm_active_enums::{PaymentKind, PaymentStatus};

use crate::{
    model::payment::{CreatePaymentDto, PaymentDto},
    server::{
        error::domain::DomainError, model::property::MAX_AMOUNT, util::sanitize::sanitize_opt,
    },
};

/// Currency of every payment on the platform.
pub const DEFAULT_CURRENCY: &str = "SAR";

#[derive(Debug, Clone)]
pub struct CreatePaymentParams {
    pub booking_id: i32,
    pub kind: PaymentKind,
    pub amount: i64,
    pub status: PaymentStatus,
    pub description: Option<String>,
    pub description_ar: Option<String>,
}

impl TryFrom<CreatePaymentDto> for CreatePaymentParams {
    type Error = DomainError;

    fn try_from(dto: CreatePaymentDto) -> Result<Self, Self::Error> {
        if dto.amount <= 0 {
            return Err(DomainError::InvalidAmount);
        }
        if dto.amount > MAX_AMOUNT {
            return Err(DomainError::AmountTooLarge { max: MAX_AMOUNT });
        }

        Ok(Self {
            booking_id: dto.booking_id,
            kind: dto.kind,
            amount: dto.amount,
            status: dto.status.unwrap_or(PaymentStatus::Pending),
            description: sanitize_opt(dto.description),
            description_ar: sanitize_opt(dto.description_ar),
        })
    }
}

/// Rows counted as revenue: completed and not a refund.
pub fn counts_as_revenue(kind: PaymentKind, status: PaymentStatus) -> bool {
    status == PaymentStatus::Completed && kind != PaymentKind::Refund
}

impl From<entity::payment::Model> for PaymentDto {
    fn from(payment: entity::payment::Model) -> Self {
        Self {
            id: payment.id,
            booking_id: payment.booking_id,
            tenant_id: payment.tenant_id,
            landlord_id: payment.landlord_id,
            kind: payment.kind,
            amount: payment.amount,
            currency: payment.currency,
            status: payment.status,
            description: payment.description,
            description_ar: payment.description_ar,
            paid_at: payment.paid_at,
            created_at: payment.created_at,
        }
    }
}
