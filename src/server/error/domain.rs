use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Kinds of records a `DomainError::NotFound` can refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    User,
    Property,
    Availability,
    Booking,
    Payment,
    Conversation,
    MaintenanceRequest,
    Review,
    Notification,
    SavedSearch,
    District,
}

impl Resource {
    pub fn name_en(self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Property => "Property",
            Self::Availability => "Availability period",
            Self::Booking => "Booking",
            Self::Payment => "Payment",
            Self::Conversation => "Conversation",
            Self::MaintenanceRequest => "Maintenance request",
            Self::Review => "Review",
            Self::Notification => "Notification",
            Self::SavedSearch => "Saved search",
            Self::District => "District",
        }
    }

    pub fn name_ar(self) -> &'static str {
        match self {
            Self::User => "المستخدم",
            Self::Property => "العقار",
            Self::Availability => "فترة الإتاحة",
            Self::Booking => "الحجز",
            Self::Payment => "الدفعة",
            Self::Conversation => "المحادثة",
            Self::MaintenanceRequest => "طلب الصيانة",
            Self::Review => "التقييم",
            Self::Notification => "الإشعار",
            Self::SavedSearch => "البحث المحفوظ",
            Self::District => "الحي",
        }
    }
}

/// Business rule violations.
///
/// The `Display` text is the English message; `message_ar` gives the Arabic one.
#[derive(Error, Debug, PartialEq)]
pub enum DomainError {
    #[error("{} {id} not found", .resource.name_en())]
    NotFound { resource: Resource, id: i32 },

    #[error("Invalid value for {0}")]
    Invalid(&'static str),

    #[error("The end date must be after the start date")]
    InvalidDateRange,

    #[error("A stay of {months} months is outside the allowed range of {min} to {max} months")]
    StayOutOfRange { months: i32, min: i32, max: i32 },

    #[error("This property is not available for booking")]
    PropertyNotBookable,

    #[error("You cannot book your own property")]
    OwnPropertyBooking,

    #[error("Cannot change booking status from {from} to {to}")]
    InvalidBookingTransition { from: String, to: String },

    #[error("A rejection reason is required")]
    RejectionReasonRequired,

    #[error("Cannot change maintenance status from {from} to {to}")]
    InvalidMaintenanceTransition { from: String, to: String },

    #[error("Rating must be between 1 and 5")]
    InvalidRating,

    #[error("Only your own completed bookings for this property can be reviewed")]
    BookingNotReviewable,

    #[error("This booking has already been reviewed")]
    DuplicateReview,

    #[error("Amount must be greater than zero")]
    InvalidAmount,

    #[error("Amount exceeds the maximum of {max} halalas")]
    AmountTooLarge { max: i64 },

    #[error("Message content cannot be empty")]
    EmptyMessage,
}

impl DomainError {
    pub fn not_found(resource: Resource, id: i32) -> Self {
        Self::NotFound { resource, id }
    }

    pub fn message_ar(&self) -> String {
        match self {
            Self::NotFound { resource, .. } => format!("{} غير موجود", resource.name_ar()),
            Self::Invalid(field) => format!("قيمة غير صالحة للحقل {}", field),
            Self::InvalidDateRange => "يجب أن يكون تاريخ الانتهاء بعد تاريخ البدء".to_string(),
            Self::StayOutOfRange { min, max, .. } => {
                format!("مدة الإقامة يجب أن تكون بين {} و {} أشهر", min, max)
            }
            Self::PropertyNotBookable => "هذا العقار غير متاح للحجز".to_string(),
            Self::OwnPropertyBooking => "لا يمكنك حجز عقارك الخاص".to_string(),
            Self::InvalidBookingTransition { .. } => "لا يمكن تغيير حالة الحجز".to_string(),
            Self::RejectionReasonRequired => "سبب الرفض مطلوب".to_string(),
            Self::InvalidMaintenanceTransition { .. } => {
                "لا يمكن تغيير حالة طلب الصيانة".to_string()
            }
            Self::InvalidRating => "يجب أن يكون التقييم بين 1 و 5".to_string(),
            Self::BookingNotReviewable => "يمكن تقييم حجوزاتك المكتملة فقط".to_string(),
            Self::DuplicateReview => "تم تقييم هذا الحجز مسبقاً".to_string(),
            Self::InvalidAmount => "يجب أن يكون المبلغ أكبر من صفر".to_string(),
            Self::AmountTooLarge { max } => {
                format!("المبلغ يتجاوز الحد الأقصى وهو {} هللة", max)
            }
            Self::EmptyMessage => "لا يمكن إرسال رسالة فارغة".to_string(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::DuplicateReview => StatusCode::CONFLICT,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        (
            self.status_code(),
            Json(ErrorDto {
                error: self.to_string(),
                error_ar: Some(self.message_ar()),
            }),
        )
            .into_response()
    }
}
