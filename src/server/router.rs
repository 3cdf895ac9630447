use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        admin::{self, ADMIN_TAG},
        booking::{self, BOOKING_TAG},
        district::{self, DISTRICT_TAG},
        favorite::{self, FAVORITE_TAG},
        maintenance::{self, MAINTENANCE_TAG},
        messaging::{self, MESSAGING_TAG},
        notification::{self, NOTIFICATION_TAG},
        payment::{self, PAYMENT_TAG},
        property::{self, PROPERTY_TAG},
        review::{self, REVIEW_TAG},
        saved_search::{self, SAVED_SEARCH_TAG},
        user::{self, USER_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Monthly Key API",
        description = "Monthly rental marketplace for Saudi Arabia"
    ),
    tags(
        (name = USER_TAG, description = "Caller registration and profile"),
        (name = PROPERTY_TAG, description = "Listings, search, availability and ratings"),
        (name = FAVORITE_TAG, description = "Favorite listings"),
        (name = BOOKING_TAG, description = "Booking requests and lifecycle"),
        (name = PAYMENT_TAG, description = "Payments in halalas"),
        (name = MESSAGING_TAG, description = "Tenant and landlord conversations"),
        (name = MAINTENANCE_TAG, description = "Maintenance requests"),
        (name = REVIEW_TAG, description = "Listing reviews"),
        (name = NOTIFICATION_TAG, description = "In-app notifications"),
        (name = SAVED_SEARCH_TAG, description = "Saved searches"),
        (name = DISTRICT_TAG, description = "District reference data"),
        (name = ADMIN_TAG, description = "Moderation and analytics")
    )
)]
struct ApiDoc;

/// Builds the API router with OpenAPI docs and Swagger UI mounted.
///
/// OpenAPI JSON is served at `/api-docs/openapi.json` and the UI at `/swagger-ui`.
/// CORS and rate limiting are applied by the caller.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        // user
        .routes(routes!(user::upsert_me, user::get_me))
        .routes(routes!(user::update_profile))
        // property
        .routes(routes!(property::search_properties))
        .routes(routes!(property::create_property))
        .routes(routes!(property::list_my_properties))
        .routes(routes!(
            property::get_property,
            property::update_property,
            property::delete_property
        ))
        .routes(routes!(property::record_view))
        .routes(routes!(
            property::list_availability,
            property::set_availability
        ))
        .routes(routes!(property::delete_availability))
        .routes(routes!(property::list_property_reviews))
        .routes(routes!(property::get_property_rating))
        // favorite
        .routes(routes!(favorite::list_favorites))
        .routes(routes!(
            favorite::get_favorite,
            favorite::add_favorite,
            favorite::remove_favorite
        ))
        // booking
        .routes(routes!(booking::create_booking))
        .routes(routes!(booking::list_my_bookings))
        .routes(routes!(booking::list_landlord_bookings))
        .routes(routes!(booking::get_booking))
        .routes(routes!(booking::update_booking_status))
        .routes(routes!(booking::list_booking_payments))
        // payment
        .routes(routes!(payment::create_payment))
        .routes(routes!(payment::list_my_payments))
        .routes(routes!(payment::list_landlord_payments))
        .routes(routes!(payment::update_payment_status))
        // messaging
        .routes(routes!(
            messaging::start_conversation,
            messaging::list_conversations
        ))
        .routes(routes!(messaging::unread_message_count))
        .routes(routes!(messaging::list_messages, messaging::send_message))
        .routes(routes!(messaging::mark_conversation_read))
        // maintenance
        .routes(routes!(maintenance::create_maintenance_request))
        .routes(routes!(maintenance::list_my_maintenance_requests))
        .routes(routes!(maintenance::list_landlord_maintenance_requests))
        .routes(routes!(
            maintenance::get_maintenance_request,
            maintenance::update_maintenance_request
        ))
        // review
        .routes(routes!(review::create_review))
        // notification
        .routes(routes!(notification::list_notifications))
        .routes(routes!(notification::unread_notification_count))
        .routes(routes!(notification::mark_notification_read))
        .routes(routes!(notification::mark_all_notifications_read))
        // saved search
        .routes(routes!(
            saved_search::list_saved_searches,
            saved_search::create_saved_search
        ))
        .routes(routes!(saved_search::delete_saved_search))
        .routes(routes!(saved_search::run_saved_search))
        // district
        .routes(routes!(district::list_districts))
        // admin
        .routes(routes!(admin::get_stats))
        .routes(routes!(admin::get_analytics))
        .routes(routes!(admin::list_users))
        .routes(routes!(admin::update_user_role))
        .routes(routes!(admin::list_properties))
        .routes(routes!(admin::count_properties))
        .routes(routes!(admin::set_property_status))
        .routes(routes!(admin::list_bookings))
        .routes(routes!(admin::list_reviews))
        .routes(routes!(admin::set_review_published))
        .routes(routes!(admin::delete_review))
        .routes(routes!(admin::get_revenue))
        .routes(routes!(admin::send_notification))
        .routes(routes!(admin::create_district))
        .routes(routes!(admin::set_district_active))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(TraceLayer::new_for_http())
}
