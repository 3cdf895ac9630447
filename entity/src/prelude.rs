pub use super::booking::Entity as Booking;
pub use super::conversation::Entity as Conversation;
pub use super::district::Entity as District;
pub use super::favorite::Entity as Favorite;
pub use super::maintenance_request::Entity as MaintenanceRequest;
pub use super::message::Entity as Message;
pub use super::notification::Entity as Notification;
pub use super::payment::Entity as Payment;
pub use super::property::Entity as Property;
pub use super::property_availability::Entity as PropertyAvailability;
pub use super::review::Entity as Review;
pub use super::saved_search::Entity as SavedSearch;
pub use super::user::Entity as User;
