mod booking;
mod district;
mod favorite;
mod maintenance;
mod notification;
mod property;
