//! Request and response DTOs shared by the HTTP layer.

pub mod api;
pub mod event;
pub mod membership;
pub mod notification;
pub mod reservation;
pub mod settings;
pub mod user;
