//! HTTP request handlers.
//!
//! Controllers resolve the session user through `AuthGuard`, convert DTOs into service
//! parameters and service results back into DTOs. Business rules live in the services.

pub mod event;
pub mod membership;
pub mod notification;
pub mod reservation;
pub mod settings;
