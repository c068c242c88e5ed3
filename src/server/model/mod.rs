//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary, keeping business logic apart from
//! database and API concerns.

pub mod club;
pub mod event;
pub mod location;
pub mod membership;
pub mod notification;
pub mod reservation;
pub mod settings;
pub mod user;
