//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They enforce the
//! business rules, decide who may do what beyond the coarse route permissions, and
//! own the transactions for multi-row changes.

pub mod event;
pub mod location;
pub mod membership;
pub mod notification;
pub mod reservation;
pub mod settings;
