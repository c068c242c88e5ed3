//! Database repository layer for all domain entities.
//!
//! Repositories use SeaORM entity models internally and return domain models so the
//! service layer never touches entities directly. Every repository is generic over
//! `ConnectionTrait`, so the same queries run on the pool or inside a transaction.

pub mod club;
pub mod club_membership;
pub mod club_permission;
pub mod daily_slot;
pub mod disabled_slot;
pub mod event;
pub mod event_participant;
pub mod location;
pub mod notification;
pub mod reservation;
pub mod setting;
pub mod time_slot;
pub mod user;
