//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation. Factories do not create
//! their parents; pass ids of rows created by other factories (or use `helpers`).
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::create_user(&db).await?;
//!     let club = factory::create_club(&db).await?;
//!     let membership = factory::create_member(&db, club.id, user.id).await?;
//!
//!     let (club, president, advisor) = factory::helpers::create_club_with_staff(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `user` - Users with a system role
//! - `club` - Clubs, optionally with an advisor
//! - `club_membership` - Pending or approved memberships with any role
//! - `event` - Events in any workflow status
//! - `location` - Locations, valid weekdays and disabled dates
//! - `daily_slot` - Weekly recurring slots
//! - `reservation` - Event reservations
//! - `helpers` - Id counter and multi-entity setups

pub mod club;
pub mod club_membership;
pub mod daily_slot;
pub mod event;
pub mod helpers;
pub mod location;
pub mod reservation;
pub mod user;

pub use club::create_club;
pub use club_membership::{create_member, create_pending_membership, create_president};
pub use daily_slot::create_daily_slot;
pub use event::create_event;
pub use location::create_location;
pub use reservation::create_reservation;
pub use user::{create_user, create_user_with_role};
