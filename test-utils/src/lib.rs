//! Clubhub Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the clubhub
//! backend. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases, the same unique constraints the migrations install, and factories for
//! the entities most tests need.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and session
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders inserting users, clubs, memberships, events and slots
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_membership_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_membership_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
