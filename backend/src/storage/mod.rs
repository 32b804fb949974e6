//! # Storage Module
//!
//! SQLite persistence for campers, activities and signups.
//!
//! `DbConnection` owns the pool and creates the schema on startup. Each table
//! has a repository that speaks plain SQL through sqlx and returns domain models.

pub mod connection;
pub mod repositories;

pub use connection::DbConnection;
pub use repositories::{ActivityRepository, CamperRepository, SignupRepository};
