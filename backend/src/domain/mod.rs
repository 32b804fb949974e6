//! # Domain Module
//!
//! Business rules for the camp signup system.
//!
//! - **Camper**: name must be non-empty, age must lie in 8..=18
//! - **Activity**: listed and deleted; deleting one removes its signups
//! - **Signup**: joins a camper to an activity at an hour in 0..=23; both
//!   referenced rows must exist when it is created
//!
//! Services return [`CampError`] so the REST layer can pick a status code
//! without inspecting message text.

pub mod activity_service;
pub mod camper_service;
pub mod commands;
pub mod error;
pub mod models;
pub mod signup_service;

pub use activity_service::ActivityService;
pub use camper_service::CamperService;
pub use error::{CampError, CampResult};
pub use signup_service::SignupService;
