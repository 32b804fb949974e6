// Repository modules
pub mod activity_repository;
pub mod camper_repository;
pub mod signup_repository;

// Re-export repository types
pub use activity_repository::ActivityRepository;
pub use camper_repository::CamperRepository;
pub use signup_repository::SignupRepository;
