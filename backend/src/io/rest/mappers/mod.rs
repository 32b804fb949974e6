pub mod activity_mapper;
pub mod camper_mapper;
pub mod signup_mapper;
