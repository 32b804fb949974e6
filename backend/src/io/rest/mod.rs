//! # REST API Interface Layer
//!
//! HTTP endpoints for campers, activities and signups. Handlers log the
//! request, call one domain service and shape the result with a mapper.
//! Status codes are part of the public contract: lookups and updates by id
//! answer 202, creations 201, deletions 204.

pub mod activity_apis;
pub mod camper_apis;
pub mod errors;
pub mod mappers;
pub mod signup_apis;

#[cfg(test)]
pub(crate) mod test_utils;
