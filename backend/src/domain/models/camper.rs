use serde::{Deserialize, Serialize};

use super::activity::Activity;
use super::signup::EnrolledSignup;
use crate::domain::error::CampError;

pub const MIN_AGE: i64 = 8;
pub const MAX_AGE: i64 = 18;

/// Marker legacy clients append to names they edit; stripped on update.
pub const UPDATED_MARKER: &str = "(updated)";

/// Domain model representing a camper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camper {
    pub id: i64,
    pub name: String,
    pub age: i64,
}

/// Fields needed to insert a camper; the id is assigned by storage
#[derive(Debug, Clone, PartialEq)]
pub struct NewCamper {
    pub name: String,
    pub age: i64,
}

impl Camper {
    pub fn validate_age(age: i64) -> Result<i64, CampError> {
        if !(MIN_AGE..=MAX_AGE).contains(&age) {
            return Err(CampError::Validation(format!(
                "Age must be between {} and {}, got {}",
                MIN_AGE, MAX_AGE, age
            )));
        }
        Ok(age)
    }

    pub fn validate_name(name: &str) -> Result<(), CampError> {
        if name.is_empty() {
            return Err(CampError::Validation(
                "Name must be a non-empty string".to_string(),
            ));
        }
        Ok(())
    }

    /// Remove every occurrence of the legacy `(updated)` marker
    pub fn strip_updated_marker(name: &str) -> String {
        name.replace(UPDATED_MARKER, "")
    }
}

/// A camper together with their signups, each carrying its activity
#[derive(Debug, Clone, PartialEq)]
pub struct CamperWithSignups {
    pub camper: Camper,
    pub signups: Vec<EnrolledSignup>,
}

impl CamperWithSignups {
    /// Activities this camper is signed up for, in signup order.
    /// An activity appears once per signup.
    pub fn activities(&self) -> Vec<&Activity> {
        self.signups.iter().map(|enrolled| &enrolled.activity).collect()
    }
}
