use serde::{Deserialize, Serialize};

use super::activity::Activity;
use super::camper::Camper;
use crate::domain::error::CampError;

pub const FIRST_HOUR: i64 = 0;
pub const LAST_HOUR: i64 = 23;

/// Join record between a camper and an activity at an hour of the day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signup {
    pub id: i64,
    pub time: i64,
    pub camper_id: i64,
    pub activity_id: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewSignup {
    pub time: i64,
    pub camper_id: i64,
    pub activity_id: i64,
}

impl Signup {
    pub fn validate_time(time: i64) -> Result<i64, CampError> {
        if !(FIRST_HOUR..=LAST_HOUR).contains(&time) {
            return Err(CampError::Validation(format!(
                "Time must be between {} and {}, got {}",
                FIRST_HOUR, LAST_HOUR, time
            )));
        }
        Ok(time)
    }
}

/// A signup seen from its camper: carries the activity only
#[derive(Debug, Clone, PartialEq)]
pub struct EnrolledSignup {
    pub signup: Signup,
    pub activity: Activity,
}

/// A signup with both ends of the relationship loaded
#[derive(Debug, Clone, PartialEq)]
pub struct SignupDetail {
    pub signup: Signup,
    pub camper: Camper,
    pub activity: Activity,
}
