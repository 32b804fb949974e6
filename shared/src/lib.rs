use serde::{Deserialize, Serialize};

/// Abbreviated camper form: no relationship data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CamperSummary {
    pub id: i64,
    pub name: String,
    pub age: i64,
}

/// Full camper form, including each signup and the activity it points at
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CamperDetail {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub signups: Vec<CamperSignup>,
}

/// A signup as seen from its camper (no nested camper)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CamperSignup {
    pub id: i64,
    /// Hour of the day, 0-23
    pub time: i64,
    pub camper_id: i64,
    pub activity_id: i64,
    pub activity: ActivitySummary,
}

/// Activity form used by the activity list and inside nested signups
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivitySummary {
    pub id: i64,
    pub name: String,
    pub difficulty: i64,
}

/// Full signup form with both ends of the relationship in abbreviated form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignupDetail {
    pub id: i64,
    /// Hour of the day, 0-23
    pub time: i64,
    pub camper_id: i64,
    pub activity_id: i64,
    pub activity: ActivitySummary,
    pub camper: CamperSummary,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateCamperRequest {
    pub name: Option<String>,
    pub age: Option<i64>,
}

/// Partial update; absent fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateCamperRequest {
    pub name: Option<String>,
    pub age: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateSignupRequest {
    pub camper_id: Option<i64>,
    pub activity_id: Option<i64>,
    pub time: Option<i64>,
}

/// Body returned for every rejected payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationErrorResponse {
    pub errors: Vec<String>,
}

impl ValidationErrorResponse {
    pub fn generic() -> Self {
        Self {
            errors: vec!["validation errors".to_string()],
        }
    }
}

/// Body returned when a record lookup fails
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}
