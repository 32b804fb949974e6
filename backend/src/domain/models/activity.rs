use serde::{Deserialize, Serialize};

/// A camp activity campers can sign up for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: i64,
    pub name: String,
    pub difficulty: i64,
}

/// Fields needed to insert an activity; the id is assigned by storage
#[derive(Debug, Clone, PartialEq)]
pub struct NewActivity {
    pub name: String,
    pub difficulty: i64,
}
