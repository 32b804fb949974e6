//! Domain-level command types.
//! The REST layer maps the public DTOs from the `shared` crate onto these;
//! fields stay optional so the services decide what a missing value means.

pub mod camper {
    /// Input for creating a camper
    #[derive(Debug, Clone, Default)]
    pub struct CreateCamperCommand {
        pub name: Option<String>,
        pub age: Option<i64>,
    }

    /// Partial update; `None` leaves the field unchanged
    #[derive(Debug, Clone, Default)]
    pub struct UpdateCamperCommand {
        pub name: Option<String>,
        pub age: Option<i64>,
    }
}

pub mod signup {
    /// Input for signing a camper up for an activity
    #[derive(Debug, Clone, Default)]
    pub struct CreateSignupCommand {
        pub camper_id: Option<i64>,
        pub activity_id: Option<i64>,
        pub time: Option<i64>,
    }
}
