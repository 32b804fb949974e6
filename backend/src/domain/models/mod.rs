//! Domain models for campers, activities and the signups joining them.

pub mod activity;
pub mod camper;
pub mod signup;

pub use activity::{Activity, NewActivity};
pub use camper::{Camper, CamperWithSignups, NewCamper};
pub use signup::{EnrolledSignup, NewSignup, Signup, SignupDetail};
