use tracing::{info, warn};

use crate::domain::commands::signup::CreateSignupCommand;
use crate::domain::error::{CampError, CampResult};
use crate::domain::models::{Activity, Camper, NewSignup, Signup, SignupDetail};
use crate::storage::{ActivityRepository, CamperRepository, DbConnection, SignupRepository};

/// Service for signups and the camper/activity relationship they form
#[derive(Clone)]
pub struct SignupService {
    signups: SignupRepository,
    campers: CamperRepository,
    activities: ActivityRepository,
}

impl SignupService {
    pub fn new(db: DbConnection) -> Self {
        Self {
            signups: SignupRepository::new(db.clone()),
            campers: CamperRepository::new(db.clone()),
            activities: ActivityRepository::new(db),
        }
    }

    /// Create a signup.
    ///
    /// Both referenced rows must already exist; a dangling id is reported as a
    /// validation failure rather than left to the foreign key constraint.
    pub async fn create_signup(&self, command: CreateSignupCommand) -> CampResult<SignupDetail> {
        info!("Creating signup: {:?}", command);

        let time = command
            .time
            .ok_or_else(|| CampError::Validation("Time is required".to_string()))?;
        let time = Signup::validate_time(time)?;
        let camper_id = command
            .camper_id
            .ok_or_else(|| CampError::Validation("camper_id is required".to_string()))?;
        let activity_id = command
            .activity_id
            .ok_or_else(|| CampError::Validation("activity_id is required".to_string()))?;

        let camper = self.campers.get_camper(camper_id).await?.ok_or_else(|| {
            warn!("Signup references unknown camper {}", camper_id);
            CampError::Validation(format!("Camper {} does not exist", camper_id))
        })?;
        let activity = self.activities.get_activity(activity_id).await?.ok_or_else(|| {
            warn!("Signup references unknown activity {}", activity_id);
            CampError::Validation(format!("Activity {} does not exist", activity_id))
        })?;

        let new_signup = NewSignup { time, camper_id, activity_id };
        let id = self.signups.store_signup(&new_signup).await?;

        info!("Created signup {} for camper {} at {}:00", id, camper_id, time);

        Ok(SignupDetail {
            signup: Signup { id, time, camper_id, activity_id },
            camper,
            activity,
        })
    }

    /// Activities a camper is signed up for, once per signup
    pub async fn activities_for_camper(&self, camper_id: i64) -> CampResult<Vec<Activity>> {
        if self.campers.get_camper(camper_id).await?.is_none() {
            return Err(CampError::NotFound("Camper"));
        }
        let enrolled = self.signups.list_for_camper(camper_id).await?;
        Ok(enrolled.into_iter().map(|e| e.activity).collect())
    }

    /// Campers signed up for an activity, once per signup
    pub async fn campers_for_activity(&self, activity_id: i64) -> CampResult<Vec<Camper>> {
        if self.activities.get_activity(activity_id).await?.is_none() {
            return Err(CampError::NotFound("Activity"));
        }
        Ok(self.signups.list_campers_for_activity(activity_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{NewActivity, NewCamper};

    struct Fixture {
        service: SignupService,
        camper_id: i64,
        activity_id: i64,
    }

    async fn setup_test() -> Fixture {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        let camper_id = CamperRepository::new(db.clone())
            .store_camper(&NewCamper { name: "Sam".to_string(), age: 10 })
            .await
            .unwrap();
        let activity_id = ActivityRepository::new(db.clone())
            .store_activity(&NewActivity { name: "Archery".to_string(), difficulty: 2 })
            .await
            .unwrap();

        Fixture { service: SignupService::new(db), camper_id, activity_id }
    }

    fn command(f: &Fixture, time: i64) -> CreateSignupCommand {
        CreateSignupCommand {
            camper_id: Some(f.camper_id),
            activity_id: Some(f.activity_id),
            time: Some(time),
        }
    }

    #[tokio::test]
    async fn test_boundary_times_are_accepted() {
        let f = setup_test().await;

        for time in [0, 23] {
            let detail = f.service.create_signup(command(&f, time)).await.expect("Should accept");
            assert_eq!(detail.signup.time, time);
            assert_eq!(detail.camper.name, "Sam");
            assert_eq!(detail.activity.name, "Archery");
        }
    }

    #[tokio::test]
    async fn test_out_of_range_times_are_rejected() {
        let f = setup_test().await;

        for time in [-1, 24] {
            let result = f.service.create_signup(command(&f, time)).await;
            assert!(matches!(result, Err(CampError::Validation(_))), "time {} should fail", time);
        }
    }

    #[tokio::test]
    async fn test_unknown_references_are_rejected() {
        let f = setup_test().await;

        let mut unknown_camper = command(&f, 10);
        unknown_camper.camper_id = Some(9999);
        assert!(matches!(
            f.service.create_signup(unknown_camper).await,
            Err(CampError::Validation(_))
        ));

        let mut missing_activity = command(&f, 10);
        missing_activity.activity_id = None;
        assert!(matches!(
            f.service.create_signup(missing_activity).await,
            Err(CampError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_relationship_accessors() {
        let f = setup_test().await;
        f.service.create_signup(command(&f, 9)).await.unwrap();

        let activities = f.service.activities_for_camper(f.camper_id).await.unwrap();
        assert_eq!(activities.len(), 1);
        assert_eq!(activities[0].id, f.activity_id);

        let campers = f.service.campers_for_activity(f.activity_id).await.unwrap();
        assert_eq!(campers.len(), 1);
        assert_eq!(campers[0].id, f.camper_id);

        assert!(matches!(
            f.service.campers_for_activity(777).await,
            Err(CampError::NotFound("Activity"))
        ));
    }
}
