use tracing::{info, warn};

use crate::domain::error::{CampError, CampResult};
use crate::domain::models::Activity;
use crate::storage::{ActivityRepository, DbConnection, SignupRepository};

/// Service for listing and removing activities
#[derive(Clone)]
pub struct ActivityService {
    activities: ActivityRepository,
    signups: SignupRepository,
}

impl ActivityService {
    pub fn new(db: DbConnection) -> Self {
        Self {
            activities: ActivityRepository::new(db.clone()),
            signups: SignupRepository::new(db),
        }
    }

    pub async fn list_activities(&self) -> CampResult<Vec<Activity>> {
        let activities = self.activities.list_activities().await?;
        info!("Found {} activities", activities.len());
        Ok(activities)
    }

    /// Delete an activity. Its signups are removed along with it.
    pub async fn delete_activity(&self, activity_id: i64) -> CampResult<()> {
        let activity = match self.activities.get_activity(activity_id).await? {
            Some(activity) => activity,
            None => {
                warn!("Activity not found: {}", activity_id);
                return Err(CampError::NotFound("Activity"));
            }
        };

        let signup_count = self.signups.count_for_activity(activity_id).await?;
        self.activities.delete_activity(activity_id).await?;

        info!(
            "Deleted activity {} with ID: {} ({} signups removed)",
            activity.name, activity.id, signup_count
        );
        Ok(())
    }
}
