//! Response shaping for activities.

use crate::domain::models::Activity;
use shared::ActivitySummary;

pub struct ActivityMapper;

impl ActivityMapper {
    /// Activities never expand their signups or campers
    pub fn to_dto(domain: Activity) -> ActivitySummary {
        ActivitySummary {
            id: domain.id,
            name: domain.name,
            difficulty: domain.difficulty,
        }
    }

    pub fn to_list_dto(domain_activities: Vec<Activity>) -> Vec<ActivitySummary> {
        domain_activities.into_iter().map(Self::to_dto).collect()
    }
}
