use tracing::{info, warn};

use crate::domain::commands::camper::{CreateCamperCommand, UpdateCamperCommand};
use crate::domain::error::{CampError, CampResult};
use crate::domain::models::{Camper, CamperWithSignups, NewCamper};
use crate::storage::{CamperRepository, DbConnection, SignupRepository};

/// Service for creating, reading and updating campers
#[derive(Clone)]
pub struct CamperService {
    campers: CamperRepository,
    signups: SignupRepository,
}

impl CamperService {
    pub fn new(db: DbConnection) -> Self {
        Self {
            campers: CamperRepository::new(db.clone()),
            signups: SignupRepository::new(db),
        }
    }

    /// List all campers
    pub async fn list_campers(&self) -> CampResult<Vec<Camper>> {
        let campers = self.campers.list_campers().await?;
        info!("Found {} campers", campers.len());
        Ok(campers)
    }

    /// Create a new camper after checking age range and name
    pub async fn create_camper(&self, command: CreateCamperCommand) -> CampResult<CamperWithSignups> {
        info!("Creating camper: {:?}", command);

        let age = command
            .age
            .ok_or_else(|| CampError::Validation("Age is required".to_string()))?;
        let age = Camper::validate_age(age)?;
        let name = command.name.unwrap_or_default();
        Camper::validate_name(&name)?;

        let new_camper = NewCamper { name, age };
        let id = self.campers.store_camper(&new_camper).await?;
        if id <= 0 {
            warn!("Insert for camper {:?} did not produce an id", new_camper);
            return Err(CampError::Validation("Camper was not assigned an id".to_string()));
        }

        info!("Created camper {} with ID: {}", new_camper.name, id);

        Ok(CamperWithSignups {
            camper: Camper {
                id,
                name: new_camper.name,
                age: new_camper.age,
            },
            signups: Vec::new(),
        })
    }

    /// Get a camper together with their signups
    pub async fn get_camper(&self, camper_id: i64) -> CampResult<CamperWithSignups> {
        let camper = match self.campers.get_camper(camper_id).await? {
            Some(camper) => camper,
            None => {
                warn!("Camper not found: {}", camper_id);
                return Err(CampError::NotFound("Camper"));
            }
        };

        let signups = self.signups.list_for_camper(camper_id).await?;
        Ok(CamperWithSignups { camper, signups })
    }

    /// Apply a partial update.
    ///
    /// The `(updated)` marker is stripped from the incoming name before it is
    /// validated, so a name made only of markers is rejected as empty.
    pub async fn update_camper(&self, camper_id: i64, command: UpdateCamperCommand) -> CampResult<Camper> {
        info!("Updating camper {}: {:?}", camper_id, command);

        let mut camper = self
            .campers
            .get_camper(camper_id)
            .await?
            .ok_or(CampError::NotFound("Camper"))?;

        let name = command.name.map(|raw| Camper::strip_updated_marker(&raw));
        if let Some(ref name) = name {
            Camper::validate_name(name)?;
        }
        let age = command.age.map(Camper::validate_age).transpose()?;

        if let Some(name) = name {
            camper.name = name;
        }
        if let Some(age) = age {
            camper.age = age;
        }

        self.campers.update_camper(&camper).await?;

        info!("Updated camper {} with ID: {}", camper.name, camper.id);
        Ok(camper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn setup_test() -> CamperService {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        CamperService::new(db)
    }

    fn create(name: &str, age: i64) -> CreateCamperCommand {
        CreateCamperCommand {
            name: Some(name.to_string()),
            age: Some(age),
        }
    }

    #[tokio::test]
    async fn test_create_camper_assigns_id() {
        let service = setup_test().await;

        let created = service.create_camper(create("Sam", 10)).await.expect("Failed to create");
        assert!(created.camper.id > 0);
        assert_eq!(created.camper.name, "Sam");
        assert!(created.signups.is_empty());
    }

    #[tokio::test]
    async fn test_create_camper_rejects_invalid_payloads() {
        let service = setup_test().await;

        let invalid = vec![
            create("Sam", 7),
            create("Sam", 19),
            create("", 10),
            CreateCamperCommand { name: Some("Sam".to_string()), age: None },
            CreateCamperCommand { name: None, age: Some(10) },
        ];

        for command in invalid {
            let result = service.create_camper(command.clone()).await;
            assert!(
                matches!(result, Err(CampError::Validation(_))),
                "{:?} should be rejected",
                command
            );
        }

        let campers = service.list_campers().await.expect("Failed to list");
        assert!(campers.is_empty(), "Nothing should be persisted");
    }

    #[tokio::test]
    async fn test_get_missing_camper() {
        let service = setup_test().await;

        let result = service.get_camper(42).await;
        assert!(matches!(result, Err(CampError::NotFound("Camper"))));
    }

    #[tokio::test]
    async fn test_update_strips_marker_and_keeps_absent_fields() {
        let service = setup_test().await;
        let created = service.create_camper(create("Alex", 12)).await.unwrap();

        let updated = service
            .update_camper(
                created.camper.id,
                UpdateCamperCommand { name: Some("Alex(updated)".to_string()), age: None },
            )
            .await
            .expect("Failed to update");

        assert_eq!(updated.name, "Alex");
        assert_eq!(updated.age, 12);
    }

    #[tokio::test]
    async fn test_update_rejects_out_of_range_age_without_writing() {
        let service = setup_test().await;
        let created = service.create_camper(create("Sam", 10)).await.unwrap();
        let id = created.camper.id;

        let result = service
            .update_camper(id, UpdateCamperCommand { name: Some("Samuel".to_string()), age: Some(25) })
            .await;
        assert!(matches!(result, Err(CampError::Validation(_))));

        let stored = service.get_camper(id).await.unwrap();
        assert_eq!(stored.camper, created.camper);
    }

    #[tokio::test]
    async fn test_update_rejects_name_that_is_only_the_marker() {
        let service = setup_test().await;
        let created = service.create_camper(create("Sam", 10)).await.unwrap();

        let result = service
            .update_camper(
                created.camper.id,
                UpdateCamperCommand { name: Some("(updated)".to_string()), age: None },
            )
            .await;
        assert!(matches!(result, Err(CampError::Validation(_))));
    }

    #[tokio::test]
    async fn test_update_missing_camper() {
        let service = setup_test().await;

        let result = service.update_camper(99, UpdateCamperCommand::default()).await;
        assert!(matches!(result, Err(CampError::NotFound("Camper"))));
    }
}
