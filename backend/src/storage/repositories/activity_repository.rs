use anyhow::Result;
use sqlx::{sqlite::SqliteRow, Row};

use crate::domain::models::{Activity, NewActivity};
use crate::storage::connection::DbConnection;

/// Repository for activity operations
#[derive(Clone)]
pub struct ActivityRepository {
    db: DbConnection,
}

impl ActivityRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn from_row(row: &SqliteRow) -> Activity {
        Activity {
            id: row.get("id"),
            name: row.get("name"),
            difficulty: row.get("difficulty"),
        }
    }

    pub async fn store_activity(&self, activity: &NewActivity) -> Result<i64> {
        let result = sqlx::query("INSERT INTO activities (name, difficulty) VALUES (?, ?)")
            .bind(&activity.name)
            .bind(activity.difficulty)
            .execute(self.db.pool())
            .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn get_activity(&self, activity_id: i64) -> Result<Option<Activity>> {
        let row = sqlx::query("SELECT id, name, difficulty FROM activities WHERE id = ?")
            .bind(activity_id)
            .fetch_optional(self.db.pool())
            .await?;

        Ok(row.as_ref().map(Self::from_row))
    }

    /// List all activities ordered by id
    pub async fn list_activities(&self) -> Result<Vec<Activity>> {
        let rows = sqlx::query("SELECT id, name, difficulty FROM activities ORDER BY id ASC")
            .fetch_all(self.db.pool())
            .await?;

        Ok(rows.iter().map(Self::from_row).collect())
    }

    /// Delete an activity; its signups go with it through ON DELETE CASCADE.
    /// Returns true if a row was removed.
    pub async fn delete_activity(&self, activity_id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM activities WHERE id = ?")
            .bind(activity_id)
            .execute(self.db.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn delete_all(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM activities")
            .execute(self.db.pool())
            .await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn setup_test() -> ActivityRepository {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        ActivityRepository::new(db)
    }

    #[tokio::test]
    async fn test_store_and_list_activities() {
        let repo = setup_test().await;

        let archery = repo
            .store_activity(&NewActivity { name: "Archery".to_string(), difficulty: 2 })
            .await
            .expect("Failed to store activity");
        let hiking = repo
            .store_activity(&NewActivity { name: "Hiking".to_string(), difficulty: 4 })
            .await
            .expect("Failed to store activity");

        let activities = repo.list_activities().await.expect("Failed to list activities");
        assert_eq!(
            activities,
            vec![
                Activity { id: archery, name: "Archery".to_string(), difficulty: 2 },
                Activity { id: hiking, name: "Hiking".to_string(), difficulty: 4 },
            ]
        );
    }

    #[tokio::test]
    async fn test_delete_activity() {
        let repo = setup_test().await;

        let id = repo
            .store_activity(&NewActivity { name: "Canoeing".to_string(), difficulty: 3 })
            .await
            .expect("Failed to store activity");

        let deleted = repo.delete_activity(id).await.expect("Failed to delete activity");
        assert!(deleted, "Activity should have been deleted");

        let after = repo.get_activity(id).await.expect("Failed to check after deletion");
        assert!(after.is_none());

        let deleted_again = repo.delete_activity(id).await.expect("Failed to re-delete activity");
        assert!(!deleted_again, "Activity should not exist to be deleted");
    }
}
