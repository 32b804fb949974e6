use anyhow::Result;
use sqlx::{sqlite::SqliteRow, Row};

use crate::domain::models::{Camper, NewCamper};
use crate::storage::connection::DbConnection;

/// Repository for camper operations
#[derive(Clone)]
pub struct CamperRepository {
    db: DbConnection,
}

impl CamperRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn from_row(row: &SqliteRow) -> Camper {
        Camper {
            id: row.get("id"),
            name: row.get("name"),
            age: row.get("age"),
        }
    }

    /// Insert a camper and return the id SQLite assigned to it
    pub async fn store_camper(&self, camper: &NewCamper) -> Result<i64> {
        let result = sqlx::query("INSERT INTO campers (name, age) VALUES (?, ?)")
            .bind(&camper.name)
            .bind(camper.age)
            .execute(self.db.pool())
            .await?;
        Ok(result.last_insert_rowid())
    }

    /// Get a camper by ID
    pub async fn get_camper(&self, camper_id: i64) -> Result<Option<Camper>> {
        let row = sqlx::query("SELECT id, name, age FROM campers WHERE id = ?")
            .bind(camper_id)
            .fetch_optional(self.db.pool())
            .await?;

        Ok(row.as_ref().map(Self::from_row))
    }

    /// List all campers ordered by id
    pub async fn list_campers(&self) -> Result<Vec<Camper>> {
        let rows = sqlx::query("SELECT id, name, age FROM campers ORDER BY id ASC")
            .fetch_all(self.db.pool())
            .await?;

        Ok(rows.iter().map(Self::from_row).collect())
    }

    /// Overwrite name and age of an existing camper
    pub async fn update_camper(&self, camper: &Camper) -> Result<()> {
        sqlx::query("UPDATE campers SET name = ?, age = ? WHERE id = ?")
            .bind(&camper.name)
            .bind(camper.age)
            .bind(camper.id)
            .execute(self.db.pool())
            .await?;
        Ok(())
    }

    /// Remove every camper. Signups must be cleared first.
    pub async fn delete_all(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM campers")
            .execute(self.db.pool())
            .await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn setup_test() -> CamperRepository {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        CamperRepository::new(db)
    }

    #[tokio::test]
    async fn test_store_and_get_camper() {
        let repo = setup_test().await;

        let id = repo
            .store_camper(&NewCamper { name: "Sam".to_string(), age: 10 })
            .await
            .expect("Failed to store camper");
        assert!(id > 0);

        let camper = repo.get_camper(id).await.expect("Failed to get camper");
        assert_eq!(camper, Some(Camper { id, name: "Sam".to_string(), age: 10 }));
    }

    #[tokio::test]
    async fn test_get_nonexistent_camper() {
        let repo = setup_test().await;

        let camper = repo.get_camper(999).await.expect("Query failed");
        assert!(camper.is_none());
    }

    #[tokio::test]
    async fn test_list_campers_in_id_order() {
        let repo = setup_test().await;

        for (name, age) in [("Ava", 9), ("Ben", 12), ("Cai", 17)] {
            repo.store_camper(&NewCamper { name: name.to_string(), age })
                .await
                .expect("Failed to store camper");
        }

        let campers = repo.list_campers().await.expect("Failed to list campers");
        let names: Vec<&str> = campers.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Ava", "Ben", "Cai"]);
        assert!(campers.windows(2).all(|pair| pair[0].id < pair[1].id));
    }

    #[tokio::test]
    async fn test_update_camper() {
        let repo = setup_test().await;

        let id = repo
            .store_camper(&NewCamper { name: "Sam".to_string(), age: 10 })
            .await
            .expect("Failed to store camper");

        let updated = Camper { id, name: "Samantha".to_string(), age: 11 };
        repo.update_camper(&updated).await.expect("Failed to update camper");

        let camper = repo.get_camper(id).await.expect("Failed to get camper");
        assert_eq!(camper, Some(updated));
    }
}
