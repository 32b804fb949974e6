use anyhow::Result;
use sqlx::{sqlite::SqliteRow, Row};

use crate::domain::models::{Activity, Camper, EnrolledSignup, NewSignup, Signup};
use crate::storage::connection::DbConnection;

/// Repository for signup operations and the camper/activity lookups that go through them
#[derive(Clone)]
pub struct SignupRepository {
    db: DbConnection,
}

impl SignupRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn from_row(row: &SqliteRow) -> Signup {
        Signup {
            id: row.get("id"),
            time: row.get("time"),
            camper_id: row.get("camper_id"),
            activity_id: row.get("activity_id"),
        }
    }

    pub async fn store_signup(&self, signup: &NewSignup) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO signups (time, camper_id, activity_id)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(signup.time)
        .bind(signup.camper_id)
        .bind(signup.activity_id)
        .execute(self.db.pool())
        .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn get_signup(&self, signup_id: i64) -> Result<Option<Signup>> {
        let row = sqlx::query(
            r#"
            SELECT id, time, camper_id, activity_id
            FROM signups
            WHERE id = ?
            "#,
        )
        .bind(signup_id)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(row.as_ref().map(Self::from_row))
    }

    /// Signups for one camper, each joined with its activity, in signup order
    pub async fn list_for_camper(&self, camper_id: i64) -> Result<Vec<EnrolledSignup>> {
        let rows = sqlx::query(
            r#"
            SELECT s.id, s.time, s.camper_id, s.activity_id,
                   a.name AS activity_name, a.difficulty AS activity_difficulty
            FROM signups s
            JOIN activities a ON a.id = s.activity_id
            WHERE s.camper_id = ?
            ORDER BY s.id ASC
            "#,
        )
        .bind(camper_id)
        .fetch_all(self.db.pool())
        .await?;

        let enrolled = rows
            .iter()
            .map(|row| {
                let signup = Self::from_row(row);
                let activity = Activity {
                    id: signup.activity_id,
                    name: row.get("activity_name"),
                    difficulty: row.get("activity_difficulty"),
                };
                EnrolledSignup { signup, activity }
            })
            .collect();

        Ok(enrolled)
    }

    /// Campers signed up for an activity, once per signup, in signup order
    pub async fn list_campers_for_activity(&self, activity_id: i64) -> Result<Vec<Camper>> {
        let rows = sqlx::query(
            r#"
            SELECT c.id, c.name, c.age
            FROM signups s
            JOIN campers c ON c.id = s.camper_id
            WHERE s.activity_id = ?
            ORDER BY s.id ASC
            "#,
        )
        .bind(activity_id)
        .fetch_all(self.db.pool())
        .await?;

        let campers = rows
            .iter()
            .map(|row| Camper {
                id: row.get("id"),
                name: row.get("name"),
                age: row.get("age"),
            })
            .collect();

        Ok(campers)
    }

    pub async fn count_for_activity(&self, activity_id: i64) -> Result<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS total FROM signups WHERE activity_id = ?")
            .bind(activity_id)
            .fetch_one(self.db.pool())
            .await?;
        Ok(row.get("total"))
    }

    pub async fn delete_all(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM signups")
            .execute(self.db.pool())
            .await?;
        Ok(result.rows_affected())
    }
}
