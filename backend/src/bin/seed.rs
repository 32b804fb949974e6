//! Reset the database and fill it with a small fixed camp roster.

use anyhow::Result;
use camp_signup_backend::config::ServerConfig;
use camp_signup_backend::domain::models::{NewActivity, NewCamper, NewSignup};
use camp_signup_backend::storage::{ActivityRepository, CamperRepository, DbConnection, SignupRepository};
use tracing::info;
use tracing_subscriber::EnvFilter;

const CAMPERS: &[(&str, i64)] = &[
    ("Caitlin", 8),
    ("Lizzie", 9),
    ("Nicholas", 11),
    ("Ashley", 14),
    ("Jordan", 17),
];

const ACTIVITIES: &[(&str, i64)] = &[
    ("Archery", 2),
    ("Swimming", 3),
    ("Hiking by the stream", 4),
    ("Canoeing", 3),
    ("Arts and crafts", 1),
];

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env()?;
    let db = DbConnection::new(&config.database_url).await?;

    let campers = CamperRepository::new(db.clone());
    let activities = ActivityRepository::new(db.clone());
    let signups = SignupRepository::new(db);

    // Signups first: campers have no ON DELETE CASCADE
    info!("Clearing db...");
    signups.delete_all().await?;
    campers.delete_all().await?;
    activities.delete_all().await?;

    info!("Seeding campers...");
    let mut camper_ids = Vec::with_capacity(CAMPERS.len());
    for (name, age) in CAMPERS {
        let id = campers
            .store_camper(&NewCamper { name: name.to_string(), age: *age })
            .await?;
        camper_ids.push(id);
    }

    info!("Seeding activities...");
    let mut activity_ids = Vec::with_capacity(ACTIVITIES.len());
    for (name, difficulty) in ACTIVITIES {
        let id = activities
            .store_activity(&NewActivity { name: name.to_string(), difficulty: *difficulty })
            .await?;
        activity_ids.push(id);
    }

    info!("Adding signups...");
    let mut total = 0;
    for (i, camper_id) in camper_ids.iter().enumerate() {
        for offset in 0..2 {
            let activity_id = activity_ids[(i + offset) % activity_ids.len()];
            let time = 9 + (i as i64 * 2 + offset as i64 * 5) % 12;
            signups
                .store_signup(&NewSignup { time, camper_id: *camper_id, activity_id })
                .await?;
            total += 1;
        }
    }

    info!(
        "Done seeding: {} campers, {} activities, {} signups",
        camper_ids.len(),
        activity_ids.len(),
        total
    );
    Ok(())
}
