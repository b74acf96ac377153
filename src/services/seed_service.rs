use crate::entities::champions;
use crate::error::AppResult;
use crate::external::DataDragonClient;
use crate::models::RoleList;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, Set};

/// One-time champion-catalog bootstrap from Data Dragon. Gated on an empty
/// champions table, so restarts are no-ops; never called from the request
/// path.
#[derive(Clone)]
pub struct SeedService {
    pool: DatabaseConnection,
    catalog: DataDragonClient,
}

impl SeedService {
    pub fn new(pool: DatabaseConnection, catalog: DataDragonClient) -> Self {
        Self { pool, catalog }
    }

    pub async fn seed_champions_if_empty(&self) -> AppResult<u64> {
        let existing = champions::Entity::find().count(&self.pool).await?;
        if existing > 0 {
            log::info!("Champion catalog already has {existing} entries, skipping seed");
            return Ok(0);
        }

        let version = self.catalog.latest_version().await?;
        let catalog = self.catalog.champions(&version).await?;
        log::info!(
            "Seeding {} champions from Data Dragon {version}",
            catalog.len()
        );

        let mut inserted = 0u64;
        for entry in catalog {
            let image_url = self.catalog.image_url(&version, &entry.image.full);
            champions::ActiveModel {
                id: Set(entry.id),
                name: Set(entry.name),
                image_url: Set(image_url),
                key: Set(entry.key),
                roles: Set(RoleList::default()),
            }
            .insert(&self.pool)
            .await?;
            inserted += 1;
        }

        log::info!("Seeded {inserted} champions");
        Ok(inserted)
    }
}
