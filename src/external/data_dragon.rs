use crate::config::DataDragonConfig;
use crate::error::{AppError, AppResult};
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Deserialize)]
pub struct CatalogChampion {
    pub id: String,
    pub key: String,
    pub name: String,
    pub image: CatalogImage,
}

#[derive(Debug, Deserialize)]
pub struct CatalogImage {
    pub full: String,
}

#[derive(Debug, Deserialize)]
struct CatalogResponse {
    data: HashMap<String, CatalogChampion>,
}

/// Read-only client for the Riot Data Dragon static-data CDN, used once at
/// startup to populate the champion catalog.
#[derive(Clone)]
pub struct DataDragonClient {
    client: Client,
    config: DataDragonConfig,
}

impl DataDragonClient {
    pub fn new(config: DataDragonConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub async fn latest_version(&self) -> AppResult<String> {
        let url = format!("{}/api/versions.json", self.config.base_url);
        let versions: Vec<String> = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        versions.into_iter().next().ok_or_else(|| {
            AppError::ExternalApiError("Data Dragon returned an empty version list".to_string())
        })
    }

    pub async fn champions(&self, version: &str) -> AppResult<Vec<CatalogChampion>> {
        let url = format!(
            "{}/cdn/{version}/data/en_US/champion.json",
            self.config.base_url
        );
        let catalog: CatalogResponse = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(catalog.data.into_values().collect())
    }

    pub fn image_url(&self, version: &str, image_file: &str) -> String {
        format!(
            "{}/cdn/{version}/img/champion/{image_file}",
            self.config.base_url
        )
    }
}
