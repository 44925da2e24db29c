//! HTTP client for the estate server.

use anyhow::{bail, Result};
use estate_core::{Tree, TreeStats};
use serde::{Deserialize, Serialize};

use crate::estate_file::PlanOutput;

#[derive(Debug, Serialize)]
struct CreateEstateRequest {
    width: u32,
    length: u32,
}

#[derive(Debug, Deserialize)]
struct CreatedResponse {
    id: String,
}

/// Client for a running estate server.
pub struct EstateClient {
    base_url: String,
    client: reqwest::Client,
}

impl EstateClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Create an estate and return its id.
    pub async fn create_estate(&self, width: u32, length: u32) -> Result<String> {
        let url = format!("{}/estate", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&CreateEstateRequest { width, length })
            .send()
            .await?;
        if !response.status().is_success() {
            bail!("Failed to create estate: {}", response.text().await?);
        }
        let created: CreatedResponse = response.json().await?;
        Ok(created.id)
    }

    /// Plant a tree and return its id.
    pub async fn add_tree(&self, estate_id: &str, tree: &Tree) -> Result<String> {
        let url = format!("{}/estate/{}/tree", self.base_url, estate_id);
        let response = self.client.post(&url).json(tree).send().await?;
        if !response.status().is_success() {
            bail!(
                "Failed to plant tree at ({}, {}): {}",
                tree.x,
                tree.y,
                response.text().await?
            );
        }
        let created: CreatedResponse = response.json().await?;
        Ok(created.id)
    }

    pub async fn stats(&self, estate_id: &str) -> Result<TreeStats> {
        let url = format!("{}/estate/{}/stats", self.base_url, estate_id);
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            bail!("Failed to fetch stats: {}", response.text().await?);
        }
        Ok(response.json().await?)
    }

    pub async fn drone_plan(&self, estate_id: &str, max_distance: Option<u64>) -> Result<PlanOutput> {
        let url = format!("{}/estate/{}/drone-plan", self.base_url, estate_id);
        let mut request = self.client.get(&url);
        if let Some(max_distance) = max_distance {
            request = request.query(&[("max_distance", max_distance)]);
        }
        let response = request.send().await?;
        if !response.status().is_success() {
            bail!("Failed to fetch drone plan: {}", response.text().await?);
        }
        Ok(response.json().await?)
    }
}
