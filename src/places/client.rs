//! Nearby Search and Place Details client.

use anyhow::{Context, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, warn};

use super::response::{DetailsResponse, NearbySearchResponse};
use super::PlaceSource;
use crate::config::Config;
use crate::error::PlacesError;
use crate::models::{GridPoint, PlaceDetail, RawPlace};

/// Fields requested from Place Details
pub const DETAIL_FIELDS: &str = "name,formatted_address,formatted_phone_number,website,types";

/// Thin client over the Places JSON endpoints.
///
/// One attempt per request, no caching.
pub struct PlacesClient {
    client: Client,
    base_url: String,
    api_key: String,
    language: String,
    page_token_delay: Duration,
}

impl PlacesClient {
    pub fn new(config: &Config) -> Result<Self> {
        let api_key = config.api_key()?.to_string();

        let client = Client::builder()
            .user_agent(concat!("lodgegrid/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout())
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
            language: config.language.clone(),
            page_token_delay: config.page_token_delay(),
        })
    }

    fn endpoint(&self, name: &str) -> String {
        format!("{}/{}/json", self.base_url, name)
    }

    /// Issue one GET and decode its JSON body
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<T, PlacesError> {
        let response = self
            .client
            .get(endpoint)
            .query(params)
            .query(&[
                ("language", self.language.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(PlacesError::Transport)?
            .error_for_status()
            .map_err(PlacesError::Transport)?;

        response.json::<T>().await.map_err(PlacesError::Decode)
    }

    async fn search_page(
        &self,
        params: &[(&str, &str)],
    ) -> Result<NearbySearchResponse, PlacesError> {
        let page: NearbySearchResponse = self
            .get_json(&self.endpoint("nearbysearch"), params)
            .await?;
        page.check()?;
        Ok(page)
    }
}

impl PlaceSource for PlacesClient {
    async fn nearby_search(
        &self,
        point: GridPoint,
        radius_m: u32,
        category: &str,
    ) -> Vec<RawPlace> {
        let location = point.to_string();
        let radius = radius_m.to_string();

        let mut all_results = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let result = match &page_token {
                None => {
                    self.search_page(&[
                        ("location", location.as_str()),
                        ("radius", radius.as_str()),
                        ("type", category),
                    ])
                    .await
                }
                Some(token) => self.search_page(&[("pagetoken", token.as_str())]).await,
            };

            let mut page = match result {
                Ok(page) => page,
                Err(e @ PlacesError::Status { .. }) => {
                    warn!("Nearby Search for {} ({}) stopped: {}", location, category, e);
                    break;
                }
                Err(e) => {
                    error!("Failed to fetch places for {} ({}): {}", location, category, e);
                    break;
                }
            };

            let (places, malformed) = page.take_places();
            if malformed > 0 {
                warn!(
                    "Skipped {} malformed results for {} ({})",
                    malformed, location, category
                );
            }
            debug!(
                "Nearby Search page for {} ({}): {} results",
                location,
                category,
                places.len()
            );

            let next = page.next_page().map(str::to_string);
            all_results.extend(places);

            match next {
                Some(token) => {
                    // Tokens are rejected with INVALID_REQUEST until the server activates them
                    tokio::time::sleep(self.page_token_delay).await;
                    page_token = Some(token);
                }
                None => break,
            }
        }

        all_results
    }

    async fn place_details(&self, place_id: &str) -> Option<PlaceDetail> {
        let response: DetailsResponse = match self
            .get_json(
                &self.endpoint("details"),
                &[("place_id", place_id), ("fields", DETAIL_FIELDS)],
            )
            .await
        {
            Ok(response) => response,
            Err(e) => {
                error!("Failed to fetch details for place_id {}: {}", place_id, e);
                return None;
            }
        };

        if let Err(e) = response.check() {
            warn!("Place Details for place_id {} failed: {}", place_id, e);
            return None;
        }

        debug!("Fetched details for place_id {}", place_id);
        Some(response.result.unwrap_or_default())
    }
}
