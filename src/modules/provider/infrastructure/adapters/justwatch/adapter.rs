//! JustWatch provider adapter
//!
//! Builds the GraphQL requests for the public JustWatch endpoint, sends them
//! through the [`ResilientTransport`] and maps the responses into domain
//! records. Errors are returned as-is; bounding and degradation happen in the
//! application service.

use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::{
    modules::provider::{
        domain::entities::{ClientConfig, MediaDetail, SearchRecord, SimilarTitleRecord},
        infrastructure::http_client::{ResilientTransport, UpstreamRequest},
    },
    shared::errors::{AppError, AppResult},
};

use super::{mapper::JustWatchMapper, models::*, queries::*};

pub struct JustWatchAdapter {
    transport: Arc<ResilientTransport>,
    endpoint: String,
    language: String,
    mapper: JustWatchMapper,
}

impl JustWatchAdapter {
    pub fn new(transport: Arc<ResilientTransport>, config: &ClientConfig) -> Self {
        Self {
            transport,
            endpoint: config.endpoint.clone(),
            language: config.language.clone(),
            mapper: JustWatchMapper::new(&config.image_cdn),
        }
    }

    pub fn mapper(&self) -> &JustWatchMapper {
        &self.mapper
    }

    /// Request body for a GraphQL operation.
    pub fn graphql_body(operation: &str, query: &str, variables: Value) -> Value {
        json!({
            "operationName": operation,
            "variables": variables,
            "query": query
        })
    }

    pub fn search_variables(&self, query: &str, country: &str) -> Value {
        json!({
            "country": country,
            "language": self.language,
            "first": SEARCH_PAGE_SIZE,
            "filter": {
                "searchQuery": query,
                "includeTitlesWithoutUrl": true
            }
        })
    }

    pub fn details_variables(&self, full_path: &str, country: &str) -> Value {
        json!({
            "platform": "WEB",
            "fullPath": full_path,
            "language": self.language,
            "country": country,
            "first": DETAILS_OFFER_PAGE_SIZE,
            "episodeMaxLimit": DETAILS_EPISODE_LIMIT
        })
    }

    pub fn similar_variables(&self, show_id: &str, country: &str) -> Value {
        json!({
            "titleId": show_id,
            "language": self.language,
            "country": country,
            "first": SIMILAR_PAGE_SIZE,
            "includeOffers": false,
            "filters": {
                "excludeIrrelevantTitles": false
            }
        })
    }

    /// Make a GraphQL request to the JustWatch API
    async fn make_graphql_request<T>(
        &self,
        operation: &str,
        query: &str,
        variables: Value,
        token: &CancellationToken,
    ) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let body = Self::graphql_body(operation, query, variables);
        log::debug!("JustWatch: Sending {} with variables {}", operation, body["variables"]);

        let request =
            UpstreamRequest::post_json(&self.endpoint, &body).with_headers(REQUEST_HEADERS);
        let response = self.transport.fetch(&request, token).await?;
        let envelope: GraphQlResponse<T> = response.json()?;

        // Check for GraphQL errors
        if let Some(errors) = envelope.errors.filter(|e| !e.is_empty()) {
            let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
            log::error!("JustWatch: GraphQL errors in {}: {:?}", operation, messages);
            return Err(AppError::MalformedResponse(format!(
                "JustWatch GraphQL errors: {}",
                messages.join("; ")
            )));
        }

        envelope.data.ok_or_else(|| {
            AppError::MalformedResponse(format!("No data field in JustWatch {} response", operation))
        })
    }

    pub async fn search(
        &self,
        query: &str,
        country: &str,
        token: &CancellationToken,
    ) -> AppResult<Vec<SearchRecord>> {
        let data: SearchData = self
            .make_graphql_request(
                SEARCH_OPERATION,
                SEARCH_QUERY,
                self.search_variables(query, country),
                token,
            )
            .await?;

        let records = self.mapper.map_search(data);
        log::info!(
            "JustWatch: Found {} navigable results for '{}' in {}",
            records.len(),
            query,
            country
        );
        Ok(records)
    }

    pub async fn get_details(
        &self,
        full_path: &str,
        country: &str,
        token: &CancellationToken,
    ) -> AppResult<MediaDetail> {
        let data: DetailsData = self
            .make_graphql_request(
                DETAILS_OPERATION,
                DETAILS_QUERY,
                self.details_variables(full_path, country),
                token,
            )
            .await?;

        let detail = self.mapper.map_details(data);
        if detail.is_unavailable() {
            log::info!("JustWatch: No title found for '{}' in {}", full_path, country);
        } else {
            log::info!(
                "JustWatch: '{}' has {} offers in {}",
                full_path,
                detail.offers.len(),
                country
            );
        }
        Ok(detail)
    }

    pub async fn get_similar(
        &self,
        show_id: &str,
        country: &str,
        token: &CancellationToken,
    ) -> AppResult<Vec<SimilarTitleRecord>> {
        let data: SimilarData = self
            .make_graphql_request(
                SIMILAR_OPERATION,
                SIMILAR_QUERY,
                self.similar_variables(show_id, country),
                token,
            )
            .await?;

        let similar = self.mapper.map_similar(data);
        log::info!(
            "JustWatch: Found {} similar titles for '{}' in {}",
            similar.len(),
            show_id,
            country
        );
        Ok(similar)
    }
}
