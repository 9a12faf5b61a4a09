use lichen_core::{LichenError, LichenResult, WorldRecord};
use serde::Deserialize;
use serde_json::json;

use crate::query::{OPERATION_NAME, WORLD_QUERY};

pub const WORLD_ENDPOINT: &str = "https://space.playentry.org/graphql/getWorld";

pub struct WorldClient {
    client: reqwest::Client,
    endpoint: String,
}

#[derive(Deserialize)]
struct GraphQlResponse {
    data: Option<WorldData>,
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WorldData {
    get_world: Option<WorldRecord>,
}

#[derive(Deserialize)]
struct GraphQlError {
    message: String,
}

impl WorldClient {
    pub fn new() -> Self {
        Self::with_endpoint(WORLD_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .cookie_store(true)
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
            endpoint: endpoint.into(),
        }
    }

    /// One attempt, no retries. `Ok(None)` means the API answered and the
    /// world does not exist; everything else that can go wrong is an error
    /// for the caller to log and absorb.
    pub async fn fetch_world(
        &self,
        world_id: &str,
        csrf_token: &str,
    ) -> LichenResult<Option<WorldRecord>> {
        let body = json!({
            "query": WORLD_QUERY,
            "variables": { "id": world_id },
            "operationName": OPERATION_NAME,
        });

        let resp = self
            .client
            .post(&self.endpoint)
            .header("csrf-token", csrf_token)
            .header("x-client-type", "Client")
            .header("apollo-require-preflight", "true")
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(LichenError::Api(format!(
                "world query for {} returned {}",
                world_id, status
            )));
        }

        let parsed: GraphQlResponse = resp.json().await?;

        if let Some(errors) = parsed.errors {
            if !errors.is_empty() {
                let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
                return Err(LichenError::Api(format!(
                    "world query for {} failed: {}",
                    world_id,
                    messages.join("; ")
                )));
            }
        }

        match parsed.data {
            Some(data) => Ok(data.get_world),
            None => Err(LichenError::Api(format!(
                "world query for {} returned no data",
                world_id
            ))),
        }
    }
}
