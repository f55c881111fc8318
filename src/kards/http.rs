//! GraphQL transport for the KARDS public stats service.

use reqwest::{header::HeaderMap, Client};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::{
    cli::types::{PlayerId, PlayerTag},
    core::{config::ClientConfig, http::default_headers},
    error::{KardsError, Result},
    kards::types::{FromPayload, GraphQlResponse, StatsPayload, UpdatePayload},
};


pub const STATS_BY_NAME_QUERY: &str = r#"
query StatsByName($name: String!, $tag: Int!) {
  statsByName(name: $name, tag: $tag) {
    __typename
    ... on Stats {
      player { id name tag }
      stats { stat_name modified stat_int stat_string }
    }
    ... on Error { error }
  }
}
"#;

pub const STATS_BY_ID_QUERY: &str = r#"
query StatsById($id: Int!) {
  statsById(id: $id) {
    __typename
    ... on Stats {
      player { id name tag }
      stats { stat_name modified stat_int stat_string }
    }
    ... on Error { error }
  }
}
"#;

pub const REQUEST_UPDATE_MUTATION: &str = r#"
mutation RequestUpdate($id: Int!) {
  statsById(id: $id) {
    __typename
    ... on QueueResult { queued }
    ... on Error { error }
  }
}
"#;

/// Query and mutate capabilities the session depends on.
///
/// `Err` is reserved for transport-level failures; explicit server errors and
/// unknown shapes come back as payload variants.
#[allow(async_fn_in_trait)]
pub trait StatsClient {
    async fn fetch_by_name(&self, name: &str, tag: PlayerTag) -> Result<StatsPayload>;

    async fn fetch_by_id(&self, id: &PlayerId) -> Result<StatsPayload>;

    async fn request_update(&self, id: &PlayerId) -> Result<UpdatePayload>;
}

/// [`StatsClient`] backed by HTTP POSTs to a GraphQL endpoint.
#[derive(Debug, Clone)]
pub struct HttpStatsClient {
    client: Client,
    endpoint: String,
    headers: HeaderMap,
}

impl HttpStatsClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            client: Client::new(),
            endpoint: config.endpoint.clone(),
            headers: default_headers()?,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST one operation and pluck `data.<field>` out of the response.
    async fn execute<T>(&self, query: &str, variables: Value, field: &str) -> Result<T>
    where
        T: FromPayload + DeserializeOwned,
    {
        tracing::debug!(endpoint = %self.endpoint, field, %variables, "sending GraphQL request");

        let body = json!({ "query": query, "variables": variables });
        let res = self
            .client
            .post(&self.endpoint)
            .headers(self.headers.clone())
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json::<GraphQlResponse>()
            .await?;

        if !res.errors.is_empty() {
            return Err(KardsError::GraphQl {
                messages: res.errors.into_iter().map(|e| e.message).collect(),
            });
        }

        let payload = res
            .data
            .and_then(|mut data| data.get_mut(field).map(Value::take))
            .unwrap_or(Value::Null);

        Ok(T::from_payload(payload))
    }
}

impl StatsClient for HttpStatsClient {
    async fn fetch_by_name(&self, name: &str, tag: PlayerTag) -> Result<StatsPayload> {
        self.execute(
            STATS_BY_NAME_QUERY,
            json!({ "name": name, "tag": tag.as_u16() }),
            "statsByName",
        )
        .await
    }

    async fn fetch_by_id(&self, id: &PlayerId) -> Result<StatsPayload> {
        self.execute(STATS_BY_ID_QUERY, json!({ "id": id.as_u64()? }), "statsById")
            .await
    }

    async fn request_update(&self, id: &PlayerId) -> Result<UpdatePayload> {
        self.execute(
            REQUEST_UPDATE_MUTATION,
            json!({ "id": id.as_u64()? }),
            "statsById",
        )
        .await
    }
}
